mod cell;

pub use self::cell::Cell;

use crate::{
    hex::{HexPoint, HexPointIndexMap},
    render::unit::Color3,
    timed, unwrap, util,
};
use fnv::FnvBuildHasher;
use log::{debug, info};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::cmp;

/// A sparse hexagonal grid of [Cell]s, keyed by hex position, plus the state
/// machine for the grid's single in-flight 3-cell rotation.
///
/// ## Rotation state machine
///
/// The grid is either **idle** (no rotation descriptor) or **rotating**
/// (exactly one descriptor naming three resident cells). While rotating, each
/// of the three cells records the slot it's animating toward and its own
/// progress; when all three report done, the grid commits by moving each
/// cell's full contents into its target slot and clearing all rotation state.
/// Starting a rotation while one is in flight, or over positions that aren't
/// in the grid, is a precondition violation and panics — callers gate on
/// [Self::has_rotation] and the populated area (see
/// [Session](crate::session::Session)).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HexGrid {
    /// One cell per position. Insertion order is irrelevant to the logic,
    /// but the ordered map keeps iteration (and thus snapshot output)
    /// deterministic.
    #[serde(with = "crate::util::serde_hex_point_map_to_pairs")]
    cells: HexPointIndexMap<Cell>,

    /// The three positions of the active rotation, if there is one. Present
    /// iff at least one resident cell has a rotation target.
    rotation: Option<[HexPoint; 3]>,
}

impl HexGrid {
    /// Generate a full hexagon of cells with the given ring radius (radius 0
    /// is a single cell). Every cell gets a random palette color from the
    /// given RNG, so generation is deterministic for a seeded RNG.
    pub fn generate(radius: u16, rng: &mut impl Rng) -> Self {
        let cells = timed!("Grid generation", log::Level::Info, {
            let capacity = util::grid_len(radius);
            let mut cells = HexPointIndexMap::with_capacity_and_hasher(
                capacity,
                FnvBuildHasher::default(),
            );

            let r = radius as i16;
            for q in -r..=r {
                // If we just did [-r, r] for the second component too, we'd
                // get a rhombus instead of a hexagon
                // https://www.redblobgames.com/grids/hexagons/#range
                let r_min = cmp::max(-r, -q - r);
                let r_max = cmp::min(r, -q + r);
                for r_coord in r_min..=r_max {
                    let pos = HexPoint::new(q, r_coord);
                    cells.insert(pos, Cell::new(Color3::random_palette(rng)));
                }
            }

            debug_assert_eq!(cells.len(), capacity, "expected 3r²+3r+1 cells");
            cells
        });

        info!("Generated grid with {} cells", cells.len());
        Self {
            cells,
            rotation: None,
        }
    }

    /// The number of cells in this grid
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Get the cell at the given position, if there is one
    pub fn get(&self, hex: HexPoint) -> Option<&Cell> {
        self.cells.get(&hex)
    }

    /// Is the given position part of the populated grid?
    pub fn contains(&self, hex: HexPoint) -> bool {
        self.cells.contains_key(&hex)
    }

    /// Iterate over all `(position, cell)` pairs, in deterministic order
    pub fn iter(&self) -> impl Iterator<Item = (&HexPoint, &Cell)> {
        self.cells.iter()
    }

    /// The three positions of the active rotation, if there is one
    pub fn rotation(&self) -> Option<&[HexPoint; 3]> {
        self.rotation.as_ref()
    }

    pub fn has_rotation(&self) -> bool {
        self.rotation.is_some()
    }

    /// Start a 3-cell rotation over the given positions. Contents will cycle
    /// such that each slot ends up holding the cell that was animating into
    /// it: `h0`'s cell moves to `h2`, `h1`'s to `h0`, `h2`'s to `h1`.
    ///
    /// ## Panics
    ///
    /// Panics if a rotation is already in flight, or if any of the three
    /// positions is not in the grid. Both are caller bugs; gate on
    /// [Self::has_rotation] and [Self::contains].
    pub fn start_rotation(&mut self, hexes: [HexPoint; 3]) {
        assert!(
            self.rotation.is_none(),
            "cannot start rotation over {:?}, rotation {:?} is in flight",
            hexes,
            self.rotation
        );

        let [h0, h1, h2] = hexes;
        // Each cell records the slot it will animate toward; the commit in
        // step_rotation follows the same targets
        self.cell_mut(h1).start_rotation(h0);
        self.cell_mut(h2).start_rotation(h1);
        self.cell_mut(h0).start_rotation(h2);
        self.rotation = Some(hexes);
        debug!("Started rotation over {}, {}, {}", h0, h1, h2);
    }

    /// Advance the in-flight rotation by a frame's elapsed time. No-op when
    /// the grid is idle. Each cell's progress is clamped at 1.0, so uneven
    /// frame times can finish the cells at different calls; once all three
    /// are done the permutation commits and the grid returns to idle. An
    /// oversized `dt` that jumps from 0 past 1.0 commits within this same
    /// call.
    pub fn step_rotation(&mut self, dt: f32) {
        let hexes = match self.rotation {
            Some(hexes) => hexes,
            None => return,
        };

        for hex in hexes {
            self.cell_mut(hex).step_rotation(dt);
        }

        if hexes.iter().all(|&hex| self.cell(hex).rotation_done()) {
            self.commit_rotation(hexes);
        }
    }

    /// Apply the 3-cycle permutation: move each rotating cell's contents to
    /// the slot it was animating toward, then clear all rotation state.
    fn commit_rotation(&mut self, hexes: [HexPoint; 3]) {
        // Read out all three before writing anything back; the targets are a
        // permutation of the sources, so in-place swaps would clobber
        let moved: Vec<(HexPoint, Cell)> = hexes
            .iter()
            .map(|&hex| {
                let cell = self.cell(hex);
                let target = unwrap!(
                    cell.rotating_to(),
                    "cell at {} is part of rotation {:?} but has no target",
                    hex,
                    hexes
                );
                (target, cell.clone())
            })
            .collect();

        for (target, mut cell) in moved {
            cell.reset_rotation();
            *self.cell_mut(target) = cell;
        }

        self.rotation = None;
        debug!("Committed rotation over {:?}", hexes);
    }

    /// Get a reference to a resident cell. Panics if the position isn't in
    /// the grid.
    fn cell(&self, hex: HexPoint) -> &Cell {
        unwrap!(self.cells.get(&hex), "no cell at {}", hex)
    }

    /// Get a mutable reference to a resident cell. Panics if the position
    /// isn't in the grid.
    fn cell_mut(&mut self, hex: HexPoint) -> &mut Cell {
        unwrap!(self.cells.get_mut(&hex), "no cell at {}", hex)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg64;

    fn test_grid(radius: u16) -> HexGrid {
        let mut rng = Pcg64::seed_from_u64(271828);
        HexGrid::generate(radius, &mut rng)
    }

    /// The standard rotation trio used by these tests
    const TRIO: [HexPoint; 3] =
        [HexPoint::ORIGIN, HexPoint::new(1, 0), HexPoint::new(0, 1)];

    #[test]
    fn test_generate_counts() {
        assert_eq!(test_grid(0).len(), 1);
        assert_eq!(test_grid(1).len(), 7);
        // 3·2² + 3·2 + 1
        assert_eq!(test_grid(2).len(), 19);
    }

    #[test]
    fn test_generate_deterministic() {
        assert_eq!(test_grid(3), test_grid(3));
    }

    #[test]
    fn test_rotation_permutes_contents() {
        let mut grid = test_grid(2);
        let [h0, h1, h2] = TRIO;
        let color_at = |grid: &HexGrid, hex| grid.get(hex).unwrap().color();
        let (c0, c1, c2) = (
            color_at(&grid, h0),
            color_at(&grid, h1),
            color_at(&grid, h2),
        );

        grid.start_rotation(TRIO);
        assert!(grid.has_rotation());
        assert_eq!(grid.get(h0).unwrap().rotating_to(), Some(h2));
        assert_eq!(grid.get(h1).unwrap().rotating_to(), Some(h0));
        assert_eq!(grid.get(h2).unwrap().rotating_to(), Some(h1));

        // One full step commits
        grid.step_rotation(0.25);
        assert!(!grid.has_rotation());

        // Every slot holds the cell that was animating into it
        assert_eq!(color_at(&grid, h2), c0);
        assert_eq!(color_at(&grid, h0), c1);
        assert_eq!(color_at(&grid, h1), c2);

        // No data loss or duplication elsewhere, and all cells are idle
        assert_eq!(grid.len(), 19);
        for (_, cell) in grid.iter() {
            assert_eq!(cell.rotating_to(), None);
            assert!(cell.rotation_progress() < 0.0);
        }
    }

    #[test]
    fn test_rotation_step_count() {
        let mut grid = test_grid(2);
        grid.start_rotation(TRIO);

        // dt=0.01 advances progress by 0.04 per call, so the rotation takes
        // exactly ceil(0.25 / 0.01) = 25 calls
        for _ in 0..24 {
            grid.step_rotation(0.01);
            assert!(grid.has_rotation());
        }
        grid.step_rotation(0.01);
        assert!(!grid.has_rotation());
    }

    #[test]
    fn test_oversized_dt_commits_in_one_step() {
        let mut grid = test_grid(2);
        grid.start_rotation(TRIO);
        grid.step_rotation(100.0);
        assert!(!grid.has_rotation());
    }

    #[test]
    fn test_step_while_idle_is_noop() {
        let mut grid = test_grid(2);
        let before = grid.clone();
        grid.step_rotation(1.0);
        assert_eq!(grid, before);
    }

    #[test]
    fn test_double_rotation_cycles_twice() {
        let mut grid = test_grid(2);
        let [h0, h1, h2] = TRIO;
        let c0 = grid.get(h0).unwrap().color();

        for _ in 0..2 {
            grid.start_rotation(TRIO);
            grid.step_rotation(0.25);
        }
        // Two applications of the 3-cycle: h0 -> h2 -> h1
        assert_eq!(grid.get(h1).unwrap().color(), c0);

        grid.start_rotation([h0, h1, h2]);
        grid.step_rotation(0.25);
        // Third application returns to the start
        assert_eq!(grid.get(h0).unwrap().color(), c0);
    }

    #[test]
    #[should_panic(expected = "rotation")]
    fn test_start_while_rotating_panics() {
        let mut grid = test_grid(2);
        grid.start_rotation(TRIO);
        grid.start_rotation(TRIO);
    }

    #[test]
    #[should_panic(expected = "no cell at")]
    fn test_start_off_grid_panics() {
        let mut grid = test_grid(1);
        grid.start_rotation([
            HexPoint::ORIGIN,
            HexPoint::new(5, 0),
            HexPoint::new(0, 5),
        ]);
    }
}
