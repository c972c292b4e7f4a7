use crate::{
    config::GameConfig, cursor::Cursor, grid::HexGrid, hex::HexDirection,
};
use anyhow::{anyhow, Context};
use log::{debug, info};
use rand::SeedableRng;
use rand_pcg::Pcg64;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use validator::Validate;

/// A discrete input event: one of the four cursor moves, or the rotation
/// trigger. The windowing collaborator translates edge-triggered key presses
/// into these.
#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    Display,
    EnumString,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Action {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    Rotate,
}

/// A full play session: the grid and the cursor, created once at startup and
/// owned for the life of the program. The driving loop feeds the session
/// discrete [Action]s as they arrive and one [Session::tick] per frame;
/// rendering reads [Session::grid] and [Session::cursor] between ticks.
///
/// The session is also where the grid's preconditions get guarded: cursor
/// moves that would leave the populated grid are rejected here (the cursor
/// itself is unbounded), and rotation triggers are dropped while a rotation
/// is already in flight. [HexGrid] is free to panic on violations because
/// this layer never forwards them.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Session {
    grid: HexGrid,
    cursor: Cursor,
}

impl Session {
    /// Create a new session from a config: validate it, generate the grid
    /// from the config seed, and place the cursor. Returns an error if the
    /// config is invalid or the starting cursor doesn't fit on the grid.
    pub fn new(config: &GameConfig) -> anyhow::Result<Self> {
        info!("Starting session with config {:?}", config);
        config.validate().context("invalid config")?;

        let mut rng = Pcg64::seed_from_u64(config.seed.to_u64());
        let grid = HexGrid::generate(config.radius, &mut rng);

        let cursor = Cursor::new(config.cursor_start);
        for &hex in cursor.hexes() {
            if !grid.contains(hex) {
                return Err(anyhow!(
                    "cursor start {} puts cursor cell {} outside the grid \
                    (radius {})",
                    config.cursor_start,
                    hex,
                    config.radius
                ));
            }
        }

        Ok(Self { grid, cursor })
    }

    pub fn grid(&self) -> &HexGrid {
        &self.grid
    }

    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    /// Apply a single input action. Returns whether the action had any
    /// effect: moves that would push the cursor off the grid and rotation
    /// triggers during an in-flight rotation are dropped (and logged).
    pub fn apply(&mut self, action: Action) -> bool {
        let direction = match action {
            Action::MoveLeft => HexDirection::West,
            Action::MoveRight => HexDirection::East,
            Action::MoveUp => self.cursor.up_direction(),
            Action::MoveDown => self.cursor.down_direction(),
            Action::Rotate => {
                if self.grid.has_rotation() {
                    debug!("Ignoring {}: rotation already in flight", action);
                    return false;
                }
                self.grid.start_rotation(*self.cursor.hexes());
                return true;
            }
        };

        let in_bounds = self
            .cursor
            .hexes()
            .iter()
            .all(|hex| self.grid.contains(hex.neighbor(direction)));
        if in_bounds {
            self.cursor.translate(direction);
            true
        } else {
            debug!("Ignoring {}: cursor would leave the grid", action);
            false
        }
    }

    /// Advance the session by a frame's elapsed time. This drives the grid's
    /// rotation state machine; everything else in the session only changes
    /// in response to [Self::apply].
    pub fn tick(&mut self, dt: f32) {
        self.grid.step_rotation(dt);
    }

    /// Serialize this session's full state into JSON.
    #[cfg(feature = "json")]
    pub fn to_json(&self) -> String {
        // Panic here indicates an internal bug in the data format
        serde_json::to_string_pretty(self).expect("error serializing session")
    }
}
