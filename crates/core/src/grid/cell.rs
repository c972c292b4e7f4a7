use crate::{hex::HexPoint, render::unit::Color3};
use serde::{Deserialize, Serialize};

/// A single slot in the grid: a display color, plus the state of any rotation
/// this cell is currently part of.
///
/// A cell is **idle** when [Self::rotating_to] is `None`. While a rotation is
/// in flight, `rotating_to` names the slot this cell is animating toward and
/// [Self::rotation_progress] is the completion fraction in [0, 1]. Cells are
/// only ever mutated by their owning [HexGrid](crate::grid::HexGrid); the
/// cursor and rendering code just read them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    color: Color3,
    rotating_to: Option<HexPoint>,
    rotation_progress: f32,
}

impl Cell {
    /// How much rotation progress accumulates per second of elapsed time. At
    /// 4.0, a rotation nominally completes in 0.25 seconds.
    pub const ROTATION_SPEED: f32 = 4.0;

    /// Progress value a cell is parked at after its rotation state is
    /// cleared. Progress is only meaningful while a rotation is active, so
    /// the reset value is deliberately out of the [0, 1] domain.
    pub const PROGRESS_RESET: f32 = -1.0;

    pub fn new(color: Color3) -> Self {
        Self {
            color,
            rotating_to: None,
            rotation_progress: Self::PROGRESS_RESET,
        }
    }

    pub fn color(&self) -> Color3 {
        self.color
    }

    /// The slot this cell is currently animating toward, or `None` if the
    /// cell is idle.
    pub fn rotating_to(&self) -> Option<HexPoint> {
        self.rotating_to
    }

    /// Animation completion fraction. Only meaningful while
    /// [Self::rotating_to] is set.
    pub fn rotation_progress(&self) -> f32 {
        self.rotation_progress
    }

    /// Begin animating this cell toward the given slot
    pub(super) fn start_rotation(&mut self, target: HexPoint) {
        self.rotating_to = Some(target);
        self.rotation_progress = 0.0;
    }

    /// Advance this cell's rotation by a frame's elapsed time. Progress is
    /// clamped to 1.0, so an oversized `dt` finishes the rotation rather
    /// than overshooting it. No-op for idle cells.
    pub(super) fn step_rotation(&mut self, dt: f32) {
        if self.rotating_to.is_some() {
            self.rotation_progress =
                (self.rotation_progress + dt * Self::ROTATION_SPEED).min(1.0);
        }
    }

    /// Has this cell finished its part of the rotation? Idle cells trivially
    /// report done.
    pub(super) fn rotation_done(&self) -> bool {
        self.rotating_to.is_none() || self.rotation_progress >= 1.0
    }

    /// Clear all rotation state, returning the cell to idle
    pub(super) fn reset_rotation(&mut self) {
        self.rotating_to = None;
        self.rotation_progress = Self::PROGRESS_RESET;
    }
}
