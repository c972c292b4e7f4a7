use crate::hex::{HexDirection, HexPoint};
use serde::{Deserialize, Serialize};

/// The player's selection: a rigid triangle of three cells, anchored at a
/// "top" cell `T` with its two north neighbors: `[T, T+NW, T+NE]`. The
/// triangle is only ever translated whole, one hex step at a time — it never
/// reshapes.
///
/// A cursor owns plain coordinates, not references into any grid, and does
/// **no** bounds checking of its own: every position it can reach is
/// representable, including ones outside a populated grid. Callers that pair
/// a cursor with a grid are responsible for bounding movement (see
/// [Session](crate::session::Session)); looking up an off-grid cursor cell
/// in a grid will fault there.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cursor {
    hexes: [HexPoint; 3],
}

impl Cursor {
    pub fn new(top: HexPoint) -> Self {
        Self {
            hexes: [
                top,
                top.neighbor(HexDirection::NorthWest),
                top.neighbor(HexDirection::NorthEast),
            ],
        }
    }

    /// The three selected cells, top cell first
    pub fn hexes(&self) -> &[HexPoint; 3] {
        &self.hexes
    }

    /// The anchor cell of the triangle
    pub fn top(&self) -> HexPoint {
        self.hexes[0]
    }

    /// The hex direction that moves the cursor visually straight up on
    /// screen. On an offset hex grid there is no single "up" step: which
    /// diagonal keeps the cursor in the same column alternates with the
    /// parity of the top cell's row. Getting this rule wrong makes up/down
    /// movement drift diagonally.
    pub fn up_direction(&self) -> HexDirection {
        if self.top().r() % 2 == 0 {
            HexDirection::SouthEast
        } else {
            HexDirection::SouthWest
        }
    }

    /// The hex direction that moves the cursor visually straight down on
    /// screen. See [Self::up_direction] for the row-parity rule.
    pub fn down_direction(&self) -> HexDirection {
        if self.top().r() % 2 == 0 {
            HexDirection::NorthEast
        } else {
            HexDirection::NorthWest
        }
    }

    pub fn move_up(&mut self) {
        self.translate(self.up_direction());
    }

    pub fn move_down(&mut self) {
        self.translate(self.down_direction());
    }

    pub fn move_left(&mut self) {
        self.translate(HexDirection::West);
    }

    pub fn move_right(&mut self) {
        self.translate(HexDirection::East);
    }

    /// Translate the whole triangle one hex step in the given direction
    pub fn translate(&mut self, direction: HexDirection) {
        for hex in &mut self.hexes {
            *hex = hex.neighbor(direction);
        }
    }
}
