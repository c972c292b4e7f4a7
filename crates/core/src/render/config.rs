use serde::{Deserialize, Serialize};
use validator::Validate;

/// Configuration specific to visually rendering a grid. These options have
/// no bearing on grid *logic*, only on the visual presentation: the same
/// session state renders at any scale.
#[derive(Copy, Clone, Debug, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct RenderConfig {
    /// Distance between the center of a cell and any of its 6 vertices, in
    /// screen units. This is the single scale factor for the whole layout:
    /// cell spacing is derived from it.
    #[validate(range(min = 1.0))]
    pub hex_size: f64,

    /// Stroke width for the outline drawn around every cell.
    #[validate(range(min = 0.0))]
    pub cell_stroke_width: f64,

    /// Stroke width for the three cell outlines that mark the cursor.
    #[validate(range(min = 0.0))]
    pub cursor_stroke_width: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            hex_size: 16.0,
            cell_stroke_width: 1.0,
            cursor_stroke_width: 3.0,
        }
    }
}
