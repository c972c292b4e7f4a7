mod seed;

pub use self::seed::Seed;

use crate::hex::HexPoint;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Configuration that defines a play session. Two sessions created with the
/// same config are always identical, and replaying the same inputs against
/// them produces identical state.
#[derive(Clone, Debug, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct GameConfig {
    /// RNG seed for all randomized processes during grid generation (i.e.
    /// cell color selection). See [Seed] for the accepted input formats.
    pub seed: Seed,

    /// Distance from the center of the grid to its edge, in cells. Radius 0
    /// is a single cell.
    #[validate(range(min = 1, max = 10000))]
    pub radius: u16,

    /// The top cell of the cursor's starting triangle. The whole triangle
    /// (this cell plus its two north neighbors) must be inside the generated
    /// grid; [Session::new](crate::session::Session::new) rejects configs
    /// where it isn't.
    pub cursor_start: HexPoint,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            // Danger! This means the default will vary between calls!
            seed: rand::random::<u64>().into(),
            radius: 10,
            cursor_start: HexPoint::new(2, 2),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation() {
        let valid = GameConfig {
            seed: 0.into(),
            ..Default::default()
        };
        assert!(valid.validate().is_ok());

        let invalid = GameConfig {
            radius: 10001,
            ..valid
        };
        assert!(invalid.validate().is_err());
    }

    #[test]
    fn test_deserialize_defaults() {
        // Missing fields fall back to defaults
        let config: GameConfig = serde_json::from_str(
            r#"{"seed": "potato", "radius": 4}"#,
        )
        .unwrap();
        assert_eq!(config.seed, Seed::Text("potato".into()));
        assert_eq!(config.radius, 4);
        assert_eq!(config.cursor_start, HexPoint::new(2, 2));
    }
}
