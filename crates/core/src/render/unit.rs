use anyhow::anyhow;
use derive_more::{
    Add, AddAssign, Display, Div, DivAssign, From, Into, Mul, MulAssign, Neg,
    Sub, SubAssign, Sum,
};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::ops;

/// A point in 2D screen space. This isn't used by the grid logic at all, only
/// by rendering code. You can use [GridRenderer::hex_to_screen_space] to
/// convert a cell's hex position into one of these.
///
/// The coordinate system puts the grid origin cell at `(0, 0)`. Left is
/// negative x, right is positive x. Down is positive y, up is negative y.
/// Callers add their own screen-space origin offset (e.g. half the window
/// size) separately.
///
/// [GridRenderer::hex_to_screen_space]: crate::render::GridRenderer::hex_to_screen_space
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Display,
    PartialEq,
    PartialOrd,
    From,
    Into,
    Neg,
    Add,
    Mul,
    Div,
    AddAssign,
    SubAssign,
    MulAssign,
    DivAssign,
    Sum,
    Serialize,
    Deserialize,
)]
#[display(fmt = "({}, {})", x, y)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

/// A vector in 2D screen space, representing an offset between two [Point2]s.
///
/// See [Point2] for a description of the 2D coordinate space.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Display,
    PartialEq,
    PartialOrd,
    From,
    Into,
    Neg,
    Add,
    Sub,
    Mul,
    Div,
    AddAssign,
    SubAssign,
    MulAssign,
    DivAssign,
    Sum,
    Serialize,
    Deserialize,
)]
#[display(fmt = "({}, {})", x, y)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    /// The euclidean magnitude of this vector
    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// The angle of this vector from the positive x axis, in radians
    pub fn angle(self) -> f64 {
        self.y.atan2(self.x)
    }
}

impl ops::Add<Vector2> for Point2 {
    type Output = Point2;

    fn add(self, rhs: Vector2) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl ops::Sub<Point2> for Point2 {
    type Output = Vector2;

    fn sub(self, rhs: Point2) -> Vector2 {
        Vector2 {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

/// An RGB color. Values are stored as floats between 0 and 1 (inclusive).
/// This uses f32 because the extra precision from f64 is pointless.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color3 {
    pub red: f32,
    pub green: f32,
    pub blue: f32,
}

impl Color3 {
    /// The colors cells can be assigned, picked uniformly at grid population
    /// time.
    pub const PALETTE: [Self; 3] = [
        // orange
        Self::new_int(255, 161, 0),
        // maroon
        Self::new_int(190, 33, 55),
        // lime
        Self::new_int(0, 158, 47),
    ];

    /// Create a new RGB color. Returns an error if any of the components are
    /// out of the range [0.0, 1.0].
    pub fn new(red: f32, green: f32, blue: f32) -> anyhow::Result<Self> {
        fn check_component(
            component_name: &str,
            value: f32,
        ) -> anyhow::Result<f32> {
            if (0.0..=1.0).contains(&value) {
                Ok(value)
            } else {
                Err(anyhow!(
                    "color component {} must be in [0, 1], but was {}",
                    component_name,
                    value
                ))
            }
        }

        Ok(Self {
            red: check_component("red", red)?,
            green: check_component("green", green)?,
            blue: check_component("blue", blue)?,
        })
    }

    /// Create a new RGB color from integer components in the [0,255] range.
    pub const fn new_int(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red: red as f32 / 255.0,
            green: green as f32 / 255.0,
            blue: blue as f32 / 255.0,
        }
    }

    /// Pick a uniformly random color from [Self::PALETTE]
    pub fn random_palette(rng: &mut impl Rng) -> Self {
        Self::PALETTE[rng.gen_range(0..Self::PALETTE.len())]
    }

    /// Convert this color to a set of 3 bytes: `(red, green, blue)`
    pub fn to_ints(self) -> (u8, u8, u8) {
        (
            (self.red * 255.0) as u8,
            (self.green * 255.0) as u8,
            (self.blue * 255.0) as u8,
        )
    }

    /// Convert this color to an HTML color code: `#rrggbb`
    pub fn to_html(self) -> String {
        let (r, g, b) = self.to_ints();
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg64;

    #[test]
    fn test_color_new() {
        assert!(Color3::new(0.0, 0.5, 1.0).is_ok());
        assert!(Color3::new(-0.1, 0.5, 1.0).is_err());
        assert!(Color3::new(0.0, 1.5, 1.0).is_err());
    }

    #[test]
    fn test_color_to_html() {
        assert_eq!(Color3::new_int(255, 161, 0).to_html(), "#ffa100");
        assert_eq!(Color3::new_int(0, 0, 0).to_html(), "#000000");
    }

    #[test]
    fn test_random_palette() {
        let mut rng = Pcg64::seed_from_u64(12345);
        for _ in 0..100 {
            let color = Color3::random_palette(&mut rng);
            assert!(Color3::PALETTE.contains(&color));
        }
    }

    #[test]
    fn test_vector_angle_length() {
        let v = Vector2 { x: 3.0, y: 4.0 };
        assert_eq!(v.length(), 5.0);
        assert_eq!(Vector2 { x: 1.0, y: 0.0 }.angle(), 0.0);
    }
}
