//! Unit types that form the hex coordinate system. See the parent module
//! documentation for a description of the coordinate system.

use anyhow::anyhow;
use derive_more::{Add, AddAssign, Display, Mul, Neg, Sub, SubAssign};
use serde::{Deserialize, Serialize};
use std::ops;
use strum::{EnumIter, IntoEnumIterator};

/// The position of a single cell in the hex coordinate system.
///
/// ## Implementation
///
/// By definition every cell position satisfies `q + r + s == 0`, so this
/// struct only stores `q` and `r` and derives `s` as needed. Besides saving
/// a third of the memory, this makes the derived equality/hash impls do
/// exactly the right thing: two points are identical iff their `q` and `r`
/// match.
///
/// The components are stored as `i16`s. We'll never have a grid with a radius
/// of more than 32k (that'd be over 3 billion cells), so this saves on memory.
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, Display, Serialize, Deserialize,
)]
#[display(fmt = "({}, {}, {})", "self.q()", "self.r()", "self.s()")]
pub struct HexPoint {
    q: i16,
    r: i16,
}

impl HexPoint {
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Construct a new point from its `q` and `r` components. Since `q+r+s=0`
    /// for all points, `s` is derived.
    pub const fn new(q: i16, r: i16) -> Self {
        Self { q, r }
    }

    /// Construct a new point from all three components. Returns an error if
    /// the components don't satisfy `q + r + s == 0` — that's always a bug in
    /// the caller, but surfacing it as an error gives boundary code (config
    /// parsing etc.) a way to reject bad input gracefully.
    pub fn new_qrs(q: i16, r: i16, s: i16) -> anyhow::Result<Self> {
        if q + r + s != 0 {
            Err(anyhow!(
                "invalid hex point ({}, {}, {}); must satisfy q+r+s=0",
                q,
                r,
                s
            ))
        } else {
            Ok(Self::new(q, r))
        }
    }

    pub const fn q(&self) -> i16 {
        self.q
    }

    pub const fn r(&self) -> i16 {
        self.r
    }

    pub const fn s(&self) -> i16 {
        -self.q - self.r
    }

    /// Get the position of the adjacent cell in the given direction
    pub fn neighbor(self, direction: HexDirection) -> HexPoint {
        self + direction.to_vector()
    }

    /// Get an iterator of the positions of all 6 cells adjacent to this one
    pub fn neighbors(self) -> impl Iterator<Item = HexPoint> {
        HexDirection::iter().map(move |dir| self.neighbor(dir))
    }

    /// Calculate the path distance between two cells: the number of hops it
    /// takes to get from one to the other. 0 if the points are equal, 1 if
    /// the cells are adjacent, etc.
    pub fn distance_to(self, other: HexPoint) -> usize {
        (self - other).length()
    }
}

impl ops::Add<HexVector> for HexPoint {
    type Output = HexPoint;

    fn add(self, rhs: HexVector) -> HexPoint {
        // A translation is only valid if it stays on the q+r+s=0 plane. The
        // result below is on the plane by construction, so a vector that
        // isn't would silently corrupt the s component
        debug_assert_eq!(
            rhs.q + rhs.r + rhs.s,
            0,
            "cannot translate {} by off-plane vector {}",
            self,
            rhs
        );
        HexPoint::new(self.q + rhs.q, self.r + rhs.r)
    }
}

impl ops::Sub<HexPoint> for HexPoint {
    type Output = HexVector;

    fn sub(self, rhs: HexPoint) -> HexVector {
        HexVector::new(self.q - rhs.q, self.r - rhs.r, self.s() - rhs.s())
    }
}

// Scale a point radially away from the origin. The plane is closed under
// integer scaling, so the result is always valid
impl ops::Mul<i16> for HexPoint {
    type Output = HexPoint;

    fn mul(self, rhs: i16) -> HexPoint {
        HexPoint::new(self.q * rhs, self.r * rhs)
    }
}

/// A vector in the hex coordinate system: some positional translation between
/// cells. Unlike points, hex vectors **cannot be validated** in isolation —
/// a vector is just a component-wise delta, and only applying it to a point
/// re-establishes the plane invariant.
#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    Display,
    Add,
    Sub,
    Neg,
    Mul,
    AddAssign,
    SubAssign,
    Serialize,
    Deserialize,
)]
#[display(fmt = "({}, {}, {})", q, r, s)]
pub struct HexVector {
    pub q: i16,
    pub r: i16,
    pub s: i16,
}

impl HexVector {
    pub const fn new(q: i16, r: i16, s: i16) -> Self {
        Self { q, r, s }
    }

    /// The hex-space magnitude of this vector, i.e. the number of single-cell
    /// hops this translation covers.
    pub fn length(self) -> usize {
        // https://www.redblobgames.com/grids/hexagons/#distances
        // Divide by 2 because every hop changes two components by 1 each
        ((self.q.abs() + self.r.abs() + self.s.abs()) / 2) as usize
    }
}

/// The 6 directions in which cells line up side-to-side. Names follow the
/// original screen layout (pointy-top cells, `+r` pointing down-screen), so
/// e.g. [HexDirection::SouthEast] is the `(1, -1, 0)` unit vector.
#[derive(
    Copy, Clone, Debug, EnumIter, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum HexDirection {
    East,
    SouthEast,
    SouthWest,
    West,
    NorthWest,
    NorthEast,
}

impl HexDirection {
    /// All 6 directions, in the canonical index order (0..6). Consecutive
    /// entries are adjacent on the compass, and entries 3 apart are opposite.
    pub const ALL: [Self; 6] = [
        Self::East,
        Self::SouthEast,
        Self::SouthWest,
        Self::West,
        Self::NorthWest,
        Self::NorthEast,
    ];

    /// Get the index of this direction within [Self::ALL]
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|dir| self == *dir).unwrap()
    }

    /// Get the direction directly opposite this one
    pub fn opposite(self) -> Self {
        Self::ALL[(self.index() + 3) % Self::ALL.len()]
    }

    /// Get the unit vector that translates a point one cell in this direction
    pub fn to_vector(self) -> HexVector {
        match self {
            Self::East => HexVector::new(1, 0, -1),
            Self::SouthEast => HexVector::new(1, -1, 0),
            Self::SouthWest => HexVector::new(0, -1, 1),
            Self::West => HexVector::new(-1, 0, 1),
            Self::NorthWest => HexVector::new(-1, 1, 0),
            Self::NorthEast => HexVector::new(0, 1, -1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{
        collections::hash_map::DefaultHasher,
        hash::{Hash, Hasher},
    };

    fn hash_of(point: HexPoint) -> u64 {
        let mut hasher = DefaultHasher::new();
        point.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_new_qrs() {
        assert_eq!(HexPoint::new_qrs(2, 2, -4).unwrap(), HexPoint::new(2, 2));
        assert_eq!(HexPoint::new_qrs(0, 0, 0).unwrap(), HexPoint::ORIGIN);
        assert!(HexPoint::new_qrs(1, 1, 1).is_err());
        assert!(HexPoint::new_qrs(2, 2, -3).is_err());
    }

    #[test]
    fn test_equality_and_hash() {
        // s is derived, so any two points with equal (q, r) are identical
        let a = HexPoint::new(2, 2);
        let b = HexPoint::new_qrs(2, 2, -4).unwrap();
        assert_eq!(a, b);
        assert_eq!(hash_of(a), hash_of(b));
        assert_ne!(HexPoint::new(2, 2), HexPoint::new(2, -2));
    }

    #[test]
    fn test_direction_vectors() {
        // Every unit vector stays on the plane
        for dir in HexDirection::iter() {
            let v = dir.to_vector();
            assert_eq!(v.q + v.r + v.s, 0, "off-plane vector for {:?}", dir);
            assert_eq!(v.length(), 1);
        }
        assert_eq!(HexDirection::East.to_vector(), HexVector::new(1, 0, -1));
        assert_eq!(
            HexDirection::NorthWest.to_vector(),
            HexVector::new(-1, 1, 0)
        );
    }

    #[test]
    fn test_opposite() {
        assert_eq!(HexDirection::East.opposite(), HexDirection::West);
        assert_eq!(HexDirection::SouthEast.opposite(), HexDirection::NorthWest);
        assert_eq!(HexDirection::SouthWest.opposite(), HexDirection::NorthEast);
        for dir in HexDirection::iter() {
            assert_eq!(dir.opposite().opposite(), dir);
        }
    }

    #[test]
    fn test_neighbor_round_trip() {
        // Stepping in a direction then back returns the original point
        for start in [
            HexPoint::ORIGIN,
            HexPoint::new(2, -1),
            HexPoint::new(-3, 1),
        ] {
            for dir in HexDirection::iter() {
                assert_eq!(start.neighbor(dir).neighbor(dir.opposite()), start);
            }
        }
    }

    #[test]
    fn test_distance() {
        let origin = HexPoint::ORIGIN;
        let far = HexPoint::new(2, -3);

        assert_eq!(origin.distance_to(origin), 0);
        assert_eq!(far.distance_to(far), 0);

        // Adjacency <=> distance 1, and distance is symmetric
        for neighbor in origin.neighbors() {
            assert_eq!(origin.distance_to(neighbor), 1);
            assert_eq!(neighbor.distance_to(origin), 1);
        }

        assert_eq!(origin.distance_to(HexPoint::new(2, -1)), 2);
        assert_eq!(origin.distance_to(far), 3);
        assert_eq!(HexPoint::new(-1, 1).distance_to(far), 4);
    }

    #[test]
    fn test_scale() {
        let p = HexPoint::new(1, -1);
        assert_eq!(p * 3, HexPoint::new(3, -3));
        assert_eq!((p * 3).distance_to(HexPoint::ORIGIN), 3);
        assert_eq!(p * 0, HexPoint::ORIGIN);
    }
}
