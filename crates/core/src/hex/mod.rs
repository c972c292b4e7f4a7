//! Basic types and data structures for the hexagonal grid.
//!
//! ## Coordinate System
//!
//! Trihex uses the [cube coordinate system defined by Amit
//! Patel](https://www.redblobgames.com/grids/hexagons/#coordinates-cube) for
//! pointy-top hexagons. Each cell is identified by three integers `(q, r, s)`
//! with the invariant **`q + r + s == 0`**. Because the third component is
//! always derivable from the other two, [HexPoint] only stores `q` and `r`;
//! equality and hashing consider only those two components.
//!
//! Translations within the grid are [HexVector]s, which carry all three
//! components and are *not* validated: a vector is only meaningful relative to
//! the point it's applied to, and applying one re-derives the invariant.
//!
//! ## Screen Space
//!
//! Hex coordinates say nothing about pixels. Converting a cell to a 2D screen
//! position is the renderer's job; see [crate::render].

mod unit;

pub use self::unit::*;

use fnv::FnvBuildHasher;
use indexmap::IndexMap;
use std::collections::{HashMap, HashSet};

/// A set of hex points
pub type HexPointSet = HashSet<HexPoint, FnvBuildHasher>;
/// A map of hex points to some `T`
pub type HexPointMap<T> = HashMap<HexPoint, T, FnvBuildHasher>;
/// An ORDERED map of hex points to some `T`. This has some extra memory
/// overhead, so we only use it where iteration order needs to be
/// deterministic (e.g. the grid itself, so snapshot output is stable).
pub type HexPointIndexMap<T> = IndexMap<HexPoint, T, FnvBuildHasher>;
