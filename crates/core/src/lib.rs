//! Trihex is the simulation core of a hex-grid rotation puzzle: a sparse
//! hexagonal grid of colored cells plus a rigid three-cell cursor that can
//! slide around the grid and spin the cells underneath it. This crate holds
//! all the state and geometry; drawing and input handling are implemented
//! elsewhere.
//!
//! ```
//! use trihex::{Action, GameConfig, Session};
//!
//! let config = GameConfig::default();
//! let mut session = Session::new(&config).unwrap();
//! session.apply(Action::Rotate);
//! session.tick(0.016); // once per frame
//! // From here you can position cells via GridRenderer and draw them
//! // however you like.
//! ```
//!
//! See [GameConfig] for details on how a session can be customized.

mod config;
mod cursor;
mod grid;
mod hex;
mod render;
mod session;
mod util;

pub use crate::{
    config::{GameConfig, Seed},
    cursor::Cursor,
    grid::{Cell, HexGrid},
    hex::{
        HexDirection, HexPoint, HexPointIndexMap, HexPointMap, HexPointSet,
        HexVector,
    },
    render::{
        config::RenderConfig,
        unit::{Color3, Point2, Vector2},
        GridRenderer,
    },
    session::{Action, Session},
};

#[cfg(feature = "svg")]
pub use crate::render::svg::grid_to_svg;
