//! Utilities for turning grid state into screen-space geometry. The core
//! never draws anything itself — a windowing/drawing collaborator calls into
//! [GridRenderer] each frame to find out where every cell currently sits.

pub mod config;
#[cfg(feature = "svg")]
pub mod svg;
pub mod unit;

use crate::{
    grid::{Cell, HexGrid},
    hex::HexPoint,
    render::{config::RenderConfig, unit::Point2},
};
use std::f64::consts::PI;

const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// A grid renderer converts hex-space state into 2D screen-space positions.
/// A renderer is created with a particular [RenderConfig], and from there can
/// be used to position any number of grids any number of frames.
///
/// Config options cannot be changed after creating a renderer, but renderers
/// are very cheap to create so if you need to change the config, just create
/// a new one.
#[derive(Clone, Debug)]
pub struct GridRenderer {
    render_config: RenderConfig,
}

impl GridRenderer {
    /// Initialize a new renderer with the given options. Returns an error if
    /// the render config is invalid.
    pub fn new(render_config: RenderConfig) -> anyhow::Result<Self> {
        use validator::Validate;
        render_config.validate()?;
        Ok(Self { render_config })
    }

    /// Get a reference to the config that this renderer uses
    pub fn render_config(&self) -> &RenderConfig {
        &self.render_config
    }

    /// Convert a cell position from hex space to 2D screen space. This is the
    /// standard pointy-top axial projection:
    ///
    /// ```text
    /// x = S * (√3 * q  +  √3/2 * r)
    /// y = S * (3/2 * r)
    /// ```
    ///
    /// where `S` is [RenderConfig::hex_size]. Pure and deterministic; callers
    /// add their screen-space origin offset separately.
    pub fn hex_to_screen_space(&self, point: HexPoint) -> Point2 {
        let size = self.render_config.hex_size;
        let q = f64::from(point.q());
        let r = f64::from(point.r());
        Point2 {
            x: size * (SQRT_3 * q + SQRT_3 / 2.0 * r),
            y: size * (3.0 / 2.0 * r),
        }
    }

    /// Get the screen-space pivot of a 3-cell rotation: the centroid of the
    /// three projected cell centers.
    pub fn rotation_pivot(&self, hexes: &[HexPoint; 3]) -> Point2 {
        hexes
            .iter()
            .map(|&hex| self.hex_to_screen_space(hex))
            .sum::<Point2>()
            / 3.0
    }

    /// Compute the position of a point partway through a rotation around a
    /// pivot, from `start`'s position towards `end`'s. `progress` is the
    /// completion fraction in [0, 1].
    ///
    /// The path follows the shorter circular arc between the two angles. The
    /// radius is taken from `start` only — if `start` and `end` are not
    /// equidistant from the pivot, the path will not land exactly on `end`.
    /// The cells of a rotation are always equidistant from their shared
    /// centroid, so in practice the paths are true arcs; callers passing
    /// other geometry get the start-radius behavior as-is.
    pub fn arc_position(
        start: Point2,
        end: Point2,
        pivot: Point2,
        progress: f32,
    ) -> Point2 {
        let start_relative = start - pivot;
        let end_relative = end - pivot;

        let start_angle = start_relative.angle();
        let end_angle = end_relative.angle();

        // Take the shortest way around the circle
        let mut angle_diff = end_angle - start_angle;
        if angle_diff > PI {
            angle_diff -= 2.0 * PI;
        } else if angle_diff < -PI {
            angle_diff += 2.0 * PI;
        }

        let current_angle = start_angle + angle_diff * f64::from(progress);
        let radius = start_relative.length();

        Point2 {
            x: pivot.x + current_angle.cos() * radius,
            y: pivot.y + current_angle.sin() * radius,
        }
    }

    /// Get the current screen-space position of a cell: its arc position if
    /// it's part of the grid's in-flight rotation, its projected home
    /// position otherwise.
    pub fn cell_position(
        &self,
        grid: &HexGrid,
        hex: HexPoint,
        cell: &Cell,
    ) -> Point2 {
        match (cell.rotating_to(), grid.rotation()) {
            (Some(target), Some(rotation)) => {
                let start = self.hex_to_screen_space(hex);
                let end = self.hex_to_screen_space(target);
                let pivot = self.rotation_pivot(rotation);
                Self::arc_position(start, end, pivot, cell.rotation_progress())
            }
            _ => self.hex_to_screen_space(hex),
        }
    }
}
