use crate::{
    cursor::Cursor,
    grid::HexGrid,
    render::{unit::Point2, GridRenderer},
};
use std::f64::consts::PI;
use svg::{
    node::{
        element::{Group, Polygon},
        Comment,
    },
    Document,
};

/// Render a single frame of a session as an SVG: every cell at its current
/// position (including cells partway through a rotation arc), with the three
/// cursor cells outlined on top.
pub fn grid_to_svg(
    grid: &HexGrid,
    cursor: &Cursor,
    renderer: &GridRenderer,
) -> Document {
    let size = renderer.render_config().hex_size;

    // Fit the view box to the projected grid, with one cell of padding so
    // strokes and in-flight arcs don't clip
    let (mut max_x, mut max_y) = (0.0_f64, 0.0_f64);
    for (&hex, _) in grid.iter() {
        let pos = renderer.hex_to_screen_space(hex);
        max_x = max_x.max(pos.x.abs());
        max_y = max_y.max(pos.y.abs());
    }
    let view_x = (max_x + 2.0 * size).ceil();
    let view_y = (max_y + 2.0 * size).ceil();

    let mut document = Document::new().set(
        "viewBox",
        (-view_x, -view_y, view_x * 2.0, view_y * 2.0),
    );

    for (&hex, cell) in grid.iter() {
        let pos = renderer.cell_position(grid, hex, cell);
        document = document.add(
            cell_group(pos)
                .add(Comment::new(hex.to_string())) // Readability!
                .add(
                    hexagon(size)
                        .set("fill", cell.color().to_html())
                        .set("stroke", "#ffffff")
                        .set(
                            "stroke-width",
                            renderer.render_config().cell_stroke_width,
                        ),
                ),
        );
    }

    // The cursor draws over its home cells even while those cells animate
    for &hex in cursor.hexes() {
        let pos = renderer.hex_to_screen_space(hex);
        document = document.add(
            cell_group(pos).add(
                hexagon(size)
                    .set("fill", "none")
                    .set("stroke", "#000000")
                    .set(
                        "stroke-width",
                        renderer.render_config().cursor_stroke_width,
                    ),
            ),
        );
    }

    document
}

/// A group translated to a cell's screen position
fn cell_group(pos: Point2) -> Group {
    Group::new().set("transform", format!("translate({} {})", pos.x, pos.y))
}

/// A pointy-top hexagon polygon centered on the origin
fn hexagon(size: f64) -> Polygon {
    let points: Vec<(f64, f64)> = (0..6)
        .map(|i| {
            let angle = PI / 6.0 + PI / 3.0 * i as f64;
            (size * angle.cos(), size * angle.sin())
        })
        .collect();
    Polygon::new().set("points", points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::GameConfig, render::config::RenderConfig, session::Session,
    };

    #[test]
    fn test_svg_cell_count() {
        let session = Session::new(&GameConfig {
            seed: 7u64.into(),
            radius: 2,
            cursor_start: crate::hex::HexPoint::ORIGIN,
        })
        .unwrap();
        let renderer = GridRenderer::new(RenderConfig::default()).unwrap();

        let svg =
            grid_to_svg(session.grid(), session.cursor(), &renderer)
                .to_string();
        // One polygon per cell, plus the three cursor outlines
        assert_eq!(svg.matches("<polygon").count(), 19 + 3);
        // Every fill comes from the palette (or is the cursor's "none")
        assert!(svg.contains("fill=\"none\""));
    }
}
