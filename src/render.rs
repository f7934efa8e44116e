//! Composes vector state, layout and geometry into an ordered sequence
//! of draw calls against an abstract surface.
use core::fmt;

use crate::geometry::{arrowhead_edges, DashSegments};
use crate::layout::{grid_positions, GraphBounds, ViewConfig};
use crate::state::VectorState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Rgba { r, g, b, a: 255 }
    }
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Rgba { r, g, b, a }
    }
    pub const fn gray(value: u8) -> Self {
        Rgba::rgb(value, value, value)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Stroke {
    pub width: f64,
    pub color: Rgba,
}

impl Stroke {
    pub const fn new(width: f64, color: Rgba) -> Self {
        Stroke { width, color }
    }
}

/// Text anchoring relative to the given position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    LeftTop,
    LeftCenter,
    CenterTop,
}

/// A 2D drawing backend. All coordinates are absolute pixels.
pub trait Surface {
    fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, stroke: Stroke);
    fn rect(
        &mut self,
        left: f64,
        top: f64,
        width: f64,
        height: f64,
        fill: Option<Rgba>,
        stroke: Option<Stroke>,
    );
    fn text(
        &mut self,
        x: f64,
        y: f64,
        size: f64,
        color: Rgba,
        anchor: Anchor,
        content: fmt::Arguments<'_>,
    );
}

pub const BACKGROUND: Rgba = Rgba::gray(250);
pub const FRAME: Rgba = Rgba::gray(220);
pub const GRID: Rgba = Rgba::gray(235);
pub const AXIS: Rgba = Rgba::gray(60);
pub const VECTOR: Rgba = Rgba::rgb(0, 132, 255);
pub const PROJECTION: Rgba = Rgba::rgba(0, 132, 255, 120);
pub const TEXT: Rgba = Rgba::gray(20);
pub const HINT: Rgba = Rgba::gray(70);
pub const LABEL: Rgba = Rgba::gray(40);

pub const DASH_LENGTH: f64 = 8.;
pub const GAP_LENGTH: f64 = 6.;
pub const ARROW_LENGTH: f64 = 12.;
pub const ARROW_HALF_ANGLE_DEG: f64 = 25.;

/// Draws one frame: frame rectangle, grid, axes, the vector with its
/// arrowhead, dashed projection guides, and the text layer. Reads the
/// state, never mutates it.
pub fn render_frame(
    state: &VectorState,
    layout: &GraphBounds,
    config: &ViewConfig,
    surface: &mut dyn Surface,
) {
    let GraphBounds {
        left,
        top,
        right,
        bottom,
        origin_x,
        origin_y,
    } = *layout;
    let scale = config.pixels_per_unit;

    surface.rect(
        left,
        top,
        right - left,
        bottom - top,
        None,
        Some(Stroke::new(1., FRAME)),
    );

    let grid = Stroke::new(1., GRID);
    for x in grid_positions(origin_x, left, right, scale) {
        surface.line(x, top, x, bottom, grid);
    }
    for y in grid_positions(origin_y, top, bottom, scale) {
        surface.line(left, y, right, y, grid);
    }

    let axis = Stroke::new(2., AXIS);
    surface.line(left, origin_y, right, origin_y, axis);
    surface.line(origin_x, top, origin_x, bottom, axis);
    draw_arrow(surface, right - 10., origin_y, right, origin_y, axis);
    draw_arrow(surface, origin_x, top + 10., origin_x, top, axis);

    // Screen y grows downward while the vector's y grows upward
    let tip_x = origin_x + state.x * scale;
    let tip_y = origin_y - state.y * scale;
    draw_arrow(surface, origin_x, origin_y, tip_x, tip_y, Stroke::new(4., VECTOR));

    let guide = Stroke::new(1., PROJECTION);
    for s in DashSegments::new(tip_x, origin_y, tip_x, tip_y, DASH_LENGTH, GAP_LENGTH) {
        surface.line(s.x1, s.y1, s.x2, s.y2, guide);
    }
    for s in DashSegments::new(origin_x, tip_y, tip_x, tip_y, DASH_LENGTH, GAP_LENGTH) {
        surface.line(s.x1, s.y1, s.x2, s.y2, guide);
    }

    surface.text(
        right - 14.,
        origin_y - 14.,
        13.,
        LABEL,
        Anchor::LeftCenter,
        format_args!("x"),
    );
    surface.text(
        origin_x + 14.,
        top + 4.,
        13.,
        LABEL,
        Anchor::CenterTop,
        format_args!("y"),
    );

    surface.text(
        left,
        10.,
        22.,
        TEXT,
        Anchor::LeftTop,
        format_args!("Vector Converter: Polar ⇄ Cartesian"),
    );
    surface.text(
        left,
        44.,
        13.,
        HINT,
        Anchor::LeftTop,
        format_args!("Edit the visible fields. Scale controls pixels per unit on the graph."),
    );

    let readout_x = right - 330.;
    surface.text(
        readout_x,
        10.,
        16.,
        TEXT,
        Anchor::LeftTop,
        format_args!("Input Type: {}", state.mode),
    );
    surface.text(
        readout_x,
        36.,
        14.,
        TEXT,
        Anchor::LeftTop,
        format_args!("Cartesian (x, y):  ({:.2}, {:.2})", state.x, state.y),
    );
    surface.text(
        readout_x,
        56.,
        14.,
        TEXT,
        Anchor::LeftTop,
        format_args!(
            "Polar (r, θ°):  ({:.2}, {:.2}°)",
            state.magnitude, state.angle_deg
        ),
    );
    surface.text(
        readout_x,
        76.,
        14.,
        TEXT,
        Anchor::LeftTop,
        format_args!("Scale: {} px/unit", config.pixels_per_unit as i32),
    );
}

/// A line with an arrowhead at its `(x2, y2)` end.
fn draw_arrow(surface: &mut dyn Surface, x1: f64, y1: f64, x2: f64, y2: f64, stroke: Stroke) {
    surface.line(x1, y1, x2, y2, stroke);
    for edge in arrowhead_edges(x1, y1, x2, y2, ARROW_LENGTH, ARROW_HALF_ANGLE_DEG) {
        surface.line(edge.x1, edge.y1, edge.x2, edge.y2, stroke);
    }
}
