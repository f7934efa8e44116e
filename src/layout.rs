//! Pixel layout of the plot: drawable rectangle, origin position and
//! grid line placement, derived from the canvas size and scale.

pub const SCALE_MIN: f64 = 10.;
pub const SCALE_MAX: f64 = 120.;

/// Pixels kept clear on the left, right and bottom edges.
pub const MARGIN: f64 = 20.;
/// Taller top margin, leaving room for the title and readout.
pub const TITLE_MARGIN: f64 = 100.;

/// View parameters supplied by the surrounding UI, read-only to the core.
#[derive(Debug, Clone, Copy)]
pub struct ViewConfig {
    /// Pixels per unit of vector magnitude, `[SCALE_MIN, SCALE_MAX]`
    pub pixels_per_unit: f64,
    /// Pixels
    pub canvas_width: f64,
    /// Pixels
    pub canvas_height: f64,
    // Block construction so the scale bounds hold
    _private: (),
}

impl ViewConfig {
    pub fn new(pixels_per_unit: f64, canvas_width: f64, canvas_height: f64) -> Self {
        let clamped = pixels_per_unit.clamp(SCALE_MIN, SCALE_MAX);
        if clamped != pixels_per_unit {
            log::warn!("Scale out of bounds, clamped: {}", pixels_per_unit);
        }
        ViewConfig {
            pixels_per_unit: clamped,
            canvas_width,
            canvas_height,
            _private: (),
        }
    }
}

/// Drawable rectangle and origin pixel position.
#[derive(Debug, Clone, Copy)]
pub struct GraphBounds {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    /// Midpoint of the drawable rectangle
    pub origin_x: f64,
    /// Midpoint of the drawable rectangle
    pub origin_y: f64,
}

impl GraphBounds {
    pub fn compute(config: &ViewConfig, margin: f64, top_margin: f64) -> Self {
        let left = margin;
        let top = top_margin;
        let right = config.canvas_width - margin;
        let bottom = config.canvas_height - margin;
        GraphBounds {
            left,
            top,
            right,
            bottom,
            origin_x: left + (right - left) / 2.,
            origin_y: top + (bottom - top) / 2.,
        }
    }
}

/// Grid line positions along one axis, stepping outward from the origin
/// in both directions until the bounds are exceeded. Lines are anchored
/// to the origin, not the bounds, so the outermost lines may sit a
/// partial step from the border.
pub fn grid_positions(origin: f64, min: f64, max: f64, step: f64) -> GridSteps {
    if !(step > 0.) {
        log::error!("Invalid grid step: {}", step);
        panic!();
    }
    GridSteps {
        up: origin,
        down: origin - step,
        min,
        max,
        step,
    }
}

#[derive(Debug, Clone)]
pub struct GridSteps {
    up: f64,
    down: f64,
    min: f64,
    max: f64,
    step: f64,
}

impl Iterator for GridSteps {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.up <= self.max {
            let pos = self.up;
            self.up += self.step;
            Some(pos)
        } else if self.down >= self.min {
            let pos = self.down;
            self.down -= self.step;
            Some(pos)
        } else {
            None
        }
    }
}
