//! Surface-independent geometry: arrowhead edges and dashed-line
//! decomposition, both returning plain segment data.
use core::f64::consts::PI;

use libm::{atan2, cos, hypot, sin};

/// A line segment in pixel coordinates.
#[derive(Debug, Clone, Copy)]
pub struct Segment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// The two edges of an arrowhead at `(x2, y2)` for the line from
/// `(x1, y1)`.
///
/// The base direction runs from the tip back toward the tail, so the
/// edges open backward against the line. Both edges start at the tip
/// and are `length` long, spread `half_angle_deg` to either side.
pub fn arrowhead_edges(
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    length: f64,
    half_angle_deg: f64,
) -> [Segment; 2] {
    let back = atan2(y1 - y2, x1 - x2);
    let spread = half_angle_deg * PI / 180.;
    let edge = |angle: f64| Segment {
        x1: x2,
        y1: y2,
        x2: x2 + length * cos(angle),
        y2: y2 + length * sin(angle),
    };
    [edge(back + spread), edge(back - spread)]
}

/// Dash segments along the line from `(x1, y1)` to `(x2, y2)`:
/// alternating drawn intervals of `dash` and skipped intervals of
/// `gap`, starting with a drawn dash at distance 0. The final dash is
/// clipped to the line's length; a zero-length line yields nothing.
#[derive(Debug, Clone)]
pub struct DashSegments {
    x1: f64,
    y1: f64,
    ux: f64,
    uy: f64,
    total: f64,
    pos: f64,
    dash: f64,
    gap: f64,
}

impl DashSegments {
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64, dash: f64, gap: f64) -> Self {
        if !(dash > 0.) || gap < 0. {
            log::error!("Invalid dash pattern: dash {}, gap {}", dash, gap);
            panic!();
        }
        let dx = x2 - x1;
        let dy = y2 - y1;
        let total = hypot(dx, dy);
        let (ux, uy) = if total == 0. {
            (0., 0.)
        } else {
            (dx / total, dy / total)
        };
        DashSegments {
            x1,
            y1,
            ux,
            uy,
            total,
            pos: 0.,
            dash,
            gap,
        }
    }
}

impl Iterator for DashSegments {
    type Item = Segment;

    fn next(&mut self) -> Option<Segment> {
        if self.pos >= self.total {
            return None;
        }
        let end = (self.pos + self.dash).min(self.total);
        let segment = Segment {
            x1: self.x1 + self.ux * self.pos,
            y1: self.y1 + self.uy * self.pos,
            x2: self.x1 + self.ux * end,
            y2: self.y1 + self.uy * end,
        };
        self.pos += self.dash + self.gap;
        Some(segment)
    }
}

#[cfg(test)]
mod tests {
    use std::vec::Vec;

    use super::*;

    #[test]
    fn dashes_start_at_zero_and_tile_the_line() {
        let segments: Vec<Segment> = DashSegments::new(0., 0., 100., 0., 8., 6.).collect();
        assert_eq!(segments.len(), 8);
        for (i, segment) in segments.iter().enumerate() {
            let start = 14. * i as f64;
            assert!((segment.x1 - start).abs() < 1E-9);
            assert!((segment.x2 - (start + 8.).min(100.)).abs() < 1E-9);
            assert_eq!(segment.y1, 0.);
            assert_eq!(segment.y2, 0.);
        }
        // The last dash is clipped at the line's end
        assert_eq!(segments.last().unwrap().x2, 100.);
    }

    #[test]
    fn zero_length_line_yields_no_dashes() {
        assert_eq!(DashSegments::new(3., 4., 3., 4., 8., 6.).count(), 0);
    }

    #[test]
    fn dashes_follow_an_arbitrary_direction() {
        let segments: Vec<Segment> = DashSegments::new(0., 0., 30., 40., 10., 5.).collect();
        // 50 px long line; dashes at [0,10], [15,25], [30,40], [45,50]
        assert_eq!(segments.len(), 4);
        let first = segments[0];
        assert!((first.x2 - 6.).abs() < 1E-9);
        assert!((first.y2 - 8.).abs() < 1E-9);
        let last = segments[3];
        assert!((last.x2 - 30.).abs() < 1E-9);
        assert!((last.y2 - 40.).abs() < 1E-9);
    }

    #[test]
    fn arrowhead_edges_are_mirrored_about_the_line() {
        let [a, b] = arrowhead_edges(0., 0., 10., 0., 12., 25.);
        // Both edges start at the tip
        assert_eq!((a.x1, a.y1), (10., 0.));
        assert_eq!((b.x1, b.y1), (10., 0.));
        // Mirror images across the horizontal line, opening backward
        assert!((a.x2 - b.x2).abs() < 1E-9);
        assert!((a.y2 + b.y2).abs() < 1E-9);
        assert!(a.x2 < 10.);
        let spread = 25_f64.to_radians();
        assert!((a.y2.abs() - 12. * spread.sin()).abs() < 1E-9);
    }

    #[test]
    fn arrowhead_edges_have_the_requested_length() {
        for (x1, y1, x2, y2) in [(0., 0., 10., 0.), (3., -2., -7., 5.), (0., 10., 0., 0.)] {
            for edge in arrowhead_edges(x1, y1, x2, y2, 12., 25.) {
                let len = hypot(edge.x2 - edge.x1, edge.y2 - edge.y1);
                assert!((len - 12.).abs() < 1E-9);
            }
        }
    }
}
