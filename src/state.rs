use core::fmt;

use crate::transform;

/// Which pair of raw fields is the authoritative representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Polar,
    Cartesian,
}

/// Input fields the form can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Magnitude,
    Angle,
    X,
    Y,
}

impl InputMode {
    /// The fields that are active (and should be visible) in this mode.
    pub fn active_fields(self) -> &'static [Field] {
        match self {
            InputMode::Polar => &[Field::Magnitude, Field::Angle],
            InputMode::Cartesian => &[Field::X, Field::Y],
        }
    }
}

impl fmt::Display for InputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputMode::Polar => f.write_str("Polar"),
            InputMode::Cartesian => f.write_str("Cartesian"),
        }
    }
}

/// Raw field text as read from the input form, not yet parsed.
#[derive(Debug, Clone, Copy)]
pub struct RawFields<'a> {
    pub magnitude: &'a str,
    pub angle: &'a str,
    pub x: &'a str,
    pub y: &'a str,
}

/// Parses `text` as a finite number, falling back to `fallback` on
/// empty, malformed or non-finite input.
pub fn parse_or(text: &str, fallback: f64) -> f64 {
    match text.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => fallback,
    }
}

pub const DEFAULT_MAGNITUDE: f64 = 5.;
pub const DEFAULT_ANGLE_DEG: f64 = 30.;

/// The current vector in both representations.
///
/// After every [`recompute`](VectorState::recompute) the two
/// representations agree: `x = magnitude·cos(angle_deg)` and
/// `y = magnitude·sin(angle_deg)` within floating tolerance.
/// `magnitude` keeps the sign the user typed; `angle_deg` is always
/// in `[0, 360)`.
#[derive(Debug, Clone, Copy)]
pub struct VectorState {
    pub x: f64,
    pub y: f64,
    pub magnitude: f64,
    /// Degrees, `[0, 360)`
    pub angle_deg: f64,
    pub mode: InputMode,
}

impl VectorState {
    pub fn new() -> Self {
        let (x, y) = transform::polar_to_cartesian(DEFAULT_MAGNITUDE, DEFAULT_ANGLE_DEG);
        VectorState {
            x,
            y,
            magnitude: DEFAULT_MAGNITUDE,
            angle_deg: DEFAULT_ANGLE_DEG,
            mode: InputMode::Polar,
        }
    }

    /// Switches the authoritative representation. The caller follows up
    /// with a [`recompute`](VectorState::recompute) so the derived pair
    /// reflects the newly authoritative fields.
    pub fn set_mode(&mut self, mode: InputMode) {
        self.mode = mode;
    }

    /// Re-derives all four components from the raw fields of the active
    /// mode. A field that fails to parse falls back to its own last-good
    /// value, so malformed input never disturbs the state.
    pub fn recompute(&mut self, raw: RawFields<'_>) {
        match self.mode {
            InputMode::Polar => {
                let magnitude = parse_or(raw.magnitude, self.magnitude);
                let angle = parse_or(raw.angle, self.angle_deg);
                let (x, y) = transform::polar_to_cartesian(magnitude, angle);
                self.x = x;
                self.y = y;
                self.magnitude = magnitude;
                self.angle_deg = transform::normalize_deg(angle);
            }
            InputMode::Cartesian => {
                let x = parse_or(raw.x, self.x);
                let y = parse_or(raw.y, self.y);
                let (magnitude, angle_deg) = transform::cartesian_to_polar(x, y);
                self.x = x;
                self.y = y;
                self.magnitude = magnitude;
                self.angle_deg = angle_deg;
            }
        }
        log::debug!("Recomputed vector state: {:?}", self);
    }
}

impl Default for VectorState {
    fn default() -> Self {
        VectorState::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw<'a>(magnitude: &'a str, angle: &'a str, x: &'a str, y: &'a str) -> RawFields<'a> {
        RawFields { magnitude, angle, x, y }
    }

    #[test]
    fn starts_with_consistent_defaults() {
        let state = VectorState::new();
        assert_eq!(state.mode, InputMode::Polar);
        assert_eq!(state.magnitude, 5.);
        assert_eq!(state.angle_deg, 30.);
        assert!((state.x - 4.33).abs() < 1E-2);
        assert!((state.y - 2.50).abs() < 1E-2);
    }

    #[test]
    fn recomputes_cartesian_pair_from_polar_fields() {
        let mut state = VectorState::new();
        state.recompute(raw("5", "30", "", ""));
        assert!((state.x - 4.33).abs() < 1E-2);
        assert!((state.y - 2.50).abs() < 1E-2);
        assert_eq!(state.magnitude, 5.);
        assert_eq!(state.angle_deg, 30.);
    }

    #[test]
    fn recomputes_polar_pair_from_cartesian_fields() {
        let mut state = VectorState::new();
        state.set_mode(InputMode::Cartesian);
        state.recompute(raw("", "", "4", "3"));
        assert_eq!(state.magnitude, 5.);
        assert!((state.angle_deg - 36.87).abs() < 1E-2);
    }

    #[test]
    fn malformed_fields_keep_their_last_good_value() {
        let mut state = VectorState::new();
        state.recompute(raw("2", "45", "", ""));
        state.recompute(raw("abc", "", "", ""));
        assert_eq!(state.magnitude, 2.);
        assert_eq!(state.angle_deg, 45.);
        state.set_mode(InputMode::Cartesian);
        state.recompute(raw("", "", "not a number", "   "));
        assert!((state.x - 2. * 45_f64.to_radians().cos()).abs() < 1E-9);
    }

    #[test]
    fn angle_field_is_normalized_on_recompute() {
        let mut state = VectorState::new();
        state.recompute(raw("1", "-30", "", ""));
        assert_eq!(state.angle_deg, 330.);
        state.recompute(raw("1", "720", "", ""));
        assert_eq!(state.angle_deg, 0.);
    }

    #[test]
    fn parses_trimmed_finite_numbers_only() {
        assert_eq!(parse_or(" 2.5 ", 0.), 2.5);
        assert_eq!(parse_or("1e3", 0.), 1000.);
        assert_eq!(parse_or("", 3.), 3.);
        assert_eq!(parse_or("abc", 7.), 7.);
        assert_eq!(parse_or("inf", 1.), 1.);
        assert_eq!(parse_or("NaN", 1.), 1.);
    }

    #[test]
    fn each_mode_activates_its_own_fields() {
        assert_eq!(
            InputMode::Polar.active_fields(),
            &[Field::Magnitude, Field::Angle]
        );
        assert_eq!(InputMode::Cartesian.active_fields(), &[Field::X, Field::Y]);
    }
}
