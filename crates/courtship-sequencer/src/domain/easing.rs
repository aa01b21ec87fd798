//! Easing curves applied to a normalized time fraction.

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Overshoot constant for [`Easing::BackOut`].
const BACK_OVERSHOOT: f32 = 1.701_58;

/// An easing curve.
///
/// Authored as a snake_case name. Unknown names fall back to
/// [`Easing::Linear`] with a warning instead of rejecting the beat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum Easing {
    /// No easing.
    #[default]
    Linear,
    /// Slow start.
    CubicIn,
    /// Slow finish.
    CubicOut,
    /// Slow start and finish.
    CubicInOut,
    /// Overshoots the target slightly, then settles.
    BackOut,
}

impl Easing {
    /// Looks an easing up by name. Accepts snake_case and the camelCase
    /// spellings (`cubicInOut`, `backOut`) found in older content.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "linear" => Some(Self::Linear),
            "cubic_in" | "cubicIn" | "easeInCubic" => Some(Self::CubicIn),
            "cubic_out" | "cubicOut" | "easeOutCubic" => Some(Self::CubicOut),
            "cubic_in_out" | "cubicInOut" | "easeInOutCubic" => Some(Self::CubicInOut),
            "back_out" | "backOut" | "easeOutBack" => Some(Self::BackOut),
            _ => None,
        }
    }

    /// Maps `t` in `[0, 1]` to the eased fraction. Input is clamped first.
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::CubicIn => t * t * t,
            Self::CubicOut => {
                let u = 1.0 - t;
                1.0 - u * u * u
            }
            Self::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - u * u * u / 2.0
                }
            }
            Self::BackOut => {
                let c3 = BACK_OVERSHOOT + 1.0;
                let u = t - 1.0;
                1.0 + c3 * u * u * u + BACK_OVERSHOOT * u * u
            }
        }
    }
}

impl From<String> for Easing {
    fn from(name: String) -> Self {
        Self::from_name(&name).unwrap_or_else(|| {
            warn!(easing = %name, "unknown easing, using linear");
            Self::Linear
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    #[test]
    fn test_every_curve_pins_endpoints() {
        for easing in [
            Easing::Linear,
            Easing::CubicIn,
            Easing::CubicOut,
            Easing::CubicInOut,
            Easing::BackOut,
        ] {
            assert!(close(easing.apply(0.0), 0.0), "{easing:?} at 0");
            assert!(close(easing.apply(1.0), 1.0), "{easing:?} at 1");
        }
    }

    #[test]
    fn test_curves_have_expected_midpoints() {
        assert!(close(Easing::Linear.apply(0.5), 0.5));
        assert!(close(Easing::CubicIn.apply(0.5), 0.125));
        assert!(close(Easing::CubicOut.apply(0.5), 0.875));
        assert!(close(Easing::CubicInOut.apply(0.5), 0.5));
        assert!(Easing::BackOut.apply(0.8) > 1.0);
    }

    #[test]
    fn test_apply_clamps_out_of_range_input() {
        assert!(close(Easing::Linear.apply(1.7), 1.0));
        assert!(close(Easing::CubicOut.apply(-0.3), 0.0));
    }

    #[test]
    fn test_unknown_name_deserializes_as_linear() {
        let easing: Easing = serde_json::from_str("\"wobbly\"").unwrap();
        assert_eq!(easing, Easing::Linear);

        let easing: Easing = serde_json::from_str("\"easeOutBack\"").unwrap();
        assert_eq!(easing, Easing::BackOut);
    }
}
