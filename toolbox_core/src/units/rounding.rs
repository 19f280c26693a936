//! Magnitude-banded rounding for conversion results.

use crate::number::{round_fixed, round_significant};

/// Rounding applied to every conversion result to hide floating-point noise.
///
/// Three bands by magnitude:
/// - below `small_threshold` (and non-zero): `small_significant_digits` significant digits
/// - above `large_threshold`: `large_significant_digits` significant digits
/// - otherwise: `decimal_places` digits after the decimal point
///
/// Exact ties round away from zero in every band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundingPolicy {
    /// Upper bound (exclusive) of the small band.
    pub small_threshold: f64,
    /// Significant digits kept in the small band.
    pub small_significant_digits: usize,
    /// Lower bound (exclusive) of the large band.
    pub large_threshold: f64,
    /// Significant digits kept in the large band.
    pub large_significant_digits: usize,
    /// Decimal places kept in between.
    pub decimal_places: usize,
}

impl RoundingPolicy {
    /// Thresholds and digit budgets used by the converter.
    pub const DEFAULT: Self = Self {
        small_threshold: 1e-5,
        small_significant_digits: 5,
        large_threshold: 1e5,
        large_significant_digits: 7,
        decimal_places: 5,
    };

    /// Round `value` according to its magnitude band.
    #[must_use]
    pub fn apply(&self, value: f64) -> f64 {
        if value == 0.0 {
            return 0.0;
        }
        if !value.is_finite() {
            return value;
        }

        let magnitude = value.abs();
        if magnitude < self.small_threshold {
            round_significant(value, self.small_significant_digits)
        } else if magnitude > self.large_threshold {
            round_significant(value, self.large_significant_digits)
        } else {
            round_fixed(value, self.decimal_places)
        }
    }
}

impl Default for RoundingPolicy {
    fn default() -> Self {
        Self::DEFAULT
    }
}
