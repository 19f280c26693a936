//! Decimal rounding and display of `f64` values.
//!
//! Rounding works on the exact decimal expansion of the value and breaks
//! exact ties away from zero, matching the rounding the app's UI has always
//! shown. `format!` alone rounds such ties to even.

/// Digits after the point that print any finite `f64` exactly.
const EXACT_PRECISION: usize = 1_100;

/// Round to `places` digits after the decimal point.
#[must_use]
pub fn round_fixed(value: f64, places: usize) -> f64 {
    if !value.is_finite() {
        return value;
    }

    let exact = format!("{value:.exact$}", exact = EXACT_PRECISION);
    let fraction = exact.split_once('.').map_or("", |(_, fraction)| fraction);
    let value = break_tie(value, fraction, places);
    format!("{value:.places$}").parse().unwrap_or(value)
}

/// Round to `digits` significant digits.
#[must_use]
pub fn round_significant(value: f64, digits: usize) -> f64 {
    if !value.is_finite() || value == 0.0 {
        return value;
    }

    let precision = digits.saturating_sub(1);
    let exact = format!("{value:.exact$e}", exact = EXACT_PRECISION);
    let mantissa = exact.split_once('e').map_or(exact.as_str(), |(mantissa, _)| mantissa);
    let fraction = mantissa.split_once('.').map_or("", |(_, fraction)| fraction);
    let value = break_tie(value, fraction, precision);
    format!("{value:.precision$e}").parse().unwrap_or(value)
}

/// Render a number the way the UI shows it: plain decimals between `1e-6`
/// and `1e21`, exponent notation (`1e-7`, `1.5e+21`) outside that range.
#[must_use]
pub fn display_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_owned();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_owned();
    }
    if value == 0.0 {
        return "0".to_owned();
    }

    let magnitude = value.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return format!("{value}");
    }

    let exponential = format!("{value:e}");
    match exponential.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => exponential,
    }
}

/// Step one ulp away from zero when `fraction` sits exactly halfway at
/// `keep` digits, so the following `format!` picks the larger magnitude.
fn break_tie(value: f64, fraction: &str, keep: usize) -> f64 {
    let mut rest = fraction.bytes().skip(keep);
    let is_tie = rest.next() == Some(b'5') && rest.all(|digit| digit == b'0');
    if is_tie {
        f64::from_bits(value.to_bits() + 1)
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_ties_round_away_from_zero() {
        assert_eq!(round_fixed(0.015_625, 5), 0.015_63);
        assert_eq!(round_fixed(-0.015_625, 5), -0.015_63);
        assert_eq!(round_fixed(2.5, 0), 3.0);
        assert_eq!(round_fixed(0.125, 2), 0.13);
    }

    #[test]
    fn fixed_uses_exact_value_off_ties() {
        // 1.005 is stored just below the midpoint
        assert_eq!(round_fixed(1.005, 2), 1.0);
        assert_eq!(round_fixed(3.141_592_65, 5), 3.141_59);
    }

    #[test]
    fn significant_ties_round_away_from_zero() {
        assert_eq!(round_significant(1_234_568.5, 7), 1_234_569.0);
        assert_eq!(round_significant(-1_234_568.5, 7), -1_234_569.0);
        assert_eq!(round_significant(123_456_789.0, 7), 123_456_800.0);
        assert_eq!(round_significant(0.000_001_234_567, 5), 1.2346e-6);
    }

    #[test]
    fn non_finite_values_pass_through() {
        assert!(round_fixed(f64::NAN, 5).is_nan());
        assert_eq!(round_significant(f64::INFINITY, 7), f64::INFINITY);
        assert_eq!(round_significant(0.0, 7), 0.0);
    }

    #[test]
    fn display_switches_to_exponent_outside_decimal_range() {
        assert_eq!(display_number(1000.0), "1000");
        assert_eq!(display_number(1.5), "1.5");
        assert_eq!(display_number(-0.0), "0");
        assert_eq!(display_number(0.000_001), "0.000001");
        assert_eq!(display_number(0.000_000_1), "1e-7");
        assert_eq!(display_number(1e-9), "1e-9");
        assert_eq!(display_number(-2.5e-8), "-2.5e-8");
        assert_eq!(display_number(1e21), "1e+21");
        assert_eq!(display_number(f64::NEG_INFINITY), "-Infinity");
    }
}
