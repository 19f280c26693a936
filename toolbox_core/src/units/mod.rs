//! Unit conversion routed through each category's base unit.
//!
//! Every conversion runs `to_base` on the source unit followed by `from_base`
//! on the target unit, including conversions from a unit to itself, and the
//! result is passed through [`RoundingPolicy::DEFAULT`].

mod catalog;
mod rounding;
mod transform;

pub use catalog::{find_unit, units_in_category, Unit, UNITS};
pub use rounding::RoundingPolicy;
pub use transform::Transform;

use crate::number::display_number;
use crate::{Conversion, Error, Result, UnitCategory, UnitCategoryInfo};

/// Reasons the converter produced no value.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConversionError {
    /// No unit with this id exists in the catalog.
    #[error("unknown unit: {id}")]
    UnknownUnit {
        /// Requested id.
        id: String,
    },
    /// The units belong to different categories.
    #[error("cannot convert {from} ({from_category:?}) to {to} ({to_category:?})")]
    IncompatibleUnits {
        /// Source unit id.
        from: String,
        /// Target unit id.
        to: String,
        /// Category of the source unit.
        from_category: UnitCategory,
        /// Category of the target unit.
        to_category: UnitCategory,
    },
    /// The input is NaN or infinite.
    #[error("value is not a finite number: {value}")]
    NonFiniteValue {
        /// Rejected input.
        value: f64,
    },
    /// The converted value overflowed.
    #[error("converting {value} {from} to {to} does not produce a finite number")]
    NonFiniteResult {
        /// Input value.
        value: f64,
        /// Source unit id.
        from: String,
        /// Target unit id.
        to: String,
    },
}

/// Convert `value` between two units of the same category.
///
/// Returns `None` for unknown ids, cross-category pairs and non-finite
/// values. See [`try_convert`] for the reason behind a `None`.
#[must_use]
pub fn convert_units(value: f64, from_unit: &str, to_unit: &str) -> Option<f64> {
    try_convert(value, from_unit, to_unit).ok()
}

/// Convert `value` between two units, reporting why a conversion is rejected.
///
/// # Errors
///
/// Returns a [`ConversionError`] when either unit is unknown, the units
/// belong to different categories, or the input or result is not finite.
pub fn try_convert(
    value: f64,
    from_unit: &str,
    to_unit: &str,
) -> std::result::Result<f64, ConversionError> {
    let (from, to) = resolve_pair(from_unit, to_unit)?;
    convert_between(value, from, to)
}

/// Convert between two already resolved units.
///
/// # Errors
///
/// Same as [`try_convert`], minus the lookup failure.
pub fn convert_between(
    value: f64,
    from: &Unit,
    to: &Unit,
) -> std::result::Result<f64, ConversionError> {
    if from.category != to.category {
        return Err(ConversionError::IncompatibleUnits {
            from: from.id.to_owned(),
            to: to.id.to_owned(),
            from_category: from.category,
            to_category: to.category,
        });
    }
    if !value.is_finite() {
        return Err(ConversionError::NonFiniteValue { value });
    }

    let result = to.from_base(from.to_base(value));
    if !result.is_finite() {
        return Err(ConversionError::NonFiniteResult {
            value,
            from: from.id.to_owned(),
            to: to.id.to_owned(),
        });
    }

    Ok(RoundingPolicy::DEFAULT.apply(result))
}

/// Parse user-entered text and convert it, with a display summary.
///
/// # Errors
///
/// Returns [`Error::InvalidNumber`] when `input` does not parse as a number
/// and [`Error::Conversion`] when the converter rejects the request.
pub fn convert_input(input: &str, from_unit: &str, to_unit: &str) -> Result<Conversion> {
    let input = input.trim();
    let value: f64 = input.parse().map_err(|_| Error::InvalidNumber {
        input: input.to_owned(),
    })?;

    let (from, to) = resolve_pair(from_unit, to_unit)?;
    let converted = convert_between(value, from, to)?;

    Ok(Conversion {
        value: converted,
        summary: describe(input, value, from, converted, to),
    })
}

/// Render `1 Kilometer = 1000 Meters` style summaries.
///
/// `input` is echoed as typed; `value` is its parsed form and picks the
/// singular or plural name.
#[must_use]
pub fn describe(input: &str, value: f64, from: &Unit, result: f64, to: &Unit) -> String {
    format!(
        "{input} {} = {} {}",
        from.display_name(value),
        display_number(result),
        to.display_name(result)
    )
}

/// Every category with its display label.
#[must_use]
pub fn categories() -> Vec<UnitCategoryInfo> {
    UnitCategory::ALL
        .into_iter()
        .map(UnitCategoryInfo::from)
        .collect()
}

fn resolve_pair(
    from_unit: &str,
    to_unit: &str,
) -> std::result::Result<(&'static Unit, &'static Unit), ConversionError> {
    let from = find_unit(from_unit).ok_or_else(|| ConversionError::UnknownUnit {
        id: from_unit.to_owned(),
    })?;
    let to = find_unit(to_unit).ok_or_else(|| ConversionError::UnknownUnit {
        id: to_unit.to_owned(),
    })?;
    Ok((from, to))
}
