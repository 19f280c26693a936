//! The immutable unit catalog.

use super::Transform::{self, Affine, Identity, Scale};
use crate::UnitCategory::{self, Area, Length, Temperature, Volume, Weight};
use crate::UnitInfo;

/// A unit the converter knows about.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Unit {
    /// Stable short code used for lookups.
    pub id: &'static str,
    /// Singular display name.
    pub name: &'static str,
    /// Plural display name, if the unit has one.
    pub plural_name: Option<&'static str>,
    /// Category the unit converts within.
    pub category: UnitCategory,
    /// Mapping onto the category's base unit.
    pub transform: Transform,
}

impl Unit {
    const fn new(
        id: &'static str,
        name: &'static str,
        plural_name: &'static str,
        category: UnitCategory,
        transform: Transform,
    ) -> Self {
        Self {
            id,
            name,
            plural_name: Some(plural_name),
            category,
            transform,
        }
    }

    const fn uncountable(
        id: &'static str,
        name: &'static str,
        category: UnitCategory,
        transform: Transform,
    ) -> Self {
        Self {
            id,
            name,
            plural_name: None,
            category,
            transform,
        }
    }

    /// Convert a value in this unit to the category's base unit.
    #[must_use]
    pub fn to_base(&self, value: f64) -> f64 {
        self.transform.to_base(value)
    }

    /// Convert a value in the category's base unit to this unit.
    #[must_use]
    pub fn from_base(&self, value: f64) -> f64 {
        self.transform.from_base(value)
    }

    /// Name to show next to `quantity`: singular for exactly one, plural otherwise.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn display_name(&self, quantity: f64) -> &'static str {
        if quantity == 1.0 {
            return self.name;
        }
        self.plural_name.unwrap_or(self.name)
    }

    /// Serializable view for UI pickers.
    #[must_use]
    pub fn info(&self) -> UnitInfo {
        UnitInfo {
            id: self.id.to_owned(),
            name: self.name.to_owned(),
            plural_name: self.plural_name.map(str::to_owned),
            category: self.category,
        }
    }
}

/// Every unit, grouped by category in display order.
pub static UNITS: &[Unit] = &[
    Unit::new("m", "Meter", "Meters", Length, Identity),
    Unit::new("km", "Kilometer", "Kilometers", Length, Scale(1000.0)),
    Unit::new("cm", "Centimeter", "Centimeters", Length, Scale(0.01)),
    Unit::new("mm", "Millimeter", "Millimeters", Length, Scale(0.001)),
    Unit::new("mi", "Mile", "Miles", Length, Scale(1609.34)),
    Unit::new("yd", "Yard", "Yards", Length, Scale(0.9144)),
    Unit::new("ft", "Foot", "Feet", Length, Scale(0.3048)),
    Unit::new("in", "Inch", "Inches", Length, Scale(0.0254)),
    Unit::new("nm", "Nautical Mile", "Nautical Miles", Length, Scale(1852.0)),
    Unit::new("kg", "Kilogram", "Kilograms", Weight, Identity),
    Unit::new("g", "Gram", "Grams", Weight, Scale(0.001)),
    Unit::new("mg", "Milligram", "Milligrams", Weight, Scale(0.000_001)),
    Unit::new("lb", "Pound", "Pounds", Weight, Scale(0.453_592_37)),
    Unit::new("oz", "Ounce", "Ounces", Weight, Scale(0.028_349_523_1)),
    Unit::new("st", "Stone", "Stones", Weight, Scale(6.35029)),
    Unit::new("t", "Metric Ton", "Metric Tons", Weight, Scale(1000.0)),
    Unit::uncountable("c", "Celsius", Temperature, Identity),
    Unit::uncountable(
        "f",
        "Fahrenheit",
        Temperature,
        Affine {
            offset: -32.0,
            scale: 5.0 / 9.0,
        },
    ),
    Unit::uncountable(
        "k",
        "Kelvin",
        Temperature,
        Affine {
            offset: -273.15,
            scale: 1.0,
        },
    ),
    Unit::new("l", "Liter", "Liters", Volume, Identity),
    Unit::new("ml", "Milliliter", "Milliliters", Volume, Scale(0.001)),
    Unit::new("gal_us", "US Gallon", "US Gallons", Volume, Scale(3.78541)),
    Unit::new("qt_us", "US Quart", "US Quarts", Volume, Scale(0.946_353)),
    Unit::new("pt_us", "US Pint", "US Pints", Volume, Scale(0.473_176)),
    Unit::new("cup_us", "US Cup", "US Cups", Volume, Scale(0.236_588)),
    Unit::new(
        "floz_us",
        "US Fluid Ounce",
        "US Fluid Ounces",
        Volume,
        Scale(0.029_573_5),
    ),
    Unit::new("m3", "Cubic Meter", "Cubic Meters", Volume, Scale(1000.0)),
    Unit::new("sqm", "Square Meter", "Square Meters", Area, Identity),
    Unit::new(
        "sqkm",
        "Square Kilometer",
        "Square Kilometers",
        Area,
        Scale(1e6),
    ),
    Unit::new("sqmi", "Square Mile", "Square Miles", Area, Scale(2.59e6)),
    Unit::new("acre", "Acre", "Acres", Area, Scale(4046.86)),
    Unit::new("ha", "Hectare", "Hectares", Area, Scale(10_000.0)),
    Unit::new("sqft", "Square Foot", "Square Feet", Area, Scale(0.092_903)),
    Unit::new("sqyd", "Square Yard", "Square Yards", Area, Scale(0.836_127)),
];

/// Look up a unit by its short code.
#[must_use]
pub fn find_unit(id: &str) -> Option<&'static Unit> {
    UNITS.iter().find(|unit| unit.id == id)
}

/// Units belonging to `category`, in catalog order.
pub fn units_in_category(category: UnitCategory) -> impl Iterator<Item = &'static Unit> {
    UNITS.iter().filter(move |unit| unit.category == category)
}
