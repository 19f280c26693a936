use serde::{Deserialize, Serialize};

/// Family of units that can be converted into one another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitCategory {
    /// Base unit: meter.
    Length,
    /// Base unit: kilogram.
    Weight,
    /// Base unit: degree Celsius.
    Temperature,
    /// Base unit: liter.
    Volume,
    /// Base unit: square meter.
    Area,
}

impl UnitCategory {
    /// Every category, in display order.
    pub const ALL: [Self; 5] = [
        Self::Length,
        Self::Weight,
        Self::Temperature,
        Self::Volume,
        Self::Area,
    ];

    /// Display label for category pickers.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Length => "Length",
            Self::Weight => "Weight/Mass",
            Self::Temperature => "Temperature",
            Self::Volume => "Volume",
            Self::Area => "Area",
        }
    }
}

/// A category paired with its display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitCategoryInfo {
    /// Category identifier.
    pub category: UnitCategory,
    /// Human-friendly label.
    pub label: String,
}

impl From<UnitCategory> for UnitCategoryInfo {
    fn from(category: UnitCategory) -> Self {
        Self {
            category,
            label: category.label().to_owned(),
        }
    }
}

/// Serializable description of a catalog unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitInfo {
    /// Stable short code used for lookups (e.g. `km`).
    pub id: String,
    /// Singular display name.
    pub name: String,
    /// Plural display name, when it differs from the singular.
    #[serde(default)]
    pub plural_name: Option<String>,
    /// Category the unit belongs to.
    pub category: UnitCategory,
}

/// Result of converting user-entered text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversion {
    /// Converted value after rounding.
    pub value: f64,
    /// Human summary such as `1 Kilometer = 1000 Meters`.
    pub summary: String,
}
