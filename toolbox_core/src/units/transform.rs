//! Numeric transforms between a unit and its category's base unit.

/// How a value in some unit maps onto the category's base unit.
///
/// `from_base` is always derived from the same parameters as `to_base`, so
/// the two directions cannot drift apart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transform {
    /// The unit is the category's base unit.
    Identity,
    /// `base = value * factor`.
    Scale(f64),
    /// `base = (value + offset) * scale`.
    Affine {
        /// Added to the value before scaling.
        offset: f64,
        /// Applied after the offset.
        scale: f64,
    },
}

impl Transform {
    /// Convert a value in this unit to the base unit.
    #[must_use]
    pub fn to_base(self, value: f64) -> f64 {
        match self {
            Self::Identity => value,
            Self::Scale(factor) => value * factor,
            Self::Affine { offset, scale } => (value + offset) * scale,
        }
    }

    /// Convert a value in the base unit to this unit.
    #[must_use]
    pub fn from_base(self, value: f64) -> f64 {
        match self {
            Self::Identity => value,
            Self::Scale(factor) => value / factor,
            Self::Affine { offset, scale } => value / scale - offset,
        }
    }

    /// Whether this transform leaves values untouched.
    #[must_use]
    pub const fn is_identity(self) -> bool {
        matches!(self, Self::Identity)
    }
}
