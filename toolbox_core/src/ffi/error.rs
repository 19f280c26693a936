use thiserror::Error;

use crate::units::ConversionError;
use crate::Error;

/// Errors surfaced through the `UniFFI` bindings.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A text exceeds the configured comparison limit.
    #[error("text is too large to compare")]
    InputTooLarge,
    /// Input was blank.
    #[error("input is empty")]
    EmptyInput,
    /// Input is not valid JSON.
    #[error("invalid JSON")]
    InvalidJson,
    /// The calculator divided by zero.
    #[error("division by zero")]
    DivisionByZero,
    /// Input is not a number.
    #[error("not a number")]
    InvalidNumber,
    /// A unit id is not in the catalog.
    #[error("unknown unit")]
    UnknownUnit,
    /// The units belong to different categories.
    #[error("units cannot be converted into one another")]
    IncompatibleUnits,
    /// The value or result is NaN or infinite.
    #[error("value is not a finite number")]
    NonFiniteValue,
    /// Settings could not be loaded.
    #[error("configuration error")]
    Config,
}

impl From<Error> for CoreError {
    fn from(error: Error) -> Self {
        match error {
            Error::InputTooLarge { .. } => Self::InputTooLarge,
            Error::EmptyInput => Self::EmptyInput,
            Error::InvalidJson { .. } => Self::InvalidJson,
            Error::DivisionByZero => Self::DivisionByZero,
            Error::InvalidNumber { .. } => Self::InvalidNumber,
            Error::Conversion { source } => Self::from(source),
            Error::Config { .. } | Error::InvalidSetting { .. } => Self::Config,
        }
    }
}

impl From<ConversionError> for CoreError {
    fn from(error: ConversionError) -> Self {
        match error {
            ConversionError::UnknownUnit { .. } => Self::UnknownUnit,
            ConversionError::IncompatibleUnits { .. } => Self::IncompatibleUnits,
            ConversionError::NonFiniteValue { .. } | ConversionError::NonFiniteResult { .. } => {
                Self::NonFiniteValue
            }
        }
    }
}
