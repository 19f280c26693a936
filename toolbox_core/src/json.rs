//! JSON validation and pretty-printing.

use serde_json::Value;

use crate::{Error, Result};

/// Validate `input` as JSON and pretty-print it with two-space indentation.
///
/// Object keys keep their original order.
///
/// # Errors
///
/// Returns [`Error::EmptyInput`] for blank input and [`Error::InvalidJson`]
/// when parsing fails.
pub fn format_json(input: &str) -> Result<String> {
    if input.trim().is_empty() {
        return Err(Error::EmptyInput);
    }

    let value: Value =
        serde_json::from_str(input).map_err(|source| Error::InvalidJson { source })?;
    serde_json::to_string_pretty(&value).map_err(|source| Error::InvalidJson { source })
}
