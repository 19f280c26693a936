//! Core library for the Toolbox utilities app.
//!
//! The crate is layered around three primary responsibilities:
//! - the line-diff and unit-conversion engines
//! - small tools (case conversion, JSON formatting, calculator) and the tool catalog
//! - the `UniFFI` session the UI shell binds to

#![warn(
    clippy::all,
    clippy::cargo,
    clippy::nursery,
    clippy::pedantic,
    missing_docs
)]
#![cfg_attr(
    not(test),
    deny(
        clippy::dbg_macro,
        clippy::expect_used,
        clippy::panic,
        clippy::print_stderr,
        clippy::print_stdout,
        clippy::todo,
        clippy::unwrap_used
    )
)]

/// Keypad calculator arithmetic.
pub mod calculator;
/// Static directory of the app's tools.
pub mod catalog;
/// Case conversion for free-form text.
pub mod case;
/// Layered settings loading.
pub mod config;
/// LCS-based line diffing.
pub mod diff;
/// Public FFI surface.
pub mod ffi;
/// JSON validation and pretty-printing.
pub mod json;
/// Decimal rounding and number display.
pub mod number;
/// Log subscriber setup.
pub mod telemetry;
/// Unit catalog and conversion.
pub mod units;

pub use toolbox_api as api;
pub use toolbox_api::{
    Calculation, CalculatorStep, CaseStyle, Conversion, DiffLine, DiffLineKind, DiffStats,
    Operator, TextDiff, ToolDescriptor, UnitCategory, UnitCategoryInfo, UnitInfo,
};

// Generated scaffolding resolves the tag at the crate root.
use ffi::UniFfiTag;

pub use case::convert_case;
pub use catalog::tool_catalog;
pub use diff::{diff_lines, DiffEngine};
pub use json::format_json;
pub use units::{convert_units, ConversionError};

/// Common result type for the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the core library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// One side of a comparison exceeds the configured line limit.
    #[error("{side} text has {lines} lines, more than the limit of {limit}")]
    InputTooLarge {
        /// Which text was rejected (`original` or `changed`).
        side: &'static str,
        /// Number of lines in the rejected text.
        lines: usize,
        /// Configured per-side limit.
        limit: usize,
    },
    /// Input was empty or only whitespace.
    #[error("input is empty")]
    EmptyInput,
    /// Input could not be parsed as JSON.
    #[error("invalid JSON: {source}")]
    InvalidJson {
        /// Parser error with line and column information.
        #[source]
        source: serde_json::Error,
    },
    /// The calculator was asked to divide by zero.
    #[error("division by zero")]
    DivisionByZero,
    /// Input could not be parsed as a number.
    #[error("not a number: {input:?}")]
    InvalidNumber {
        /// Text that failed to parse.
        input: String,
    },
    /// Unit conversion was rejected.
    #[error("conversion failed: {source}")]
    Conversion {
        /// Reason the conversion engine returned no value.
        #[from]
        source: ConversionError,
    },
    /// Settings could not be loaded or deserialized.
    #[error("configuration error: {source}")]
    Config {
        /// Original error from the `config` crate.
        #[from]
        source: ::config::ConfigError,
    },
    /// A setting holds a value outside its allowed range.
    #[error("invalid setting {key}: {value}")]
    InvalidSetting {
        /// Dotted key of the offending setting.
        key: &'static str,
        /// Rejected value.
        value: String,
    },
}
