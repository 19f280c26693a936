//! Shared Toolbox data models consumed by the core engines and UI bindings.
//!
//! The structures in this crate are designed to be:
//! - serializable via `serde` for persistence and transport
//! - restricted to FFI-friendly primitives for Swift bridging

pub mod calculator;
pub mod catalog;
pub mod diff;
pub mod text;
pub mod units;

pub use calculator::*;
pub use catalog::*;
pub use diff::*;
pub use text::*;
pub use units::*;
