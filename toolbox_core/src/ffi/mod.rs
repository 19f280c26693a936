mod error;
mod session;

pub use error::CoreError;
pub use session::{open, ToolboxSession};

#[allow(
    clippy::doc_markdown,
    clippy::missing_const_for_fn,
    clippy::missing_errors_doc,
    clippy::empty_line_after_doc_comments,
    clippy::missing_safety_doc
)]
mod scaffolding {
    use super::{open, CoreError, ToolboxSession};
    use crate::{
        Calculation, CalculatorStep, CaseStyle, Conversion, DiffLine, DiffLineKind, DiffStats,
        Operator, TextDiff, ToolDescriptor, UnitCategory, UnitCategoryInfo, UnitInfo,
    };

    uniffi::include_scaffolding!("toolbox_core");
}

pub use scaffolding::*;
