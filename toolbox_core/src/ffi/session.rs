use std::sync::Arc;

use camino::Utf8Path;
use tracing::{debug, info, warn};

use crate::{
    calculator, case, catalog,
    config::Settings,
    diff::{self, DiffEngine},
    json, telemetry, units, Calculation, CalculatorStep, CaseStyle, Conversion, DiffLine,
    TextDiff, ToolDescriptor, UnitCategory, UnitCategoryInfo, UnitInfo,
};

use super::CoreError;

type Result<T> = std::result::Result<T, CoreError>;

/// High-level handle exposed to Swift via `UniFFI`.
#[derive(Debug)]
pub struct ToolboxSession {
    settings: Settings,
    diff_engine: DiffEngine,
}

impl ToolboxSession {
    /// Construct a session from already loaded settings.
    #[must_use]
    pub fn with_settings(settings: Settings) -> Self {
        let diff_engine = DiffEngine::with_max_lines(settings.diff.max_lines);
        Self {
            settings,
            diff_engine,
        }
    }

    /// Settings the session was opened with.
    #[must_use]
    pub const fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Compare two texts line by line.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InputTooLarge`] when either text exceeds the
    /// configured line limit.
    #[allow(clippy::needless_pass_by_value)]
    pub fn compare_texts(&self, original: String, changed: String) -> Result<TextDiff> {
        debug!(
            original_bytes = original.len(),
            changed_bytes = changed.len(),
            "comparing texts"
        );

        let diff = self
            .diff_engine
            .compare(&original, &changed)
            .inspect_err(|err| warn!(error = %err, "text comparison rejected"))?;

        debug!(
            added = diff.stats.added,
            removed = diff.stats.removed,
            common = diff.stats.common,
            "texts compared"
        );
        Ok(diff)
    }

    /// Render a listing with `-`/`+` gutter markers.
    #[must_use]
    #[allow(clippy::needless_pass_by_value)]
    pub fn render_diff(&self, lines: Vec<DiffLine>) -> String {
        diff::render(&lines)
    }

    /// Convert a value between two units, `None` when the request is invalid.
    #[must_use]
    #[allow(clippy::needless_pass_by_value)]
    pub fn convert_units(&self, value: f64, from_unit: String, to_unit: String) -> Option<f64> {
        match units::try_convert(value, &from_unit, &to_unit) {
            Ok(result) => {
                debug!(value, from = %from_unit, to = %to_unit, result, "converted units");
                Some(result)
            }
            Err(err) => {
                warn!(error = %err, "unit conversion rejected");
                None
            }
        }
    }

    /// Parse user-entered text and convert it.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidNumber`] for unparsable input and the
    /// matching conversion error otherwise.
    #[allow(clippy::needless_pass_by_value)]
    pub fn convert_input(
        &self,
        input: String,
        from_unit: String,
        to_unit: String,
    ) -> Result<Conversion> {
        let conversion = units::convert_input(&input, &from_unit, &to_unit)
            .inspect_err(|err| warn!(error = %err, "unit input rejected"))?;
        debug!(summary = %conversion.summary, "converted input");
        Ok(conversion)
    }

    /// Every unit category with its display label.
    #[must_use]
    pub fn unit_categories(&self) -> Vec<UnitCategoryInfo> {
        units::categories()
    }

    /// Units available in `category`, in display order.
    #[must_use]
    pub fn units_in_category(&self, category: UnitCategory) -> Vec<UnitInfo> {
        units::units_in_category(category)
            .map(units::Unit::info)
            .collect()
    }

    /// Convert `text` to the requested case style.
    #[must_use]
    #[allow(clippy::needless_pass_by_value)]
    pub fn convert_case(&self, text: String, style: CaseStyle) -> String {
        debug!(bytes = text.len(), ?style, "converting case");
        case::convert_case(&text, style)
    }

    /// Validate and pretty-print JSON.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::EmptyInput`] or [`CoreError::InvalidJson`].
    #[allow(clippy::needless_pass_by_value)]
    pub fn format_json(&self, input: String) -> Result<String> {
        let formatted = json::format_json(&input)
            .inspect_err(|err| warn!(error = %err, "json formatting rejected"))?;
        Ok(formatted)
    }

    /// Evaluate a keypad chain such as `2 + 3 * 4`, left to right.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::DivisionByZero`] when any step divides by zero.
    #[allow(clippy::needless_pass_by_value)]
    pub fn calculate(&self, first: f64, steps: Vec<CalculatorStep>) -> Result<Calculation> {
        let calculation = calculator::evaluate(first, &steps)
            .inspect_err(|err| warn!(error = %err, "calculation rejected"))?;
        debug!(steps = steps.len(), display = %calculation.display, "calculated");
        Ok(calculation)
    }

    /// The app's tool directory.
    #[must_use]
    pub fn tool_catalog(&self) -> Vec<ToolDescriptor> {
        catalog::tool_catalog()
    }

    /// Look up one tool by id.
    #[must_use]
    #[allow(clippy::needless_pass_by_value)]
    pub fn find_tool(&self, id: String) -> Option<ToolDescriptor> {
        catalog::find_tool(&id)
    }
}

/// Open a session via the `UniFFI` namespace function.
///
/// # Errors
///
/// Returns [`CoreError::Config`] when settings cannot be loaded or logging
/// cannot be configured.
#[allow(clippy::needless_pass_by_value)]
pub fn open(config_path: Option<String>) -> Result<Arc<ToolboxSession>> {
    let settings = Settings::load(config_path.as_deref().map(Utf8Path::new))?;
    telemetry::init(&settings.telemetry)?;

    info!(
        max_lines = settings.diff.max_lines,
        config = config_path.as_deref().unwrap_or("<env>"),
        "toolbox session opened"
    );
    Ok(Arc::new(ToolboxSession::with_settings(settings)))
}
