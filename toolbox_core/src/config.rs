//! Settings loaded from built-in defaults, an optional TOML file and
//! `TOOLBOX__*` environment variables, in that order of precedence.

use ::config::{Config, Environment, File, FileFormat};
use camino::Utf8Path;
use serde::Deserialize;

use crate::{Error, Result};

/// Default per-side line limit for text comparisons.
pub const DEFAULT_MAX_LINES: usize = 5_000;

/// Default log filter when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Top-level settings for a session.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    /// Text comparison limits.
    pub diff: DiffSettings,
    /// Logging configuration.
    pub telemetry: TelemetrySettings,
}

/// Limits applied before building the LCS table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DiffSettings {
    /// Maximum number of lines accepted on either side of a comparison.
    pub max_lines: usize,
}

/// Log subscriber configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TelemetrySettings {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            diff: DiffSettings {
                max_lines: DEFAULT_MAX_LINES,
            },
            telemetry: TelemetrySettings {
                filter: DEFAULT_LOG_FILTER.to_owned(),
            },
        }
    }
}

impl Settings {
    /// Load settings, optionally layering a TOML file under the environment.
    ///
    /// Environment variables use the `TOOLBOX` prefix and `__` as separator,
    /// e.g. `TOOLBOX__DIFF__MAX_LINES=2000`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when the file cannot be read or a value has
    /// the wrong type, and [`Error::InvalidSetting`] when validation fails.
    pub fn load(config_file: Option<&Utf8Path>) -> Result<Self> {
        let mut builder = Config::builder()
            .set_default("diff.max_lines", DEFAULT_MAX_LINES.to_string())?
            .set_default("telemetry.filter", DEFAULT_LOG_FILTER)?;

        if let Some(path) = config_file {
            builder = builder.add_source(File::new(path.as_str(), FileFormat::Toml));
        }

        let settings: Self = builder
            .add_source(
                Environment::with_prefix("TOOLBOX")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        settings.validate()?;
        Ok(settings)
    }

    /// Check value ranges that the type system cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSetting`] naming the first offending key.
    pub fn validate(&self) -> Result<&Self> {
        if self.diff.max_lines == 0 {
            return Err(Error::InvalidSetting {
                key: "diff.max_lines",
                value: "0".to_owned(),
            });
        }

        if self.telemetry.filter.trim().is_empty() {
            return Err(Error::InvalidSetting {
                key: "telemetry.filter",
                value: self.telemetry.filter.clone(),
            });
        }

        Ok(self)
    }
}
