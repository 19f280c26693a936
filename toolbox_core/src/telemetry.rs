//! Log subscriber setup for embedding applications.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::TelemetrySettings;
use crate::{Error, Result};

/// Install a global `fmt` subscriber.
///
/// `RUST_LOG` takes precedence over the configured filter. Returns `false`
/// when a global subscriber was already installed, in which case the call
/// has no effect.
///
/// # Errors
///
/// Returns [`Error::InvalidSetting`] when the configured filter does not
/// parse.
pub fn init(settings: &TelemetrySettings) -> Result<bool> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => build_filter(&settings.filter)?,
    };

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false))
        .try_init()
        .is_ok();

    Ok(installed)
}

fn build_filter(directives: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(directives).map_err(|_| Error::InvalidSetting {
        key: "telemetry.filter",
        value: directives.to_owned(),
    })
}
