//! tracing subscriber setup.

use tracing_subscriber::EnvFilter;

use crate::error::ConfigError;

/// Install the global fmt subscriber filtered by `directives`.
pub fn init(directives: &str) -> Result<(), ConfigError> {
    let filter = EnvFilter::try_new(directives).map_err(|e| ConfigError::InvalidLogFilter {
        value: directives.to_owned(),
        message: e.to_string(),
    })?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .map_err(|e| ConfigError::Telemetry(e.to_string()))
}
