use crate::config::LogFormat;
use crate::error::{Result, RuntimeError};
use tracing_subscriber::EnvFilter;

/// Install the global `tracing` subscriber.
///
/// `RUST_LOG` wins over `level` when set.
///
/// # Errors
///
/// Returns an error if the filter directive is invalid or a global subscriber is already set.
pub fn init(level: &str, format: LogFormat) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .map_err(|e| RuntimeError::Logging(format!("invalid log level '{level}': {e}")))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    let installed = match format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
    installed.map_err(|e| RuntimeError::Logging(e.to_string()))
}
