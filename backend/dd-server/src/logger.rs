use crate::{ServeError, ServeResult};

use tracing::info;
use tracing_subscriber::EnvFilter;

/// Initialize console logging for the standalone server.
///
/// `RUST_LOG` wins over the configured level when set.
pub fn initialize(log_level: dd_config::LogLevel, colored: bool) -> ServeResult<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.0.to_string()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_ansi(colored)
        .try_init()
        .map_err(|e| ServeError::Logger {
            message: format!("Failed to initialize logger: {e}"),
        })?;

    info!("Logger initialized: level={}", log_level.0);
    Ok(())
}
