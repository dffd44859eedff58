//! Logging setup with optional file rotation.

use crate::lifecycle::{LaunchError, LaunchResult};

use dd_config::Config;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{
    EnvFilter, fmt, prelude::__tracing_subscriber_SubscriberExt, util::SubscriberInitExt,
};

/// Rotated log files kept on disk.
const MAX_LOG_FILES: usize = 7;

/// Setup console logging, plus a rotating file when `logging.file` is set.
///
/// # Log Layers
/// - Console: human-readable, colored unless disabled
/// - File: plain text, daily rotation, 7 files kept
///
/// `RUST_LOG` overrides the configured level.
pub fn setup_logging(config: &Config) -> LaunchResult<()> {
    let console_layer = fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_ansi(config.logging.colored);

    let file_layer = match &config.logging.file {
        Some(file_name) => {
            let logs_dir = config
                .log_dir()
                .ok_or_else(|| LaunchError::logging("cannot determine log directory"))?;
            std::fs::create_dir_all(&logs_dir)?;

            let file_appender = RollingFileAppender::builder()
                .rotation(Rotation::DAILY)
                .max_log_files(MAX_LOG_FILES)
                .filename_prefix(file_name.as_str())
                .build(&logs_dir)
                .map_err(|e| LaunchError::logging(e.to_string()))?;

            Some(
                fmt::layer()
                    .with_target(true)
                    .with_level(true)
                    .with_ansi(false)
                    .with_writer(file_appender),
            )
        }
        None => None,
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.logging.level.0.to_string()));

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| LaunchError::logging(e.to_string()))?;

    Ok(())
}
