mod assets_config;
mod config;
mod error;
mod log_level;
mod logging_config;
mod readiness_config;
mod server_config;
mod window_config;

#[cfg(test)]
mod tests;

pub use assets_config::AssetsConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use readiness_config::ReadinessConfig;
pub use server_config::ServerConfig;
pub use window_config::WindowConfig;

use tracing::level_filters::LevelFilter;

pub const CONFIG_FILENAME: &str = "config.toml";
pub const CONFIG_DIR_NAME: &str = "dashdesk";

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const LOCALHOST: &str = "localhost";
/// Port 0 asks the OS for an ephemeral port.
pub const DEFAULT_PORT: u16 = 0;
pub const MIN_PORT: u16 = 1024;

pub const DEFAULT_READY_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 200;
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 1000;

pub const DEFAULT_WINDOW_ENABLED: bool = true;
pub const DEFAULT_WINDOW_TITLE: &str = "Penguins Dashboard";
pub const DEFAULT_WINDOW_WIDTH: u32 = 1200;
pub const DEFAULT_WINDOW_HEIGHT: u32 = 800;

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::INFO;
const DEFAULT_LOG_DIRECTORY: &str = "logs";
const DEFAULT_LOG_COLORED: bool = true;
