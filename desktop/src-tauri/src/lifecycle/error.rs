use crate::server::ServerError;

use std::panic::Location;
use std::path::PathBuf;

use dd_config::ConfigError;
use error_location::ErrorLocation;
use thiserror::Error;

/// Exit status for every fatal launch error.
pub const EXIT_FAILURE: u8 = 1;

#[derive(Error, Debug)]
pub enum LaunchError {
    #[error("No local port available: {message} {location}")]
    ResourceUnavailable {
        message: String,
        location: ErrorLocation,
    },

    #[error("Server failed to start: {message} {location}")]
    ServerStartupFailure {
        message: String,
        location: ErrorLocation,
    },

    #[error("Server did not become ready within {timeout_secs}s {location}")]
    ServerStartupTimeout {
        timeout_secs: u64,
        location: ErrorLocation,
    },

    #[error("Dashboard assets not found (searched: {}) {location}", display_paths(.searched))]
    AssetsNotFound {
        searched: Vec<PathBuf>,
        location: ErrorLocation,
    },

    #[error("Configuration error: {source} {location}")]
    Config {
        #[source]
        source: ConfigError,
        location: ErrorLocation,
    },

    #[error("Logging setup failed: {message} {location}")]
    Logging {
        message: String,
        location: ErrorLocation,
    },

    #[error("Failed to build async runtime: {source} {location}")]
    Runtime {
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("IO error: {source} {location}")]
    Io {
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|path| path.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

impl LaunchError {
    #[track_caller]
    pub fn logging<S: Into<String>>(message: S) -> Self {
        Self::Logging {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn exit_code(&self) -> u8 {
        EXIT_FAILURE
    }

    /// One-line message for stderr, without the source location.
    pub fn summary(&self) -> String {
        match self {
            Self::ResourceUnavailable { message, .. } => {
                format!("No local port available: {message}")
            }
            Self::ServerStartupFailure { message, .. } => {
                format!("Server failed to start: {message}")
            }
            Self::ServerStartupTimeout { timeout_secs, .. } => {
                format!("Server did not become ready within {timeout_secs}s")
            }
            Self::AssetsNotFound { searched, .. } => format!(
                "Dashboard assets not found (searched: {})",
                display_paths(searched)
            ),
            Self::Config { source, .. } => format!("Configuration error: {}", source.summary()),
            Self::Logging { message, .. } => format!("Logging setup failed: {message}"),
            Self::Runtime { source, .. } => format!("Failed to build async runtime: {source}"),
            Self::Io { source, .. } => format!("IO error: {source}"),
        }
    }

    pub fn recovery_hint(&self) -> &'static str {
        match self {
            Self::ResourceUnavailable { .. } => {
                "Check that the loopback interface is up and local ports are not exhausted"
            }
            Self::ServerStartupFailure { .. } => {
                "Check the log for the server error; set server.port = 0 if the port is taken"
            }
            Self::ServerStartupTimeout { .. } => {
                "Raise readiness.timeout_secs or check that the server binds the given port"
            }
            Self::AssetsNotFound { .. } => {
                "Set DD_ASSETS_DIR or assets.dir to the dashboard asset directory"
            }
            Self::Config { .. } => "Fix or remove the config file, or unset the DD_* override",
            Self::Logging { .. } => "Check that logging.dir is writable",
            Self::Runtime { .. } | Self::Io { .. } => "Check system resources and retry",
        }
    }
}

impl From<ServerError> for LaunchError {
    #[track_caller]
    fn from(error: ServerError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match error {
            ServerError::ResourceUnavailable { message, .. } => {
                Self::ResourceUnavailable { message, location }
            }
            ServerError::StartupTimeout { timeout_secs, .. } => Self::ServerStartupTimeout {
                timeout_secs,
                location,
            },
            ServerError::StartupFailure { message, .. } => {
                Self::ServerStartupFailure { message, location }
            }
            other => Self::ServerStartupFailure {
                message: other.summary(),
                location,
            },
        }
    }
}

impl From<ConfigError> for LaunchError {
    #[track_caller]
    fn from(source: ConfigError) -> Self {
        Self::Config {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<std::io::Error> for LaunchError {
    #[track_caller]
    fn from(source: std::io::Error) -> Self {
        Self::Io {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, LaunchError>;
