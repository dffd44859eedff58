use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("No local port available: {message} {location}")]
    ResourceUnavailable {
        message: String,
        location: ErrorLocation,
    },

    #[error("Server failed to start: {message} {location}")]
    StartupFailure {
        message: String,
        location: ErrorLocation,
    },

    #[error("Server failed to become ready within {timeout_secs}s {location}")]
    StartupTimeout {
        timeout_secs: u64,
        location: ErrorLocation,
    },

    #[error("Failed to spawn server process {program}: {source} {location}")]
    ProcessSpawn {
        program: String,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Server process exited with code {code:?} {location}")]
    ProcessExited {
        code: Option<i32>,
        location: ErrorLocation,
    },

    #[error("Invalid server command: {message} {location}")]
    InvalidCommand {
        message: String,
        location: ErrorLocation,
    },

    #[error("Bundled server error: {source} {location}")]
    Serve {
        #[source]
        source: dd_server::ServeError,
        location: ErrorLocation,
    },

    #[error("HTTP client error: {source} {location}")]
    Http {
        #[source]
        source: reqwest::Error,
        location: ErrorLocation,
    },

    #[error("IO error: {source} {location}")]
    Io {
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },
}

impl ServerError {
    /// Create a startup failure error
    #[track_caller]
    pub fn startup_failure<S: Into<String>>(message: S) -> Self {
        Self::StartupFailure {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Create a startup timeout error
    #[track_caller]
    pub fn startup_timeout(timeout_secs: u64) -> Self {
        Self::StartupTimeout {
            timeout_secs,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Message without the source location, for one-line user diagnostics.
    pub fn summary(&self) -> String {
        match self {
            Self::ResourceUnavailable { message, .. } => {
                format!("No local port available: {message}")
            }
            Self::StartupFailure { message, .. } => format!("Server failed to start: {message}"),
            Self::StartupTimeout { timeout_secs, .. } => {
                format!("Server failed to become ready within {timeout_secs}s")
            }
            Self::ProcessSpawn {
                program, source, ..
            } => format!("Failed to spawn server process {program}: {source}"),
            Self::ProcessExited { code, .. } => match code {
                Some(code) => format!("Server process exited with code {code}"),
                None => "Server process was terminated by a signal".into(),
            },
            Self::InvalidCommand { message, .. } => format!("Invalid server command: {message}"),
            Self::Serve { source, .. } => format!("Bundled server error: {source}"),
            Self::Http { source, .. } => format!("HTTP client error: {source}"),
            Self::Io { source, .. } => format!("IO error: {source}"),
        }
    }
}

impl From<std::io::Error> for ServerError {
    #[track_caller]
    fn from(source: std::io::Error) -> Self {
        Self::Io {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::Error> for ServerError {
    #[track_caller]
    fn from(source: reqwest::Error) -> Self {
        Self::Http {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<dd_server::ServeError> for ServerError {
    #[track_caller]
    fn from(source: dd_server::ServeError) -> Self {
        Self::Serve {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ServerError>;
