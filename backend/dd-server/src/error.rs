use std::panic::Location;
use std::path::PathBuf;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServeError {
    #[error("Asset directory not found at {path} {location}")]
    AssetsMissing {
        path: PathBuf,
        location: ErrorLocation,
    },

    #[error("Failed to bind {addr}: {source} {location}")]
    Bind {
        addr: String,
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

    #[error("Config error: {0}")]
    Config(#[from] dd_config::ConfigError),

    #[error("Logger error: {message}")]
    Logger { message: String },
}

impl From<std::io::Error> for ServeError {
    #[track_caller]
    fn from(source: std::io::Error) -> Self {
        Self::Io {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ServeError>;
