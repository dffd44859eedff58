use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PresentationError {
    #[error("Native window unavailable: {reason} {location}")]
    Unavailable {
        reason: String,
        location: ErrorLocation,
    },

    #[error("Native window failed: {message} {location}")]
    WindowFailed {
        message: String,
        location: ErrorLocation,
    },

    #[error("Failed to open browser: {source} {location}")]
    BrowserFailed {
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },
}

impl PresentationError {
    #[track_caller]
    pub fn unavailable<S: Into<String>>(reason: S) -> Self {
        Self::Unavailable {
            reason: reason.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn window_failed<S: Into<String>>(message: S) -> Self {
        Self::WindowFailed {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
