use crate::presentation::{PresentationError, PresentationMode, PresentationStrategy};

use std::panic::Location;

use error_location::ErrorLocation;
use tracing::info;

/// Hands the URL to the default system browser and returns immediately.
#[derive(Debug, Default)]
pub struct SystemBrowser;

impl PresentationStrategy for SystemBrowser {
    fn mode(&self) -> PresentationMode {
        PresentationMode::Browser
    }

    fn present(&mut self, url: &str) -> Result<(), PresentationError> {
        info!("Opening {url} in the system browser");
        open::that_detached(url).map_err(|e| PresentationError::BrowserFailed {
            source: e,
            location: ErrorLocation::from(Location::caller()),
        })
    }
}
