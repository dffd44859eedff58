//! Presentation policy: native window first, browser as the fallback.

use crate::presentation::{PresentationError, PresentationMode, PresentationResult};

use std::panic::{AssertUnwindSafe, catch_unwind};

use tracing::{info, warn};

/// One way of putting the UI in front of the user.
pub trait PresentationStrategy {
    fn mode(&self) -> PresentationMode;

    /// Show `url`. Native windows block until closed; browsers return at once.
    fn present(&mut self, url: &str) -> Result<(), PresentationError>;
}

/// Present `url`, degrading to `browser` on any native failure.
///
/// A native failure, including a panic inside the toolkit, is never fatal.
/// A browser failure yields `succeeded: false` and the caller is expected
/// to tell the user the URL.
pub fn present_with_fallback(
    native: Option<&mut dyn PresentationStrategy>,
    browser: &mut dyn PresentationStrategy,
    url: &str,
) -> PresentationResult {
    if let Some(native) = native {
        let mode = native.mode();
        match catch_unwind(AssertUnwindSafe(|| native.present(url))) {
            Ok(Ok(())) => {
                info!("Presented {url} via {mode}");
                return PresentationResult {
                    mode,
                    succeeded: true,
                };
            }
            Ok(Err(e)) => warn!("Presentation degraded, {mode} failed: {e}"),
            Err(panic) => warn!(
                "Presentation degraded, {mode} panicked: {}",
                panic_message(panic.as_ref())
            ),
        }
    }

    let mode = browser.mode();
    match browser.present(url) {
        Ok(()) => PresentationResult {
            mode,
            succeeded: true,
        },
        Err(e) => {
            warn!("{mode} presentation failed: {e}");
            PresentationResult {
                mode,
                succeeded: false,
            }
        }
    }
}

fn panic_message(panic: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = panic.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".into()
    }
}
