mod browser;
mod error;
mod native_window;
mod presentation_mode;
mod presentation_result;
mod strategy;

pub use browser::SystemBrowser;
pub use error::PresentationError;
pub use native_window::{NativeWindow, display_available};
pub use presentation_mode::PresentationMode;
pub use presentation_result::PresentationResult;
pub use strategy::{PresentationStrategy, present_with_fallback};
