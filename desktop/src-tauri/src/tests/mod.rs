mod error;
mod lifecycle;

use crate::presentation::{PresentationError, PresentationMode, PresentationStrategy};
use crate::server::{ApplicationServer, LaunchOptions, ServerError, ServerResult};

use std::env;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tempfile::TempDir;

/// RAII guard for environment variables - automatically restores on drop
pub(crate) struct EnvGuard {
    key: &'static str,
    original: Option<String>,
}

impl EnvGuard {
    pub(crate) fn remove(key: &'static str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::remove_var(key);
            Self { key, original }
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            match &self.original {
                Some(val) => env::set_var(self.key, val),
                None => env::remove_var(self.key),
            }
        }
    }
}

/// Temp asset directory with an index page
pub(crate) fn setup_assets() -> TempDir {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("index.html"), "<h1>Penguins</h1>").unwrap();
    temp
}

/// Never binds, never returns
pub(crate) struct SilentServer;

#[async_trait]
impl ApplicationServer for SilentServer {
    fn name(&self) -> &str {
        "silent"
    }

    async fn start(&self, _options: LaunchOptions) -> ServerResult<()> {
        std::future::pending::<()>().await;
        Ok(())
    }
}

/// Fails immediately
pub(crate) struct FailingServer;

#[async_trait]
impl ApplicationServer for FailingServer {
    fn name(&self) -> &str {
        "failing"
    }

    async fn start(&self, _options: LaunchOptions) -> ServerResult<()> {
        Err(ServerError::startup_failure("boom"))
    }
}

/// Returns cleanly without serving anything
pub(crate) struct ExitingServer;

#[async_trait]
impl ApplicationServer for ExitingServer {
    fn name(&self) -> &str {
        "exiting"
    }

    async fn start(&self, _options: LaunchOptions) -> ServerResult<()> {
        Ok(())
    }
}

/// Native window that always fails
pub(crate) struct FailingNative;

impl PresentationStrategy for FailingNative {
    fn mode(&self) -> PresentationMode {
        PresentationMode::NativeWindow
    }

    fn present(&mut self, _url: &str) -> Result<(), PresentationError> {
        Err(PresentationError::unavailable("no toolkit in tests"))
    }
}

/// Native window whose toolkit blows up
pub(crate) struct PanickingNative;

impl PresentationStrategy for PanickingNative {
    fn mode(&self) -> PresentationMode {
        PresentationMode::NativeWindow
    }

    fn present(&mut self, _url: &str) -> Result<(), PresentationError> {
        panic!("toolkit init failed");
    }
}

/// Native window that opens and closes at once
pub(crate) struct ClosingNative;

impl PresentationStrategy for ClosingNative {
    fn mode(&self) -> PresentationMode {
        PresentationMode::NativeWindow
    }

    fn present(&mut self, _url: &str) -> Result<(), PresentationError> {
        Ok(())
    }
}

/// Browser that records the URLs it was asked to open
#[derive(Default, Clone)]
pub(crate) struct RecordingBrowser {
    pub(crate) opened: Arc<Mutex<Vec<String>>>,
    pub(crate) fail: bool,
}

impl PresentationStrategy for RecordingBrowser {
    fn mode(&self) -> PresentationMode {
        PresentationMode::Browser
    }

    fn present(&mut self, url: &str) -> Result<(), PresentationError> {
        self.opened.lock().unwrap().push(url.to_string());
        if self.fail {
            return Err(PresentationError::BrowserFailed {
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "no browser"),
                location: error_location::ErrorLocation::from(std::panic::Location::caller()),
            });
        }
        Ok(())
    }
}
