//! Native webview window.
//!
//! Built on Tauri when the `native-window` feature is enabled. Without the
//! feature, or without a windowing surface, `present` reports the window as
//! unavailable and the caller falls back to the browser.

use crate::presentation::{PresentationError, PresentationMode, PresentationStrategy};

use dd_config::WindowConfig;
use tokio::runtime::Handle;
use tokio::sync::watch;

/// Whether a windowing surface looks usable.
///
/// On X11/Wayland platforms this requires `DISPLAY` or `WAYLAND_DISPLAY`;
/// elsewhere the desktop session is assumed.
pub fn display_available() -> bool {
    #[cfg(all(unix, not(target_os = "macos")))]
    {
        ["DISPLAY", "WAYLAND_DISPLAY"]
            .iter()
            .any(|var| std::env::var_os(var).is_some_and(|value| !value.is_empty()))
    }

    #[cfg(not(all(unix, not(target_os = "macos"))))]
    {
        true
    }
}

/// A native window bound to the dashboard URL.
///
/// Runs its event loop on the calling thread until the window closes or
/// shutdown is requested.
#[cfg_attr(not(feature = "native-window"), allow(dead_code))]
pub struct NativeWindow {
    title: String,
    width: u32,
    height: u32,
    runtime: Handle,
    shutdown: watch::Receiver<bool>,
}

impl NativeWindow {
    pub fn new(config: &WindowConfig, runtime: Handle, shutdown: watch::Receiver<bool>) -> Self {
        Self {
            title: config.title.clone(),
            width: config.width,
            height: config.height,
            runtime,
            shutdown,
        }
    }

    #[cfg(feature = "native-window")]
    fn run_window(&mut self, url: &str) -> Result<(), PresentationError> {
        use tauri::{WebviewUrl, WebviewWindowBuilder};
        use tracing::info;

        let url: tauri::Url = url
            .parse()
            .map_err(|e| PresentationError::window_failed(format!("invalid url {url}: {e}")))?;

        let title = self.title.clone();
        let (width, height) = (f64::from(self.width), f64::from(self.height));

        let app = tauri::Builder::default()
            .setup(move |app| {
                WebviewWindowBuilder::new(app, "main", WebviewUrl::External(url))
                    .title(&title)
                    .inner_size(width, height)
                    .build()?;
                Ok(())
            })
            .build(tauri::generate_context!())
            .map_err(|e| PresentationError::window_failed(e.to_string()))?;

        // Close the window when the launcher is asked to stop
        let app_handle = app.handle().clone();
        let mut shutdown = self.shutdown.clone();
        let watcher = self.runtime.spawn(async move {
            if shutdown.wait_for(|requested| *requested).await.is_ok() {
                info!("Shutdown requested, closing native window");
                app_handle.exit(0);
            }
        });

        let code = app.run_return(|_, _| {});
        watcher.abort();
        info!("Native window closed (code {code})");

        Ok(())
    }

    #[cfg(not(feature = "native-window"))]
    fn run_window(&mut self, _url: &str) -> Result<(), PresentationError> {
        Err(PresentationError::unavailable(
            "built without the native-window feature",
        ))
    }
}

impl PresentationStrategy for NativeWindow {
    fn mode(&self) -> PresentationMode {
        PresentationMode::NativeWindow
    }

    fn present(&mut self, url: &str) -> Result<(), PresentationError> {
        if !display_available() {
            return Err(PresentationError::unavailable("no display detected"));
        }

        self.run_window(url)
    }
}
