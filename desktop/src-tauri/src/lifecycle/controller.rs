//! Top-level launcher orchestration.

use crate::assets::AssetLocator;
use crate::lifecycle::{LaunchError, LaunchResult, LifecycleState, listen_for_shutdown_signal};
use crate::presentation::{
    NativeWindow, PresentationMode, PresentationStrategy, SystemBrowser, present_with_fallback,
};
use crate::server::{
    ApplicationServer, CommandServer, PortAllocator, ReadinessProbe, ServerError, ServerHandle,
    ServerStatus, ServerSupervisor, StaticAssetServer,
};

use std::panic::Location;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use dd_config::Config;
use error_location::ErrorLocation;
use tokio::runtime::Runtime;
use tokio::sync::watch;
use tracing::{error, info, warn};

/// How often the browser-mode idle loop wakes up.
const IDLE_POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Outcome of the readiness wait.
enum Readiness {
    Ready,
    TimedOut,
    Exited(ServerStatus),
    Interrupted,
}

/// Drives one launcher run.
///
/// Initializing -> Starting -> WaitingReady -> Presenting -> Running -> ShuttingDown
///
/// The controller owns the async runtime. The calling thread blocks on it
/// for the readiness wait and the browser idle loop, and runs the native
/// window event loop directly. Dropping the controller drops the runtime,
/// which cancels the server task.
pub struct LifecycleController {
    config: Config,
    runtime: Runtime,
    allocator: PortAllocator,
    server: Arc<dyn ApplicationServer>,
    native: Option<Box<dyn PresentationStrategy>>,
    browser: Box<dyn PresentationStrategy>,
    asset_dir: Option<PathBuf>,
    signal_handlers: bool,
    state_tx: watch::Sender<LifecycleState>,
    shutdown_tx: Arc<watch::Sender<bool>>,
}

impl LifecycleController {
    pub fn new(config: Config) -> LaunchResult<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .thread_name("dashdesk-runtime")
            .build()
            .map_err(|e| LaunchError::Runtime {
                source: e,
                location: ErrorLocation::from(Location::caller()),
            })?;

        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        let server: Arc<dyn ApplicationServer> = if config.server.uses_command() {
            Arc::new(CommandServer::new(&config.server.command)?)
        } else {
            Arc::new(StaticAssetServer)
        };

        let native: Option<Box<dyn PresentationStrategy>> = if config.window.enabled {
            Some(Box::new(NativeWindow::new(
                &config.window,
                runtime.handle().clone(),
                shutdown_rx,
            )))
        } else {
            None
        };

        let allocator =
            PortAllocator::new(config.server.host.clone()).with_preferred(config.server.port);

        Ok(Self {
            asset_dir: config.assets.dir.clone(),
            config,
            runtime,
            allocator,
            server,
            native,
            browser: Box::new(SystemBrowser),
            signal_handlers: true,
            state_tx: watch::Sender::new(LifecycleState::Initializing),
            shutdown_tx: Arc::new(shutdown_tx),
        })
    }

    /// Replace the Application Server.
    pub fn with_server(mut self, server: Arc<dyn ApplicationServer>) -> Self {
        self.server = server;
        self
    }

    /// Replace the native window strategy.
    pub fn with_native(mut self, native: Box<dyn PresentationStrategy>) -> Self {
        self.native = Some(native);
        self
    }

    /// Go straight to the browser.
    pub fn without_native(mut self) -> Self {
        self.native = None;
        self
    }

    pub fn with_browser(mut self, browser: Box<dyn PresentationStrategy>) -> Self {
        self.browser = browser;
        self
    }

    /// Serve this directory instead of searching for assets.
    pub fn with_asset_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.asset_dir = Some(dir.into());
        self
    }

    /// Do not listen for Ctrl-C/SIGTERM; shutdown comes only from the trigger.
    pub fn without_signal_handlers(mut self) -> Self {
        self.signal_handlers = false;
        self
    }

    /// Subscribe to lifecycle state changes.
    pub fn subscribe(&self) -> watch::Receiver<LifecycleState> {
        self.state_tx.subscribe()
    }

    /// Sending `true` asks a running launcher to shut down.
    pub fn shutdown_trigger(&self) -> Arc<watch::Sender<bool>> {
        self.shutdown_tx.clone()
    }

    /// Run until shutdown. Returns once the server has been stopped.
    pub fn run(mut self) -> LaunchResult<()> {
        if self.signal_handlers {
            let _runtime = self.runtime.enter();
            match listen_for_shutdown_signal() {
                Ok(signal) => {
                    let shutdown_tx = self.shutdown_tx.clone();
                    self.runtime.spawn(async move {
                        signal.await;
                        shutdown_tx.send_replace(true);
                    });
                }
                Err(e) => warn!("Failed to install signal handlers: {e}"),
            }
        }

        // Initializing
        self.transition(LifecycleState::Initializing);
        let assets = AssetLocator::for_current_exe(self.asset_dir.clone()).resolve()?;
        info!("Run mode: {:?}", assets.mode);

        // Starting
        self.transition(LifecycleState::Starting);
        let endpoint = self.allocator.allocate()?;
        let supervisor = ServerSupervisor::new(self.server.clone(), self.runtime.handle().clone());
        let mut handle = supervisor.start(&endpoint, &assets.dir);

        // WaitingReady
        self.transition(LifecycleState::WaitingReady);
        let url = endpoint.base_url().to_string();
        let timeout = self.config.readiness.timeout();
        let readiness = ReadinessProbe::from_config(&self.config.readiness)?;
        let mut shutdown = self.shutdown_tx.subscribe();

        let readiness = self.runtime.block_on(async {
            tokio::select! {
                biased;
                ready = readiness.wait_until_ready(&url, timeout) => {
                    if ready { Readiness::Ready } else { Readiness::TimedOut }
                }
                status = handle.wait_for_exit() => Readiness::Exited(status),
                _ = shutdown.wait_for(|requested| *requested) => Readiness::Interrupted,
            }
        });

        match readiness {
            Readiness::Ready => {
                if !supervisor.confirm_ready(&handle) {
                    let status = handle.status();
                    return Err(Self::exit_error(status));
                }
            }
            Readiness::TimedOut => {
                error!("Server did not answer at {url} within {timeout:?}");
                supervisor.stop(&mut handle);
                return Err(ServerError::startup_timeout(timeout.as_secs()).into());
            }
            Readiness::Exited(status) => return Err(Self::exit_error(status)),
            Readiness::Interrupted => {
                self.shut_down(&supervisor, &mut handle);
                return Ok(());
            }
        }

        // Presenting
        self.transition(LifecycleState::Presenting);
        let native: Option<&mut dyn PresentationStrategy> = match self.native.as_mut() {
            Some(native) => Some(&mut **native),
            None => None,
        };
        let presentation = present_with_fallback(native, &mut *self.browser, &url);
        info!(
            "Presentation: mode={}, succeeded={}",
            presentation.mode, presentation.succeeded
        );

        // Running
        self.transition(LifecycleState::Running);
        if presentation.mode == PresentationMode::Browser {
            if presentation.succeeded {
                println!("Opening in browser: {url}");
            } else {
                println!("Could not open a browser. Open {url} to view the dashboard.");
            }
            println!("Press Ctrl+C to stop the server.");
            self.idle_wait(&handle);
        }

        // ShuttingDown
        self.shut_down(&supervisor, &mut handle);
        Ok(())
    }

    fn transition(&self, state: LifecycleState) {
        info!("Lifecycle: {}", state.as_str());
        self.state_tx.send_replace(state);
    }

    fn exit_error(status: ServerStatus) -> LaunchError {
        let error = match status {
            ServerStatus::Failed { error } => ServerError::startup_failure(error),
            other => ServerError::startup_failure(format!(
                "server {} before becoming ready",
                other.as_str()
            )),
        };
        error.into()
    }

    /// Block until shutdown is requested.
    fn idle_wait(&self, handle: &ServerHandle) {
        let mut shutdown = self.shutdown_tx.subscribe();

        self.runtime.block_on(async {
            let mut ticker = tokio::time::interval(IDLE_POLL_INTERVAL);
            let mut exit_reported = false;

            loop {
                if *shutdown.borrow_and_update() {
                    break;
                }

                tokio::select! {
                    _ = ticker.tick() => {
                        let status = handle.status();
                        if status.is_terminal() && !exit_reported {
                            warn!("Server is no longer running ({})", status.as_str());
                            exit_reported = true;
                        }
                    }
                    changed = shutdown.changed() => {
                        if changed.is_err() {
                            break;
                        }
                    }
                }
            }
        });
    }

    fn shut_down(&self, supervisor: &ServerSupervisor, handle: &mut ServerHandle) {
        self.transition(LifecycleState::ShuttingDown);
        println!("\nShutting down...");
        supervisor.stop(handle);
    }
}
