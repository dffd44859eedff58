//! Background execution of the Application Server.

use crate::server::{
    ApplicationServer, LaunchOptions, ServerHandle, ServerStatus, ServiceEndpoint,
};

use std::path::Path;
use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::sync::watch;
use tracing::{error, info};

/// Owns the background task running the Application Server.
///
/// Responsibilities:
/// - Spawn the server on the launcher runtime without blocking the caller
/// - Publish status: Starting, then Failed/Stopped when the task ends
/// - Promote Starting to Ready once readiness has been observed
/// - Stop the server on shutdown
///
/// Startup failures are reported, never retried.
pub struct ServerSupervisor {
    server: Arc<dyn ApplicationServer>,
    runtime: Handle,
}

impl ServerSupervisor {
    pub fn new(server: Arc<dyn ApplicationServer>, runtime: Handle) -> Self {
        Self { server, runtime }
    }

    /// Spawn the server bound to `endpoint`, serving `asset_dir`.
    ///
    /// The task lives on the launcher runtime and is dropped with it, so
    /// it can never keep the process alive.
    pub fn start(&self, endpoint: &ServiceEndpoint, asset_dir: &Path) -> ServerHandle {
        let status_tx = Arc::new(watch::Sender::new(ServerStatus::Starting));

        let options = LaunchOptions {
            endpoint: endpoint.clone(),
            asset_dir: asset_dir.to_path_buf(),
            launch_browser: false,
            reload: false,
        };

        info!(
            "Starting {} on {}",
            self.server.name(),
            endpoint.base_url()
        );

        let server = self.server.clone();
        let task_status = status_tx.clone();
        let task = self.runtime.spawn(async move {
            let name = server.name().to_string();
            match server.start(options).await {
                Ok(()) => {
                    info!("{name} exited");
                    task_status.send_replace(ServerStatus::Stopped);
                }
                Err(e) => {
                    error!("{name} failed: {e}");
                    task_status.send_replace(ServerStatus::Failed {
                        error: e.summary(),
                    });
                }
            }
        });

        ServerHandle::new(endpoint.clone(), status_tx, task)
    }

    /// Record that the readiness check saw the server answer.
    ///
    /// Returns false if the server had already failed or stopped.
    pub fn confirm_ready(&self, handle: &ServerHandle) -> bool {
        let promoted = handle.mark_ready();
        if promoted {
            info!("{} is ready at {}", self.server.name(), handle.endpoint().base_url());
        }
        promoted
    }

    /// Stop the server task.
    pub fn stop(&self, handle: &mut ServerHandle) {
        info!("Stopping {}", self.server.name());
        handle.abort();
    }
}
