use crate::server::{ServerStatus, ServiceEndpoint};

use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;

/// The running Application Server.
///
/// Status is written only by the supervisor and its background task;
/// everyone else reads it or subscribes to changes.
pub struct ServerHandle {
    endpoint: ServiceEndpoint,
    status_tx: Arc<watch::Sender<ServerStatus>>,
    task: Option<JoinHandle<()>>,
}

impl ServerHandle {
    pub(crate) fn new(
        endpoint: ServiceEndpoint,
        status_tx: Arc<watch::Sender<ServerStatus>>,
        task: JoinHandle<()>,
    ) -> Self {
        Self {
            endpoint,
            status_tx,
            task: Some(task),
        }
    }

    pub fn endpoint(&self) -> &ServiceEndpoint {
        &self.endpoint
    }

    /// Get current status.
    pub fn status(&self) -> ServerStatus {
        self.status_tx.borrow().clone()
    }

    /// Subscribe to status changes.
    pub fn subscribe(&self) -> watch::Receiver<ServerStatus> {
        self.status_tx.subscribe()
    }

    /// Resolve once the server has failed or stopped, returning that status.
    pub async fn wait_for_exit(&self) -> ServerStatus {
        let mut rx = self.subscribe();
        match rx.wait_for(ServerStatus::is_terminal).await {
            Ok(status) => (*status).clone(),
            // The sender lives as long as self, so this only happens mid-drop
            Err(_) => ServerStatus::Stopped,
        }
    }

    /// Starting -> Ready. Any other current status is left alone.
    pub(crate) fn mark_ready(&self) -> bool {
        self.status_tx.send_if_modified(|status| {
            if *status == ServerStatus::Starting {
                *status = ServerStatus::Ready;
                true
            } else {
                false
            }
        })
    }

    /// Abort the background task. A failure status is kept for diagnostics.
    pub(crate) fn abort(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }

        self.status_tx.send_if_modified(|status| {
            if matches!(status, ServerStatus::Failed { .. }) {
                false
            } else {
                *status = ServerStatus::Stopped;
                true
            }
        });
    }
}

impl Drop for ServerHandle {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}
