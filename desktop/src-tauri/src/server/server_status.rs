/// Current status of the Application Server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServerStatus {
    /// Spawned, not yet observed answering
    Starting,
    /// Readiness confirmed by an HTTP check
    Ready,
    /// Server returned an error or exited abnormally
    Failed { error: String },
    /// Server exited cleanly or was stopped
    Stopped,
}

impl ServerStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServerStatus::Starting => "starting",
            ServerStatus::Ready => "ready",
            ServerStatus::Failed { .. } => "failed",
            ServerStatus::Stopped => "stopped",
        }
    }

    /// Whether the backing task has finished.
    pub fn is_terminal(&self) -> bool {
        matches!(self, ServerStatus::Failed { .. } | ServerStatus::Stopped)
    }
}
