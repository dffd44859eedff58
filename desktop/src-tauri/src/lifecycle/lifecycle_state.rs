/// Where the launcher is in its run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleState {
    /// Resolving run mode and asset directory
    Initializing,
    /// Allocating a port and spawning the server
    Starting,
    /// Polling the server until it answers
    WaitingReady,
    /// Opening the native window or browser
    Presenting,
    /// UI is up; waiting for shutdown
    Running,
    ShuttingDown,
}

impl LifecycleState {
    pub fn as_str(&self) -> &'static str {
        match self {
            LifecycleState::Initializing => "initializing",
            LifecycleState::Starting => "starting",
            LifecycleState::WaitingReady => "waiting_ready",
            LifecycleState::Presenting => "presenting",
            LifecycleState::Running => "running",
            LifecycleState::ShuttingDown => "shutting_down",
        }
    }
}
