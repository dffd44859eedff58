use std::future::Future;

use tracing::info;

/// Register SIGINT/SIGTERM handlers; the returned future resolves on the first signal.
///
/// Handlers are in place before this returns. Must be called inside a runtime.
#[cfg(unix)]
pub fn listen_for_shutdown_signal() -> std::io::Result<impl Future<Output = ()> + Send + 'static>
{
    use tokio::signal::unix::{SignalKind, signal};

    let mut interrupt = signal(SignalKind::interrupt())?;
    let mut terminate = signal(SignalKind::terminate())?;

    Ok(async move {
        tokio::select! {
            _ = interrupt.recv() => info!("Received SIGINT"),
            _ = terminate.recv() => info!("Received SIGTERM"),
        }
    })
}

#[cfg(not(unix))]
pub fn listen_for_shutdown_signal() -> std::io::Result<impl Future<Output = ()> + Send + 'static>
{
    Ok(async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl-C"),
            Err(e) => {
                tracing::warn!("Failed to listen for Ctrl-C: {e}");
                std::future::pending::<()>().await;
            }
        }
    })
}
