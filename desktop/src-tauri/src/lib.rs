mod assets;
mod logging;

pub mod lifecycle;
pub mod presentation;
pub mod server;

#[cfg(test)]
mod tests;

pub use assets::{AssetLocator, ResolvedAssets, RunMode};
pub use lifecycle::{LaunchError, LaunchResult, LifecycleController, LifecycleState};
pub use logging::setup_logging;

use std::process::ExitCode;

use dd_config::Config;
use tracing::{error, info, warn};

/// Launch the dashboard and block until it is shut down.
pub fn run() -> ExitCode {
    let config = match Config::load().and_then(|config| config.validate().map(|()| config)) {
        Ok(config) => config,
        Err(e) => return fail(&LaunchError::from(e)),
    };

    // Diagnostics are nice to have, not required to run
    if let Err(e) = setup_logging(&config) {
        eprintln!("Warning: {}", e.summary());
    }

    info!("Starting dashdesk v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let controller = match LifecycleController::new(config) {
        Ok(controller) => controller,
        Err(e) => return fail(&e),
    };

    match controller.run() {
        Ok(()) => {
            info!("dashdesk exited cleanly");
            ExitCode::SUCCESS
        }
        Err(e) => fail(&e),
    }
}

fn fail(e: &LaunchError) -> ExitCode {
    error!("{e}");
    warn!("{}", e.recovery_hint());
    eprintln!("Error: {}", e.summary());
    ExitCode::from(e.exit_code())
}
