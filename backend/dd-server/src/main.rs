use dd_server::{ServeOptions, logger, serve};

use std::error::Error;

use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load and validate configuration
    let config = dd_config::Config::load()?;
    config.validate()?;

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, config.logging.colored)?;

    info!("Starting dd-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // A supervising launcher sets the working directory to the assets
    let asset_dir = match config.assets.dir {
        Some(ref dir) => dir.clone(),
        None => std::env::current_dir()?,
    };

    let reload = matches!(
        std::env::var("DD_RELOAD").as_deref(),
        Ok("true") | Ok("1")
    );

    let options = ServeOptions {
        host: config.server.host.clone(),
        port: config.server.port,
        asset_dir,
        no_cache: reload,
    };

    serve(options, async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
            Err(e) => {
                error!("Failed to listen for SIGINT: {e}");
                std::future::pending::<()>().await;
            }
        }
    })
    .await?;

    Ok(())
}
