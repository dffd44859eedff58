use crate::server::{ApplicationServer, LaunchOptions, ServerResult};

use async_trait::async_trait;
use dd_server::ServeOptions;
use tracing::debug;

/// The bundled dashboard server, run in-process on the launcher runtime.
pub struct StaticAssetServer;

#[async_trait]
impl ApplicationServer for StaticAssetServer {
    fn name(&self) -> &str {
        "dd-server"
    }

    async fn start(&self, options: LaunchOptions) -> ServerResult<()> {
        // dd-server never opens a browser; nothing to switch off
        debug!(
            "Starting bundled server (launch_browser={}, reload={})",
            options.launch_browser, options.reload
        );

        let serve_options = ServeOptions {
            host: options.endpoint.host().to_string(),
            port: options.endpoint.port(),
            asset_dir: options.asset_dir,
            no_cache: options.reload,
        };

        // Runs until the supervising task is aborted
        dd_server::serve(serve_options, std::future::pending()).await?;

        Ok(())
    }
}
