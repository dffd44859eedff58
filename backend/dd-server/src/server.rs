//! Static dashboard server with graceful shutdown.

use crate::{ServeError, ServeResult, build_router};

use std::future::Future;
use std::net::SocketAddr;
use std::panic::Location;
use std::path::PathBuf;

use axum::Router;
use error_location::ErrorLocation;
use tokio::net::TcpListener;
use tracing::info;

/// What to serve and where.
#[derive(Debug, Clone)]
pub struct ServeOptions {
    pub host: String,
    /// 0 lets the OS pick
    pub port: u16,
    pub asset_dir: PathBuf,
    /// Disable response caching
    pub no_cache: bool,
}

/// A bound, not yet running, asset server.
pub struct AssetServer {
    listener: TcpListener,
    router: Router,
    local_addr: SocketAddr,
}

impl AssetServer {
    /// Validate the asset directory and bind the listening socket.
    pub async fn bind(options: &ServeOptions) -> ServeResult<Self> {
        if !options.asset_dir.is_dir() {
            return Err(ServeError::AssetsMissing {
                path: options.asset_dir.clone(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let addr = format!("{}:{}", options.host, options.port);
        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|e| ServeError::Bind {
                addr: addr.clone(),
                source: e,
                location: ErrorLocation::from(Location::caller()),
            })?;

        // Actual address matters when port is 0
        let local_addr = listener.local_addr()?;
        let router = build_router(&options.asset_dir, options.no_cache);

        Ok(Self {
            listener,
            router,
            local_addr,
        })
    }

    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Serve until `shutdown` resolves.
    pub async fn run<F>(self, shutdown: F) -> ServeResult<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        info!("Server listening on http://{}", self.local_addr);

        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown)
            .await?;

        info!("Server on {} stopped", self.local_addr);
        Ok(())
    }
}

/// Bind and serve in one step.
pub async fn serve<F>(options: ServeOptions, shutdown: F) -> ServeResult<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    info!("Serving assets from {}", options.asset_dir.display());
    AssetServer::bind(&options).await?.run(shutdown).await
}
