use crate::server::{ServerResult, ServiceEndpoint};

use std::path::PathBuf;

use async_trait::async_trait;

/// Start options handed to an Application Server.
///
/// The asset directory travels here instead of through the launcher's
/// working directory, which is never changed.
#[derive(Debug, Clone)]
pub struct LaunchOptions {
    pub endpoint: ServiceEndpoint,
    pub asset_dir: PathBuf,
    /// The launcher presents the UI itself
    pub launch_browser: bool,
    /// Packaged runs never live-reload
    pub reload: bool,
}

/// The service the launcher starts and presents.
///
/// `start` runs until the server terminates. Returning `Err` before the
/// server answers HTTP is a startup failure.
#[async_trait]
pub trait ApplicationServer: Send + Sync {
    fn name(&self) -> &str;

    async fn start(&self, options: LaunchOptions) -> ServerResult<()>;
}
