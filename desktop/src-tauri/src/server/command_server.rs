//! Application Server run as a child process.

use crate::server::{ApplicationServer, LaunchOptions, ServerError, ServerResult};

use std::panic::Location;
use std::process::Stdio;

use async_trait::async_trait;
use error_location::ErrorLocation;
use tokio::process::Command;
use tracing::{info, warn};

const HOST_PLACEHOLDER: &str = "{host}";
const PORT_PLACEHOLDER: &str = "{port}";
const ASSETS_PLACEHOLDER: &str = "{assets}";

/// Runs a configured command as the Application Server.
///
/// Arguments may contain `{host}`, `{port}` and `{assets}`; the same
/// values are exported as `DD_SERVER_HOST`, `DD_SERVER_PORT` and
/// `DD_ASSETS_DIR`. The child runs in the asset directory and is killed
/// when its handle is dropped.
pub struct CommandServer {
    program: String,
    args: Vec<String>,
}

impl CommandServer {
    pub fn new(argv: &[String]) -> ServerResult<Self> {
        let Some((program, args)) = argv.split_first() else {
            return Err(ServerError::InvalidCommand {
                message: "command is empty".into(),
                location: ErrorLocation::from(Location::caller()),
            });
        };

        Ok(Self {
            program: program.clone(),
            args: args.to_vec(),
        })
    }

    /// Substitute launch placeholders in one argument.
    pub fn expand(arg: &str, options: &LaunchOptions) -> String {
        arg.replace(HOST_PLACEHOLDER, options.endpoint.host())
            .replace(PORT_PLACEHOLDER, &options.endpoint.port().to_string())
            .replace(ASSETS_PLACEHOLDER, &options.asset_dir.to_string_lossy())
    }

    fn command(&self, options: &LaunchOptions) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(self.args.iter().map(|arg| Self::expand(arg, options)))
            .current_dir(&options.asset_dir)
            .env("DD_SERVER_HOST", options.endpoint.host())
            .env("DD_SERVER_PORT", options.endpoint.port().to_string())
            .env("DD_ASSETS_DIR", &options.asset_dir)
            .env("DD_LAUNCH_BROWSER", options.launch_browser.to_string())
            .env("DD_RELOAD", options.reload.to_string())
            .stdin(Stdio::null())
            .kill_on_drop(true);

        // SIGTERM the child when the thread that spawned it exits. That is a
        // runtime worker, which lives until the launcher runtime shuts down.
        #[cfg(target_os = "linux")]
        unsafe {
            cmd.pre_exec(|| {
                libc::prctl(libc::PR_SET_PDEATHSIG, libc::SIGTERM);
                Ok(())
            });
        }

        cmd
    }
}

#[async_trait]
impl ApplicationServer for CommandServer {
    fn name(&self) -> &str {
        &self.program
    }

    async fn start(&self, options: LaunchOptions) -> ServerResult<()> {
        info!(
            "Spawning {} in {}",
            self.program,
            options.asset_dir.display()
        );

        let mut child =
            self.command(&options)
                .spawn()
                .map_err(|e| ServerError::ProcessSpawn {
                    program: self.program.clone(),
                    source: e,
                    location: ErrorLocation::from(Location::caller()),
                })?;

        if let Some(pid) = child.id() {
            info!("Spawned {} with PID {pid}", self.program);
        }

        let status = child.wait().await?;
        if status.success() {
            info!("{} exited cleanly", self.program);
            Ok(())
        } else {
            warn!("{} exited with {status}", self.program);
            Err(ServerError::ProcessExited {
                code: status.code(),
                location: ErrorLocation::from(Location::caller()),
            })
        }
    }
}
