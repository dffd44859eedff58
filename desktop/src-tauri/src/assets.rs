//! Run mode detection and asset directory resolution.

use crate::lifecycle::{LaunchError, LaunchResult};

use std::panic::Location;
use std::path::{Path, PathBuf};

use error_location::ErrorLocation;
use tracing::info;

const ASSETS_DIR_NAME: &str = "assets";

/// How the launcher was started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// Assets ship next to the executable
    Packaged,
    /// Running from a source checkout
    Source,
}

/// Where the dashboard assets were found, and why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedAssets {
    pub mode: RunMode,
    pub dir: PathBuf,
}

/// Finds the asset directory for this run.
///
/// Search order:
/// 1. Explicit override (`DD_ASSETS_DIR` / `assets.dir`)
/// 2. `assets/` beside the executable, or `../Resources/assets` in a macOS bundle
/// 3. `assets/` in the crate source directory
#[derive(Debug, Clone)]
pub struct AssetLocator {
    override_dir: Option<PathBuf>,
    exe_dir: Option<PathBuf>,
    source_dir: PathBuf,
}

impl AssetLocator {
    pub fn new(override_dir: Option<PathBuf>, exe_dir: Option<PathBuf>, source_dir: PathBuf) -> Self {
        Self {
            override_dir,
            exe_dir,
            source_dir,
        }
    }

    /// Locator for the current process.
    pub fn for_current_exe(override_dir: Option<PathBuf>) -> Self {
        let exe_dir = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf));

        Self::new(
            override_dir,
            exe_dir,
            Path::new(env!("CARGO_MANIFEST_DIR")).join(ASSETS_DIR_NAME),
        )
    }

    fn packaged_candidates(&self) -> Vec<PathBuf> {
        let Some(exe_dir) = &self.exe_dir else {
            return Vec::new();
        };

        vec![
            exe_dir.join(ASSETS_DIR_NAME),
            exe_dir.join("..").join("Resources").join(ASSETS_DIR_NAME),
        ]
    }

    /// Packaged when an asset directory ships beside the executable.
    pub fn run_mode(&self) -> RunMode {
        if self.packaged_candidates().iter().any(|dir| dir.is_dir()) {
            RunMode::Packaged
        } else {
            RunMode::Source
        }
    }

    pub fn resolve(&self) -> LaunchResult<ResolvedAssets> {
        let mode = self.run_mode();

        if let Some(dir) = &self.override_dir {
            if dir.is_dir() {
                info!("Using asset override: {}", dir.display());
                return Ok(ResolvedAssets {
                    mode,
                    dir: dir.clone(),
                });
            }
            return Err(LaunchError::AssetsNotFound {
                searched: vec![dir.clone()],
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let mut searched = self.packaged_candidates();
        searched.push(self.source_dir.clone());

        match searched.iter().find(|dir| dir.is_dir()) {
            Some(dir) => {
                info!("Using assets ({mode:?}): {}", dir.display());
                Ok(ResolvedAssets {
                    mode,
                    dir: dir.clone(),
                })
            }
            None => Err(LaunchError::AssetsNotFound {
                searched,
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}
