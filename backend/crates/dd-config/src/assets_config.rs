use std::path::PathBuf;

use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AssetsConfig {
    /// Explicit asset directory; overrides run-mode detection
    pub dir: Option<PathBuf>,
}
