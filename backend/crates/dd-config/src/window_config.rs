use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_WINDOW_ENABLED, DEFAULT_WINDOW_HEIGHT,
    DEFAULT_WINDOW_TITLE, DEFAULT_WINDOW_WIDTH,
};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Try a native window before falling back to the browser
    pub enabled: bool,
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            enabled: DEFAULT_WINDOW_ENABLED,
            title: String::from(DEFAULT_WINDOW_TITLE),
            width: DEFAULT_WINDOW_WIDTH,
            height: DEFAULT_WINDOW_HEIGHT,
        }
    }
}

impl WindowConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::window(format!(
                "window size must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }

        Ok(())
    }
}
