use crate::{
    AssetsConfig, CONFIG_DIR_NAME, CONFIG_FILENAME, ConfigError, ConfigErrorResult, LogLevel,
    LoggingConfig, ReadinessConfig, ServerConfig, WindowConfig,
};

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::info;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub readiness: ReadinessConfig,
    pub window: WindowConfig,
    pub assets: AssetsConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config from the config directory.
    ///
    /// Loading order:
    /// 1. DD_CONFIG_DIR env var, else the platform config dir + `dashdesk/`
    /// 2. config.toml if it exists, else defaults (nothing is created)
    /// 3. DD_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        match Self::config_dir() {
            Some(dir) => Self::load_from(&dir),
            None => {
                let mut config = Config::default();
                config.apply_env_overrides();
                Ok(config)
            }
        }
    }

    /// Load config.toml from an explicit directory, then apply env overrides.
    pub fn load_from(config_dir: &Path) -> ConfigErrorResult<Self> {
        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: DD_CONFIG_DIR env var > <platform config dir>/dashdesk
    pub fn config_dir() -> Option<PathBuf> {
        if let Ok(dir) = std::env::var("DD_CONFIG_DIR") {
            return Some(PathBuf::from(dir));
        }

        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.readiness.validate()?;
        self.window.validate()?;

        if let Some(ref file) = self.logging.file
            && (file.is_empty() || file.contains(std::path::MAIN_SEPARATOR))
        {
            return Err(ConfigError::logging(
                "logging.file must be a bare file name",
            ));
        }

        Ok(())
    }

    /// Directory log files are written to, if one can be determined.
    pub fn log_dir(&self) -> Option<PathBuf> {
        let dir = Path::new(&self.logging.dir);
        if dir.is_absolute() {
            return Some(dir.to_path_buf());
        }

        Self::config_dir().map(|config_dir| config_dir.join(dir))
    }

    /// Log configuration summary.
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  server: {}:{} ({})",
            self.server.host,
            self.server.port,
            if self.server.uses_command() {
                "external command"
            } else {
                "bundled"
            }
        );
        info!(
            "  readiness: timeout={}s, poll={}ms, request={}ms",
            self.readiness.timeout_secs,
            self.readiness.poll_interval_ms,
            self.readiness.request_timeout_ms
        );
        info!(
            "  window: {} \"{}\" {}x{}",
            if self.window.enabled {
                "enabled"
            } else {
                "disabled"
            },
            self.window.title,
            self.window.width,
            self.window.height
        );
        match self.assets.dir {
            Some(ref dir) => info!("  assets: {}", dir.display()),
            None => info!("  assets: auto"),
        }
        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("none")
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("DD_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("DD_SERVER_PORT", &mut self.server.port);

        // Readiness
        Self::apply_env_parse("DD_READY_TIMEOUT_SECS", &mut self.readiness.timeout_secs);
        Self::apply_env_parse(
            "DD_READY_POLL_INTERVAL_MS",
            &mut self.readiness.poll_interval_ms,
        );
        Self::apply_env_parse(
            "DD_READY_REQUEST_TIMEOUT_MS",
            &mut self.readiness.request_timeout_ms,
        );

        // Window
        Self::apply_env_bool("DD_WINDOW_ENABLED", &mut self.window.enabled);
        Self::apply_env_string("DD_WINDOW_TITLE", &mut self.window.title);

        // Assets
        if let Ok(dir) = std::env::var("DD_ASSETS_DIR")
            && !dir.is_empty()
        {
            self.assets.dir = Some(PathBuf::from(dir));
        }

        // Logging
        if let Ok(level) = std::env::var("DD_LOG_LEVEL") {
            self.logging.level = LogLevel::parse_lossy(&level);
        }
        Self::apply_env_option_string("DD_LOG_FILE", &mut self.logging.file);
        Self::apply_env_bool("DD_LOG_COLORED", &mut self.logging.colored);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
