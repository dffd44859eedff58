use crate::{ConfigError, ConfigErrorResult, DEFAULT_HOST, DEFAULT_PORT, LOCALHOST, MIN_PORT};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Loopback host the Application Server binds
    pub host: String,
    /// Preferred port (0 = ephemeral)
    pub port: u16,
    /// External Application Server argv; empty runs the bundled server in-process
    pub command: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from(DEFAULT_HOST),
            port: DEFAULT_PORT,
            command: Vec::new(),
        }
    }
}

impl ServerConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        // Port 0 means "auto-assign" - OS picks an available port.
        if self.port != 0 && self.port < MIN_PORT {
            return Err(ConfigError::server(format!(
                "server.port must be 0 (auto) or >= {}, got {}",
                MIN_PORT, self.port
            )));
        }

        if self.host != DEFAULT_HOST && self.host != LOCALHOST {
            return Err(ConfigError::server(format!(
                "server.host must be {DEFAULT_HOST} or {LOCALHOST}, got {}",
                self.host
            )));
        }

        if let Some(program) = self.command.first()
            && program.trim().is_empty()
        {
            return Err(ConfigError::server("server.command program is empty"));
        }

        Ok(())
    }

    /// Whether an external command replaces the bundled server.
    pub fn uses_command(&self) -> bool {
        !self.command.is_empty()
    }
}
