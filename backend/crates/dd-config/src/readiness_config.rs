use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_POLL_INTERVAL_MS, DEFAULT_READY_TIMEOUT_SECS,
    DEFAULT_REQUEST_TIMEOUT_MS,
};

use std::time::Duration;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ReadinessConfig {
    /// Total time to wait for the server to answer
    pub timeout_secs: u64,
    /// Delay between readiness requests
    pub poll_interval_ms: u64,
    /// Upper bound for a single readiness request
    pub request_timeout_ms: u64,
}

impl Default for ReadinessConfig {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_READY_TIMEOUT_SECS,
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
        }
    }
}

impl ReadinessConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.timeout_secs == 0 {
            return Err(ConfigError::readiness("readiness.timeout_secs must be > 0"));
        }

        if self.poll_interval_ms == 0 {
            return Err(ConfigError::readiness(
                "readiness.poll_interval_ms must be > 0",
            ));
        }

        if self.request_timeout_ms == 0 {
            return Err(ConfigError::readiness(
                "readiness.request_timeout_ms must be > 0",
            ));
        }

        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}
