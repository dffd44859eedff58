//! Socket-level readiness polling.

use crate::server::ServerResult;

use std::time::Duration;

use dd_config::ReadinessConfig;
use tokio::time::Instant;
use tracing::{debug, info, warn};

/// Polls a URL until something answers or the deadline passes.
///
/// Any HTTP response counts, including error statuses: the question is
/// whether the server is listening, not whether it is healthy. Refused
/// and reset connections are the normal state before the server binds,
/// so they are logged at debug and retried.
pub struct ReadinessProbe {
    client: reqwest::Client,
    poll_interval: Duration,
    request_timeout: Duration,
}

impl ReadinessProbe {
    pub fn new(poll_interval: Duration, request_timeout: Duration) -> ServerResult<Self> {
        let client = reqwest::Client::builder()
            .no_proxy()
            .pool_max_idle_per_host(1)
            .build()?;

        Ok(Self {
            client,
            poll_interval,
            request_timeout,
        })
    }

    pub fn from_config(config: &ReadinessConfig) -> ServerResult<Self> {
        Self::new(config.poll_interval(), config.request_timeout())
    }

    /// Wait until `url` answers, returning `false` once `timeout` has elapsed.
    ///
    /// No request or sleep extends past the deadline, and an answer that
    /// arrives before it is always reported as ready.
    pub async fn wait_until_ready(&self, url: &str, timeout: Duration) -> bool {
        let started = Instant::now();
        let deadline = started + timeout;
        let mut attempts: u32 = 0;

        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                warn!(
                    "{url} did not answer within {:?} ({attempts} attempts)",
                    timeout
                );
                return false;
            }

            attempts += 1;
            let budget = self.request_timeout.min(remaining);
            match self.client.get(url).timeout(budget).send().await {
                Ok(response) => {
                    info!(
                        "{url} answered HTTP {} after {:?} ({attempts} attempts)",
                        response.status(),
                        started.elapsed()
                    );
                    return true;
                }
                Err(e) => debug!("Readiness check {attempts} against {url} failed: {e}"),
            }

            let remaining = deadline.saturating_duration_since(Instant::now());
            tokio::time::sleep(self.poll_interval.min(remaining)).await;
        }
    }
}
