//! Port allocation and availability checking.

use crate::server::{ServerError, ServerResult, ServiceEndpoint};

use std::collections::HashSet;
use std::panic::Location;
use std::sync::{LazyLock, Mutex, PoisonError};

use error_location::ErrorLocation;
use tracing::{debug, info, warn};

/// How many times to ask the OS before giving up on a fresh port.
const MAX_ALLOCATION_ATTEMPTS: usize = 16;

/// Ports handed out by any allocator in this process.
static ISSUED: LazyLock<Mutex<HashSet<u16>>> = LazyLock::new(|| Mutex::new(HashSet::new()));

/// Hands out loopback ports for the Application Server.
///
/// Every issued port is remembered process-wide, so no two launches in
/// this process share a port even if the OS recycles it.
pub struct PortAllocator {
    host: String,
    preferred: Option<u16>,
}

impl PortAllocator {
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            preferred: None,
        }
    }

    /// Prefer a fixed port when it is free. 0 means no preference.
    pub fn with_preferred(mut self, port: u16) -> Self {
        self.preferred = (port != 0).then_some(port);
        self
    }

    /// Allocate an endpoint for one launch.
    ///
    /// Algorithm:
    /// 1. Try the preferred port, if any
    /// 2. Otherwise bind port 0 and read back what the OS assigned
    /// 3. Release the socket so the server can bind it
    pub fn allocate(&self) -> ServerResult<ServiceEndpoint> {
        let mut issued = ISSUED.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(port) = self.preferred {
            if !issued.contains(&port) && Self::is_available(&self.host, port) {
                issued.insert(port);
                info!("Using preferred port {port}");
                return Ok(ServiceEndpoint::new(&self.host, port));
            }
            warn!("Preferred port {port} is unavailable, falling back to an ephemeral port");
        }

        let mut last_error = None;
        for _ in 0..MAX_ALLOCATION_ATTEMPTS {
            match Self::ephemeral_port(&self.host) {
                Ok(port) if issued.insert(port) => {
                    info!("Allocated ephemeral port {port}");
                    return Ok(ServiceEndpoint::new(&self.host, port));
                }
                Ok(port) => debug!("OS reissued port {port}, asking again"),
                Err(e) => {
                    last_error = Some(e);
                    break;
                }
            }
        }

        let message = match last_error {
            Some(e) => format!("cannot bind {}:0: {e}", self.host),
            None => format!("no fresh port after {MAX_ALLOCATION_ATTEMPTS} attempts"),
        };

        Err(ServerError::ResourceUnavailable {
            message,
            location: ErrorLocation::from(Location::caller()),
        })
    }

    /// Check if a port is available for binding.
    ///
    /// The socket is released as soon as the listener is dropped.
    pub fn is_available(host: &str, port: u16) -> bool {
        std::net::TcpListener::bind((host, port)).is_ok()
    }

    fn ephemeral_port(host: &str) -> std::io::Result<u16> {
        let listener = std::net::TcpListener::bind((host, 0))?;
        Ok(listener.local_addr()?.port())
    }
}
