const PROTOCOL: &str = "http";

/// Where the Application Server listens. Immutable once allocated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceEndpoint {
    host: String,
    port: u16,
    base_url: String,
}

impl ServiceEndpoint {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        let host = host.into();
        let base_url = format!("{PROTOCOL}://{host}:{port}");

        Self {
            host,
            port,
            base_url,
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
