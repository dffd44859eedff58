mod application_server;
mod command_server;
mod error;
mod port;
mod readiness;
mod server_handle;
mod server_status;
mod service_endpoint;
mod static_server;
mod supervisor;

pub use application_server::{ApplicationServer, LaunchOptions};
pub use command_server::CommandServer;
pub use error::{Result as ServerResult, ServerError};
pub use port::PortAllocator;
pub use readiness::ReadinessProbe;
pub use server_handle::ServerHandle;
pub use server_status::ServerStatus;
pub use service_endpoint::ServiceEndpoint;
pub use static_server::StaticAssetServer;
pub use supervisor::ServerSupervisor;
