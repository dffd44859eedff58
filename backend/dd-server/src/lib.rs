pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod server;


pub use crate::error::{Result as ServeResult, ServeError};
pub use crate::routes::build_router;
pub use crate::server::{AssetServer, ServeOptions, serve};
