mod controller;
mod error;
mod lifecycle_state;
mod shutdown;

pub use controller::LifecycleController;
pub use error::{LaunchError, Result as LaunchResult};
pub use lifecycle_state::LifecycleState;
pub use shutdown::listen_for_shutdown_signal;
