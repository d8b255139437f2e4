mod env;
mod logging;
mod server;

pub use env::{env_nonempty, env_or};
pub use logging::{init_tracing, LogSettings, TracingGuards};
pub use server::{bind_listener, shutdown_signal};
