use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::config::ServerConfig;

/// Initializes the tracing subscriber for logging.
///
/// `RUST_LOG` takes precedence over the configured directive. Calling this
/// more than once is harmless; later calls leave the first subscriber in place.
pub fn init(config: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_directive()));

    let _ = tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .try_init();
}
