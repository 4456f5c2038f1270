// src/log.rs
// Diagnostics go to stderr so stdout stays a clean report.

use tracing_subscriber::{fmt::time::Uptime, EnvFilter};

const DEFAULT_FILTER: &str = "warn";

/// Install the global subscriber. `RUST_LOG` overrides the default level.
/// Safe to call more than once; later calls are no-ops.
pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_timer(Uptime::default())
        .with_target(false)
        .with_env_filter(filter)
        .try_init();
}
