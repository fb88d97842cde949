//! Logging setup.

use tracing_subscriber::EnvFilter;

/// Install the global `tracing` subscriber: human-readable logs to stdout,
/// filtered by `RUST_LOG` or, when unset, by `level`.
///
/// Call once at startup, before any events are emitted.
pub fn init(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
