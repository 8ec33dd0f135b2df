//! Tracing/logging initialization.

use tracing_subscriber::EnvFilter;

/// Initialize tracing/logging for the process.
///
/// Human-readable `timestamp LEVEL message` lines on stderr, filterable via
/// `RUST_LOG`, defaulting to `info`. Safe to call multiple times (subsequent
/// calls are no-ops). Library crates only emit events; tests and embedders
/// may install their own subscriber instead.
pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
