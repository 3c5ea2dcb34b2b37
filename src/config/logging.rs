//! Tracing/logging initialization.
//!
//! Diagnostics go to stderr so they never mix with command output or CSV
//! written to stdout.

use tracing_subscriber::EnvFilter;

/// Build the log filter: `RUST_LOG` wins, then the configured fallback.
pub fn filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback))
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Initialize tracing for the process.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init(fallback: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(fallback))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
