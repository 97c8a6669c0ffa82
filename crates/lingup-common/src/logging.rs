//! Structured logging setup for lingup

use tracing_subscriber::EnvFilter;

/// Initialize the tracing subscriber for the given level filter.
///
/// The `RUST_LOG` environment variable takes precedence over `level` when
/// set. Falls back to `info` when the filter string does not parse.
pub fn init_logging(level: &str) {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .init();
}
