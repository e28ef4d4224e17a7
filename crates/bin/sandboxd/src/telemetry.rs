//! Logging initialization.

use tracing_subscriber::EnvFilter;

/// Install the global `tracing` subscriber.
///
/// `filter` uses `RUST_LOG` syntax; an unparsable directive falls back to `info`.
/// Calling this twice is harmless: the second subscriber is discarded.
pub fn init(filter: &str) {
    let env_filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .try_init();
}
