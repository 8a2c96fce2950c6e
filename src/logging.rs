//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

/// Install the global subscriber, writing to stderr.
///
/// `RUST_LOG` wins over `default_filter` when set.
pub fn init(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    // Keep an already installed subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
