//! Logging initialization.
//!
//! `tracing` subscriber setup; the log level comes from `RUST_LOG`
//! (default: info).

use tracing_subscriber::{fmt, EnvFilter};

/// Initializes the global subscriber.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).with_target(true).init();
}

/// Initializes logging for tests; safe to call more than once.
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
