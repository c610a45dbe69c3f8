//! Tracing subscriber setup for suites driving task panes.

use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::EnvFilter;

/// Default filter directive for a verbosity level (0 = warn, 1 = info, 2 = debug, 3+ = trace)
#[must_use]
pub const fn level_for_verbosity(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn env_filter(verbosity: u8) -> EnvFilter {
    // RUST_LOG wins over the verbosity flag
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_for_verbosity(verbosity)))
}

/// Install a compact stderr subscriber.
///
/// Panics if a global subscriber is already set; use
/// [`try_init_test_logging`] where that may happen.
pub fn init_logging(verbosity: u8) {
    let stderr = std::io::stderr.with_max_level(tracing::Level::TRACE);

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbosity))
        .with_writer(stderr)
        .with_target(true)
        .with_level(true)
        .compact()
        .init();
}

/// Install a test-writer subscriber, ignoring an already-installed one.
///
/// Returns whether this call installed the subscriber.
pub fn try_init_test_logging() -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(2))
        .with_test_writer()
        .try_init()
        .is_ok()
}
