//! Structured logging setup
//!
//! The library only emits `tracing` events; binaries and tests that want to
//! see them call [`init_logging`] once at startup.

use crate::constants::DEFAULT_LOG_LEVEL;
use tracing::debug;

/// Set up a stderr `tracing` subscriber
///
/// `RUST_LOG` takes precedence; otherwise events from this crate are shown at
/// `level` (or `info` when `None`). Returns `false` if a global subscriber was
/// already installed.
pub fn init_logging(level: Option<&str>) -> bool {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = level.unwrap_or(DEFAULT_LOG_LEVEL);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("journal_abbreviations={}", log_level)));

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .try_init()
        .is_ok();

    if installed {
        debug!("Logging initialized at level: {}", log_level);
    }
    installed
}
