//! Tracing setup for hosts that don't install their own subscriber
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=grid_core=debug` - edit sessions, commits, paste, reorder
//! - `RUST_LOG=grid_core::grid::navigation=trace` - every selection move
//!
//! Logs are also written to `~/.config/grid-core/logs/grid-core.log` with
//! daily rotation, at debug level.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::error::{GridError, Result};

/// Install console and file logging.
///
/// Fails with `GridError::Logging` if a global subscriber is already set.
pub fn init() -> Result<()> {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Console layer - respects RUST_LOG
    let console_layer = fmt::layer()
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    // File layer - always debug level for troubleshooting
    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "grid-core.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| GridError::Logging(e.to_string()))
}
