//! Error types for the fallible edges of the grid
//!
//! Interaction itself never fails: parse problems fall back to raw text and
//! out-of-range requests are clamped. Errors only come from config files,
//! the system clipboard and logging setup.

use std::path::PathBuf;

/// Errors surfaced to the host
#[derive(Debug, thiserror::Error)]
pub enum GridError {
    #[error("failed to read config at {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write config to {path}: {source}")]
    ConfigWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config YAML: {0}")]
    ConfigFormat(#[from] serde_yaml::Error),

    #[error("no config directory available")]
    NoConfigDir,

    #[error("invalid color {value:?}: {reason}")]
    InvalidColor { value: String, reason: String },

    #[error("clipboard unavailable: {0}")]
    Clipboard(String),

    #[error("logging already initialized: {0}")]
    Logging(String),
}

pub type Result<T> = std::result::Result<T, GridError>;
