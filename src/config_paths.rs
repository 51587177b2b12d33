//! Configuration paths for grid-core
//!
//! All config files live under:
//! - Unix/macOS: `~/.config/grid-core/`
//! - Windows: `%APPDATA%\grid-core\`

use std::{
    env, fs,
    path::{Path, PathBuf},
};

use crate::error::{GridError, Result};

const APP_DIR: &str = "grid-core";

/// Base config directory
///
/// Unix/macOS:
///   - If XDG_CONFIG_HOME is set: `$XDG_CONFIG_HOME/grid-core`
///   - Else: `~/.config/grid-core`
///
/// Windows:
///   - `%APPDATA%\grid-core`
pub fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        env::var("APPDATA")
            .ok()
            .map(|appdata| PathBuf::from(appdata).join(APP_DIR))
    }

    #[cfg(not(target_os = "windows"))]
    {
        env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
            .map(|config| config.join(APP_DIR))
    }
}

/// `~/.config/grid-core/config.yaml`
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.yaml"))
}

/// `~/.config/grid-core/logs/`
pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("logs"))
}

fn ensure_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|source| GridError::ConfigWrite {
        path: path.to_path_buf(),
        source,
    })
}

/// Ensure logs dir exists, returning it
pub fn ensure_logs_dir() -> Result<PathBuf> {
    let logs = logs_dir().ok_or(GridError::NoConfigDir)?;
    ensure_dir(&logs)?;
    Ok(logs)
}
