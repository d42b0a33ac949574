//! Platform-specific path utilities.
//!
//! This module provides the directories desktop entries are installed into
//! and the locations of deskentry's own files.

use crate::config::PathsConfig;
use crate::error::{DeskEntryError, Result};
use std::path::{Path, PathBuf};

/// Get the per-user applications directory.
///
/// Returns `~/.local/share/applications` (XDG spec).
pub fn user_apps_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or_else(|| DeskEntryError::Config {
        message: "Could not determine home directory".to_string(),
    })?;
    Ok(home.join(".local").join("share").join("applications"))
}

/// Get the system-wide applications directory.
pub fn system_apps_dir() -> PathBuf {
    PathBuf::from(PathsConfig::SYSTEM_APPS_DIR)
}

/// Get the process temporary directory.
pub fn temp_dir() -> PathBuf {
    std::env::temp_dir()
}

/// Get the deskentry configuration directory.
///
/// Returns `~/.config/deskentry` (XDG_CONFIG_HOME).
pub fn deskentry_config_dir() -> Result<PathBuf> {
    let config_dir = dirs::config_dir().ok_or_else(|| DeskEntryError::Config {
        message: "Could not determine platform config directory".to_string(),
    })?;
    Ok(config_dir.join(PathsConfig::APP_CONFIG_DIR_NAME))
}

/// Get the path to the user settings file.
pub fn settings_path() -> Result<PathBuf> {
    Ok(deskentry_config_dir()?.join(PathsConfig::SETTINGS_FILENAME))
}

/// Check if a command exists in the system PATH.
///
/// A command containing `/` is checked as a path instead.
pub fn command_exists(cmd: &str) -> bool {
    if cmd.contains('/') {
        return Path::new(cmd).is_file();
    }

    std::env::var_os("PATH")
        .map(|paths| std::env::split_paths(&paths).any(|dir| dir.join(cmd).is_file()))
        .unwrap_or(false)
}
