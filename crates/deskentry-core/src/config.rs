//! Centralized configuration for deskentry.
//!
//! Constants for the desktop entry format and the install process, plus the
//! optional user settings file that overrides the elevation defaults.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{DeskEntryError, Result};

/// Desktop entry format constants.
pub struct EntryConfig;

impl EntryConfig {
    pub const GROUP_HEADER: &'static str = "[Desktop Entry]";
    pub const VERSION: &'static str = "1.0";
    pub const ENTRY_TYPE: &'static str = "Application";
    pub const FILE_EXTENSION: &'static str = "desktop";
    pub const LIST_SEPARATOR: char = ';';
}

/// Configuration for the install process.
pub struct InstallConfig;

impl InstallConfig {
    pub const ELEVATION_HELPER: &'static str = "pkexec";
    pub const ELEVATION_SHELL: &'static str = "/bin/bash";
    pub const ELEVATION_SCRIPT_NAME: &'static str = "move_desktop_file.sh";
    /// Prefix of the per-install staging directory under the temp dir.
    pub const STAGING_PREFIX: &'static str = "deskentry-";
    pub const ELEVATION_TIMEOUT: Duration = Duration::from_secs(300);
    pub const PROCESS_POLL_INTERVAL: Duration = Duration::from_millis(100);
    pub const PROCESS_TERM_GRACE: Duration = Duration::from_secs(2);
}

/// Shared directory and path configurations.
pub struct PathsConfig;

impl PathsConfig {
    pub const SYSTEM_APPS_DIR: &'static str = "/usr/share/applications";
    pub const APP_CONFIG_DIR_NAME: &'static str = "deskentry";
    pub const SETTINGS_FILENAME: &'static str = "settings.json";
}

/// User settings loaded from `settings.json`.
///
/// Every field is optional; anything left out falls back to the
/// [`InstallConfig`] defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Privilege escalation program.
    pub helper: Option<String>,
    /// Extra arguments passed to the helper before the shell.
    pub helper_args: Option<Vec<String>>,
    /// Shell the helper runs the install script with.
    pub shell: Option<String>,
    /// Seconds to wait for the helper; 0 waits forever.
    pub timeout_secs: Option<u64>,
    /// Directory for the temporary entry and script files.
    pub temp_dir: Option<PathBuf>,
}

impl Settings {
    /// Load settings from a file, returning defaults when it does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No settings file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| DeskEntryError::io_with_path(e, "read settings", path))?;
        let settings: Settings = serde_json::from_str(&content)?;

        debug!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load settings from the default per-user location.
    pub fn load_default() -> Result<Self> {
        Self::load(&crate::platform::settings_path()?)
    }

    /// Resolve the helper timeout; `Some(0)` disables it.
    pub fn timeout(&self) -> Option<Duration> {
        match self.timeout_secs {
            Some(0) => None,
            Some(secs) => Some(Duration::from_secs(secs)),
            None => Some(InstallConfig::ELEVATION_TIMEOUT),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_settings_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let settings = Settings::load(&temp_dir.path().join("settings.json")).unwrap();

        assert_eq!(settings, Settings::default());
        assert_eq!(settings.timeout(), Some(InstallConfig::ELEVATION_TIMEOUT));
    }

    #[test]
    fn test_load_partial_settings() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.json");
        fs::write(&path, r#"{ "helper": "sudo", "timeout_secs": 0 }"#).unwrap();

        let settings = Settings::load(&path).unwrap();

        assert_eq!(settings.helper.as_deref(), Some("sudo"));
        assert!(settings.shell.is_none());
        assert_eq!(settings.timeout(), None);
    }

    #[test]
    fn test_malformed_settings_is_json_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.json");
        fs::write(&path, "{ helper = pkexec }").unwrap();

        let err = Settings::load(&path).unwrap_err();
        assert!(matches!(err, DeskEntryError::Json { .. }));
    }

    #[test]
    fn test_timeouts_are_reasonable() {
        assert!(InstallConfig::ELEVATION_TIMEOUT > Duration::from_secs(30));
        assert!(InstallConfig::PROCESS_POLL_INTERVAL < InstallConfig::PROCESS_TERM_GRACE);
    }
}
