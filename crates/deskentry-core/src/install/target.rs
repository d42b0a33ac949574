//! Install location selection.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::{DeskEntryError, Result};

/// Where a desktop entry gets installed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallTarget {
    /// `~/.local/share/applications`
    User,
    /// `/usr/share/applications`, written through the elevation helper
    System,
    /// An existing directory chosen by the user
    Custom(PathBuf),
}

impl InstallTarget {
    /// Map a front-end selection to a target.
    ///
    /// `None` means nothing was selected and yields `Ok(None)`; the installer
    /// reports that as [`DeskEntryError::NoTargetSelected`]. `custom` without a
    /// directory yields an empty path, which the installer rejects.
    pub fn from_selection(kind: Option<&str>, custom_dir: Option<&Path>) -> Result<Option<Self>> {
        let Some(kind) = kind else {
            return Ok(None);
        };

        match kind.trim().to_lowercase().as_str() {
            "user" => Ok(Some(InstallTarget::User)),
            "system" => Ok(Some(InstallTarget::System)),
            "custom" => Ok(Some(InstallTarget::Custom(
                custom_dir.map(Path::to_path_buf).unwrap_or_default(),
            ))),
            other => Err(DeskEntryError::InvalidField {
                field: "target",
                message: format!("unknown install target '{}' (expected user, system or custom)", other),
            }),
        }
    }

    /// Whether writing to this target needs the elevation helper.
    pub fn requires_elevation(&self) -> bool {
        matches!(self, InstallTarget::System)
    }

    /// Location phrase used in success messages.
    pub fn description(&self) -> &'static str {
        match self {
            InstallTarget::User => "user-only location",
            InstallTarget::System => "system-wide",
            InstallTarget::Custom(_) => "custom location",
        }
    }
}

impl fmt::Display for InstallTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InstallTarget::User => f.write_str("user"),
            InstallTarget::System => f.write_str("system"),
            InstallTarget::Custom(dir) => write!(f, "custom ({})", dir.display()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_selection() {
        assert_eq!(InstallTarget::from_selection(None, None).unwrap(), None);
    }

    #[test]
    fn test_selection_kinds() {
        assert_eq!(
            InstallTarget::from_selection(Some("User"), None).unwrap(),
            Some(InstallTarget::User)
        );
        assert_eq!(
            InstallTarget::from_selection(Some("system"), None).unwrap(),
            Some(InstallTarget::System)
        );
        assert_eq!(
            InstallTarget::from_selection(Some("custom"), Some(Path::new("/srv/apps"))).unwrap(),
            Some(InstallTarget::Custom(PathBuf::from("/srv/apps")))
        );
    }

    #[test]
    fn test_custom_without_dir_is_empty_path() {
        assert_eq!(
            InstallTarget::from_selection(Some("custom"), None).unwrap(),
            Some(InstallTarget::Custom(PathBuf::new()))
        );
    }

    #[test]
    fn test_unknown_kind() {
        let err = InstallTarget::from_selection(Some("desktop"), None).unwrap_err();
        assert!(matches!(err, DeskEntryError::InvalidField { field: "target", .. }));
    }

    #[test]
    fn test_requires_elevation() {
        assert!(InstallTarget::System.requires_elevation());
        assert!(!InstallTarget::User.requires_elevation());
        assert!(!InstallTarget::Custom(PathBuf::from("/tmp")).requires_elevation());
    }
}
