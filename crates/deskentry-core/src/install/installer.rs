//! Installing a built desktop entry into its target directory.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use tracing::{debug, info, warn};

use super::elevation::{self, ElevationSettings};
use super::target::InstallTarget;
use crate::config::{InstallConfig, Settings};
use crate::entry::{self, DesktopEntryDocument, LauncherSpec};
use crate::error::{DeskEntryError, Result};
use crate::platform;

/// Directories the installer reads from and writes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallPaths {
    /// Where the entry and the elevation script are staged.
    pub temp_dir: PathBuf,
    /// Destination for [`InstallTarget::User`].
    pub user_apps_dir: PathBuf,
    /// Destination for [`InstallTarget::System`].
    pub system_apps_dir: PathBuf,
}

impl InstallPaths {
    /// Resolve the platform default directories.
    pub fn detect() -> Result<Self> {
        Ok(Self {
            temp_dir: platform::temp_dir(),
            user_apps_dir: platform::user_apps_dir()?,
            system_apps_dir: platform::system_apps_dir(),
        })
    }
}

/// Writes desktop entries to user, system, or custom locations.
#[derive(Debug, Clone)]
pub struct Installer {
    paths: InstallPaths,
    elevation: ElevationSettings,
}

impl Installer {
    /// Create an installer using platform directories and `settings`.
    pub fn new(settings: &Settings) -> Result<Self> {
        let mut paths = InstallPaths::detect()?;
        if let Some(temp_dir) = &settings.temp_dir {
            paths.temp_dir = temp_dir.clone();
        }
        Ok(Self::with_paths(paths, ElevationSettings::from(settings)))
    }

    /// Create an installer with explicit directories.
    pub fn with_paths(paths: InstallPaths, elevation: ElevationSettings) -> Self {
        Self { paths, elevation }
    }

    pub fn paths(&self) -> &InstallPaths {
        &self.paths
    }

    pub fn elevation(&self) -> &ElevationSettings {
        &self.elevation
    }

    /// Create a private staging directory under the temp directory.
    ///
    /// The directory is only accessible to the current user and is removed
    /// when the returned handle is dropped.
    pub fn staging_dir(&self) -> Result<TempDir> {
        tempfile::Builder::new()
            .prefix(InstallConfig::STAGING_PREFIX)
            .tempdir_in(&self.paths.temp_dir)
            .map_err(|e| {
                DeskEntryError::io_with_path(e, "create staging directory", &self.paths.temp_dir)
            })
    }

    /// Resolve where `doc` would be installed, without touching any file.
    ///
    /// # Errors
    /// - [`DeskEntryError::NoTargetSelected`] when `target` is `None`
    /// - [`DeskEntryError::InvalidPath`] for a custom directory that is empty
    ///   or does not exist
    pub fn destination_for(
        &self,
        doc: &DesktopEntryDocument,
        target: Option<&InstallTarget>,
    ) -> Result<PathBuf> {
        let dir = match target.ok_or(DeskEntryError::NoTargetSelected)? {
            InstallTarget::User => &self.paths.user_apps_dir,
            InstallTarget::System => &self.paths.system_apps_dir,
            InstallTarget::Custom(dir) => {
                if dir.as_os_str().is_empty() || !dir.is_dir() {
                    return Err(DeskEntryError::InvalidPath(dir.clone()));
                }
                dir
            }
        };
        Ok(dir.join(doc.file_name()))
    }

    /// Build `spec` and install it.
    pub fn create(&self, spec: &LauncherSpec, target: Option<&InstallTarget>) -> Result<PathBuf> {
        let doc = entry::build(spec)?;
        self.install(&doc, target)
    }

    /// Install `doc` to `target`, returning the final path.
    ///
    /// Target validation happens before any file is written. The temp file
    /// (and the elevation script, for system installs) is staged in a fresh
    /// private directory that is removed on success and, best effort, on
    /// failure.
    pub fn install(
        &self,
        doc: &DesktopEntryDocument,
        target: Option<&InstallTarget>,
    ) -> Result<PathBuf> {
        let target = target.ok_or(DeskEntryError::NoTargetSelected)?;
        let destination = self.destination_for(doc, Some(target))?;

        let staging = self.staging_dir()?;
        let temp_path = staging.path().join(doc.file_name());

        let result = doc.write_to_file(&temp_path).and_then(|()| match target {
            InstallTarget::User => self.install_user(&temp_path, &destination),
            InstallTarget::Custom(_) => copy_replacing(&temp_path, &destination),
            InstallTarget::System => self.install_elevated(staging.path(), &temp_path, &destination),
        });

        close_staging(staging);

        result?;
        info!("Installed {} ({})", destination.display(), target);
        Ok(destination)
    }

    fn install_user(&self, temp_path: &Path, destination: &Path) -> Result<()> {
        let apps_dir = &self.paths.user_apps_dir;
        if !apps_dir.is_dir() {
            fs::create_dir_all(apps_dir).map_err(|e| {
                DeskEntryError::io_with_path(e, "create applications directory", apps_dir)
            })?;
            debug!("Created {:?}", apps_dir);
        }
        copy_replacing(temp_path, destination)
    }

    fn install_elevated(&self, staging: &Path, temp_path: &Path, destination: &Path) -> Result<()> {
        let script_path = staging.join(InstallConfig::ELEVATION_SCRIPT_NAME);
        elevation::write_script(&script_path, temp_path, destination)?;
        elevation::run_elevated(&self.elevation, &script_path)
    }
}

/// Replace `destination` with a copy of `source`.
fn copy_replacing(source: &Path, destination: &Path) -> Result<()> {
    if destination.exists() {
        fs::remove_file(destination)
            .map_err(|e| DeskEntryError::io_with_path(e, "remove existing desktop file", destination))?;
    }

    fs::copy(source, destination)
        .map_err(|e| DeskEntryError::io_with_path(e, "copy desktop file", destination))?;

    debug!("Copied {:?} to {:?}", source, destination);
    Ok(())
}

/// Remove the staging directory along with the temp file and script.
fn close_staging(staging: TempDir) {
    let path = staging.path().to_path_buf();
    match staging.close() {
        Ok(()) => debug!("Removed {:?}", path),
        Err(e) => warn!("Failed to clean up {}: {}", path.display(), e),
    }
}
