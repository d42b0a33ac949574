//! Privileged copy through an external elevation helper.
//!
//! The system applications directory is not writable by a normal user, so
//! the copy is done by a small shell script that the helper (`pkexec` by
//! default) runs as root.

use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::Command;
use std::time::Duration;

use tracing::{debug, info};

use crate::config::{InstallConfig, Settings};
use crate::error::{DeskEntryError, Result};
use crate::platform;

/// How the elevation helper is invoked.
///
/// The command line is `<helper> [helper_args...] <shell> <script>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElevationSettings {
    pub helper: String,
    pub helper_args: Vec<String>,
    pub shell: String,
    /// `None` waits for the helper without a deadline.
    pub timeout: Option<Duration>,
}

impl Default for ElevationSettings {
    fn default() -> Self {
        Self {
            helper: InstallConfig::ELEVATION_HELPER.to_string(),
            helper_args: Vec::new(),
            shell: InstallConfig::ELEVATION_SHELL.to_string(),
            timeout: Some(InstallConfig::ELEVATION_TIMEOUT),
        }
    }
}

impl From<&Settings> for ElevationSettings {
    fn from(settings: &Settings) -> Self {
        let defaults = Self::default();
        Self {
            helper: settings.helper.clone().unwrap_or(defaults.helper),
            helper_args: settings.helper_args.clone().unwrap_or(defaults.helper_args),
            shell: settings.shell.clone().unwrap_or(defaults.shell),
            timeout: settings.timeout(),
        }
    }
}

impl ElevationSettings {
    /// Build the helper command for `script`.
    pub fn command(&self, script: &Path) -> Command {
        let mut command = Command::new(&self.helper);
        command.args(&self.helper_args).arg(&self.shell).arg(script);
        command
    }
}

/// Render the script that copies `temp` to `dest` and removes `temp`.
pub fn render_script(temp: &Path, dest: &Path) -> String {
    let temp = shell_quote(&temp.to_string_lossy());
    let dest = shell_quote(&dest.to_string_lossy());

    format!(
        r#"#!/bin/bash
set -e
cp {temp} {dest}
rm {temp}
"#
    )
}

/// Write the copy script to `script_path` and mark it executable.
///
/// A leftover script from an earlier attempt is replaced.
pub fn write_script(script_path: &Path, temp: &Path, dest: &Path) -> Result<()> {
    if script_path.exists() {
        fs::remove_file(script_path)
            .map_err(|e| DeskEntryError::io_with_path(e, "remove leftover script", script_path))?;
    }

    {
        let mut file = fs::File::create(script_path)
            .map_err(|e| DeskEntryError::io_with_path(e, "create install script", script_path))?;
        file.write_all(render_script(temp, dest).as_bytes())
            .and_then(|()| file.flush())
            .map_err(|e| DeskEntryError::io_with_path(e, "write install script", script_path))?;
    }

    platform::set_executable(script_path)?;

    debug!("Generated install script at {:?}", script_path);
    Ok(())
}

/// Run `script` through the elevation helper and wait for it.
///
/// # Errors
/// - [`DeskEntryError::ElevationFailed`] if the helper cannot be started or
///   does not finish within the timeout
/// - [`DeskEntryError::InstallFailed`] if it exits non-zero
pub fn run_elevated(settings: &ElevationSettings, script: &Path) -> Result<()> {
    info!(
        "Requesting elevated install via {} (timeout: {:?})",
        settings.helper, settings.timeout
    );

    let status = platform::run_with_timeout(
        &mut settings.command(script),
        settings.timeout,
        InstallConfig::PROCESS_POLL_INTERVAL,
    )?;

    if !status.success() {
        return Err(DeskEntryError::InstallFailed {
            code: status.code(),
        });
    }

    Ok(())
}

/// Single-quote `value` for POSIX shells.
fn shell_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', r"'\''"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_render_script_quotes_paths() {
        let script = render_script(
            Path::new("/tmp/My_App.desktop"),
            Path::new("/usr/share/applications/Bob's App.desktop"),
        );

        assert!(script.starts_with("#!/bin/bash\n"));
        assert!(script.contains(
            "cp '/tmp/My_App.desktop' '/usr/share/applications/Bob'\\''s App.desktop'\n"
        ));
        assert!(script.contains("rm '/tmp/My_App.desktop'\n"));
    }

    #[test]
    fn test_write_script_replaces_leftover() {
        let temp_dir = TempDir::new().unwrap();
        let script_path = temp_dir.path().join(InstallConfig::ELEVATION_SCRIPT_NAME);
        fs::write(&script_path, "stale").unwrap();

        write_script(&script_path, Path::new("/tmp/a.desktop"), Path::new("/x/a.desktop")).unwrap();

        let content = fs::read_to_string(&script_path).unwrap();
        assert!(content.contains("cp '/tmp/a.desktop' '/x/a.desktop'"));
        assert!(platform::is_executable(&script_path));
    }

    #[test]
    fn test_command_line() {
        let settings = ElevationSettings {
            helper: "sudo".to_string(),
            helper_args: vec!["-n".to_string()],
            ..ElevationSettings::default()
        };
        let command = settings.command(Path::new("/tmp/move_desktop_file.sh"));

        assert_eq!(command.get_program(), "sudo");
        let args: Vec<_> = command.get_args().collect();
        assert_eq!(args, ["-n", "/bin/bash", "/tmp/move_desktop_file.sh"]);
    }

    #[test]
    fn test_from_settings() {
        let settings = Settings {
            shell: Some("/bin/sh".to_string()),
            timeout_secs: Some(0),
            ..Settings::default()
        };
        let elevation = ElevationSettings::from(&settings);

        assert_eq!(elevation.helper, "pkexec");
        assert_eq!(elevation.shell, "/bin/sh");
        assert_eq!(elevation.timeout, None);
    }
}
