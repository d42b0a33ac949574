//! Desktop entry installation.
//!
//! Installs a [`DesktopEntryDocument`](crate::entry::DesktopEntryDocument)
//! into one of three locations:
//! - user menu (`~/.local/share/applications`)
//! - system menu (`/usr/share/applications`, via an elevation helper)
//! - a custom existing directory
//!
//! Every install stages the entry in the temp directory first and copies it
//! from there, so a failed attempt never leaves a half-written file at the
//! destination.
//!
//! # Example
//!
//! ```rust,ignore
//! use deskentry_core::config::Settings;
//! use deskentry_core::entry::{build, LauncherSpec};
//! use deskentry_core::install::{InstallTarget, Installer};
//!
//! fn main() -> deskentry_core::Result<()> {
//!     let installer = Installer::new(&Settings::load_default()?)?;
//!     let doc = build(&LauncherSpec::new("My App", "/opt/my-app/run"))?;
//!     let path = installer.install(&doc, Some(&InstallTarget::User))?;
//!     println!("Installed {}", path.display());
//!     Ok(())
//! }
//! ```

mod elevation;
mod installer;
mod target;

pub use elevation::{render_script, run_elevated, write_script, ElevationSettings};
pub use installer::{InstallPaths, Installer};
pub use target::InstallTarget;
