//! deskentry core - build and install Linux `.desktop` launchers.
//!
//! The crate has two halves that are called one after the other:
//! - [`entry`] turns a [`LauncherSpec`] into a [`DesktopEntryDocument`]
//! - [`install`] writes that document to the user, system, or a custom
//!   applications directory
//!
//! No GUI is involved; a front end supplies the fields and shows the
//! resulting message.
//!
//! # Example
//!
//! ```rust,ignore
//! use deskentry_core::{Category, InstallTarget, Installer, LauncherSpec, Settings};
//!
//! fn main() -> deskentry_core::Result<()> {
//!     let installer = Installer::new(&Settings::load_default()?)?;
//!     let spec = LauncherSpec::new("Terminal Notes", "notes")
//!         .terminal(true)
//!         .category(Category::Utility);
//!
//!     let path = installer.create(&spec, Some(&InstallTarget::User))?;
//!     println!("Created {}", path.display());
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod entry;
pub mod error;
pub mod install;
pub mod platform;

pub use config::Settings;
pub use entry::{build, Category, DesktopEntryDocument, LauncherSpec};
pub use error::{DeskEntryError, Result};
pub use install::{ElevationSettings, InstallPaths, InstallTarget, Installer};
