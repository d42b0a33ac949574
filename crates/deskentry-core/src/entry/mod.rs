//! Desktop entry (.desktop file) generation.
//!
//! Turns the fields of a [`LauncherSpec`] into a [`DesktopEntryDocument`]
//! following the XDG Desktop Entry layout, and reads such documents back.
//!
//! # Example
//!
//! ```rust
//! use deskentry_core::entry::{build, Category, LauncherSpec};
//!
//! let spec = LauncherSpec::new("My App", "/opt/my-app/run")
//!     .comment("Runs my app")
//!     .category(Category::Utility);
//!
//! let doc = build(&spec).unwrap();
//! assert_eq!(doc.file_name(), "My_App.desktop");
//! assert_eq!(doc.get("Categories"), Some("Utility;"));
//! ```

mod builder;
mod category;
mod document;
mod spec;

pub use builder::build;
pub use category::Category;
pub use document::DesktopEntryDocument;
pub use spec::LauncherSpec;
