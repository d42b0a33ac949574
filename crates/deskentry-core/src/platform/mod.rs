//! Platform abstraction layer.
//!
//! All `#[cfg]` blocks for OS-specific behavior live in this module rather
//! than being scattered through the entry and install code.
//!
//! # Architecture
//!
//! - `paths` - Launcher directories, temp and settings locations
//! - `permissions` - Executable bits for generated scripts
//! - `process` - Blocking subprocess execution with a timeout
//!
//! # Supported Platforms
//!
//! - **Linux**: Full support
//! - **Other Unix**: Builds; directory layout follows XDG where present

pub mod paths;
pub mod permissions;
pub mod process;

pub use paths::{
    command_exists, deskentry_config_dir, settings_path, system_apps_dir, temp_dir,
    user_apps_dir,
};
pub use permissions::{is_executable, set_executable};
pub use process::run_with_timeout;

