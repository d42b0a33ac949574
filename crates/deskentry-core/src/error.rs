//! Error types for deskentry.
//!
//! Every failure of a build or install attempt is reported through
//! [`DeskEntryError`]. None of them are fatal: a caller can surface the
//! message and accept another submission.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the deskentry library.
#[derive(Debug, Error)]
pub enum DeskEntryError {
    // Input errors
    #[error("Missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("Invalid value for {field}: {message}")]
    InvalidField { field: &'static str, message: String },

    #[error("Invalid install directory: {0:?}")]
    InvalidPath(PathBuf),

    #[error("No installation location selected")]
    NoTargetSelected,

    // File system errors
    #[error("IO error at {path:?}: {message}")]
    Io {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    // Privilege escalation errors
    #[error("Failed to execute privilege escalation command: {reason}")]
    ElevationFailed { reason: String },

    #[error("Failed to move the file ({}); check permissions", describe_exit(.code))]
    InstallFailed { code: Option<i32> },

    // Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: Option<serde_json::Error>,
    },
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit status {}", code),
        None => "terminated by signal".to_string(),
    }
}

/// Result type alias for deskentry operations.
pub type Result<T> = std::result::Result<T, DeskEntryError>;

impl From<std::io::Error> for DeskEntryError {
    fn from(err: std::io::Error) -> Self {
        DeskEntryError::Io {
            message: err.to_string(),
            path: None,
            source: Some(err),
        }
    }
}

impl From<serde_json::Error> for DeskEntryError {
    fn from(err: serde_json::Error) -> Self {
        DeskEntryError::Json {
            message: err.to_string(),
            source: Some(err),
        }
    }
}

impl DeskEntryError {
    /// Create an IO error with an operation description and path context.
    pub fn io_with_path(
        err: std::io::Error,
        message: impl Into<String>,
        path: impl Into<PathBuf>,
    ) -> Self {
        DeskEntryError::Io {
            message: message.into(),
            path: Some(path.into()),
            source: Some(err),
        }
    }

    /// Short title for a user-facing notification.
    pub fn title(&self) -> &'static str {
        match self {
            DeskEntryError::MissingField { .. } => "Missing Information",
            DeskEntryError::InvalidField { .. } => "Invalid Information",
            DeskEntryError::InvalidPath(_) => "Invalid Custom Path",
            DeskEntryError::NoTargetSelected => "No Location Selected",
            _ => "Error",
        }
    }

    /// Process exit code for command-line front ends.
    ///
    /// - 2: missing or invalid input
    /// - 3: invalid install path
    /// - 4: filesystem or configuration failure
    /// - 5: privilege escalation could not run
    /// - 6: privileged install reported failure
    pub fn exit_code(&self) -> i32 {
        match self {
            DeskEntryError::MissingField { .. }
            | DeskEntryError::InvalidField { .. }
            | DeskEntryError::NoTargetSelected => 2,

            DeskEntryError::InvalidPath(_) => 3,

            DeskEntryError::Io { .. }
            | DeskEntryError::Config { .. }
            | DeskEntryError::Json { .. } => 4,

            DeskEntryError::ElevationFailed { .. } => 5,

            DeskEntryError::InstallFailed { .. } => 6,
        }
    }
}
