//! Serialization of a [`LauncherSpec`] into a [`DesktopEntryDocument`].

use super::document::DesktopEntryDocument;
use super::spec::LauncherSpec;
use crate::config::EntryConfig;
use crate::error::{DeskEntryError, Result};

/// Build the desktop entry for `spec`.
///
/// Output order is fixed:
///
/// ```text
/// [Desktop Entry]
/// Version=1.0
/// Name=...
/// Exec=...
/// Icon=...
/// Type=Application
/// Comment=...          (only when set)
/// Terminal=true|false
/// Categories=A;B;      (only when at least one is selected)
/// ```
///
/// # Errors
/// - [`DeskEntryError::MissingField`] when name or exec is blank
/// - [`DeskEntryError::InvalidField`] when a value contains a line break
pub fn build(spec: &LauncherSpec) -> Result<DesktopEntryDocument> {
    if spec.name.trim().is_empty() {
        return Err(DeskEntryError::MissingField { field: "name" });
    }
    if spec.exec.trim().is_empty() {
        return Err(DeskEntryError::MissingField { field: "exec" });
    }

    let icon = spec.icon.as_deref().unwrap_or_default();
    let comment = spec.comment.as_deref().filter(|c| !c.is_empty());

    single_line("name", &spec.name)?;
    single_line("exec", &spec.exec)?;
    single_line("icon", icon)?;
    if let Some(comment) = comment {
        single_line("comment", comment)?;
    }

    let mut entries: Vec<(String, String)> = Vec::with_capacity(8);
    let mut push = |key: &str, value: &str| entries.push((key.to_string(), value.to_string()));

    push("Version", EntryConfig::VERSION);
    push("Name", &spec.name);
    push("Exec", &spec.exec);
    push("Icon", icon);
    push("Type", EntryConfig::ENTRY_TYPE);
    if let Some(comment) = comment {
        push("Comment", comment);
    }
    push("Terminal", if spec.terminal { "true" } else { "false" });

    if !spec.categories.is_empty() {
        let mut categories = String::new();
        for category in &spec.categories {
            categories.push_str(category.as_str());
            categories.push(EntryConfig::LIST_SEPARATOR);
        }
        push("Categories", &categories);
    }

    Ok(DesktopEntryDocument::new(spec.file_name(), entries))
}

fn single_line(field: &'static str, value: &str) -> Result<()> {
    if value.contains(['\n', '\r']) {
        return Err(DeskEntryError::InvalidField {
            field,
            message: "must not contain line breaks".to_string(),
        });
    }
    Ok(())
}
