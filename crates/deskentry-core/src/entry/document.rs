//! The serialized desktop entry.

use std::fmt;
use std::fmt::Write as FmtWrite;
use std::fs;
use std::io::Write;
use std::path::Path;

use tracing::debug;

use super::category::Category;
use crate::config::EntryConfig;
use crate::error::{DeskEntryError, Result};

/// An ordered `[Desktop Entry]` document plus the file name it is saved as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesktopEntryDocument {
    file_name: String,
    entries: Vec<(String, String)>,
}

impl DesktopEntryDocument {
    pub(crate) fn new(file_name: String, entries: Vec<(String, String)>) -> Self {
        Self { file_name, entries }
    }

    /// File name under the install directory, e.g. `My_App.desktop`.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Key/value lines in output order, without the group header.
    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    /// Keys in output order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Value of the first line with `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Categories listed on the `Categories=` line, if any.
    ///
    /// Names outside the fixed selection list are skipped.
    pub fn categories(&self) -> Vec<Category> {
        self.get("Categories")
            .map(|value| {
                value
                    .split(EntryConfig::LIST_SEPARATOR)
                    .filter(|s| !s.is_empty())
                    .filter_map(|s| s.parse().ok())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Render the file content. Every line, including the last, ends in `\n`.
    pub fn render(&self) -> String {
        let mut content = String::new();
        // Writing to a String cannot fail.
        let _ = writeln!(content, "{}", EntryConfig::GROUP_HEADER);
        for (key, value) in &self.entries {
            let _ = writeln!(content, "{}={}", key, value);
        }
        content
    }

    /// Parse a desktop file into the lines of its `[Desktop Entry]` group.
    ///
    /// Blank lines and `#` comments are skipped. The first remaining line must
    /// be the `[Desktop Entry]` header; reading stops at the next group header
    /// (e.g. `[Desktop Action new-window]`). Whitespace around `=` is ignored.
    /// The file name is derived from the `Name=` value the same way the
    /// builder derives it.
    pub fn parse(text: &str) -> Result<Self> {
        let mut lines = text
            .lines()
            .enumerate()
            .map(|(index, line)| (index + 1, line))
            .filter(|(_, line)| {
                let trimmed = line.trim_start();
                !trimmed.is_empty() && !trimmed.starts_with('#')
            });

        match lines.next() {
            Some((_, header)) if header.trim() == EntryConfig::GROUP_HEADER => {}
            _ => {
                return Err(DeskEntryError::InvalidField {
                    field: "document",
                    message: format!("missing {} header", EntryConfig::GROUP_HEADER),
                })
            }
        }

        let mut entries = Vec::new();
        for (line_number, line) in lines {
            if line.trim_start().starts_with('[') {
                debug!("Stopped parsing at group {} (line {})", line.trim(), line_number);
                break;
            }
            let (key, value) = line.split_once('=').ok_or_else(|| DeskEntryError::InvalidField {
                field: "document",
                message: format!("line {} is not key=value: {}", line_number, line),
            })?;
            entries.push((key.trim().to_string(), value.trim_start().to_string()));
        }

        let file_name = entries
            .iter()
            .find(|(k, _)| k == "Name")
            .map(|(_, name)| format!("{}.{}", sanitize_file_stem(name), EntryConfig::FILE_EXTENSION))
            .unwrap_or_default();

        Ok(Self { file_name, entries })
    }

    /// Read and parse a document from disk.
    pub fn read_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| DeskEntryError::io_with_path(e, "read desktop file", path))?;
        Self::parse(&content)
    }

    /// Write the rendered document to `path`, replacing any existing file.
    ///
    /// The handle is flushed and dropped before returning on every path.
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        let mut file = fs::File::create(path)
            .map_err(|e| DeskEntryError::io_with_path(e, "create desktop file", path))?;

        file.write_all(self.render().as_bytes())
            .and_then(|()| file.flush())
            .map_err(|e| DeskEntryError::io_with_path(e, "write desktop file", path))?;

        debug!("Wrote desktop entry to {:?}", path);
        Ok(())
    }
}

impl fmt::Display for DesktopEntryDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Spaces and path separators become underscores.
pub(crate) fn sanitize_file_stem(name: &str) -> String {
    name.trim()
        .chars()
        .map(|c| if c == ' ' || c == '/' { '_' } else { c })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample() -> DesktopEntryDocument {
        DesktopEntryDocument::new(
            "Sample_App.desktop".to_string(),
            vec![
                ("Version".to_string(), "1.0".to_string()),
                ("Name".to_string(), "Sample App".to_string()),
                ("Exec".to_string(), "sample --flag=1".to_string()),
                ("Categories".to_string(), "Games;System;".to_string()),
            ],
        )
    }

    #[test]
    fn test_render_ends_every_line_with_newline() {
        let content = sample().render();
        assert_eq!(
            content,
            "[Desktop Entry]\nVersion=1.0\nName=Sample App\nExec=sample --flag=1\nCategories=Games;System;\n"
        );
        assert!(!content.contains("\n\n"));
    }

    #[test]
    fn test_parse_splits_on_first_equals() {
        let doc = DesktopEntryDocument::parse(&sample().render()).unwrap();

        assert_eq!(doc, sample());
        assert_eq!(doc.get("Exec"), Some("sample --flag=1"));
        assert_eq!(doc.categories(), vec![Category::Games, Category::System]);
    }

    #[test]
    fn test_parse_requires_header() {
        let err = DesktopEntryDocument::parse("Name=Nope\n").unwrap_err();
        assert!(matches!(err, DeskEntryError::InvalidField { field: "document", .. }));
    }

    #[test]
    fn test_parse_rejects_non_key_value_line() {
        let err = DesktopEntryDocument::parse("[Desktop Entry]\nName=A\ngarbage\n").unwrap_err();
        match err {
            DeskEntryError::InvalidField { message, .. } => assert!(message.contains("line 3")),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_parse_skips_comments_and_blank_lines() {
        let text = "# Created by vendor installer\n\n[Desktop Entry]\n# launcher\nName=Editor\n\nExec=editor %F\n";
        let doc = DesktopEntryDocument::parse(text).unwrap();

        assert_eq!(doc.keys().collect::<Vec<_>>(), ["Name", "Exec"]);
        assert_eq!(doc.get("Exec"), Some("editor %F"));
        assert_eq!(doc.file_name(), "Editor.desktop");
    }

    #[test]
    fn test_parse_stops_at_next_group() {
        let text = "[Desktop Entry]\nName=Browser\nExec=browser\nActions=new-window;\n\n[Desktop Action new-window]\nName=New Window\nExec=browser --new-window\n";
        let doc = DesktopEntryDocument::parse(text).unwrap();

        assert_eq!(doc.get("Name"), Some("Browser"));
        assert_eq!(doc.get("Exec"), Some("browser"));
        assert_eq!(doc.entries().len(), 3);
    }

    #[test]
    fn test_parse_ignores_spaces_around_equals() {
        let doc = DesktopEntryDocument::parse("[Desktop Entry]\nName = Foo Bar\nExec =foo\n").unwrap();

        assert_eq!(doc.get("Name"), Some("Foo Bar"));
        assert_eq!(doc.get("Exec"), Some("foo"));
        assert_eq!(doc.file_name(), "Foo_Bar.desktop");
    }

    #[test]
    fn test_write_and_read_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("Sample_App.desktop");

        sample().write_to_file(&path).unwrap();
        let doc = DesktopEntryDocument::read_from_file(&path).unwrap();

        assert_eq!(doc.file_name(), "Sample_App.desktop");
        assert_eq!(doc.get("Name"), Some("Sample App"));
    }

    #[test]
    fn test_categories_absent() {
        let doc = DesktopEntryDocument::new("x.desktop".into(), vec![("Name".into(), "x".into())]);
        assert!(doc.categories().is_empty());
    }
}
