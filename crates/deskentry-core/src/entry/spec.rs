//! The launcher fields collected from the user.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::category::Category;
use super::document::sanitize_file_stem;
use crate::config::EntryConfig;
use crate::error::{DeskEntryError, Result};

/// Fields for one launcher, held for the duration of a single submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LauncherSpec {
    /// Entry name shown in menus.
    pub name: String,
    /// Command or path to run.
    pub exec: String,
    /// Icon name or path.
    #[serde(default)]
    pub icon: Option<String>,
    /// Tooltip text.
    #[serde(default)]
    pub comment: Option<String>,
    /// Whether to run inside a terminal.
    #[serde(default)]
    pub terminal: bool,
    /// Selected menu categories.
    #[serde(default)]
    pub categories: BTreeSet<Category>,
}

impl LauncherSpec {
    pub fn new(name: impl Into<String>, exec: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            exec: exec.into(),
            ..Self::default()
        }
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn terminal(mut self, terminal: bool) -> Self {
        self.terminal = terminal;
        self
    }

    pub fn category(mut self, category: Category) -> Self {
        self.categories.insert(category);
        self
    }

    pub fn categories(mut self, categories: impl IntoIterator<Item = Category>) -> Self {
        self.categories.extend(categories);
        self
    }

    /// Load a spec from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| DeskEntryError::io_with_path(e, "read launcher spec", path))?;
        Ok(serde_json::from_str(&content)?)
    }

    /// File stem derived from the name.
    ///
    /// Spaces become underscores; so do path separators, which keeps the
    /// file inside its install directory.
    pub fn sanitized_name(&self) -> String {
        sanitize_file_stem(&self.name)
    }

    /// `<sanitized-name>.desktop`
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.sanitized_name(), EntryConfig::FILE_EXTENSION)
    }
}
