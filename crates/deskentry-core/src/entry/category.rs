//! Menu categories offered for generated launchers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DeskEntryError;

/// A main menu category from the fixed selection list.
///
/// Variants are declared in menu order; `Ord` follows that order so a
/// `BTreeSet<Category>` always serializes the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Category {
    Development,
    Games,
    Graphics,
    Internet,
    Office,
    Multimedia,
    Settings,
    System,
    Utility,
}

impl Category {
    /// All categories in menu order.
    pub const ALL: [Category; 9] = [
        Category::Development,
        Category::Games,
        Category::Graphics,
        Category::Internet,
        Category::Office,
        Category::Multimedia,
        Category::Settings,
        Category::System,
        Category::Utility,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Development => "Development",
            Category::Games => "Games",
            Category::Graphics => "Graphics",
            Category::Internet => "Internet",
            Category::Office => "Office",
            Category::Multimedia => "Multimedia",
            Category::Settings => "Settings",
            Category::System => "System",
            Category::Utility => "Utility",
        }
    }
}

impl FromStr for Category {
    type Err = DeskEntryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| DeskEntryError::InvalidField {
                field: "categories",
                message: format!("unknown category '{}'", wanted),
            })
    }
}

impl TryFrom<String> for Category {
    type Error = DeskEntryError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.as_str().to_string()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
