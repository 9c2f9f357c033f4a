//! Journal domain types.
//!
//! An entry is one journaled unit of content, tagged with one or more
//! categories drawn from a fixed set.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What an entry is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Note,
    Reminder,
    Shopping,
}

impl Category {
    /// Every category, in declaration order.
    pub const ALL: [Category; 3] = [Category::Note, Category::Reminder, Category::Shopping];

    /// The wire label for this category.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Note => "note",
            Category::Reminder => "reminder",
            Category::Shopping => "shopping",
        }
    }

    /// All wire labels, in declaration order.
    pub fn labels() -> Vec<&'static str> {
        Self::ALL.iter().map(Category::as_str).collect()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a label is not one of `note`, `reminder`, `shopping`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown journal category '{0}' (expected one of: note, reminder, shopping)")]
pub struct ParseCategoryError(pub String);

impl FromStr for Category {
    type Err = ParseCategoryError;

    /// Labels are matched exactly; the tool schema only ever offers lowercase.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "note" => Ok(Category::Note),
            "reminder" => Ok(Category::Reminder),
            "shopping" => Ok(Category::Shopping),
            other => Err(ParseCategoryError(other.to_string())),
        }
    }
}

/// A single journal entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    /// Store-assigned, strictly increasing, never reused
    pub id: u64,

    /// Free text, stored verbatim
    pub content: String,

    /// Distinct categories, first-occurrence order
    pub categories: Vec<Category>,

    /// When the entry was added
    pub created_at: DateTime<Utc>,
}

impl JournalEntry {
    /// Comma-separated category labels, e.g. `"reminder, shopping"`.
    pub fn category_labels(&self) -> String {
        self.categories
            .iter()
            .map(Category::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}
