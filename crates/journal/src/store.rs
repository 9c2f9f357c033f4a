//! The in-memory journal store.

use chrono::Utc;
use jotter_core::journal::{Category, JournalEntry};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::debug;

use crate::query;

/// An append-only journal held in process memory.
///
/// Entries are never updated or removed. Id assignment and append happen
/// under the same write lock, so ids stay strictly increasing even when
/// several requests add entries at once. Share it as `Arc<JournalStore>`.
pub struct JournalStore {
    inner: RwLock<Inner>,
}

struct Inner {
    last_id: u64,
    entries: Vec<JournalEntry>,
}

impl JournalStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                last_id: 0,
                entries: Vec::new(),
            }),
        }
    }

    // Critical sections never panic midway, so a poisoned lock still guards
    // consistent data.
    fn read(&self) -> RwLockReadGuard<'_, Inner> {
        self.inner.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Inner> {
        self.inner.write().unwrap_or_else(|e| e.into_inner())
    }

    /// Append an entry and return a copy of what was stored.
    ///
    /// Duplicate categories are collapsed, keeping first-occurrence order.
    /// An empty category list is stored as-is; defaulting to `note` is the
    /// caller's job (see [`JournalStore::add_note`]).
    pub fn add_entry(
        &self,
        content: impl Into<String>,
        categories: impl IntoIterator<Item = Category>,
    ) -> JournalEntry {
        let mut unique: Vec<Category> = Vec::new();
        for category in categories {
            if !unique.contains(&category) {
                unique.push(category);
            }
        }

        let mut inner = self.write();
        inner.last_id += 1;
        let entry = JournalEntry {
            id: inner.last_id,
            content: content.into(),
            categories: unique,
            created_at: Utc::now(),
        };
        inner.entries.push(entry.clone());
        debug!(id = entry.id, categories = %entry.category_labels(), "Journal entry added");
        entry
    }

    /// Append an entry with the default category set, `{note}`.
    pub fn add_note(&self, content: impl Into<String>) -> JournalEntry {
        self.add_entry(content, [Category::Note])
    }

    /// Run the two-tier keyword query against the current entries.
    pub fn query_entries(&self, keyword: &str) -> Vec<JournalEntry> {
        let inner = self.read();
        let matches = query::query_entries(&inner.entries, keyword);
        debug!(keyword, total = inner.entries.len(), matched = matches.len(), "Journal queried");
        matches
    }

    /// Snapshot of every entry, in insertion order.
    pub fn entries(&self) -> Vec<JournalEntry> {
        self.read().entries.clone()
    }

    pub fn len(&self) -> usize {
        self.read().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().entries.is_empty()
    }
}

impl Default for JournalStore {
    fn default() -> Self {
        Self::new()
    }
}
