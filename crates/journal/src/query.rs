//! Keyword matching over journal entries.
//!
//! Two tiers, never merged:
//! 1. entries whose content contains the keyword (case-insensitive)
//! 2. only if tier 1 is empty, entries with a category label containing it
//!
//! Both tiers keep insertion order. An empty keyword matches every entry's
//! content, so it returns the whole journal.

use jotter_core::journal::JournalEntry;

/// Find entries relevant to `keyword`.
pub fn query_entries(entries: &[JournalEntry], keyword: &str) -> Vec<JournalEntry> {
    let needle = keyword.to_lowercase();

    let content_hits: Vec<JournalEntry> = entries
        .iter()
        .filter(|e| e.content.to_lowercase().contains(&needle))
        .cloned()
        .collect();
    if !content_hits.is_empty() {
        return content_hits;
    }

    entries
        .iter()
        .filter(|e| e.categories.iter().any(|c| c.as_str().contains(&needle)))
        .cloned()
        .collect()
}
