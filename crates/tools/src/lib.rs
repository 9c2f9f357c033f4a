//! Tools the journaling assistant exposes to the model.
//!
//! Both tools share one `JournalStore`, injected at construction.

pub mod add_journal_entry;
pub mod query_journal;

use jotter_core::tool::ToolRegistry;
use jotter_journal::JournalStore;
use std::sync::Arc;
use tracing::warn;

pub use add_journal_entry::AddJournalEntryTool;
pub use query_journal::QueryJournalTool;

/// Registry holding the add and query tools over `store`.
pub fn journal_registry(store: Arc<JournalStore>) -> ToolRegistry {
    let mut registry = ToolRegistry::new();
    registry.register(Box::new(AddJournalEntryTool::new(store.clone())));
    registry.register(Box::new(QueryJournalTool::new(store)));
    registry
}

/// Structured copy of a tool's result for `ToolResult::data`.
///
/// The text output is what the model sees, so a failed conversion only
/// drops the structured copy.
pub(crate) fn structured_data(
    tool: &str,
    value: serde_json::Result<serde_json::Value>,
) -> Option<serde_json::Value> {
    match value {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(tool, error = %e, "Could not serialize tool result data");
            None
        }
    }
}
