//! Journal store for Jotter.
//!
//! An append-only, process-lifetime collection of entries plus the
//! two-tier keyword query the assistant's `query_journal` tool runs.

pub mod query;
pub mod store;

pub use query::query_entries;
pub use store::JournalStore;
