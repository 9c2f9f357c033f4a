//! Query tool: keyword lookup over the journal.

use async_trait::async_trait;
use jotter_core::error::ToolError;
use jotter_core::tool::{Tool, ToolResult};
use jotter_journal::JournalStore;
use std::sync::Arc;
use tracing::debug;

/// Output when the query matches nothing.
pub const NO_MATCHES: &str = "No matching entries found.";

pub struct QueryJournalTool {
    store: Arc<JournalStore>,
}

impl QueryJournalTool {
    pub fn new(store: Arc<JournalStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Tool for QueryJournalTool {
    fn name(&self) -> &str {
        "query_journal"
    }

    fn description(&self) -> &str {
        "Query journal entries by topic. Use this when the user asks to search, find, query, \
         or recall journal entries. Extract the topic/keyword from their query."
    }

    fn parameters_schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "topic": {
                    "type": "string",
                    "description": "Keyword to look for in entry text or category, e.g. 'milk' or 'shopping'"
                }
            },
            "required": ["topic"]
        })
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<ToolResult, ToolError> {
        let topic = arguments["topic"]
            .as_str()
            .ok_or_else(|| ToolError::InvalidArguments("Missing 'topic' argument".into()))?;

        let matches = self.store.query_entries(topic);
        debug!(topic, matched = matches.len(), "query_journal");

        let output = if matches.is_empty() {
            NO_MATCHES.to_string()
        } else {
            matches
                .iter()
                .map(|e| format!("• {}", e.content))
                .collect::<Vec<_>>()
                .join("\n")
        };

        Ok(ToolResult {
            call_id: String::new(),
            success: true,
            output,
            data: crate::structured_data(self.name(), serde_json::to_value(&matches)),
        })
    }
}
