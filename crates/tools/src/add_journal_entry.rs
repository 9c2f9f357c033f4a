//! Add-entry tool: stores a reminder, note or shopping item.

use async_trait::async_trait;
use jotter_core::error::ToolError;
use jotter_core::journal::Category;
use jotter_core::tool::{Tool, ToolResult};
use jotter_journal::JournalStore;
use std::sync::Arc;
use tracing::info;

pub struct AddJournalEntryTool {
    store: Arc<JournalStore>,
}

impl AddJournalEntryTool {
    pub fn new(store: Arc<JournalStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Tool for AddJournalEntryTool {
    fn name(&self) -> &str {
        "add_journal_entry"
    }

    fn description(&self) -> &str {
        "Add a new entry to the journal. Use this when the user wants to set a reminder, \
         save a note, or add shopping items. Provide all relevant categories (you can select multiple)."
    }

    fn parameters_schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "content": {
                    "type": "string",
                    "description": "The text of the entry, e.g. 'Call mom tomorrow'"
                },
                "categories": {
                    "type": "array",
                    "items": {
                        "type": "string",
                        "enum": Category::labels()
                    },
                    "minItems": 1,
                    "description": "Select at least one category"
                }
            },
            "required": ["content", "categories"]
        })
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<ToolResult, ToolError> {
        let content = arguments["content"]
            .as_str()
            .ok_or_else(|| ToolError::InvalidArguments("Missing 'content' argument".into()))?;

        let labels = arguments["categories"]
            .as_array()
            .ok_or_else(|| ToolError::InvalidArguments("Missing 'categories' argument".into()))?;
        if labels.is_empty() {
            return Err(ToolError::InvalidArguments(
                "Select at least one category".into(),
            ));
        }

        let categories = labels
            .iter()
            .map(|v| {
                v.as_str()
                    .ok_or_else(|| ToolError::InvalidArguments(format!("Category must be a string, got {v}")))?
                    .parse::<Category>()
                    .map_err(|e| ToolError::InvalidArguments(e.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let entry = self.store.add_entry(content, categories);
        info!(id = entry.id, categories = %entry.category_labels(), "Journal entry added by model");

        Ok(ToolResult {
            call_id: String::new(),
            success: true,
            output: format!("Added {} entry: \"{}\"", entry.category_labels(), entry.content),
            data: crate::structured_data(self.name(), serde_json::to_value(&entry)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tool() -> (AddJournalEntryTool, Arc<JournalStore>) {
        let store = Arc::new(JournalStore::new());
        (AddJournalEntryTool::new(store.clone()), store)
    }

    #[tokio::test]
    async fn adds_reminder() {
        let (tool, store) = tool();
        let result = tool
            .execute(serde_json::json!({"content": "Call mom", "categories": ["reminder"]}))
            .await
            .unwrap();

        assert!(result.success);
        assert_eq!(result.output, "Added reminder entry: \"Call mom\"");
        assert_eq!(result.data.unwrap()["id"], 1);
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn multiple_categories_are_joined() {
        let (tool, store) = tool();
        let result = tool
            .execute(serde_json::json!({
                "content": "Buy a birthday card",
                "categories": ["shopping", "reminder", "shopping"]
            }))
            .await
            .unwrap();

        assert_eq!(result.output, "Added shopping, reminder entry: \"Buy a birthday card\"");
        assert_eq!(
            store.entries()[0].categories,
            vec![Category::Shopping, Category::Reminder]
        );
    }

    #[tokio::test]
    async fn empty_categories_rejected() {
        let (tool, store) = tool();
        let err = tool
            .execute(serde_json::json!({"content": "x", "categories": []}))
            .await
            .unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments(_)));
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn unknown_category_rejected() {
        let (tool, store) = tool();
        let err = tool
            .execute(serde_json::json!({"content": "x", "categories": ["note", "todo"]}))
            .await
            .unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments(ref m) if m.contains("todo")));
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn missing_content_rejected() {
        let (tool, _) = tool();
        let err = tool
            .execute(serde_json::json!({"categories": ["note"]}))
            .await
            .unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments(_)));
    }

    #[test]
    fn schema_lists_every_category() {
        let (tool, _) = tool();
        let schema = tool.parameters_schema();
        assert_eq!(
            schema["properties"]["categories"]["items"]["enum"],
            serde_json::json!(["note", "reminder", "shopping"])
        );
        assert_eq!(schema["properties"]["categories"]["minItems"], 1);
    }
}
