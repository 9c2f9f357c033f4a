//! # Jotter Core
//!
//! Domain types, traits, and error definitions for the Jotter journaling
//! assistant. Every other crate depends inward on this one.
//!
//! - [`journal`]: journal entries and their categories
//! - [`message`]: chat messages and conversations
//! - [`provider`]: the LLM backend abstraction
//! - [`tool`]: tools the model may call, and their registry

pub mod error;
pub mod journal;
pub mod message;
pub mod provider;
pub mod tool;

// Re-export key types at crate root for ergonomics
pub use error::{Error, Result};
pub use journal::{Category, JournalEntry, ParseCategoryError};
pub use message::{Conversation, ConversationId, Message, MessageToolCall, Role};
pub use provider::{Provider, ProviderRequest, ProviderResponse, ToolDefinition, Usage};
pub use tool::{Tool, ToolCall, ToolRegistry, ToolResult};
