//! The journaling assistant loop.
//!
//! The agent follows a **Plan → Act → Observe** cycle:
//!
//! 1. **Build context** (system prompt + client conversation)
//! 2. **Send to the model** with the journal tool declarations
//! 3. **If tool calls**: run them against the journal, append results, go to 2
//! 4. **If text**: resolve the final reply and return it
//!
//! The loop stops when the model answers without tool calls or the
//! iteration limit is reached.

pub mod loop_runner;
pub mod prompt;

pub use loop_runner::{AgentLoop, resolve_reply};
pub use prompt::{FALLBACK_REPLY, OFF_TOPIC_REPLY, SYSTEM_PROMPT};
