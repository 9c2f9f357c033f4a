//! The assistant reasoning loop.

use jotter_config::AppConfig;
use jotter_core::error::ToolError;
use jotter_core::message::{Conversation, Message, Role};
use jotter_core::provider::{Provider, ProviderRequest};
use jotter_core::tool::{ToolCall, ToolRegistry};
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::prompt::{FALLBACK_REPLY, SYSTEM_PROMPT};

/// Orchestrates model calls and journal tool execution for one turn.
pub struct AgentLoop {
    provider: Arc<dyn Provider>,

    model: String,

    temperature: f32,

    /// Max output tokens per model call
    max_tokens: Option<u32>,

    tools: Arc<ToolRegistry>,

    system_prompt: String,

    /// Maximum model calls per turn
    max_iterations: u32,
}

impl AgentLoop {
    pub fn new(
        provider: Arc<dyn Provider>,
        model: impl Into<String>,
        temperature: f32,
        tools: Arc<ToolRegistry>,
    ) -> Self {
        Self {
            provider,
            model: model.into(),
            temperature,
            max_tokens: None,
            tools,
            system_prompt: SYSTEM_PROMPT.to_string(),
            max_iterations: 5,
        }
    }

    /// Build a loop with model, sampling and limits taken from `config`.
    pub fn from_config(
        config: &AppConfig,
        provider: Arc<dyn Provider>,
        tools: Arc<ToolRegistry>,
    ) -> Self {
        let agent = Self::new(provider, &config.model, config.temperature, tools)
            .with_max_tokens(config.max_tokens)
            .with_max_iterations(config.assistant.max_iterations);

        match &config.assistant.system_prompt_override {
            Some(prompt) => agent.with_system_prompt(prompt),
            None => agent,
        }
    }

    pub fn with_max_iterations(mut self, max: u32) -> Self {
        self.max_iterations = max;
        self
    }

    pub fn with_max_tokens(mut self, max: u32) -> Self {
        self.max_tokens = Some(max);
        self
    }

    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = prompt.into();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Run one turn over `conversation` and return the reply text.
    ///
    /// The conversation is extended in place with the system prompt, every
    /// assistant message and every tool result. Tool failures are reported
    /// to the model as `Error: ...` results; provider failures end the turn.
    pub async fn process(
        &self,
        conversation: &mut Conversation,
    ) -> jotter_core::Result<String> {
        info!(
            conversation_id = %conversation.id,
            messages = conversation.messages.len(),
            "Processing conversation"
        );
        if let Some(last) = conversation.last_user_message() {
            debug!(conversation_id = %conversation.id, input = %last.content, "Latest user input");
        }

        // The system prompt is always ours and always first
        conversation.messages.retain(|m| m.role != Role::System);
        conversation
            .messages
            .insert(0, Message::system(&self.system_prompt));

        let tool_definitions = self.tools.definitions();
        let mut tool_outputs: Vec<String> = Vec::new();

        for iteration in 1..=self.max_iterations {
            debug!(
                conversation_id = %conversation.id,
                iteration,
                "Agent loop iteration"
            );

            let request = ProviderRequest {
                model: self.model.clone(),
                messages: conversation.messages.clone(),
                temperature: self.temperature,
                max_tokens: self.max_tokens,
                tools: tool_definitions.clone(),
                stop: vec![],
            };

            let response = self.provider.complete(request).await?;

            if let Some(usage) = &response.usage {
                debug!(
                    model = %response.model,
                    prompt_tokens = usage.prompt_tokens,
                    completion_tokens = usage.completion_tokens,
                    "Model usage"
                );
            }

            if response.message.tool_calls.is_empty() {
                let reply = resolve_reply(&response.message.content, &tool_outputs);
                conversation.push(response.message);
                return Ok(reply);
            }

            debug!(
                tool_count = response.message.tool_calls.len(),
                "Executing tool calls"
            );

            let tool_calls = response.message.tool_calls.clone();
            conversation.push(response.message);

            for tc in &tool_calls {
                let arguments = match parse_arguments(&tc.arguments) {
                    Ok(arguments) => arguments,
                    Err(e) => {
                        warn!(tool = %tc.name, error = %e, "Malformed tool arguments");
                        conversation.push(Message::tool_result(&tc.id, format!("Error: {e}")));
                        continue;
                    }
                };
                let call = ToolCall {
                    id: tc.id.clone(),
                    name: tc.name.clone(),
                    arguments,
                };

                match self.tools.execute(&call).await {
                    Ok(result) => {
                        debug!(tool = %tc.name, success = result.success, "Tool executed");
                        conversation.push(Message::tool_result(&tc.id, &result.output));
                        if result.success {
                            tool_outputs.push(result.output);
                        }
                    }
                    Err(e) => {
                        warn!(tool = %tc.name, error = %e, "Tool execution failed");
                        conversation.push(Message::tool_result(&tc.id, format!("Error: {e}")));
                    }
                }
            }
        }

        warn!(
            conversation_id = %conversation.id,
            max_iterations = self.max_iterations,
            "Max iterations reached without a final answer"
        );
        Ok(resolve_reply("", &tool_outputs))
    }
}

/// Decode the JSON argument string of a model tool call.
///
/// An empty string means the call had no arguments.
fn parse_arguments(raw: &str) -> Result<serde_json::Value, ToolError> {
    if raw.trim().is_empty() {
        return Ok(serde_json::Value::Object(serde_json::Map::new()));
    }
    serde_json::from_str(raw).map_err(|e| ToolError::InvalidArguments(e.to_string()))
}

/// Pick the text returned to the user at the end of a turn.
///
/// The model's own text wins when it is non-blank. Otherwise the non-blank
/// tool outputs of the turn are joined by newlines, and if there are none
/// the fixed apology is used. The result is never empty.
pub fn resolve_reply(model_text: &str, tool_outputs: &[String]) -> String {
    let text = model_text.trim();
    if !text.is_empty() {
        return text.to_string();
    }

    let joined = tool_outputs
        .iter()
        .map(|o| o.trim())
        .filter(|o| !o.is_empty())
        .collect::<Vec<_>>()
        .join("\n");
    if !joined.is_empty() {
        return joined;
    }

    warn!("Assistant produced no text output");
    FALLBACK_REPLY.to_string()
}
