//! JSON/text API used by the web client.
//!
//! - `POST /api/chat`: run one assistant turn over the client's history
//! - `GET /api/journal?q=`: list or query journal entries

use axum::{
    Json,
    body::Bytes,
    extract::{Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use jotter_core::error::ProviderError;
use jotter_core::journal::JournalEntry;
use jotter_core::message::{Conversation, Message};
use serde::Deserialize;
use serde_json::json;
use tracing::{error, info};

use crate::SharedState;

const INVALID_MESSAGES: &str = "Invalid messages format";

#[derive(Debug, Deserialize)]
struct ChatRequest {
    messages: Vec<ChatMessage>,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    role: ChatRole,
    content: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
enum ChatRole {
    User,
    Assistant,
    System,
}

/// Parse a chat body into conversation messages.
///
/// Client `system` messages are dropped. Returns `None` when the body is
/// not a non-empty `messages` array of `{role, content}` strings with a
/// known role, or when nothing but system messages remain.
fn parse_chat_request(body: &[u8]) -> Option<Vec<Message>> {
    let request: ChatRequest = serde_json::from_slice(body).ok()?;
    let messages: Vec<Message> = request
        .messages
        .into_iter()
        .filter_map(|m| match m.role {
            ChatRole::User => Some(Message::user(m.content)),
            ChatRole::Assistant => Some(Message::assistant(m.content)),
            ChatRole::System => None,
        })
        .collect();

    (!messages.is_empty()).then_some(messages)
}

fn json_error(status: StatusCode, body: serde_json::Value) -> Response {
    (status, Json(body)).into_response()
}

pub(crate) async fn chat_handler(State(state): State<SharedState>, body: Bytes) -> Response {
    let Some(messages) = parse_chat_request(&body) else {
        return json_error(StatusCode::BAD_REQUEST, json!({ "error": INVALID_MESSAGES }));
    };

    let agent = match &state.agent {
        Ok(agent) => agent.clone(),
        Err(e) => {
            error!(error = %e, "Chat request rejected: assistant unavailable");
            let message = match e {
                ProviderError::NotConfigured(msg) => msg.clone(),
                other => other.to_string(),
            };
            return json_error(StatusCode::INTERNAL_SERVER_ERROR, json!({ "error": message }));
        }
    };

    info!(messages = messages.len(), "Chat request received");
    let mut conversation = Conversation::from_messages(messages);

    match agent.process(&mut conversation).await {
        Ok(reply) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            reply,
        )
            .into_response(),
        Err(e) => {
            error!(error = %e, "Assistant turn failed");
            json_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": "Failed to generate response", "details": e.to_string() }),
            )
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct JournalQuery {
    q: Option<String>,
}

pub(crate) async fn journal_handler(
    State(state): State<SharedState>,
    Query(query): Query<JournalQuery>,
) -> Json<Vec<JournalEntry>> {
    let entries = match query.q.as_deref() {
        Some(keyword) => state.journal.query_entries(keyword),
        None => state.journal.entries(),
    };
    Json(entries)
}
