//! End-to-end tests for the journaling assistant.
//!
//! These run the full pipeline (gateway → assistant loop → tools → journal)
//! against a scripted model, so no network access or API key is needed.

use std::sync::{Arc, Mutex};

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use jotter_agent::{AgentLoop, FALLBACK_REPLY, OFF_TOPIC_REPLY};
use jotter_core::error::ProviderError;
use jotter_core::message::{Conversation, Message, MessageToolCall, Role};
use jotter_core::provider::{Provider, ProviderRequest, ProviderResponse, Usage};
use jotter_gateway::{GatewayState, build_router};
use jotter_journal::JournalStore;
use jotter_tools::journal_registry;
use tower::ServiceExt;

// ── Scripted Provider ────────────────────────────────────────────────────

/// A provider that returns scripted responses in sequence and keeps every
/// request it saw.
struct ScriptedProvider {
    responses: Mutex<Vec<ProviderResponse>>,
    seen: Mutex<Vec<ProviderRequest>>,
}

impl ScriptedProvider {
    fn new(responses: Vec<ProviderResponse>) -> Self {
        Self {
            responses: Mutex::new(responses),
            seen: Mutex::new(Vec::new()),
        }
    }

    fn calls(&self) -> usize {
        self.seen.lock().unwrap().len()
    }

    fn request(&self, idx: usize) -> ProviderRequest {
        self.seen.lock().unwrap()[idx].clone()
    }
}

#[async_trait::async_trait]
impl Provider for ScriptedProvider {
    fn name(&self) -> &str {
        "e2e_mock"
    }

    async fn complete(&self, request: ProviderRequest) -> Result<ProviderResponse, ProviderError> {
        let idx = {
            let mut seen = self.seen.lock().unwrap();
            seen.push(request);
            seen.len() - 1
        };
        let responses = self.responses.lock().unwrap();
        match responses.get(idx) {
            Some(resp) => Ok(resp.clone()),
            None => panic!(
                "ScriptedProvider exhausted: call #{idx}, have {}",
                responses.len()
            ),
        }
    }
}

fn text_response(text: &str) -> ProviderResponse {
    ProviderResponse {
        message: Message::assistant(text),
        usage: Some(Usage {
            prompt_tokens: 10,
            completion_tokens: 5,
            total_tokens: 15,
        }),
        model: "mock".into(),
        finish_reason: Some("STOP".into()),
    }
}

fn tool_response(tool_calls: Vec<MessageToolCall>) -> ProviderResponse {
    let mut msg = Message::assistant("");
    msg.tool_calls = tool_calls;
    ProviderResponse {
        message: msg,
        usage: None,
        model: "mock".into(),
        finish_reason: Some("STOP".into()),
    }
}

fn add_call(id: &str, content: &str, categories: &[&str]) -> MessageToolCall {
    MessageToolCall {
        id: id.into(),
        name: "add_journal_entry".into(),
        arguments: serde_json::json!({ "content": content, "categories": categories }).to_string(),
        signature: None,
    }
}

fn query_call(id: &str, topic: &str) -> MessageToolCall {
    MessageToolCall {
        id: id.into(),
        name: "query_journal".into(),
        arguments: serde_json::json!({ "topic": topic }).to_string(),
        signature: None,
    }
}

struct Harness {
    journal: Arc<JournalStore>,
    provider: Arc<ScriptedProvider>,
    agent: AgentLoop,
}

fn harness(responses: Vec<ProviderResponse>) -> Harness {
    let journal = Arc::new(JournalStore::new());
    let provider = Arc::new(ScriptedProvider::new(responses));
    let agent = AgentLoop::new(
        provider.clone(),
        "mock",
        0.7,
        Arc::new(journal_registry(journal.clone())),
    );
    Harness {
        journal,
        provider,
        agent,
    }
}

async fn say(agent: &AgentLoop, text: &str) -> String {
    let mut conv = Conversation::new();
    conv.push(Message::user(text));
    agent.process(&mut conv).await.unwrap()
}

// ── Assistant pipeline ───────────────────────────────────────────────────

#[tokio::test]
async fn e2e_reminder_is_stored_and_confirmed() {
    let h = harness(vec![
        tool_response(vec![add_call("call_1", "Call mom", &["reminder"])]),
        text_response("Reminder set: Call mom"),
    ]);

    let reply = say(&h.agent, "Remind me to call mom").await;

    assert_eq!(reply, "Reminder set: Call mom");
    let entries = h.journal.entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].id, 1);
    assert_eq!(entries[0].content, "Call mom");
    assert_eq!(h.provider.calls(), 2);
}

#[tokio::test]
async fn e2e_shopping_then_recall_by_category() {
    let h = harness(vec![
        tool_response(vec![add_call("call_1", "Buy milk", &["shopping"])]),
        text_response(""),
        tool_response(vec![query_call("call_2", "shopping")]),
        text_response(""),
    ]);

    let added = say(&h.agent, "Add milk to my shopping list").await;
    assert_eq!(added, "Added shopping entry: \"Buy milk\"");

    let recalled = say(&h.agent, "What's on my shopping list?").await;
    assert_eq!(recalled, "• Buy milk");

    // The model observed the query output before answering
    let observe = h.provider.request(3);
    let tool_msg = observe
        .messages
        .iter()
        .find(|m| m.role == Role::Tool)
        .unwrap();
    assert_eq!(tool_msg.content, "• Buy milk");
}

#[tokio::test]
async fn e2e_parallel_tool_calls_in_one_step() {
    let h = harness(vec![
        tool_response(vec![
            add_call("call_a", "Eggs", &["shopping"]),
            add_call("call_b", "Dentist at 3pm", &["reminder", "note"]),
        ]),
        text_response(""),
    ]);

    let reply = say(&h.agent, "Buy eggs, and remind me about the dentist at 3pm").await;

    assert_eq!(
        reply,
        "Added shopping entry: \"Eggs\"\nAdded reminder, note entry: \"Dentist at 3pm\""
    );
    let ids: Vec<u64> = h.journal.entries().iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![1, 2]);
}

#[tokio::test]
async fn e2e_query_with_no_matches() {
    let h = harness(vec![
        tool_response(vec![query_call("call_1", "nonexistent-keyword-xyz")]),
        text_response(""),
    ]);
    h.journal.add_note("Something else");

    let reply = say(&h.agent, "Find entries about nonexistent-keyword-xyz").await;
    assert_eq!(reply, "No matching entries found.");
}

#[tokio::test]
async fn e2e_off_topic_request_touches_nothing() {
    let h = harness(vec![text_response(OFF_TOPIC_REPLY)]);

    let reply = say(&h.agent, "What is the capital of France?").await;

    assert_eq!(reply, OFF_TOPIC_REPLY);
    assert!(h.journal.is_empty());
}

#[tokio::test]
async fn e2e_invalid_tool_arguments_recover() {
    let h = harness(vec![
        tool_response(vec![add_call("call_1", "Mystery", &["groceries"])]),
        tool_response(vec![add_call("call_2", "Mystery", &["shopping"])]),
        text_response(""),
    ]);

    let reply = say(&h.agent, "Add mystery item").await;

    assert_eq!(reply, "Added shopping entry: \"Mystery\"");
    assert_eq!(h.journal.len(), 1);

    let retry = h.provider.request(1);
    let error_msg = retry
        .messages
        .iter()
        .find(|m| m.role == Role::Tool)
        .unwrap();
    assert!(error_msg.content.starts_with("Error: "));
    assert!(error_msg.content.contains("groceries"));
}

#[tokio::test]
async fn e2e_blank_model_output_uses_fallback() {
    let h = harness(vec![text_response("   ")]);
    assert_eq!(say(&h.agent, "hmm").await, FALLBACK_REPLY);
}

// ── Through the HTTP gateway ─────────────────────────────────────────────

fn chat_request(body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/chat")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn e2e_gateway_chat_then_journal_listing() {
    let h = harness(vec![
        tool_response(vec![add_call("call_1", "Buy milk", &["shopping"])]),
        text_response("Added milk to your shopping list."),
    ]);
    let state = Arc::new(GatewayState {
        journal: h.journal.clone(),
        agent: Ok(Arc::new(h.agent)),
    });

    let response = build_router(state.clone())
        .oneshot(chat_request(serde_json::json!({
            "messages": [
                { "role": "system", "content": "ignored" },
                { "role": "user", "content": "Add milk to my shopping list" }
            ]
        })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&body[..], b"Added milk to your shopping list.");

    // Only our system prompt reached the model
    let sent = h.provider.request(0);
    let systems = sent.messages.iter().filter(|m| m.role == Role::System).count();
    assert_eq!(systems, 1);
    assert_ne!(sent.messages[0].content, "ignored");

    let listing = build_router(state)
        .oneshot(
            Request::builder()
                .uri("/api/journal?q=milk")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let body = listing.into_body().collect().await.unwrap().to_bytes();
    let entries: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(entries[0]["content"], "Buy milk");
    assert_eq!(entries[0]["categories"], serde_json::json!(["shopping"]));
}

#[tokio::test]
async fn e2e_gateway_rejects_unknown_role() {
    let h = harness(vec![]);
    let state = Arc::new(GatewayState {
        journal: h.journal.clone(),
        agent: Ok(Arc::new(h.agent)),
    });

    let response = build_router(state)
        .oneshot(chat_request(serde_json::json!({
            "messages": [{ "role": "tool", "content": "hi" }]
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(h.provider.calls(), 0);
}
