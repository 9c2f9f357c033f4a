//! HTTP gateway for Jotter.
//!
//! Serves the chat endpoint, a read-only journal listing, a health check
//! and the embedded web client. Built on Axum.

pub mod api;
pub mod frontend;

use axum::extract::DefaultBodyLimit;
use axum::{
    Router,
    extract::State,
    response::Json,
    routing::{get, post},
};
use jotter_agent::AgentLoop;
use jotter_config::AppConfig;
use jotter_core::error::ProviderError;
use jotter_journal::JournalStore;
use serde::Serialize;
use std::sync::Arc;
use tokio::signal;
use tracing::{info, warn};

/// Shared application state for the gateway.
pub struct GatewayState {
    /// The process-lifetime journal, shared with the assistant's tools
    pub journal: Arc<JournalStore>,

    /// The assistant, or why it could not be built (e.g. no API key).
    /// The server still starts; chat requests report the error.
    pub agent: Result<Arc<AgentLoop>, ProviderError>,
}

pub type SharedState = Arc<GatewayState>;

impl GatewayState {
    /// Wire journal, tools, provider and assistant from configuration.
    pub fn from_config(config: &AppConfig) -> Self {
        let journal = Arc::new(JournalStore::new());
        let tools = Arc::new(jotter_tools::journal_registry(journal.clone()));

        let agent = jotter_providers::build_from_config(config).map(|provider| {
            Arc::new(AgentLoop::from_config(config, provider, tools))
        });
        if let Err(e) = &agent {
            warn!(error = %e, "Assistant unavailable; /api/chat will return 500");
        }

        Self { journal, agent }
    }
}

/// Build the Axum router with all gateway routes.
///
/// Layers applied:
/// - Request body size limit (1 MB)
/// - HTTP trace logging
pub fn build_router(state: SharedState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/api/chat", post(api::chat_handler))
        .route("/api/journal", get(api::journal_handler))
        .with_state(state)
        .merge(frontend::frontend_router())
        .layer(DefaultBodyLimit::max(1024 * 1024))
        .layer(tower_http::trace::TraceLayer::new_for_http())
}

/// Start the gateway HTTP server and run until Ctrl+C.
pub async fn start(config: AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let addr = format!("{}:{}", config.gateway.host, config.gateway.port);
    let state = Arc::new(GatewayState::from_config(&config));
    let app = build_router(state);

    info!(addr = %addr, model = %config.model, "Gateway starting");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Gateway stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        warn!(error = %e, "Failed to install Ctrl+C handler");
        return;
    }
    info!("Ctrl+C received, shutting down");
}

// --- Handlers ---

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
    entries: usize,
}

async fn health_handler(State(state): State<SharedState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        entries: state.journal.len(),
    })
}
