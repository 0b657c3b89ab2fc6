//! # Webhook Server
//!
//! HTTP endpoint the chat platform posts events to. Events in one request are handled in
//! order; a failure on one event is logged and the rest still run.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

use anyhow::{Context, Result};
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::FixedOffset;
use log::{debug, error, info};
use std::sync::Arc;

use crate::command_handler::CommandHandler;
use crate::core::clock::local_now;
use crate::line::WebhookBody;

/// Shared state for the webhook routes
#[derive(Clone)]
pub struct AppState {
    pub command_handler: Arc<CommandHandler>,
    pub offset: FixedOffset,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/webhook", post(webhook))
        .route("/health", get(health_check))
        .with_state(Arc::new(state))
}

/// Bind `addr` and serve until the process exits
pub async fn serve(addr: &str, state: AppState) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("🌐 Webhook listening on http://{addr}/webhook");

    axum::serve(listener, router(state))
        .await
        .context("Webhook server stopped")
}

async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

async fn webhook(State(state): State<Arc<AppState>>, Json(body): Json<WebhookBody>) -> StatusCode {
    process_events(&state, &body).await;
    StatusCode::OK
}

/// Handle every text message in the body; returns how many were handled
pub async fn process_events(state: &AppState, body: &WebhookBody) -> usize {
    let mut handled = 0;

    for event in &body.events {
        let Some(text_event) = event.as_text() else {
            debug!("Ignoring {} event", event.event_type);
            continue;
        };

        let now = local_now(&state.offset);
        match state.command_handler.handle_message(&text_event, now).await {
            Ok(()) => handled += 1,
            Err(e) => error!(
                "Failed to reply to message from {}: {e:#}",
                text_event.user_id
            ),
        }
    }

    handled
}
