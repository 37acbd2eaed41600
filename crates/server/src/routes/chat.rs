//! Shopping-assistant chat route handlers.

use axum::{Json, extract::State};
use serde::Deserialize;
use tracing::instrument;

use lumina_core::{ChatRole, Product};

use crate::error::{AppError, Result};
use crate::models::chat::ChatMessage;
use crate::state::AppState;

/// New user turn payload.
#[derive(Debug, Deserialize)]
pub struct SendMessageRequest {
    pub message: String,
}

/// Full transcript, oldest first.
#[instrument(skip(state))]
pub async fn transcript(State(state): State<AppState>) -> Json<Vec<ChatMessage>> {
    Json(state.transcript().messages().to_vec())
}

/// Append a user turn, ask the assistant, and return its reply.
///
/// History and inventory are snapshotted before the await so no lock is
/// held while the Gemini call is in flight; the reply is appended whenever
/// the call resolves.
#[instrument(skip(state, request))]
pub async fn send(
    State(state): State<AppState>,
    Json(request): Json<SendMessageRequest>,
) -> Result<Json<ChatMessage>> {
    let text = request.message.trim().to_string();
    if text.is_empty() {
        return Err(AppError::BadRequest("message cannot be empty".to_string()));
    }

    // The assistant sees the new message as the latest user turn, not as
    // part of the history.
    let history: Vec<ChatMessage> = state.transcript().messages().to_vec();
    let inventory: Vec<Product> = state.catalog().products().to_vec();

    state.transcript_mut().push(ChatRole::User, text.as_str());

    let reply = state
        .assistant()
        .shopping_assistant_reply(&history, &text, &inventory)
        .await;

    let message = state.transcript_mut().push(ChatRole::Assistant, reply);
    Ok(Json(message))
}
