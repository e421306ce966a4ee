//! Chat endpoint handler.
//!
//! POST /api/chat - relay one user message to the configured vendor.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use parley_core::repository::message::MessageRepository;

use crate::http::error::AppError;
use crate::state::AppState;

/// Request body for POST /api/chat.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
}

/// Response body for POST /api/chat.
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
}

/// POST /api/chat - relay a user message and return the reply.
///
/// Body extraction failures are tolerated so that an absent or non-JSON
/// body falls into the same "No message provided" 400 as an empty
/// `message` field.
pub async fn chat<R: MessageRepository>(
    State(state): State<AppState<R>>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let message = payload.map(|Json(body)| body.message).unwrap_or_default();
    let response = state.relay.handle_chat(&message).await?;
    Ok(Json(ChatResponse { response }))
}
