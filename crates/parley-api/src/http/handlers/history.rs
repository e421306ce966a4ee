//! Chat history handler.
//!
//! GET /api/history - the full ordered log. Mounted only when persistence
//! is enabled.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use parley_core::repository::message::MessageRepository;
use parley_types::chat::{Sender, StoredMessage};

use crate::http::error::AppError;
use crate::state::AppState;

/// Wire form of a stored message. `created_at` stays internal; ordering is
/// already reflected in the sequence.
#[derive(Debug, Serialize)]
pub struct HistoryEntry {
    pub id: i64,
    pub sender: Sender,
    pub text: String,
}

impl From<StoredMessage> for HistoryEntry {
    fn from(msg: StoredMessage) -> Self {
        Self {
            id: msg.id,
            sender: msg.sender,
            text: msg.text,
        }
    }
}

/// GET /api/history - every stored message, oldest first.
pub async fn history<R: MessageRepository>(
    State(state): State<AppState<R>>,
) -> Result<Json<Vec<HistoryEntry>>, AppError> {
    let messages = state.relay.history().await?;
    Ok(Json(messages.into_iter().map(HistoryEntry::from).collect()))
}
