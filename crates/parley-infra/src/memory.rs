//! In-memory message repository.
//!
//! A process-local implementation of `MessageRepository` backed by a
//! mutex-guarded Vec. Assigns sequential ids starting at 1 and stamps rows
//! with the current time, mirroring what the Postgres store does. Used by
//! the HTTP-layer tests and anywhere a throwaway log is enough.

use std::sync::Mutex;

use chrono::Utc;

use parley_core::repository::message::MessageRepository;
use parley_types::chat::{Sender, StoredMessage};
use parley_types::error::RepositoryError;

/// Mutex-guarded in-memory chat log.
#[derive(Default)]
pub struct InMemoryMessageRepository {
    rows: Mutex<Vec<StoredMessage>>,
}

impl InMemoryMessageRepository {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Vec<StoredMessage>>, RepositoryError> {
        self.rows
            .lock()
            .map_err(|_| RepositoryError::Connection("message store lock poisoned".to_string()))
    }
}

impl MessageRepository for InMemoryMessageRepository {
    async fn append(&self, sender: Sender, text: &str) -> Result<StoredMessage, RepositoryError> {
        let mut rows = self.lock()?;
        let msg = StoredMessage {
            id: rows.len() as i64 + 1,
            sender,
            text: text.to_string(),
            created_at: Utc::now(),
        };
        rows.push(msg.clone());
        Ok(msg)
    }

    async fn history(&self) -> Result<Vec<StoredMessage>, RepositoryError> {
        Ok(self.lock()?.clone())
    }

    async fn recent(&self, limit: usize) -> Result<Vec<StoredMessage>, RepositoryError> {
        let rows = self.lock()?;
        let start = rows.len().saturating_sub(limit);
        Ok(rows[start..].to_vec())
    }
}
