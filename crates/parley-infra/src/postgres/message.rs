//! Postgres message repository implementation.
//!
//! Implements `MessageRepository` from `parley-core` using sqlx with raw
//! queries and a private row struct for Postgres-to-domain mapping.

use chrono::{DateTime, Utc};
use sqlx::postgres::{PgPool, PgRow};
use sqlx::Row;

use parley_core::repository::message::MessageRepository;
use parley_types::chat::{Sender, StoredMessage};
use parley_types::error::RepositoryError;

/// Postgres-backed implementation of `MessageRepository`.
pub struct PgMessageRepository {
    pool: PgPool,
}

impl PgMessageRepository {
    /// Create a new repository backed by the given pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// ---------------------------------------------------------------------------
// Internal row type
// ---------------------------------------------------------------------------

struct MessageRow {
    id: i64,
    sender: String,
    text: String,
    created_at: DateTime<Utc>,
}

impl MessageRow {
    fn from_row(row: &PgRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            sender: row.try_get("sender")?,
            text: row.try_get("text")?,
            created_at: row.try_get("created_at")?,
        })
    }

    fn into_message(self) -> Result<StoredMessage, RepositoryError> {
        let sender: Sender = self
            .sender
            .parse()
            .map_err(|e: String| RepositoryError::Query(e))?;

        Ok(StoredMessage {
            id: self.id,
            sender,
            text: self.text,
            created_at: self.created_at,
        })
    }
}

fn map_sqlx_err(e: sqlx::Error) -> RepositoryError {
    match e {
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
            RepositoryError::Connection(e.to_string())
        }
        other => RepositoryError::Query(other.to_string()),
    }
}

// ---------------------------------------------------------------------------
// MessageRepository impl
// ---------------------------------------------------------------------------

impl MessageRepository for PgMessageRepository {
    async fn append(&self, sender: Sender, text: &str) -> Result<StoredMessage, RepositoryError> {
        let row = sqlx::query(
            r#"INSERT INTO chat_messages (sender, text)
               VALUES ($1, $2)
               RETURNING id, sender, text, created_at"#,
        )
        .bind(sender.to_string())
        .bind(text)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_err)?;

        MessageRow::from_row(&row)
            .map_err(map_sqlx_err)?
            .into_message()
    }

    async fn history(&self) -> Result<Vec<StoredMessage>, RepositoryError> {
        let rows = sqlx::query(
            r#"SELECT id, sender, text, created_at
               FROM chat_messages
               ORDER BY created_at ASC, id ASC"#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_err)?;

        rows.iter()
            .map(|row| {
                MessageRow::from_row(row)
                    .map_err(map_sqlx_err)?
                    .into_message()
            })
            .collect()
    }

    async fn recent(&self, limit: usize) -> Result<Vec<StoredMessage>, RepositoryError> {
        let rows = sqlx::query(
            r#"SELECT id, sender, text, created_at
               FROM chat_messages
               ORDER BY created_at DESC, id DESC
               LIMIT $1"#,
        )
        .bind(limit as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_err)?;

        let mut messages = rows
            .iter()
            .map(|row| {
                MessageRow::from_row(row)
                    .map_err(map_sqlx_err)?
                    .into_message()
            })
            .collect::<Result<Vec<_>, _>>()?;

        // Tail selected newest-first; callers expect ascending order.
        messages.reverse();
        Ok(messages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_maps_known_senders() {
        let row = MessageRow {
            id: 1,
            sender: "llm".to_string(),
            text: "Hi there!".to_string(),
            created_at: Utc::now(),
        };
        let msg = row.into_message().unwrap();
        assert_eq!(msg.sender, Sender::Llm);
        assert_eq!(msg.text, "Hi there!");
    }

    #[test]
    fn test_row_rejects_unknown_sender() {
        let row = MessageRow {
            id: 1,
            sender: "bot".to_string(),
            text: "Hi".to_string(),
            created_at: Utc::now(),
        };
        assert!(matches!(
            row.into_message(),
            Err(RepositoryError::Query(_))
        ));
    }
}
