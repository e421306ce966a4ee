//! MessageRepository trait definition.
//!
//! The chat log is append-only: there is deliberately no update or delete
//! operation on this trait. Ordering is `(created_at, id)` ascending
//! everywhere.

use parley_types::chat::{Sender, StoredMessage};
use parley_types::error::RepositoryError;

/// Repository trait for chat log persistence.
///
/// Implementations live in parley-infra (e.g., `PgMessageRepository`).
/// Uses native async fn in traits (RPITIT, Rust 2024 edition).
pub trait MessageRepository: Send + Sync {
    /// Append a message to the log. The store assigns `id` and `created_at`
    /// and returns the completed row.
    fn append(
        &self,
        sender: Sender,
        text: &str,
    ) -> impl std::future::Future<Output = Result<StoredMessage, RepositoryError>> + Send;

    /// Every stored message, ordered by `(created_at, id)` ascending.
    fn history(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<StoredMessage>, RepositoryError>> + Send;

    /// The last `limit` messages, still in ascending order.
    fn recent(
        &self,
        limit: usize,
    ) -> impl std::future::Future<Output = Result<Vec<StoredMessage>, RepositoryError>> + Send;
}
