//! Persisted chat log types.
//!
//! A conversation is an append-only log of [`StoredMessage`] rows, totally
//! ordered by `(created_at, id)`. Rows are written by the relay and never
//! updated or deleted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

/// Which side of the conversation wrote a message.
///
/// Maps to the CHECK constraint in the Postgres schema:
/// `CHECK (sender IN ('user', 'llm'))`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Llm,
}

impl fmt::Display for Sender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sender::User => write!(f, "user"),
            Sender::Llm => write!(f, "llm"),
        }
    }
}

impl FromStr for Sender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "user" => Ok(Sender::User),
            "llm" => Ok(Sender::Llm),
            other => Err(format!("invalid sender: '{other}'")),
        }
    }
}

/// A single persisted chat message.
///
/// `id` and `created_at` are assigned by the store at insertion time;
/// `id` is monotonically increasing and breaks `created_at` ties.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredMessage {
    pub id: i64,
    pub sender: Sender,
    pub text: String,
    pub created_at: DateTime<Utc>,
}
