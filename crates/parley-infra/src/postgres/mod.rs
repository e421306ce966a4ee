//! Postgres-backed persistence.
//!
//! Pool construction plus the concrete `MessageRepository` implementation.
//! The schema is created at startup from the workspace `migrations/`
//! directory.

pub mod message;
pub mod pool;
