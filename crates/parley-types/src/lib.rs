//! Shared domain types for Parley.
//!
//! This crate contains the domain types used across the relay:
//! the persisted chat log, provider-agnostic conversation types,
//! and their associated error types.
//!
//! Zero infrastructure dependencies -- only serde, chrono, thiserror.

pub mod chat;
pub mod error;
pub mod llm;
