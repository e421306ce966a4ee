//! Conversation relay orchestration.

pub mod service;
