//! Business logic for the Parley chat relay.
//!
//! Defines the trait seams ([`llm::provider::LlmProvider`],
//! [`repository::message::MessageRepository`]) and the relay service that
//! orchestrates persistence, context assembly, and the upstream completion
//! call. Concrete implementations live in parley-infra.

pub mod llm;
pub mod relay;
pub mod repository;
