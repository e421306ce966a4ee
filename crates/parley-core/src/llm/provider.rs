//! LlmProvider trait definition.
//!
//! This is the single seam between the relay and the outside LLM vendor:
//! one synchronous-feeling call that takes an ordered conversation and
//! returns the extracted reply text.

use parley_types::llm::{CompletionReply, CompletionRequest, LlmError};

/// Trait for LLM provider backends (OpenAI, Gemini).
///
/// Uses native async fn in traits (RPITIT, Rust 2024 edition). The relay
/// calls `complete` exactly once per request; providers must not retry.
///
/// Implementations live in parley-infra (e.g., `OpenAiProvider`).
pub trait LlmProvider: Send + Sync {
    /// Human-readable provider name (e.g., "openai", "gemini").
    fn name(&self) -> &str;

    /// Send a completion request and receive the extracted reply.
    fn complete(
        &self,
        request: &CompletionRequest,
    ) -> impl std::future::Future<Output = Result<CompletionReply, LlmError>> + Send;
}
