//! OpenAI Chat Completions API wire types.
//!
//! These are OpenAI-specific request/response structures used for HTTP
//! communication with `/v1/chat/completions`. They are NOT the generic
//! conversation types from parley-types -- those are vendor-agnostic.

use serde::{Deserialize, Serialize};

use parley_types::llm::{CompletionReply, LlmError};

/// Request body for the Chat Completions API.
#[derive(Debug, Clone, Serialize)]
pub struct OpenAiRequest {
    pub model: String,
    pub messages: Vec<OpenAiMessage>,
    pub max_tokens: u32,
}

/// A single message in an OpenAI conversation.
#[derive(Debug, Clone, Serialize)]
pub struct OpenAiMessage {
    pub role: String,
    pub content: String,
}

/// Response body for a non-streaming chat completion.
#[derive(Debug, Clone, Deserialize)]
pub struct OpenAiResponse {
    #[serde(default)]
    pub choices: Vec<OpenAiChoice>,
}

/// One candidate completion.
#[derive(Debug, Clone, Deserialize)]
pub struct OpenAiChoice {
    pub message: OpenAiChoiceMessage,
}

/// The assistant message inside a choice.
#[derive(Debug, Clone, Deserialize)]
pub struct OpenAiChoiceMessage {
    pub content: Option<String>,
}

impl OpenAiResponse {
    /// Extract the reply text from the first choice, trimmed.
    pub fn into_reply(self) -> Result<CompletionReply, LlmError> {
        let choice = self.choices.into_iter().next().ok_or_else(|| {
            LlmError::MalformedResponse("response contained no choices".to_string())
        })?;
        let content = choice.message.content.ok_or_else(|| {
            LlmError::MalformedResponse("first choice had no message content".to_string())
        })?;
        Ok(CompletionReply {
            content: content.trim().to_string(),
        })
    }
}
