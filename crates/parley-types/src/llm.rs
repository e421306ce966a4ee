//! Provider-agnostic LLM request/response types.
//!
//! These types model the conversation handed to an LLM provider: role-tagged
//! turns, the completion request, and the extracted reply. Vendor-specific
//! wire structures live in parley-infra next to each provider client.

use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

use crate::chat::Sender;

/// Role of a turn in an LLM conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
    Assistant,
}

impl fmt::Display for ChatRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChatRole::System => write!(f, "system"),
            ChatRole::User => write!(f, "user"),
            ChatRole::Assistant => write!(f, "assistant"),
        }
    }
}

impl FromStr for ChatRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "system" => Ok(ChatRole::System),
            "user" => Ok(ChatRole::User),
            "assistant" => Ok(ChatRole::Assistant),
            other => Err(format!("invalid chat role: '{other}'")),
        }
    }
}

impl From<Sender> for ChatRole {
    /// Stored `user` messages replay as user turns, stored `llm` messages
    /// as assistant turns.
    fn from(sender: Sender) -> Self {
        match sender {
            Sender::User => ChatRole::User,
            Sender::Llm => ChatRole::Assistant,
        }
    }
}

/// A single role-tagged turn in a conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub content: String,
}

/// Request to an LLM provider for a completion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<ChatTurn>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,
    pub max_tokens: u32,
}

/// Reply extracted from the first candidate of a provider response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionReply {
    pub content: String,
}

/// Errors from LLM provider operations.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    /// Network or HTTP-level failure reaching the provider.
    #[error("upstream request failed: {message}")]
    Upstream { message: String },

    /// The provider answered, but not in the expected shape.
    #[error("malformed upstream response: {0}")]
    MalformedResponse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_role_roundtrip() {
        for role in [ChatRole::System, ChatRole::User, ChatRole::Assistant] {
            let s = role.to_string();
            let parsed: ChatRole = s.parse().unwrap();
            assert_eq!(role, parsed);
        }
    }

    #[test]
    fn test_chat_role_from_sender() {
        assert_eq!(ChatRole::from(Sender::User), ChatRole::User);
        assert_eq!(ChatRole::from(Sender::Llm), ChatRole::Assistant);
    }

    #[test]
    fn test_completion_request_skips_absent_system() {
        let request = CompletionRequest {
            model: "gpt-4o-mini".to_string(),
            messages: vec![ChatTurn {
                role: ChatRole::User,
                content: "Hello".to_string(),
            }],
            system: None,
            max_tokens: 300,
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(!json.contains("system"));
    }

    #[test]
    fn test_llm_error_display() {
        let err = LlmError::Upstream {
            message: "connection refused".to_string(),
        };
        assert!(err.to_string().contains("connection refused"));

        let err = LlmError::MalformedResponse("no candidates".to_string());
        assert!(err.to_string().contains("no candidates"));
    }
}
