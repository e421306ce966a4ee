//! OpenAiProvider -- concrete [`LlmProvider`] implementation for the
//! OpenAI Chat Completions API.
//!
//! Sends requests to `/v1/chat/completions` with bearer-token auth. The
//! API key is wrapped in [`secrecy::SecretString`] and is never logged or
//! included in `Debug` output.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use parley_core::llm::provider::LlmProvider;
use parley_types::llm::{CompletionReply, CompletionRequest, LlmError};

use super::types::{OpenAiMessage, OpenAiRequest, OpenAiResponse};

/// OpenAI chat-completion vendor binding.
///
/// Implements [`LlmProvider`] for the Chat Completions API. The generic
/// `system` instruction is carried as a leading `system` role message, the
/// way this API expects it.
pub struct OpenAiProvider {
    client: reqwest::Client,
    api_key: SecretString,
    base_url: String,
}

impl OpenAiProvider {
    /// Upstream waits are bounded; a timeout is an upstream failure like
    /// any other.
    const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

    /// Create a new OpenAI provider.
    pub fn new(api_key: SecretString) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Self::REQUEST_TIMEOUT)
            .build()
            .expect("failed to create reqwest client");

        Self {
            client,
            api_key,
            base_url: "https://api.openai.com".to_string(),
        }
    }

    /// Override the base URL (useful for testing or proxies).
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    fn to_wire_request(&self, request: &CompletionRequest) -> OpenAiRequest {
        let mut messages = Vec::with_capacity(request.messages.len() + 1);
        if let Some(system) = &request.system {
            messages.push(OpenAiMessage {
                role: "system".to_string(),
                content: system.clone(),
            });
        }
        messages.extend(request.messages.iter().map(|turn| OpenAiMessage {
            role: turn.role.to_string(),
            content: turn.content.clone(),
        }));

        OpenAiRequest {
            model: request.model.clone(),
            messages,
            max_tokens: request.max_tokens,
        }
    }
}

impl LlmProvider for OpenAiProvider {
    fn name(&self) -> &str {
        "openai"
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionReply, LlmError> {
        let body = self.to_wire_request(request);
        let url = format!("{}/v1/chat/completions", self.base_url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(self.api_key.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::Upstream {
                message: format!("HTTP request failed: {e}"),
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(LlmError::Upstream {
                message: format!("HTTP {status}: {error_body}"),
            });
        }

        let wire: OpenAiResponse = response
            .json()
            .await
            .map_err(|e| LlmError::MalformedResponse(format!("failed to parse response: {e}")))?;

        wire.into_reply()
    }
}
