//! GeminiProvider -- concrete [`LlmProvider`] implementation for the
//! Gemini generateContent API.
//!
//! This API authenticates with the key as a URL query parameter and has no
//! native multi-turn role structure, so this is a single-prompt binding:
//! only the most recent user turn is forwarded. Conversation history is
//! only meaningful through the OpenAI binding.
//!
//! The API key is wrapped in [`secrecy::SecretString`] and is never logged
//! or included in `Debug` output; the key-bearing URL is never logged.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use parley_core::llm::provider::LlmProvider;
use parley_types::llm::{CompletionReply, CompletionRequest, LlmError};

use super::types::{GeminiRequest, GeminiResponse};

/// Gemini generateContent vendor binding.
pub struct GeminiProvider {
    client: reqwest::Client,
    api_key: SecretString,
    base_url: String,
}

impl GeminiProvider {
    /// Upstream waits are bounded; a timeout is an upstream failure like
    /// any other.
    const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

    /// Create a new Gemini provider.
    pub fn new(api_key: SecretString) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Self::REQUEST_TIMEOUT)
            .build()
            .expect("failed to create reqwest client");

        Self {
            client,
            api_key,
            base_url: "https://generativelanguage.googleapis.com".to_string(),
        }
    }

    /// Override the base URL (useful for testing or proxies).
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    /// Collapse the ordered conversation to this API's single prompt:
    /// the content of the most recent turn.
    fn prompt_of(request: &CompletionRequest) -> &str {
        request
            .messages
            .last()
            .map(|turn| turn.content.as_str())
            .unwrap_or_default()
    }
}

impl LlmProvider for GeminiProvider {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionReply, LlmError> {
        let body = GeminiRequest::from_prompt(Self::prompt_of(request));
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, request.model
        );

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.expose_secret())])
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

        let wire: GeminiResponse = response
            .json()
            .await
            .map_err(|e| LlmError::MalformedResponse(format!("failed to parse response: {e}")))?;

        wire.into_reply()
    }
}
