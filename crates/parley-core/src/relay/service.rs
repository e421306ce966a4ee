//! Chat relay service orchestrating persistence, context assembly, and the
//! upstream completion call.
//!
//! `ChatRelay` coordinates the message repository and the LLM provider: it
//! appends the incoming user message (when persistence is enabled), replays
//! the recent log as conversation context, calls the provider exactly once,
//! and converts provider failures into user-visible diagnostic replies
//! instead of failing the request.

use parley_types::chat::{Sender, StoredMessage};
use parley_types::error::RelayError;
use parley_types::llm::{ChatRole, ChatTurn, CompletionRequest, LlmError};
use tracing::{debug, warn};

use crate::llm::provider::LlmProvider;
use crate::repository::message::MessageRepository;

/// Fixed generation cap per upstream request, in output tokens.
pub const MAX_OUTPUT_TOKENS: u32 = 300;

/// Number of most recent log entries replayed as conversation context.
///
/// Counted in messages, not tokens.
pub const HISTORY_WINDOW: usize = 20;

/// System instruction sent when no conversation history is available.
pub const SYSTEM_INSTRUCTION: &str = "You are a helpful assistant.";

/// Diagnostic reply when the upstream call fails outright.
pub const UPSTREAM_FAILURE_REPLY: &str =
    "An error occurred while connecting to the LLM API. Please check your API key and network connection.";

/// Diagnostic reply when the upstream response has an unexpected shape.
pub const MALFORMED_RESPONSE_REPLY: &str =
    "An unexpected response format was received from the LLM API.";

/// Orchestrates one chat exchange per request.
///
/// Generic over `LlmProvider` and `MessageRepository` so the relay never
/// depends on parley-infra. The store is optional: without one the relay
/// sends a single user turn under the fixed system instruction; with one it
/// replays the last [`HISTORY_WINDOW`] log entries as conversation context.
pub struct ChatRelay<P: LlmProvider, R: MessageRepository> {
    provider: P,
    store: Option<R>,
    model: String,
}

impl<P: LlmProvider, R: MessageRepository> ChatRelay<P, R> {
    /// Create a new relay with the given provider and optional store.
    pub fn new(provider: P, store: Option<R>, model: String) -> Self {
        Self {
            provider,
            store,
            model,
        }
    }

    /// Whether this relay persists the chat log.
    pub fn persistence_enabled(&self) -> bool {
        self.store.is_some()
    }

    /// Relay one user message to the provider and return the reply text.
    ///
    /// Empty or whitespace-only input is rejected with
    /// [`RelayError::EmptyMessage`]. Provider failures are swallowed into a
    /// diagnostic reply; in that case no `llm` message is persisted, so the
    /// log may contain a `user` message with no paired reply.
    pub async fn handle_chat(&self, user_text: &str) -> Result<String, RelayError> {
        if user_text.trim().is_empty() {
            return Err(RelayError::EmptyMessage);
        }

        if let Some(store) = &self.store {
            store.append(Sender::User, user_text).await?;
        }

        let request = self.build_request(user_text).await?;
        debug!(
            provider = self.provider.name(),
            turns = request.messages.len(),
            "dispatching completion request"
        );

        match self.provider.complete(&request).await {
            Ok(reply) => {
                if let Some(store) = &self.store {
                    store.append(Sender::Llm, &reply.content).await?;
                }
                Ok(reply.content)
            }
            Err(err @ LlmError::Upstream { .. }) => {
                warn!(provider = self.provider.name(), error = %err, "upstream call failed");
                Ok(UPSTREAM_FAILURE_REPLY.to_string())
            }
            Err(err @ LlmError::MalformedResponse(_)) => {
                warn!(provider = self.provider.name(), error = %err, "upstream response had unexpected shape");
                Ok(MALFORMED_RESPONSE_REPLY.to_string())
            }
        }
    }

    /// Every stored message in ascending `(created_at, id)` order.
    ///
    /// Only meaningful when persistence is enabled; the HTTP layer mounts
    /// the history route conditionally, so [`RelayError::PersistenceDisabled`]
    /// indicates a wiring mistake rather than a user error.
    pub async fn history(&self) -> Result<Vec<StoredMessage>, RelayError> {
        match &self.store {
            Some(store) => Ok(store.history().await?),
            None => Err(RelayError::PersistenceDisabled),
        }
    }

    /// Assemble the ordered conversation context for one exchange.
    ///
    /// Persisting: the last [`HISTORY_WINDOW`] log entries (the just-appended
    /// user message included), role-mapped, with no system instruction.
    /// Non-persisting: exactly one user turn under [`SYSTEM_INSTRUCTION`].
    async fn build_request(&self, user_text: &str) -> Result<CompletionRequest, RelayError> {
        let (messages, system) = match &self.store {
            Some(store) => {
                let recent = store.recent(HISTORY_WINDOW).await?;
                let turns = recent
                    .into_iter()
                    .map(|msg| ChatTurn {
                        role: ChatRole::from(msg.sender),
                        content: msg.text,
                    })
                    .collect();
                (turns, None)
            }
            None => (
                vec![ChatTurn {
                    role: ChatRole::User,
                    content: user_text.to_string(),
                }],
                Some(SYSTEM_INSTRUCTION.to_string()),
            ),
        };

        Ok(CompletionRequest {
            model: self.model.clone(),
            messages,
            system,
            max_tokens: MAX_OUTPUT_TOKENS,
        })
    }
}
