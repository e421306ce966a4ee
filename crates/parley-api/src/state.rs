//! Application state wiring the relay together.
//!
//! The relay is generic over its repository so the HTTP layer can be
//! exercised against the in-memory store; `init` pins it to the Postgres
//! implementation and a vendor binding selected from the environment.

use std::sync::Arc;

use parley_core::llm::box_provider::BoxLlmProvider;
use parley_core::relay::service::ChatRelay;
use parley_core::repository::message::MessageRepository;
use parley_infra::config::RelayConfig;
use parley_infra::llm::create_provider;
use parley_infra::postgres::message::PgMessageRepository;
use parley_infra::postgres::pool;

/// Shared application state holding the relay.
pub struct AppState<R: MessageRepository> {
    pub relay: Arc<ChatRelay<BoxLlmProvider, R>>,
}

// Manual impl: `derive(Clone)` would require `R: Clone`, which the Arc
// makes unnecessary.
impl<R: MessageRepository> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            relay: Arc::clone(&self.relay),
        }
    }
}

impl<R: MessageRepository> AppState<R> {
    /// Wrap an already-constructed relay.
    pub fn new(relay: ChatRelay<BoxLlmProvider, R>) -> Self {
        Self {
            relay: Arc::new(relay),
        }
    }
}

impl AppState<PgMessageRepository> {
    /// Initialize the application state from the environment: select the
    /// vendor binding, connect to Postgres when persistence is enabled,
    /// and construct the relay.
    pub async fn init() -> anyhow::Result<Self> {
        let config = RelayConfig::from_env()?;
        let provider = create_provider(&config.provider);

        let store = match &config.store {
            Some(settings) => {
                let pool = pool::connect(settings).await?;
                Some(PgMessageRepository::new(pool))
            }
            None => None,
        };

        tracing::info!(
            provider = provider.name(),
            model = %config.provider.model,
            persistence = store.is_some(),
            "relay configured"
        );

        Ok(Self::new(ChatRelay::new(
            provider,
            store,
            config.provider.model,
        )))
    }
}
