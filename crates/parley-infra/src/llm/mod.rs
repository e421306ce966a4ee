//! LLM vendor implementations.
//!
//! Contains concrete implementations of the [`LlmProvider`] trait defined
//! in `parley-core`, plus a factory ([`create_provider`]) that constructs
//! the configured vendor binding as a [`BoxLlmProvider`].
//!
//! [`LlmProvider`]: parley_core::llm::provider::LlmProvider

pub mod gemini;
pub mod openai;

use parley_core::llm::box_provider::BoxLlmProvider;

use crate::config::{ProviderKind, ProviderSettings};

use self::gemini::GeminiProvider;
use self::openai::OpenAiProvider;

/// Create a [`BoxLlmProvider`] from vendor settings.
///
/// Matches on the configured kind to construct the appropriate concrete
/// binding, applying the endpoint override when one is set.
pub fn create_provider(settings: &ProviderSettings) -> BoxLlmProvider {
    match settings.kind {
        ProviderKind::OpenAi => {
            let mut provider = OpenAiProvider::new(settings.api_key.clone());
            if let Some(base_url) = &settings.base_url {
                provider = provider.with_base_url(base_url.clone());
            }
            BoxLlmProvider::new(provider)
        }
        ProviderKind::Gemini => {
            let mut provider = GeminiProvider::new(settings.api_key.clone());
            if let Some(base_url) = &settings.base_url {
                provider = provider.with_base_url(base_url.clone());
            }
            BoxLlmProvider::new(provider)
        }
    }
}
