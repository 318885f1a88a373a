//! Generation Backend Adapters.
//!
//! Implementations of the GenerationBackend port.
//!
//! ## Available Adapters
//!
//! - `OpenAIProvider` - Hosted chat-completions API (OpenAI, DeepSeek, other compatible hosts)
//! - `OllamaProvider` - Local model server (`/api/generate`)
//! - `MockGenerationBackend` - Scriptable mock for testing

mod http_support;
mod mock_provider;
mod ollama_provider;
mod openai_provider;

pub use mock_provider::{MockGenerationBackend, MockReply};
pub use ollama_provider::{OllamaConfig, OllamaProvider};
pub use openai_provider::{OpenAIConfig, OpenAIProvider};

use std::sync::Arc;

use crate::config::{AiConfig, BackendKind};
use crate::ports::{GenerationBackend, GenerationError};

/// Builds the backend selected by configuration.
///
/// # Errors
///
/// Returns `GenerationError::InvalidRequest` if the hosted backend is
/// selected without an API key, or if the HTTP client cannot be built.
pub fn build_backend(config: &AiConfig) -> Result<Arc<dyn GenerationBackend>, GenerationError> {
    match config.backend {
        BackendKind::OpenAI => {
            let api_key = config
                .openai_api_key
                .as_deref()
                .filter(|k| !k.is_empty())
                .ok_or_else(|| GenerationError::InvalidRequest("missing OpenAI API key".into()))?;
            let provider_config = OpenAIConfig::new(api_key)
                .with_model(&config.openai_model)
                .with_base_url(&config.openai_base_url)
                .with_timeout(config.timeout());
            Ok(Arc::new(OpenAIProvider::new(provider_config)?))
        }
        BackendKind::Ollama => {
            let provider_config = OllamaConfig::new(&config.ollama_url)
                .with_model(&config.ollama_model)
                .with_timeout(config.timeout());
            Ok(Arc::new(OllamaProvider::new(provider_config)?))
        }
    }
}
