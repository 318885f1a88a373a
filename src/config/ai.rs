//! Generation backend configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Generation backend configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AiConfig {
    /// Which backend to use
    #[serde(default)]
    pub backend: BackendKind,

    /// API key for the hosted chat-completions backend
    pub openai_api_key: Option<String>,

    /// Base URL for the hosted backend (set to https://api.deepseek.com for DeepSeek)
    #[serde(default = "default_openai_base_url")]
    pub openai_base_url: String,

    /// Hosted model name
    #[serde(default = "default_openai_model")]
    pub openai_model: String,

    /// Local model server URL
    #[serde(default = "default_ollama_url")]
    pub ollama_url: String,

    /// Local model tag
    #[serde(default = "default_ollama_model")]
    pub ollama_model: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Role instruction sent alongside every prompt
    #[serde(default = "default_system_prompt")]
    pub system_prompt: String,
}

/// Backend selector
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    OpenAI,
    #[default]
    Ollama,
}

impl AiConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Check if the hosted backend has a key
    pub fn has_openai(&self) -> bool {
        self.openai_api_key.as_ref().is_some_and(|k| !k.is_empty())
    }

    /// System prompt, or `None` when configured blank
    pub fn system_prompt(&self) -> Option<String> {
        let trimmed = self.system_prompt.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    }

    /// Validate backend configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.backend == BackendKind::OpenAI && !self.has_openai() {
            return Err(ValidationError::MissingRequired("AI__OPENAI_API_KEY"));
        }
        if self.timeout_secs == 0 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            backend: BackendKind::default(),
            openai_api_key: None,
            openai_base_url: default_openai_base_url(),
            openai_model: default_openai_model(),
            ollama_url: default_ollama_url(),
            ollama_model: default_ollama_model(),
            timeout_secs: default_timeout(),
            system_prompt: default_system_prompt(),
        }
    }
}

fn default_openai_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_openai_model() -> String {
    "gpt-4".to_string()
}

fn default_ollama_url() -> String {
    "http://127.0.0.1:11434".to_string()
}

fn default_ollama_model() -> String {
    "llama3.1:8b".to_string()
}

fn default_timeout() -> u64 {
    60
}

fn default_system_prompt() -> String {
    "You are a medical AI chatbot conducting a triage.".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ai_config_defaults() {
        let config = AiConfig::default();
        assert_eq!(config.backend, BackendKind::Ollama);
        assert_eq!(config.timeout(), Duration::from_secs(60));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_openai_requires_key() {
        let config = AiConfig {
            backend: BackendKind::OpenAI,
            openai_api_key: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::MissingRequired("AI__OPENAI_API_KEY"))
        );
    }

    #[test]
    fn test_blank_system_prompt_is_none() {
        let config = AiConfig {
            system_prompt: "   ".to_string(),
            ..Default::default()
        };
        assert_eq!(config.system_prompt(), None);
        assert!(AiConfig::default().system_prompt().is_some());
    }
}
