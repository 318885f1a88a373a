//! Ollama Provider - GenerationBackend for a local model server.
//!
//! Uses the single-prompt `/api/generate` endpoint with streaming disabled.
//! The generated text comes back in the `response` field.

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::http_support::{build_client, ensure_success, map_transport_error};
use crate::ports::{
    BackendInfo, GenerationBackend, GenerationError, GenerationRequest, GenerationResponse,
};

/// Configuration for the Ollama provider.
#[derive(Debug, Clone)]
pub struct OllamaConfig {
    /// Server root (default: http://127.0.0.1:11434).
    pub base_url: String,
    /// Model tag (e.g., "llama3.1:8b").
    pub model: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl OllamaConfig {
    /// Creates a configuration for the server at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            model: "llama3.1:8b".to_string(),
            timeout: Duration::from_secs(60),
        }
    }

    /// Sets the model to use.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for OllamaConfig {
    fn default() -> Self {
        Self::new("http://127.0.0.1:11434")
    }
}

/// Local model server provider implementation.
pub struct OllamaProvider {
    config: OllamaConfig,
    client: Client,
}

impl OllamaProvider {
    /// Creates a new provider with the given configuration.
    pub fn new(config: OllamaConfig) -> Result<Self, GenerationError> {
        let client = build_client(config.timeout)?;
        Ok(Self { config, client })
    }

    fn generate_url(&self) -> String {
        format!("{}/api/generate", self.config.base_url.trim_end_matches('/'))
    }

    fn to_ollama_request<'a>(&'a self, request: &'a GenerationRequest) -> OllamaRequest<'a> {
        OllamaRequest {
            model: &self.config.model,
            prompt: &request.prompt,
            system: request.system_prompt.as_deref(),
            stream: false,
            options: OllamaOptions {
                num_predict: request.max_output_tokens,
                temperature: request.temperature,
            },
        }
    }

    async fn send_request(&self, request: &GenerationRequest) -> Result<Response, GenerationError> {
        self.client
            .post(self.generate_url())
            .json(&self.to_ollama_request(request))
            .send()
            .await
            .map_err(|e| map_transport_error(e, self.config.timeout))
    }

    async fn parse_response(&self, response: Response) -> Result<GenerationResponse, GenerationError> {
        let response = ensure_success(response).await?;

        let body: OllamaResponse = response
            .json()
            .await
            .map_err(|e| GenerationError::parse(format!("Failed to parse response: {}", e)))?;

        let content = body
            .response
            .ok_or_else(|| GenerationError::parse("Response body has no 'response' field"))?;

        Ok(GenerationResponse::new(
            content.trim(),
            body.model.unwrap_or_else(|| self.config.model.clone()),
        ))
    }
}

#[async_trait]
impl GenerationBackend for OllamaProvider {
    async fn generate(
        &self,
        request: GenerationRequest,
    ) -> Result<GenerationResponse, GenerationError> {
        tracing::debug!(
            trace_id = %request.trace_id,
            model = %self.config.model,
            "Sending generate request"
        );
        let response = self.send_request(&request).await?;
        self.parse_response(response).await
    }

    fn backend_info(&self) -> BackendInfo {
        BackendInfo::new("ollama", &self.config.model)
    }
}

// ----- Ollama API Types -----

#[derive(Debug, Serialize)]
struct OllamaRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    system: Option<&'a str>,
    stream: bool,
    options: OllamaOptions,
}

#[derive(Debug, Serialize)]
struct OllamaOptions {
    num_predict: u32,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct OllamaResponse {
    model: Option<String>,
    response: Option<String>,
}
