//! Generation Backend Port - Interface for language-model providers.
//!
//! The dialogue handlers depend only on this trait. Each provider variant
//! (hosted chat-completions API, local model server, test mock) differs in
//! transport and request/response shape, never in contract.
//!
//! # Design
//!
//! - One prompt in, one block of raw text out
//! - No retry at this layer; `GenerationError::is_transient` lets callers
//!   decide
//! - Every transport, status, auth and body failure normalizes to
//!   `GenerationError`
//!
//! # Example
//!
//! ```ignore
//! use async_trait::async_trait;
//!
//! struct EchoBackend;
//!
//! #[async_trait]
//! impl GenerationBackend for EchoBackend {
//!     async fn generate(&self, request: GenerationRequest) -> Result<GenerationResponse, GenerationError> {
//!         Ok(GenerationResponse::new(request.prompt, "echo"))
//!     }
//!
//!     fn backend_info(&self) -> BackendInfo {
//!         BackendInfo::new("echo", "echo")
//!     }
//! }
//! ```

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Port for text generation.
#[async_trait]
pub trait GenerationBackend: Send + Sync {
    /// Generates raw text for a prompt.
    ///
    /// The returned content may still contain reasoning markup; callers
    /// sanitize it.
    async fn generate(&self, request: GenerationRequest)
        -> Result<GenerationResponse, GenerationError>;

    /// Returns backend information (name, model).
    fn backend_info(&self) -> BackendInfo;
}

/// Request for a single generation.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    /// Instruction text built by the prompt builder.
    pub prompt: String,
    /// Optional role/system instruction, for backends that support one.
    pub system_prompt: Option<String>,
    /// Maximum tokens to generate.
    pub max_output_tokens: u32,
    /// Sampling temperature.
    pub temperature: f32,
    /// Correlation id for logs.
    pub trace_id: String,
}

impl GenerationRequest {
    /// Creates a request with a fresh trace id.
    pub fn new(prompt: impl Into<String>, max_output_tokens: u32, temperature: f32) -> Self {
        Self {
            prompt: prompt.into(),
            system_prompt: None,
            max_output_tokens,
            temperature,
            trace_id: uuid::Uuid::new_v4().to_string(),
        }
    }

    /// Sets the system prompt.
    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = Some(prompt.into());
        self
    }

    /// Sets the trace id.
    pub fn with_trace_id(mut self, trace_id: impl Into<String>) -> Self {
        self.trace_id = trace_id.into();
        self
    }
}

/// Raw generation result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationResponse {
    /// Generated text, unsanitized.
    pub content: String,
    /// Model that produced the text.
    pub model: String,
}

impl GenerationResponse {
    /// Creates a new response.
    pub fn new(content: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            model: model.into(),
        }
    }
}

/// Backend identification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendInfo {
    /// Backend name (e.g., "openai", "ollama").
    pub name: String,
    /// Model identifier (e.g., "gpt-4", "llama3.1:8b").
    pub model: String,
}

impl BackendInfo {
    /// Creates new backend info.
    pub fn new(name: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            model: model.into(),
        }
    }
}

/// Generation failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerationError {
    /// Transport failure before a response arrived.
    #[error("network error: {0}")]
    Network(String),

    /// The call exceeded the configured timeout.
    #[error("request timed out after {timeout_secs}s")]
    Timeout {
        /// Configured timeout.
        timeout_secs: u64,
    },

    /// Provider answered with a non-success status.
    #[error("provider returned status {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, possibly empty.
        body: String,
    },

    /// API key or credentials rejected by the provider.
    #[error("authentication failed")]
    AuthenticationFailed,

    /// Response body could not be parsed or lacked the text field.
    #[error("parse error: {0}")]
    Parse(String),

    /// Backend could not be constructed or the request is unusable.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl GenerationError {
    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Creates a status error.
    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self::Status {
            status,
            body: body.into(),
        }
    }

    /// Creates a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }

    /// Returns true if a later identical call could succeed.
    pub fn is_transient(&self) -> bool {
        match self {
            GenerationError::Network(_) | GenerationError::Timeout { .. } => true,
            GenerationError::Status { status, .. } => *status == 429 || *status >= 500,
            GenerationError::AuthenticationFailed
            | GenerationError::Parse(_)
            | GenerationError::InvalidRequest(_) => false,
        }
    }
}
