//! SummarizeSession command handler.
//!
//! Produces closing advice and a clinician-facing report for a session from
//! its stored history. Neither text is written back, so the stored log stays
//! a strict sequence of patient/assistant exchanges.

use std::sync::Arc;
use thiserror::Error;

use crate::domain::foundation::{SessionKey, ValidationError};
use crate::domain::triage::{clean_response, DialoguePolicy, PromptBuilder};
use crate::ports::{GenerationBackend, GenerationError, GenerationRequest, MemoryStore, PersistenceError};

/// Command to summarize a session.
#[derive(Debug, Clone)]
pub struct SummarizeSessionCommand {
    pub patient_id: String,
    pub session_id: String,
}

impl SummarizeSessionCommand {
    pub fn new(patient_id: impl Into<String>, session_id: impl Into<String>) -> Self {
        Self {
            patient_id: patient_id.into(),
            session_id: session_id.into(),
        }
    }
}

/// Advice for the patient plus a report of what they said.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    pub advice: String,
    pub report: String,
}

/// Errors that can occur when summarizing a session.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SummarizeSessionError {
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] ValidationError),

    #[error("Generation failed: {0}")]
    Generation(#[from] GenerationError),

    #[error("History unavailable: {0}")]
    HistoryUnavailable(#[from] PersistenceError),
}

/// Handler for summarizing a session.
pub struct SummarizeSessionHandler {
    store: Arc<dyn MemoryStore>,
    backend: Arc<dyn GenerationBackend>,
    policy: DialoguePolicy,
    system_prompt: Option<String>,
}

impl SummarizeSessionHandler {
    pub fn new(
        store: Arc<dyn MemoryStore>,
        backend: Arc<dyn GenerationBackend>,
        policy: DialoguePolicy,
    ) -> Self {
        Self {
            store,
            backend,
            policy,
            system_prompt: None,
        }
    }

    pub fn with_system_prompt(mut self, system_prompt: Option<String>) -> Self {
        self.system_prompt = system_prompt;
        self
    }

    pub async fn handle(
        &self,
        cmd: SummarizeSessionCommand,
    ) -> Result<SessionSummary, SummarizeSessionError> {
        let key = SessionKey::parse(cmd.patient_id, cmd.session_id)?;

        let history = self.store.get(&key).await?;
        if history.is_empty() {
            return Err(ValidationError::invalid_format(
                "session_id",
                "no conversation recorded for this session",
            )
            .into());
        }

        // Both calls share one trace id so their logs correlate.
        let trace_id = uuid::Uuid::new_v4().to_string();
        let advice = self
            .generate(
                PromptBuilder::advice(&history),
                self.policy.final_max_output_tokens,
                &trace_id,
            )
            .await?;
        let report = self
            .generate(
                PromptBuilder::report(&history),
                self.policy.summary_max_output_tokens,
                &trace_id,
            )
            .await?;

        tracing::info!(
            session = %key,
            trace_id = %trace_id,
            turns = history.len(),
            "Session summarized"
        );

        Ok(SessionSummary { advice, report })
    }

    async fn generate(
        &self,
        prompt: String,
        max_tokens: u32,
        trace_id: &str,
    ) -> Result<String, GenerationError> {
        let mut request = GenerationRequest::new(prompt, max_tokens, self.policy.temperature)
            .with_trace_id(trace_id);
        if let Some(ref system_prompt) = self.system_prompt {
            request = request.with_system_prompt(system_prompt.clone());
        }

        let generated = self.backend.generate(request).await.map_err(|err| {
            tracing::warn!(trace_id = %trace_id, error = %err, "Summary generation failed");
            err
        })?;

        Ok(clean_response(&generated.content))
    }
}
