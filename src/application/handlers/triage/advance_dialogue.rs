//! AdvanceDialogue command handler.
//!
//! Runs one turn of a triage session: classify the phase from the caller's
//! counter, replay history into a phase-specific prompt, generate, sanitize,
//! append the exchange and return the cleaned reply.
//!
//! Storage after generation is best-effort. If the append fails the reply is
//! still returned and `persisted` is false, so the caller can tell the turn
//! will be missing from future replays.

use std::sync::Arc;
use thiserror::Error;

use crate::domain::foundation::{SessionKey, ValidationError};
use crate::domain::triage::{clean_response, DialoguePolicy, Phase, PromptBuilder};
use crate::ports::{GenerationBackend, GenerationError, GenerationRequest, MemoryStore, PersistenceError};

/// Command to advance a triage dialogue by one turn.
#[derive(Debug, Clone)]
pub struct AdvanceDialogueCommand {
    pub patient_id: String,
    pub session_id: String,
    pub user_input: String,
    /// Number of questions asked so far, supplied by the caller.
    /// Signed so a negative value is reported as invalid input.
    pub question_count: i64,
}

impl AdvanceDialogueCommand {
    pub fn new(
        patient_id: impl Into<String>,
        session_id: impl Into<String>,
        user_input: impl Into<String>,
        question_count: impl Into<i64>,
    ) -> Self {
        Self {
            patient_id: patient_id.into(),
            session_id: session_id.into(),
            user_input: user_input.into(),
            question_count: question_count.into(),
        }
    }
}

/// Result of a successful turn.
#[derive(Debug, Clone, PartialEq)]
pub struct AdvanceDialogueResult {
    /// Sanitized assistant reply.
    pub response: String,
    /// Phase the turn was classified into.
    pub phase: Phase,
    /// Whether the exchange reached the memory store.
    pub persisted: bool,
}

/// Errors that can occur when advancing a dialogue.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AdvanceDialogueError {
    /// A required field is empty. Nothing was generated or stored.
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] ValidationError),

    /// The backend call failed. Nothing was stored.
    #[error("Generation failed: {0}")]
    Generation(#[from] GenerationError),

    /// Session history could not be read, so no prompt was built.
    #[error("History unavailable: {0}")]
    HistoryUnavailable(#[from] PersistenceError),
}

/// Handler for advancing a triage dialogue.
pub struct AdvanceDialogueHandler {
    store: Arc<dyn MemoryStore>,
    backend: Arc<dyn GenerationBackend>,
    policy: DialoguePolicy,
    system_prompt: Option<String>,
}

impl AdvanceDialogueHandler {
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

    /// Sets the role instruction sent with every generation call.
    pub fn with_system_prompt(mut self, system_prompt: Option<String>) -> Self {
        self.system_prompt = system_prompt;
        self
    }

    pub async fn handle(
        &self,
        cmd: AdvanceDialogueCommand,
    ) -> Result<AdvanceDialogueResult, AdvanceDialogueError> {
        // 1. Validate before touching any collaborator
        let key = SessionKey::parse(cmd.patient_id, cmd.session_id)?;
        let user_input = cmd.user_input.trim();
        if user_input.is_empty() {
            return Err(ValidationError::empty_field("user_input").into());
        }
        let question_count = u32::try_from(cmd.question_count).map_err(|_| {
            ValidationError::invalid_format("question_count", "must be non-negative")
        })?;

        // 2. Classify
        let phase = self.policy.phase_for(question_count);

        // 3. Replay history
        let history = self.store.get(&key).await?;

        // 4. Generate
        let prompt = PromptBuilder::build(phase, &history, user_input);
        let mut request = GenerationRequest::new(
            prompt,
            self.policy.max_tokens_for(phase),
            self.policy.temperature,
        );
        if let Some(ref system_prompt) = self.system_prompt {
            request = request.with_system_prompt(system_prompt.clone());
        }
        let trace_id = request.trace_id.clone();

        let generated = match self.backend.generate(request).await {
            Ok(generated) => generated,
            Err(err) => {
                tracing::warn!(
                    session = %key,
                    phase = %phase,
                    trace_id = %trace_id,
                    error = %err,
                    "Generation failed"
                );
                return Err(err.into());
            }
        };

        // 5. Sanitize
        let response = clean_response(&generated.content);

        // 6. Persist, best-effort
        let persisted = match self.store.append(&key, user_input, &response).await {
            Ok(_) => true,
            Err(err) => {
                tracing::error!(
                    session = %key,
                    trace_id = %trace_id,
                    error = %err,
                    "Failed to store turn; returning reply anyway"
                );
                false
            }
        };

        tracing::info!(
            session = %key,
            phase = %phase,
            question_count,
            history_len = history.len(),
            model = %generated.model,
            persisted,
            "Dialogue advanced"
        );

        Ok(AdvanceDialogueResult {
            response,
            phase,
            persisted,
        })
    }
}
