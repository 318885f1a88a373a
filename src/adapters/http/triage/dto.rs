//! HTTP DTOs for the triage endpoints.

use serde::{Deserialize, Serialize};

use crate::application::{AdvanceDialogueResult, SessionSummary};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Body of `POST /chat`.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    pub patient_id: String,
    pub session_id: String,
    pub user_input: String,
    /// Signed so a negative value reaches validation instead of failing to parse.
    pub question_count: i64,
}

/// Body of `POST /summary`.
#[derive(Debug, Clone, Deserialize)]
pub struct SummaryRequest {
    pub patient_id: String,
    pub session_id: String,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}

impl From<AdvanceDialogueResult> for ChatResponse {
    fn from(result: AdvanceDialogueResult) -> Self {
        Self {
            response: result.response,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryResponse {
    pub advice: String,
    pub report: String,
}

impl From<SessionSummary> for SummaryResponse {
    fn from(summary: SessionSummary) -> Self {
        Self {
            advice: summary.advice,
            report: summary.report,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

/// Error body shared by every endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}

impl ErrorResponse {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}
