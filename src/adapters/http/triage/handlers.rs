//! HTTP handlers for the triage endpoints.
//!
//! Thin translation between JSON bodies and the application handlers.
//! Status mapping:
//! - invalid input → 400
//! - generation failure → 502
//! - history unavailable → 503

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::application::{
    AdvanceDialogueCommand, AdvanceDialogueError, AdvanceDialogueHandler,
    SummarizeSessionCommand, SummarizeSessionError, SummarizeSessionHandler,
};
use crate::domain::foundation::ValidationError;

use super::dto::{
    ChatRequest, ChatResponse, ErrorResponse, HealthResponse, SummaryRequest, SummaryResponse,
};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared state for the triage routes.
#[derive(Clone)]
pub struct AppState {
    pub advance: Arc<AdvanceDialogueHandler>,
    pub summarize: Arc<SummarizeSessionHandler>,
}

impl AppState {
    pub fn new(advance: AdvanceDialogueHandler, summarize: SummarizeSessionHandler) -> Self {
        Self {
            advance: Arc::new(advance),
            summarize: Arc::new(summarize),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Errors
// ════════════════════════════════════════════════════════════════════════════════

/// API error mapped to an HTTP status with a `{"detail"}` body.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    BadGateway(String),
    ServiceUnavailable(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            ApiError::BadRequest(d) => (StatusCode::BAD_REQUEST, d),
            ApiError::BadGateway(d) => (StatusCode::BAD_GATEWAY, d),
            ApiError::ServiceUnavailable(d) => (StatusCode::SERVICE_UNAVAILABLE, d),
        };
        (status, Json(ErrorResponse::new(detail))).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<AdvanceDialogueError> for ApiError {
    fn from(err: AdvanceDialogueError) -> Self {
        match err {
            AdvanceDialogueError::InvalidInput(v) => ApiError::BadRequest(validation_detail(&v)),
            AdvanceDialogueError::Generation(e) => {
                ApiError::BadGateway(format!("Error calling AI model: {}", e))
            }
            AdvanceDialogueError::HistoryUnavailable(e) => {
                ApiError::ServiceUnavailable(format!("Conversation history unavailable: {}", e))
            }
        }
    }
}

impl From<SummarizeSessionError> for ApiError {
    fn from(err: SummarizeSessionError) -> Self {
        match err {
            SummarizeSessionError::InvalidInput(v) => ApiError::BadRequest(validation_detail(&v)),
            SummarizeSessionError::Generation(e) => {
                ApiError::BadGateway(format!("Error calling AI model: {}", e))
            }
            SummarizeSessionError::HistoryUnavailable(e) => {
                ApiError::ServiceUnavailable(format!("Conversation history unavailable: {}", e))
            }
        }
    }
}

fn validation_detail(err: &ValidationError) -> String {
    match err {
        ValidationError::EmptyField { field } => match field.as_str() {
            "patient_id" => "Patient ID cannot be empty.".to_string(),
            "session_id" => "Session ID cannot be empty.".to_string(),
            "user_input" => "User input cannot be empty.".to_string(),
            _ => err.to_string(),
        },
        ValidationError::InvalidFormat { field, reason } => match field.as_str() {
            "question_count" => "Question count must be non-negative.".to_string(),
            _ => reason.clone(),
        },
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// `POST /chat`
pub async fn chat(
    State(state): State<AppState>,
    body: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, ApiError> {
    let Json(req) = body?;

    let result = state
        .advance
        .handle(AdvanceDialogueCommand::new(
            req.patient_id,
            req.session_id,
            req.user_input,
            req.question_count,
        ))
        .await?;

    Ok(Json(result.into()))
}

/// `POST /summary`
pub async fn summary(
    State(state): State<AppState>,
    body: Result<Json<SummaryRequest>, JsonRejection>,
) -> Result<Json<SummaryResponse>, ApiError> {
    let Json(req) = body?;

    let summary = state
        .summarize
        .handle(SummarizeSessionCommand::new(req.patient_id, req.session_id))
        .await?;

    Ok(Json(summary.into()))
}

/// `GET /health`
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}
