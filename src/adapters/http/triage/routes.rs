//! Axum router configuration for the triage endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{chat, health, summary, AppState};

/// Routes that require credentials.
///
/// - `POST /chat` - Advance a dialogue by one turn
/// - `POST /summary` - Advice and report for a session
pub fn triage_routes() -> Router<AppState> {
    Router::new()
        .route("/chat", post(chat))
        .route("/summary", post(summary))
}

/// Routes open to anyone.
///
/// - `GET /health` - Liveness check
pub fn public_routes() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
