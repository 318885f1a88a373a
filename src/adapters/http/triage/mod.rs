//! HTTP adapter for the triage endpoints.
//!
//! - `POST /chat` - Advance a dialogue by one turn
//! - `POST /summary` - Summarize a session
//! - `GET /health` - Liveness check

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::*;
pub use handlers::{ApiError, AppState};
pub use routes::{public_routes, triage_routes};
