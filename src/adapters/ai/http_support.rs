//! Transport helpers shared by the HTTP-based backends.

use reqwest::Response;
use std::time::Duration;

use crate::ports::GenerationError;

/// Builds a client whose every request is bounded by `timeout`.
pub(super) fn build_client(timeout: Duration) -> Result<reqwest::Client, GenerationError> {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| GenerationError::InvalidRequest(format!("Failed to create HTTP client: {}", e)))
}

/// Maps a reqwest failure to the port error.
pub(super) fn map_transport_error(err: reqwest::Error, timeout: Duration) -> GenerationError {
    if err.is_timeout() {
        GenerationError::Timeout {
            timeout_secs: timeout.as_secs(),
        }
    } else if err.is_connect() {
        GenerationError::network(format!("Connection failed: {}", err))
    } else {
        GenerationError::network(err.to_string())
    }
}

/// Passes a success response through, converts anything else to an error.
pub(super) async fn ensure_success(response: Response) -> Result<Response, GenerationError> {
    let status = response.status();

    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();

    match status.as_u16() {
        401 | 403 => Err(GenerationError::AuthenticationFailed),
        code => Err(GenerationError::status(code, body)),
    }
}
