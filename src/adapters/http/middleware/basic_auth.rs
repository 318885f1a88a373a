//! HTTP Basic authentication middleware for axum.
//!
//! Credentials are compared by SHA-256 digest in constant time, so neither
//! the length nor the content of the expected values leaks through timing.
//!
//! ```text
//! Request → basic_auth_middleware → handler
//!                 ↓ (bad or missing credentials)
//!           401 {"detail":"Invalid credentials"} + WWW-Authenticate: Basic
//! ```
//!
//! # Example
//!
//! ```ignore
//! let auth = BasicAuthState::new("nurse", "s3cret");
//! let app = Router::new()
//!     .route("/chat", post(chat))
//!     .route_layer(middleware::from_fn_with_state(auth, basic_auth_middleware));
//! ```

use axum::{
    extract::{Request, State},
    http::{header, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use base64::{engine::general_purpose::STANDARD, Engine};
use secrecy::{ExposeSecret, Secret};
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

use crate::adapters::http::triage::ErrorResponse;

/// Expected credentials.
#[derive(Clone)]
pub struct BasicAuthState {
    username: Secret<String>,
    password: Secret<String>,
}

impl BasicAuthState {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: Secret::new(username.into()),
            password: Secret::new(password.into()),
        }
    }

    /// Checks a raw `Authorization` header value.
    pub fn verify_header(&self, header_value: &str) -> bool {
        let Some((scheme, encoded)) = header_value.split_once(' ') else {
            return false;
        };
        if !scheme.eq_ignore_ascii_case("Basic") {
            return false;
        }
        let Ok(decoded) = STANDARD.decode(encoded.trim()) else {
            return false;
        };
        let Ok(decoded) = String::from_utf8(decoded) else {
            return false;
        };
        let Some((username, password)) = decoded.split_once(':') else {
            return false;
        };
        self.verify(username, password)
    }

    /// Compares both fields without short-circuiting.
    pub fn verify(&self, username: &str, password: &str) -> bool {
        let user_ok = digest(username)[..].ct_eq(&digest(self.username.expose_secret())[..]);
        let pass_ok = digest(password)[..].ct_eq(&digest(self.password.expose_secret())[..]);
        (user_ok & pass_ok).into()
    }
}

impl std::fmt::Debug for BasicAuthState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BasicAuthState").finish_non_exhaustive()
    }
}

fn digest(value: &str) -> [u8; 32] {
    Sha256::digest(value.as_bytes()).into()
}

/// Rejects requests without valid Basic credentials.
pub async fn basic_auth_middleware(
    State(auth): State<BasicAuthState>,
    request: Request,
    next: Next,
) -> Response {
    let authorized = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .is_some_and(|h| auth.verify_header(h));

    if authorized {
        return next.run(request).await;
    }

    tracing::warn!(path = %request.uri().path(), "Rejected request with invalid credentials");

    (
        StatusCode::UNAUTHORIZED,
        [(header::WWW_AUTHENTICATE, "Basic")],
        Json(ErrorResponse::new("Invalid credentials")),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header_for(user: &str, pass: &str) -> String {
        format!("Basic {}", STANDARD.encode(format!("{}:{}", user, pass)))
    }

    #[test]
    fn accepts_matching_credentials() {
        let auth = BasicAuthState::new("nurse", "s3cret");
        assert!(auth.verify_header(&header_for("nurse", "s3cret")));
    }

    #[test]
    fn scheme_matches_in_any_case() {
        let auth = BasicAuthState::new("nurse", "s3cret");
        let encoded = STANDARD.encode("nurse:s3cret");
        assert!(auth.verify_header(&format!("basic {}", encoded)));
        assert!(auth.verify_header(&format!("BASIC {}", encoded)));
    }

    #[test]
    fn password_may_contain_colons() {
        let auth = BasicAuthState::new("nurse", "a:b:c");
        assert!(auth.verify_header(&header_for("nurse", "a:b:c")));
    }

    #[test]
    fn rejects_wrong_username_or_password() {
        let auth = BasicAuthState::new("nurse", "s3cret");
        assert!(!auth.verify_header(&header_for("doctor", "s3cret")));
        assert!(!auth.verify_header(&header_for("nurse", "wrong")));
    }

    #[test]
    fn rejects_malformed_headers() {
        let auth = BasicAuthState::new("nurse", "s3cret");
        assert!(!auth.verify_header("Bearer abc"));
        assert!(!auth.verify_header("Basic !!!not-base64"));
        assert!(!auth.verify_header(&format!("Basic {}", STANDARD.encode("no-colon"))));
    }

    #[test]
    fn debug_hides_credentials() {
        let auth = BasicAuthState::new("nurse", "s3cret");
        let debug = format!("{:?}", auth);
        assert!(!debug.contains("s3cret"));
        assert!(!debug.contains("nurse"));
    }
}
