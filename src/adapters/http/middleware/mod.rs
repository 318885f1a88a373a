//! HTTP middleware.

mod basic_auth;

pub use basic_auth::{basic_auth_middleware, BasicAuthState};
