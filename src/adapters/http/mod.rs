//! HTTP adapters - REST API implementations.
//!
//! [`router`] assembles the full application: public routes, the
//! credential-guarded triage routes, request tracing and a timeout bound.

pub mod middleware;
pub mod triage;

pub use middleware::{basic_auth_middleware, BasicAuthState};
pub use triage::{AppState, triage_routes};

use std::time::Duration;

use axum::Router;
use tower::ServiceBuilder;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

/// Builds the application router.
///
/// # Example
///
/// ```ignore
/// let app = router(state, BasicAuthState::new("nurse", "s3cret"), Duration::from_secs(120));
/// axum::serve(listener, app).await?;
/// ```
pub fn router(state: AppState, auth: BasicAuthState, request_timeout: Duration) -> Router {
    let protected = triage_routes().route_layer(axum::middleware::from_fn_with_state(
        auth,
        basic_auth_middleware,
    ));

    Router::new()
        .merge(triage::public_routes())
        .merge(protected)
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(TimeoutLayer::new(request_timeout)),
        )
}
