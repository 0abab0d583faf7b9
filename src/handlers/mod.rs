//! Route handlers.
//!
//! Both endpoints are stateless and side-effect-free; each response is
//! built fresh per request.

use axum::{response::IntoResponse, Json};
use serde_json::json;

/// Greeting endpoint, used to confirm a deployed instance serves traffic.
pub async fn index() -> impl IntoResponse {
    Json(json!({ "message": "Hello World" }))
}

/// Health check endpoint for the hosting platform's liveness probes.
/// Touches no external dependency so the probe stays fast.
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
