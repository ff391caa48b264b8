//! Liveness endpoint.

use axum::Json;
use axum::extract::State;
use serde::Serialize;

use crate::state::AppState;

/// Body of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthResponse {
    /// Always `"ok"` while the process serves requests
    pub status: &'static str,
    /// Service name
    pub service: &'static str,
    /// Crate version
    pub version: &'static str,
    /// Configured backend base URL
    pub backend_url: String,
}

impl HealthResponse {
    /// A healthy response for the given backend.
    pub fn ok(backend_url: impl Into<String>) -> Self {
        Self {
            status: "ok",
            service: "trapline",
            version: env!("CARGO_PKG_VERSION"),
            backend_url: backend_url.into(),
        }
    }
}

/// Reports process health. Does not contact the backend.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse::ok(state.backend()))
}
