use axum::extract::State;
use axum::{routing::get, Router};
use courier_core::Outcome;
use serde::Serialize;

use crate::response::ApiResponse;
use crate::state::AppState;

/// Health check response payload.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Whether global rate limiting is active.
    pub rate_limited: bool,
}

/// GET /health -- returns service health inside the standard envelope.
async fn health_check(State(state): State<AppState>) -> ApiResponse<HealthResponse> {
    Outcome::success(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        rate_limited: state.config.rate_limit_per_minute > 0,
    })
    .into()
}

/// Mount health check routes (intended for root-level, NOT under `/api/v1`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
