//! Health check endpoint

use axum::extract::State;
use axum::{routing::get, Router};
use serde::Serialize;

use crate::http::envelope::Envelope;
use crate::http::error::ApiError;
use crate::http::state::AppState;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// GET /health - 503 when the store cannot be reached
async fn health(State(state): State<AppState>) -> Result<Envelope<HealthResponse>, ApiError> {
    state.store().ping().await.map_err(|e| {
        tracing::error!(error = %e, "health check failed");
        ApiError::Unavailable("database unavailable".into())
    })?;

    Ok(Envelope::ok(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    }))
}

/// Health routes
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
