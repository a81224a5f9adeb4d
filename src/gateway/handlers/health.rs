//! Liveness probe.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode};

use super::super::state::AppState;

/// GET /health — 200 when the database answers.
pub async fn health(State(state): State<Arc<AppState>>) -> StatusCode {
    match state.db.health_check().await {
        Ok(()) => StatusCode::OK,
        Err(err) => {
            tracing::warn!(error = %err, "health check failed");
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}
