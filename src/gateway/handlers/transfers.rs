//! Transfer endpoint.

use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode};

use super::super::state::AppState;
use super::super::types::ApiError;
use crate::models::TransferRequest;
use crate::transfer::TransferService;

/// POST /transfers
///
/// The service opens one transaction per request; the engine's rejection or
/// success decides commit versus rollback. Errors map to HTTP in
/// [`ApiError`](super::super::types::ApiError).
pub async fn create_transfer(
    State(state): State<Arc<AppState>>,
    Json(request): Json<TransferRequest>,
) -> Result<StatusCode, ApiError> {
    TransferService::create_transfer(&state.db, &request).await?;
    Ok(StatusCode::OK)
}
