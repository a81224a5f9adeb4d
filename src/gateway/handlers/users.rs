//! User endpoints.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use super::super::state::AppState;
use super::super::types::{ApiError, CreateUserRequest};
use crate::models::User;
use crate::store::UserRepository;
use crate::validation::ValidationError;

/// GET /users/{user_id}
pub async fn fetch_user(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<i64>,
) -> Result<Json<User>, ApiError> {
    UserRepository::fetch(state.db.pool(), user_id)
        .await
        .map_err(ApiError::db)?
        .map(Json)
        .ok_or(ApiError::NotFound)
}

/// POST /users
pub async fn create_user(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let username = match request.username.as_deref() {
        Some(username) if !username.is_empty() => username,
        _ => {
            return Err(ApiError::validation(vec![ValidationError::on(
                "username",
                "Username should not be empty",
            )]));
        }
    };

    if UserRepository::fetch_by_username(state.db.pool(), username)
        .await
        .map_err(ApiError::db)?
        .is_some()
    {
        return Err(ApiError::validation(vec![ValidationError::on(
            "username",
            "Username already exists",
        )]));
    }

    let user = UserRepository::create(state.db.pool(), username)
        .await
        .map_err(ApiError::db)?;

    tracing::info!(user = user.id, "user created");
    Ok((StatusCode::CREATED, Json(user)))
}
