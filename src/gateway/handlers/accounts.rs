//! Account endpoints.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use rust_decimal::Decimal;

use super::super::state::AppState;
use super::super::types::{ApiError, CreateAccountRequest};
use crate::models::Account;
use crate::store::{AccountRepository, UserRepository};
use crate::validation::ValidationError;

/// GET /accounts/{account_id}
pub async fn fetch_account(
    State(state): State<Arc<AppState>>,
    Path(account_id): Path<i64>,
) -> Result<Json<Account>, ApiError> {
    AccountRepository::fetch(state.db.pool(), account_id)
        .await
        .map_err(ApiError::db)?
        .map(Json)
        .ok_or(ApiError::NotFound)
}

/// POST /accounts
pub async fn create_account(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CreateAccountRequest>,
) -> Result<(StatusCode, Json<Account>), ApiError> {
    let mut errors = Vec::new();

    let user_id = match request.user_id {
        None => {
            errors.push(ValidationError::on("userId", "User id should not be null"));
            None
        }
        Some(user_id) => {
            if UserRepository::fetch(state.db.pool(), user_id)
                .await
                .map_err(ApiError::db)?
                .is_none()
            {
                errors.push(ValidationError::on("userId", "User should exist"));
            }
            Some(user_id)
        }
    };

    let balance = request.balance.unwrap_or(Decimal::ZERO);
    if balance < Decimal::ZERO {
        errors.push(ValidationError::on(
            "balance",
            "Balance should be non-negative",
        ));
    }

    match user_id {
        Some(user_id) if errors.is_empty() => {
            let account = AccountRepository::create(state.db.pool(), user_id, balance)
                .await
                .map_err(ApiError::db)?;

            tracing::info!(account = account.id, user = user_id, "account created");
            Ok((StatusCode::CREATED, Json(account)))
        }
        _ => Err(ApiError::validation(errors)),
    }
}
