//! Gateway request DTOs and the error-to-response mapping.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::transfer::TransferError;
use crate::validation::ValidationError;

/// Body of `POST /users`. Optional so validation can report the missing
/// field instead of a bare deserialization failure.
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub username: Option<String>,
}

/// Body of `POST /accounts`. Balance defaults to zero.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAccountRequest {
    pub user_id: Option<i64>,
    pub balance: Option<Decimal>,
}

/// HTTP-facing error.
///
/// Validation rejections are surfaced verbatim as a 400 with the JSON error
/// list; everything else is a 500 with a short message. Integrity anomalies
/// and storage failures are logged here, validation noise is not.
#[derive(Debug)]
pub enum ApiError {
    Validation(Vec<ValidationError>),
    Internal(String),
    NotFound,
}

impl ApiError {
    pub fn validation(errors: Vec<ValidationError>) -> Self {
        ApiError::Validation(errors)
    }

    pub fn db(err: sqlx::Error) -> Self {
        tracing::error!(error = %err, "database error in gateway");
        ApiError::Internal(err.to_string())
    }
}

impl From<TransferError> for ApiError {
    fn from(err: TransferError) -> Self {
        match err {
            TransferError::Rejected(errors) => ApiError::Validation(errors),
            TransferError::Integrity { .. } => {
                tracing::error!(error = %err, "transfer integrity anomaly");
                ApiError::Internal(err.to_string())
            }
            TransferError::Database(db_err) => ApiError::db(db_err),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(errors) => {
                (StatusCode::BAD_REQUEST, Json(errors)).into_response()
            }
            ApiError::Internal(message) => {
                (StatusCode::INTERNAL_SERVER_ERROR, Json(message)).into_response()
            }
            ApiError::NotFound => StatusCode::NOT_FOUND.into_response(),
        }
    }
}
