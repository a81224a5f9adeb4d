//! Transfer failure taxonomy.

use thiserror::Error;

use crate::validation::ValidationError;

/// How a transfer can fail. Exactly three kinds exist:
///
/// - [`Rejected`](TransferError::Rejected): validation failures, surfaced to
///   the caller verbatim and never retried.
/// - [`Integrity`](TransferError::Integrity): a locked, validated account
///   could not be written. Under the lock-ordering discipline this cannot
///   happen unless something bypassed the locks; it is fatal for the request
///   and surfaced to operators as an anomaly, never silently retried.
/// - [`Database`](TransferError::Database): storage-layer failures (including
///   lock-wait timeouts), propagated unchanged to the transaction boundary.
///
/// Every variant rolls the enclosing transaction back.
#[derive(Debug, Error)]
pub enum TransferError {
    #[error("transfer rejected with {} validation error(s)", .0.len())]
    Rejected(Vec<ValidationError>),

    #[error("account {account_id} could not be updated while locked")]
    Integrity { account_id: i64 },

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl TransferError {
    /// The field-tagged messages of a rejection, if this is one.
    pub fn validation_errors(&self) -> Option<&[ValidationError]> {
        match self {
            TransferError::Rejected(errors) => Some(errors),
            _ => None,
        }
    }
}
