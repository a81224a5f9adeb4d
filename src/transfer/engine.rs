//! Ordered-locking transfer protocol.
//!
//! Two concurrent transfers over the same pair of accounts in opposite
//! directions (A→B and B→A) would deadlock if each locked its own source
//! first. The engine therefore always acquires the lock for the numerically
//! lower account id first, regardless of transfer direction: every
//! transaction contending for the same two rows converges on the same global
//! order and no wait cycle can form. Transfers over disjoint pairs never
//! touch each other's locks and proceed fully in parallel.

use sqlx::PgConnection;

use crate::db::Database;
use crate::models::{Account, Transfer, TransferRequest};
use crate::store::{AccountRepository, UserRepository};
use crate::validation::{check_end_user, check_locked_accounts, validate_transfer_request};

use super::error::TransferError;

/// Executes the transfer protocol on an already-open transaction.
pub struct TransferEngine;

impl TransferEngine {
    /// Validate, lock, re-validate and apply one transfer.
    ///
    /// The caller owns the transaction: commit on `Ok`, roll back on any
    /// `Err`. Locks taken here are released by that commit/rollback.
    pub async fn execute(
        conn: &mut PgConnection,
        request: &TransferRequest,
    ) -> Result<(), TransferError> {
        // Phase A: structural checks, before any I/O.
        let transfer = validate_transfer_request(request).map_err(TransferError::Rejected)?;

        // Resolve the end user before locking anything, so a request on
        // behalf of a nonexistent user never contends for row locks.
        let end_user = UserRepository::fetch(&mut *conn, transfer.end_user_id).await?;
        check_end_user(end_user.as_ref()).map_err(TransferError::Rejected)?;

        tracing::debug!(
            source = transfer.source_account_id,
            destination = transfer.destination_account_id,
            "acquiring account locks"
        );

        let (source, destination) = Self::lock_accounts(conn, &transfer).await?;

        // Phase B: semantic checks against the locked snapshot.
        let (source, destination) = check_locked_accounts(&transfer, source, destination)
            .map_err(TransferError::Rejected)?;

        // New balances are recomputed from the locked snapshot, so the
        // funds check above holds for exactly the value written back.
        Self::apply_balance(conn, &source, source.balance - transfer.amount).await?;
        Self::apply_balance(conn, &destination, destination.balance + transfer.amount).await?;

        tracing::info!(
            source = source.id,
            destination = destination.id,
            amount = %transfer.amount,
            "transfer applied"
        );
        Ok(())
    }

    /// Acquire both row locks, lower account id first, then re-resolve which
    /// locked row is the logical source and which the destination.
    async fn lock_accounts(
        conn: &mut PgConnection,
        transfer: &Transfer,
    ) -> Result<(Option<Account>, Option<Account>), TransferError> {
        if transfer.source_account_id < transfer.destination_account_id {
            let source =
                AccountRepository::fetch_for_update(&mut *conn, transfer.source_account_id).await?;
            let destination =
                AccountRepository::fetch_for_update(&mut *conn, transfer.destination_account_id)
                    .await?;
            Ok((source, destination))
        } else {
            let destination =
                AccountRepository::fetch_for_update(&mut *conn, transfer.destination_account_id)
                    .await?;
            let source =
                AccountRepository::fetch_for_update(&mut *conn, transfer.source_account_id).await?;
            Ok((source, destination))
        }
    }

    /// Write an absolute new balance to a locked row.
    ///
    /// Zero rows affected means the account vanished between lock and write.
    /// The locking discipline makes that impossible unless something
    /// bypassed it, so it is reported as an integrity anomaly, not as
    /// validation noise.
    async fn apply_balance(
        conn: &mut PgConnection,
        account: &Account,
        new_balance: rust_decimal::Decimal,
    ) -> Result<(), TransferError> {
        let updated = AccountRepository::apply_balance(&mut *conn, account.id, new_balance).await?;
        if !updated {
            tracing::error!(
                account = account.id,
                "locked account could not be updated; lock discipline bypassed?"
            );
            return Err(TransferError::Integrity {
                account_id: account.id,
            });
        }
        Ok(())
    }
}

/// Transaction boundary for transfers: one database transaction per request,
/// committed on success, rolled back on any error.
pub struct TransferService;

impl TransferService {
    /// Run one transfer inside its own transaction.
    pub async fn create_transfer(
        db: &Database,
        request: &TransferRequest,
    ) -> Result<(), TransferError> {
        let mut tx = db.pool().begin().await?;

        match TransferEngine::execute(&mut *tx, request).await {
            Ok(()) => {
                tx.commit().await?;
                Ok(())
            }
            Err(err) => {
                // Dropping the transaction would also roll back; being
                // explicit keeps the failure visible if rollback itself fails.
                if let Err(rollback_err) = tx.rollback().await {
                    tracing::error!(error = %rollback_err, "transfer rollback failed");
                }
                Err(err)
            }
        }
    }
}
