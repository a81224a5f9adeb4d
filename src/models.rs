//! Core domain types: users, accounts and the transfer command.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Registered user. Created once, immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
}

/// Balance-holding account owned by exactly one user.
///
/// Invariant: `balance >= 0` between transfers. Enforced at creation
/// (validation layer + DB CHECK) and re-checked against the locked row
/// before every debit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: i64,
    pub user_id: i64,
    pub balance: Decimal,
}

/// Transfer command as it arrives on the wire.
///
/// All fields are optional so structural validation can report every
/// missing field in one pass instead of failing on the first one.
/// This is a transient command, never a persisted record.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferRequest {
    /// User on whose behalf the transfer is executed.
    pub end_user_id: Option<i64>,
    pub source_account_id: Option<i64>,
    pub destination_account_id: Option<i64>,
    pub amount: Option<Decimal>,
}

/// Structurally valid transfer, produced by phase A validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transfer {
    pub end_user_id: i64,
    pub source_account_id: i64,
    pub destination_account_id: i64,
    pub amount: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn account_serializes_with_camel_case_user_id() {
        let account = Account {
            id: 3,
            user_id: 7,
            balance: dec!(12.89),
        };

        let json = serde_json::to_value(&account).unwrap();
        assert_eq!(json["userId"], serde_json::json!(7));
        assert!(json.get("user_id").is_none());
    }

    #[test]
    fn transfer_request_deserializes_partial_bodies() {
        let req: TransferRequest =
            serde_json::from_str(r#"{"endUserId": 1, "amount": 350.00}"#).unwrap();

        assert_eq!(req.end_user_id, Some(1));
        assert_eq!(req.amount, Some(dec!(350.00)));
        assert_eq!(req.source_account_id, None);
        assert_eq!(req.destination_account_id, None);
    }
}
