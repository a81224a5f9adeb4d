//! Field-level validation for transfer requests.
//!
//! Two phases, both accumulating every applicable failure into one ordered
//! list so the caller sees all problems in a single rejection:
//!
//! - **Phase A** (`validate_transfer_request`): structural checks, no I/O.
//! - **Phase B** (`check_end_user`, `check_locked_accounts`): semantic
//!   checks against state the engine has loaded (and locked).

use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{Account, Transfer, TransferRequest, User};

/// Wire field names, matching the request's camelCase JSON.
pub mod fields {
    pub const AMOUNT: &str = "amount";
    pub const END_USER_ID: &str = "endUserId";
    pub const SOURCE_ACCOUNT_ID: &str = "sourceAccountId";
    pub const DESTINATION_ACCOUNT_ID: &str = "destinationAccountId";
}

/// One validation failure, optionally tagged with the offending field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<&'static str>,
    pub message: &'static str,
}

impl ValidationError {
    pub fn on(field: &'static str, message: &'static str) -> Self {
        Self {
            field: Some(field),
            message,
        }
    }

    pub fn general(message: &'static str) -> Self {
        Self {
            field: None,
            message,
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.field {
            Some(field) => write!(f, "{}: {}", field, self.message),
            None => f.write_str(self.message),
        }
    }
}

/// Phase A: structural validation, no I/O.
///
/// Returns the concrete [`Transfer`] command if the request is well formed,
/// otherwise every structural problem found.
pub fn validate_transfer_request(
    request: &TransferRequest,
) -> Result<Transfer, Vec<ValidationError>> {
    let mut errors = Vec::new();

    match request.amount {
        Some(amount) if amount > Decimal::ZERO => {}
        _ => errors.push(ValidationError::on(
            fields::AMOUNT,
            "Amount should be positive",
        )),
    }

    if request.end_user_id.is_none() {
        errors.push(ValidationError::on(
            fields::END_USER_ID,
            "End user id should not be null",
        ));
    }
    if request.source_account_id.is_none() {
        errors.push(ValidationError::on(
            fields::SOURCE_ACCOUNT_ID,
            "Source account id should not be null",
        ));
    }
    if request.destination_account_id.is_none() {
        errors.push(ValidationError::on(
            fields::DESTINATION_ACCOUNT_ID,
            "Destination account id should not be null",
        ));
    }

    // Either id could be "the" wrong one from the caller's perspective,
    // so a self-transfer is reported on both fields.
    if let (Some(source), Some(destination)) =
        (request.source_account_id, request.destination_account_id)
        && source == destination
    {
        errors.push(ValidationError::on(
            fields::SOURCE_ACCOUNT_ID,
            "Account ids should be different",
        ));
        errors.push(ValidationError::on(
            fields::DESTINATION_ACCOUNT_ID,
            "Account ids should be different",
        ));
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(Transfer {
        end_user_id: request.end_user_id.unwrap_or_default(),
        source_account_id: request.source_account_id.unwrap_or_default(),
        destination_account_id: request.destination_account_id.unwrap_or_default(),
        amount: request.amount.unwrap_or_default(),
    })
}

/// Phase B step 1: the end user must exist before any lock is taken.
pub fn check_end_user(end_user: Option<&User>) -> Result<(), Vec<ValidationError>> {
    match end_user {
        Some(_) => Ok(()),
        None => Err(vec![ValidationError::on(
            fields::END_USER_ID,
            "End user should exist",
        )]),
    }
}

/// Phase B step 2: semantic checks against the locked account snapshot.
///
/// Balance and ownership are only evaluated when the source account was
/// actually acquired; a missing account already has its own error.
pub fn check_locked_accounts(
    transfer: &Transfer,
    source: Option<Account>,
    destination: Option<Account>,
) -> Result<(Account, Account), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if source.is_none() {
        errors.push(ValidationError::on(
            fields::SOURCE_ACCOUNT_ID,
            "Account cannot be acquired",
        ));
    }
    if destination.is_none() {
        errors.push(ValidationError::on(
            fields::DESTINATION_ACCOUNT_ID,
            "Account cannot be acquired",
        ));
    }

    if let Some(src) = &source {
        if src.balance < transfer.amount {
            errors.push(ValidationError::on(fields::AMOUNT, "Insufficient funds"));
        }
        if src.user_id != transfer.end_user_id {
            errors.push(ValidationError::on(
                fields::SOURCE_ACCOUNT_ID,
                "Account does not belong to user",
            ));
        }
    }

    match (source, destination) {
        (Some(source), Some(destination)) if errors.is_empty() => Ok((source, destination)),
        _ => Err(errors),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn full_request() -> TransferRequest {
        TransferRequest {
            end_user_id: Some(1),
            source_account_id: Some(10),
            destination_account_id: Some(20),
            amount: Some(dec!(350.00)),
        }
    }

    fn account(id: i64, user_id: i64, balance: Decimal) -> Account {
        Account {
            id,
            user_id,
            balance,
        }
    }

    #[test]
    fn well_formed_request_passes_phase_a() {
        let transfer = validate_transfer_request(&full_request()).unwrap();

        assert_eq!(transfer.end_user_id, 1);
        assert_eq!(transfer.source_account_id, 10);
        assert_eq!(transfer.destination_account_id, 20);
        assert_eq!(transfer.amount, dec!(350.00));
    }

    #[test]
    fn missing_amount_is_rejected() {
        let request = TransferRequest {
            amount: None,
            ..full_request()
        };

        let errors = validate_transfer_request(&request).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::on(
                fields::AMOUNT,
                "Amount should be positive"
            )]
        );
    }

    #[test]
    fn zero_and_negative_amounts_are_rejected() {
        for amount in [dec!(0), dec!(-0.01)] {
            let request = TransferRequest {
                amount: Some(amount),
                ..full_request()
            };

            let errors = validate_transfer_request(&request).unwrap_err();
            assert_eq!(errors.len(), 1);
            assert_eq!(errors[0].field, Some(fields::AMOUNT));
        }
    }

    #[test]
    fn empty_request_reports_every_missing_field() {
        let errors = validate_transfer_request(&TransferRequest::default()).unwrap_err();

        let tagged: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(
            tagged,
            vec![
                Some(fields::AMOUNT),
                Some(fields::END_USER_ID),
                Some(fields::SOURCE_ACCOUNT_ID),
                Some(fields::DESTINATION_ACCOUNT_ID),
            ]
        );
    }

    #[test]
    fn self_transfer_is_reported_on_both_fields() {
        let request = TransferRequest {
            destination_account_id: Some(10),
            ..full_request()
        };

        let errors = validate_transfer_request(&request).unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::on(fields::SOURCE_ACCOUNT_ID, "Account ids should be different"),
                ValidationError::on(
                    fields::DESTINATION_ACCOUNT_ID,
                    "Account ids should be different"
                ),
            ]
        );
    }

    #[test]
    fn missing_end_user_stops_phase_b() {
        let errors = check_end_user(None).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::on(
                fields::END_USER_ID,
                "End user should exist"
            )]
        );

        let user = User {
            id: 1,
            username: "alice".to_string(),
        };
        assert!(check_end_user(Some(&user)).is_ok());
    }

    fn transfer() -> Transfer {
        Transfer {
            end_user_id: 1,
            source_account_id: 10,
            destination_account_id: 20,
            amount: dec!(350.00),
        }
    }

    #[test]
    fn locked_accounts_pass_when_funded_and_owned() {
        let source = account(10, 1, dec!(7832.12));
        let destination = account(20, 2, dec!(12.89));

        let (src, dst) =
            check_locked_accounts(&transfer(), Some(source.clone()), Some(destination.clone()))
                .unwrap();
        assert_eq!(src, source);
        assert_eq!(dst, destination);
    }

    #[test]
    fn missing_accounts_are_each_reported() {
        let errors = check_locked_accounts(&transfer(), None, None).unwrap_err();

        assert_eq!(
            errors,
            vec![
                ValidationError::on(fields::SOURCE_ACCOUNT_ID, "Account cannot be acquired"),
                ValidationError::on(fields::DESTINATION_ACCOUNT_ID, "Account cannot be acquired"),
            ]
        );
    }

    #[test]
    fn insufficient_funds_is_a_single_amount_error() {
        let source = account(10, 1, dec!(12.19));
        let destination = account(20, 2, dec!(0));

        let errors =
            check_locked_accounts(&transfer(), Some(source), Some(destination)).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::on(fields::AMOUNT, "Insufficient funds")]
        );
    }

    #[test]
    fn exact_balance_is_enough() {
        let source = account(10, 1, dec!(350.00));
        let destination = account(20, 2, dec!(0));

        assert!(check_locked_accounts(&transfer(), Some(source), Some(destination)).is_ok());
    }

    #[test]
    fn foreign_source_account_is_rejected() {
        let source = account(10, 99, dec!(7832.12));
        let destination = account(20, 2, dec!(12.89));

        let errors =
            check_locked_accounts(&transfer(), Some(source), Some(destination)).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::on(
                fields::SOURCE_ACCOUNT_ID,
                "Account does not belong to user"
            )]
        );
    }

    #[test]
    fn balance_and_ownership_are_skipped_when_source_is_missing() {
        let destination = account(20, 2, dec!(12.89));

        let errors = check_locked_accounts(&transfer(), None, Some(destination)).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::on(
                fields::SOURCE_ACCOUNT_ID,
                "Account cannot be acquired"
            )]
        );
    }

    #[test]
    fn all_phase_b_failures_accumulate() {
        // Missing destination, underfunded and foreign source: three errors
        // in one rejection.
        let source = account(10, 99, dec!(1.00));

        let errors = check_locked_accounts(&transfer(), Some(source), None).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert_eq!(errors[0].field, Some(fields::DESTINATION_ACCOUNT_ID));
        assert_eq!(errors[1].field, Some(fields::AMOUNT));
        assert_eq!(errors[2].field, Some(fields::SOURCE_ACCOUNT_ID));
    }
}
