use super::format::{is_account_number, is_routing_number};
use crate::{Transaction, ValidationError};
use tracing::{debug, warn};

/// Validates transactions on behalf of one bank
///
/// Holds the bank's own routing number so callers only supply the
/// authenticated account per request.
#[derive(Debug, Clone)]
pub struct TransactionValidator {
    local_routing_number: String,
}

impl TransactionValidator {
    pub fn new(local_routing_number: impl Into<String>) -> Self {
        Self {
            local_routing_number: local_routing_number.into(),
        }
    }

    pub fn local_routing_number(&self) -> &str {
        &self.local_routing_number
    }

    /// Validate a transaction sent by `authenticated_account`
    pub fn validate(
        &self,
        authenticated_account: &str,
        tx: &Transaction,
    ) -> Result<(), ValidationError> {
        validate(&self.local_routing_number, authenticated_account, tx)
    }
}

/// Validate a transaction before it is added to the ledger
///
/// Checks run in order and stop at the first failure:
/// 1. Account numbers are well formed
/// 2. Routing numbers are well formed
/// 3. Internal transfers are sent by the authenticated account
/// 4. Sender and receiver differ
/// 5. Amount is positive
///
/// Returns Ok(()) if valid, Err(ValidationError) if invalid
pub fn validate(
    local_routing_number: &str,
    authenticated_account: &str,
    tx: &Transaction,
) -> Result<(), ValidationError> {
    debug!("Validating transaction");

    check_number_formats(tx)?;
    check_sender(local_routing_number, authenticated_account, tx)?;
    check_not_self(tx)?;
    check_amount(tx)?;

    debug!("Transaction validation successful");
    Ok(())
}

fn check_number_formats(tx: &Transaction) -> Result<(), ValidationError> {
    if !is_account_number(&tx.from_account_num) || !is_account_number(&tx.to_account_num) {
        warn!("Invalid transaction: invalid account number");
        return Err(ValidationError::InvalidNumber);
    }

    if !is_routing_number(&tx.from_routing_num) || !is_routing_number(&tx.to_routing_num) {
        warn!("Invalid transaction: invalid routing number");
        return Err(ValidationError::InvalidNumber);
    }

    Ok(())
}

/// Only transfers originating at this bank are checked against the
/// authenticated account; external senders are vouched for upstream.
fn check_sender(
    local_routing_number: &str,
    authenticated_account: &str,
    tx: &Transaction,
) -> Result<(), ValidationError> {
    if tx.is_internal(local_routing_number) && tx.from_account_num != authenticated_account {
        warn!("Invalid transaction: sender not authorized");
        return Err(ValidationError::NotAuthenticated);
    }

    Ok(())
}

fn check_not_self(tx: &Transaction) -> Result<(), ValidationError> {
    if tx.is_self_transfer() {
        warn!("Invalid transaction: sender is also receiver");
        return Err(ValidationError::SendToSelf);
    }

    Ok(())
}

fn check_amount(tx: &Transaction) -> Result<(), ValidationError> {
    if tx.amount <= 0 {
        warn!("Invalid transaction: transaction amount {} is invalid", tx.amount);
        return Err(ValidationError::InvalidAmount);
    }

    Ok(())
}
