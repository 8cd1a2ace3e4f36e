//! Transaction Validation Module
//! 
//! This module validates transactions before they are written to the ledger.
//! Performs number format checks, sender authorization, self-transfer
//! detection and amount validation.

mod format;
mod validator;

#[cfg(test)]
mod tests;

pub use format::{
    ACCOUNT_NUMBER_DIGITS,
    ROUTING_NUMBER_DIGITS,
    is_account_number,
    is_routing_number,
};
pub use validator::{TransactionValidator, validate};
