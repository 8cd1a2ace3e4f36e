use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Transaction submitted for writing to the ledger
///
/// Field names on the wire are camelCase (`fromAccountNum`, ...). Any other
/// fields the caller sends along (ids, timestamps) are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub from_account_num: String,
    pub from_routing_num: String,
    pub to_account_num: String,
    pub to_routing_num: String,
    /// Amount in the smallest currency unit
    pub amount: i64,
}

impl Transaction {
    /// True when the transfer originates at the bank identified by `local_routing_number`
    pub fn is_internal(&self, local_routing_number: &str) -> bool {
        self.from_routing_num == local_routing_number
    }

    /// True when sender and receiver are the same (account, routing) pair
    pub fn is_self_transfer(&self) -> bool {
        self.from_account_num == self.to_account_num
            && self.from_routing_num == self.to_routing_num
    }
}

/// Validation errors
///
/// Every variant is a client input error, never a system failure. The display
/// text is the message a transport hands back to the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("invalid account details")]
    InvalidNumber,
    #[error("sender not authenticated")]
    NotAuthenticated,
    #[error("can't send to self")]
    SendToSelf,
    #[error("invalid amount")]
    InvalidAmount,
}

impl ValidationError {
    /// Stable machine-readable identifier for the rejection
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::InvalidNumber => "invalid_number",
            ValidationError::NotAuthenticated => "not_authenticated",
            ValidationError::SendToSelf => "send_to_self",
            ValidationError::InvalidAmount => "invalid_amount",
        }
    }
}

/// Outcome reported for one intake line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verdict {
    pub line: usize,
    pub status: VerdictStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VerdictStatus {
    Accepted,
    Rejected,
    Malformed,
}

impl Verdict {
    pub fn accepted(line: usize) -> Self {
        Self {
            line,
            status: VerdictStatus::Accepted,
            code: None,
            reason: None,
        }
    }

    pub fn rejected(line: usize, error: ValidationError) -> Self {
        Self {
            line,
            status: VerdictStatus::Rejected,
            code: Some(error.code()),
            reason: Some(error.to_string()),
        }
    }

    pub fn malformed(line: usize, reason: impl Into<String>) -> Self {
        Self {
            line,
            status: VerdictStatus::Malformed,
            code: None,
            reason: Some(reason.into()),
        }
    }
}
