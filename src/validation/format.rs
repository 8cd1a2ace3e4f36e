//! Fixed-width account and routing number formats

use regex::Regex;
use std::sync::LazyLock;

/// Account numbers are exactly this many ASCII digits
pub const ACCOUNT_NUMBER_DIGITS: usize = 10;

/// Routing numbers are exactly this many ASCII digits
pub const ROUTING_NUMBER_DIGITS: usize = 9;

// `[0-9]` rather than `\d`, which also matches non-ASCII digits.
static ACCOUNT_NUMBER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10}$").expect("Invalid account number regex pattern"));

static ROUTING_NUMBER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{9}$").expect("Invalid routing number regex pattern"));

pub fn is_account_number(value: &str) -> bool {
    ACCOUNT_NUMBER_PATTERN.is_match(value)
}

pub fn is_routing_number(value: &str) -> bool {
    ROUTING_NUMBER_PATTERN.is_match(value)
}
