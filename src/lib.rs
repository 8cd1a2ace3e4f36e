//! This crate validates transactions before they are written to a bank ledger.
//! It checks account and routing number formats, sender authorization,
//! self-transfers and amounts, and provides a line-oriented intake used by
//! the command line tool.

pub mod types; // Transaction record, validation errors and verdicts.
pub mod validation; // Transaction validation rules.
pub mod intake; // JSON-lines request processing.
pub mod config; // Defines and loads validator configuration.

// Re-export commonly used types and configurations for easier access.
pub use types::*;
pub use config::Config;
pub use validation::TransactionValidator;
