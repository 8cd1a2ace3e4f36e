//! Intake Module
//! 
//! Reads validation requests as JSON lines and writes one verdict per line.
//! A request pairs the authenticated account with the transaction it sent:
//! 
//! ```json
//! {"authenticatedAccount": "1122334455", "transaction": {"fromAccountNum": "1122334455", ...}}
//! ```

mod processor;

pub use processor::{Request, Summary, process_line, process_requests};
