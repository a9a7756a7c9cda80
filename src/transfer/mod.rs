//! Balance Transfer Module
//!
//! Moves funds between two accounts as a single all-or-nothing ledger
//! transaction.
//!
//! # Flow
//!
//! ```text
//! TransferValidator ──▶ TransferEngine ──▶ TransferReceipt
//!   (read, no writes)    (one ledger tx)    (fresh re-read)
//! ```
//!
//! # Invariants
//!
//! - Conservation: source decrease == destination increase
//! - No partial application: both rows move or neither does
//! - No negative balances: checked before and again inside the transaction

pub mod engine;
pub mod error;
pub mod receipt;
pub mod service;
pub mod validator;

// Re-export main types
pub use engine::{AppliedTransfer, TransferEngine};
pub use error::TransferError;
pub use receipt::TransferReceipt;
pub use service::TransferService;
pub use validator::{TransferRequest, TransferValidator};
