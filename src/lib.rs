//! Ledger Gateway - Atomic Balance Transfers
//!
//! Account ledger service: create accounts, look up balances, and move
//! funds between two accounts as a single all-or-nothing transaction.
//!
//! # Modules
//!
//! - [`ledger`] - Transactional store seam (PostgreSQL, in-memory)
//! - [`account`] - Account repository (read path, creation)
//! - [`transfer`] - Validator, transfer engine, receipt assembly
//! - [`money`] - Strict decimal parsing, fixed sub-unit precision
//! - [`gateway`] - HTTP API (axum)
//! - [`db`] - PostgreSQL pool and schema bootstrap
//! - [`config`] / [`logging`] - YAML config, tracing setup

// Store seam - must be first!
pub mod ledger;

// Domain
pub mod account;
pub mod money;
pub mod transfer;

// Infrastructure
pub mod config;
pub mod db;
pub mod gateway;
pub mod logging;

// Convenient re-exports at crate root
pub use account::{Account, AccountError, AccountRepository};
pub use ledger::{AccountId, Fault, LedgerStore, LedgerTx, MemoryLedger, PgLedger, StoreError};
pub use transfer::{TransferEngine, TransferError, TransferReceipt, TransferService};
