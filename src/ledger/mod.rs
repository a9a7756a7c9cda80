//! Ledger Store
//!
//! The transactional store holding one balance row per account. Everything
//! above this module talks to the store through [`LedgerStore`] and
//! [`LedgerTx`], shared as `Arc<dyn LedgerStore>`:
//!
//! - [`PgLedger`]: PostgreSQL via sqlx (production)
//! - [`MemoryLedger`]: in-process store with fault injection (no database configured, tests)
//!
//! # Transaction contract
//!
//! A [`LedgerTx`] that is dropped without [`LedgerTx::commit`] discards all
//! of its writes. This holds on every exit path: early `?` returns, panics,
//! and futures cancelled mid-await.

pub mod error;
pub mod memory;
pub mod postgres;

pub use error::StoreError;
pub use memory::{Fault, MemoryLedger};
pub use postgres::PgLedger;

use async_trait::async_trait;
use rust_decimal::Decimal;

/// Stable external account identifier.
pub type AccountId = i64;

/// Store-level operations, each in its own implicit transaction unless
/// performed through [`LedgerStore::begin`].
#[async_trait]
pub trait LedgerStore: Send + Sync {
    /// Backend name for logging
    fn name(&self) -> &'static str;

    /// Open a transactional scope.
    async fn begin(&self) -> Result<Box<dyn LedgerTx>, StoreError>;

    /// Current committed balance, `None` when no such row exists.
    async fn query_balance(&self, account_id: AccountId) -> Result<Option<Decimal>, StoreError>;

    /// Insert a new account row. A duplicate id is a store-level error.
    async fn insert_account(&self, account_id: AccountId, balance: Decimal)
    -> Result<(), StoreError>;

    /// Liveness probe for health checks.
    async fn ping(&self) -> Result<(), StoreError>;
}

/// An open transaction against the ledger.
#[async_trait]
pub trait LedgerTx: Send {
    /// `balance = balance + delta` on the row as it is inside this
    /// transaction, returning the row's new balance.
    ///
    /// Returns `Ok(None)` when zero rows matched (no such account).
    async fn apply_delta(
        &mut self,
        account_id: AccountId,
        delta: Decimal,
    ) -> Result<Option<Decimal>, StoreError>;

    /// Make all writes of this transaction visible atomically.
    async fn commit(self: Box<Self>) -> Result<(), StoreError>;

    /// Discard all writes. Safe to call on any un-committed transaction.
    async fn rollback(self: Box<Self>) -> Result<(), StoreError>;
}
