//! In-memory ledger
//!
//! Used when no PostgreSQL URL is configured, and as the store behind the
//! test suite. Transactions are fully serialized: [`MemoryLedger::begin`]
//! takes an owned guard on the account map and holds it until the
//! transaction is committed or dropped. Writes are staged in the
//! transaction and only applied to the map on commit.
//!
//! Failures can be injected with [`MemoryLedger::inject`] to exercise the
//! rollback paths without a real database.

use async_trait::async_trait;
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

use super::{AccountId, LedgerStore, LedgerTx, StoreError};

/// Injectable store failures. Active until [`MemoryLedger::clear_faults`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fault {
    /// The store is unreachable: `begin()` fails and so does `ping()`.
    Begin,
    /// `commit()` fails; staged writes are discarded.
    Commit,
    /// `apply_delta()` on this account fails with a store error.
    Update(AccountId),
    /// `apply_delta()` on this account matches zero rows, as if the row was
    /// deleted between validation and mutation.
    Vanish(AccountId),
}

#[derive(Default)]
struct Faults {
    active: Mutex<Vec<Fault>>,
}

impl Faults {
    fn is_set(&self, fault: Fault) -> bool {
        self.active
            .lock()
            .map(|active| active.contains(&fault))
            .unwrap_or(false)
    }
}

#[derive(Default)]
struct Counters {
    begun: AtomicUsize,
    committed: AtomicUsize,
    rolled_back: AtomicUsize,
}

/// Shared-state in-memory ledger. Cloning yields another handle to the
/// same accounts.
#[derive(Clone, Default)]
pub struct MemoryLedger {
    accounts: Arc<AsyncMutex<HashMap<AccountId, Decimal>>>,
    faults: Arc<Faults>,
    counters: Arc<Counters>,
}

impl MemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Activate a fault.
    pub fn inject(&self, fault: Fault) {
        if let Ok(mut active) = self.faults.active.lock() {
            if !active.contains(&fault) {
                active.push(fault);
            }
        }
    }

    pub fn clear_faults(&self) {
        if let Ok(mut active) = self.faults.active.lock() {
            active.clear();
        }
    }

    /// Number of transactions opened so far
    pub fn transactions_begun(&self) -> usize {
        self.counters.begun.load(Ordering::SeqCst)
    }

    /// Number of transactions successfully committed
    pub fn transactions_committed(&self) -> usize {
        self.counters.committed.load(Ordering::SeqCst)
    }

    /// Number of transactions discarded (explicit rollback, failed commit, or drop)
    pub fn transactions_rolled_back(&self) -> usize {
        self.counters.rolled_back.load(Ordering::SeqCst)
    }

    /// Sum of all committed balances.
    pub async fn total_balance(&self) -> Decimal {
        self.accounts.lock().await.values().copied().sum()
    }
}

#[async_trait]
impl LedgerStore for MemoryLedger {
    fn name(&self) -> &'static str {
        "memory"
    }

    async fn begin(&self) -> Result<Box<dyn LedgerTx>, StoreError> {
        if self.faults.is_set(Fault::Begin) {
            return Err(StoreError::Unavailable("injected begin failure".into()));
        }
        let guard = self.accounts.clone().lock_owned().await;
        self.counters.begun.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(MemoryLedgerTx {
            guard,
            staged: HashMap::new(),
            faults: self.faults.clone(),
            counters: self.counters.clone(),
            finished: false,
        }))
    }

    async fn query_balance(&self, account_id: AccountId) -> Result<Option<Decimal>, StoreError> {
        Ok(self.accounts.lock().await.get(&account_id).copied())
    }

    async fn insert_account(
        &self,
        account_id: AccountId,
        balance: Decimal,
    ) -> Result<(), StoreError> {
        let mut accounts = self.accounts.lock().await;
        if accounts.contains_key(&account_id) {
            return Err(StoreError::Constraint(format!(
                "duplicate key: account {} already exists",
                account_id
            )));
        }
        accounts.insert(account_id, balance);
        Ok(())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        // Fault::Begin stands for an unreachable store
        if self.faults.is_set(Fault::Begin) {
            return Err(StoreError::Unavailable("injected store outage".into()));
        }
        Ok(())
    }
}

struct MemoryLedgerTx {
    guard: OwnedMutexGuard<HashMap<AccountId, Decimal>>,
    staged: HashMap<AccountId, Decimal>,
    faults: Arc<Faults>,
    counters: Arc<Counters>,
    finished: bool,
}

impl MemoryLedgerTx {
    fn current(&self, account_id: AccountId) -> Option<Decimal> {
        self.staged
            .get(&account_id)
            .or_else(|| self.guard.get(&account_id))
            .copied()
    }
}

#[async_trait]
impl LedgerTx for MemoryLedgerTx {
    async fn apply_delta(
        &mut self,
        account_id: AccountId,
        delta: Decimal,
    ) -> Result<Option<Decimal>, StoreError> {
        if self.faults.is_set(Fault::Update(account_id)) {
            return Err(StoreError::Unavailable(format!(
                "injected update failure on account {}",
                account_id
            )));
        }
        if self.faults.is_set(Fault::Vanish(account_id)) {
            return Ok(None);
        }

        let Some(current) = self.current(account_id) else {
            return Ok(None);
        };
        let new_balance = current.checked_add(delta).ok_or_else(|| {
            StoreError::Constraint(format!("numeric overflow on account {}", account_id))
        })?;
        self.staged.insert(account_id, new_balance);
        Ok(Some(new_balance))
    }

    async fn commit(self: Box<Self>) -> Result<(), StoreError> {
        let mut tx = self;
        if tx.faults.is_set(Fault::Commit) {
            // Drop discards the staged writes and counts the rollback
            return Err(StoreError::Unavailable("injected commit failure".into()));
        }
        let staged = std::mem::take(&mut tx.staged);
        tx.guard.extend(staged);
        tx.finished = true;
        tx.counters.committed.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn rollback(self: Box<Self>) -> Result<(), StoreError> {
        Ok(())
    }
}

impl Drop for MemoryLedgerTx {
    fn drop(&mut self) {
        if !self.finished {
            self.counters.rolled_back.fetch_add(1, Ordering::SeqCst);
        }
    }
}
