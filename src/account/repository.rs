//! Repository layer for account rows

use std::sync::Arc;

use super::error::AccountError;
use super::models::Account;
use crate::ledger::{AccountId, LedgerStore, StoreError};
use crate::money;

/// Account repository over an injected ledger store
#[derive(Clone)]
pub struct AccountRepository {
    store: Arc<dyn LedgerStore>,
}

impl AccountRepository {
    pub fn new(store: Arc<dyn LedgerStore>) -> Self {
        Self { store }
    }

    /// Get account by ID
    ///
    /// A missing row is [`AccountError::NotFound`], distinct from
    /// [`AccountError::Store`] when the ledger cannot be reached.
    pub async fn get(&self, account_id: AccountId) -> Result<Account, AccountError> {
        self.find(account_id)
            .await?
            .ok_or(AccountError::NotFound(account_id))
    }

    /// Like [`get`](Self::get), with absence as `None` so callers can attach
    /// their own not-found reason.
    pub async fn find(&self, account_id: AccountId) -> Result<Option<Account>, StoreError> {
        let balance = self.store.query_balance(account_id).await?;
        Ok(balance.map(|b| Account::new(account_id, b)))
    }

    /// Create a new account with an opening balance given as decimal text
    pub async fn create(
        &self,
        account_id: AccountId,
        initial_balance: &str,
    ) -> Result<Account, AccountError> {
        let balance = money::parse_balance(initial_balance)?;
        self.store.insert_account(account_id, balance).await?;

        tracing::info!(account_id, %balance, "account created");
        Ok(Account::new(account_id, balance))
    }
}
