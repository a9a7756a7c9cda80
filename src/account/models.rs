//! Data models for accounts

use rust_decimal::Decimal;

use crate::ledger::AccountId;

/// An account row as last read from the ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub id: AccountId,
    pub balance: Decimal,
}

impl Account {
    pub fn new(id: AccountId, balance: Decimal) -> Self {
        Self { id, balance }
    }

    pub fn can_cover(&self, amount: Decimal) -> bool {
        self.balance >= amount
    }
}
