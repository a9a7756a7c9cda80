//! Response Assembler
//!
//! Post-transfer state of both accounts, built from fresh reads of the
//! ledger rather than the values computed inside the transaction, so any
//! rounding applied by the store on write is what the caller sees.

use rust_decimal::Decimal;

use super::error::TransferError;
use crate::account::AccountRepository;
use crate::ledger::{AccountId, StoreError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferReceipt {
    pub source_account_id: AccountId,
    pub source_balance: Decimal,
    pub destination_account_id: AccountId,
    pub destination_balance: Decimal,
}

impl TransferReceipt {
    /// Re-read both accounts after a committed transfer.
    pub async fn assemble(
        accounts: &AccountRepository,
        source_id: AccountId,
        destination_id: AccountId,
    ) -> Result<Self, TransferError> {
        let source = accounts
            .find(source_id)
            .await?
            .ok_or_else(|| missing_after_commit(source_id))?;
        let destination = accounts
            .find(destination_id)
            .await?
            .ok_or_else(|| missing_after_commit(destination_id))?;

        Ok(Self {
            source_account_id: source.id,
            source_balance: source.balance,
            destination_account_id: destination.id,
            destination_balance: destination.balance,
        })
    }
}

// Accounts are never deleted here, so this is a store inconsistency
fn missing_after_commit(account_id: AccountId) -> TransferError {
    StoreError::Constraint(format!(
        "account {} missing after committed transfer",
        account_id
    ))
    .into()
}
