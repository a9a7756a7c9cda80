//! Transfer Engine
//!
//! Applies a two-row balance move as one ledger transaction:
//!
//! ```text
//! begin ──▶ debit source ──▶ credit destination ──▶ commit
//!              │ 0 rows / <0      │ 0 rows              │ error
//!              ▼                  ▼                     ▼
//!           rollback           rollback          (tx dropped = rollback)
//! ```
//!
//! Both updates are relative (`balance + delta`), so the new balances come
//! from the rows as locked inside the transaction, not from the values the
//! validator read earlier. The engine takes no in-process locks and never
//! retries; concurrent transfers are serialized by the store.

use std::sync::Arc;

use rust_decimal::Decimal;

use super::error::TransferError;
use crate::ledger::{AccountId, LedgerStore, LedgerTx};
use crate::money::AmountError;

/// Post-transfer balances as computed inside the transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppliedTransfer {
    pub source_balance: Decimal,
    pub destination_balance: Decimal,
}

pub struct TransferEngine {
    store: Arc<dyn LedgerStore>,
}

impl TransferEngine {
    pub fn new(store: Arc<dyn LedgerStore>) -> Self {
        Self { store }
    }

    /// Move `amount` from `source_id` to `destination_id`, all or nothing.
    pub async fn apply(
        &self,
        source_id: AccountId,
        destination_id: AccountId,
        amount: Decimal,
    ) -> Result<AppliedTransfer, TransferError> {
        if amount <= Decimal::ZERO {
            return Err(AmountError::NotPositive.into());
        }

        let mut tx = self.store.begin().await?;

        match Self::post(tx.as_mut(), source_id, destination_id, amount).await {
            Ok(applied) => {
                // A failed commit drops the transaction, which rolls it back
                tx.commit().await?;
                Ok(applied)
            }
            Err(e) => {
                if let Err(rollback_err) = tx.rollback().await {
                    tracing::error!(
                        source_id,
                        destination_id,
                        "rollback after failed transfer errored: {}",
                        rollback_err
                    );
                }
                Err(e)
            }
        }
    }

    async fn post(
        tx: &mut dyn LedgerTx,
        source_id: AccountId,
        destination_id: AccountId,
        amount: Decimal,
    ) -> Result<AppliedTransfer, TransferError> {
        let source_balance = tx
            .apply_delta(source_id, -amount)
            .await?
            .ok_or(TransferError::SourceAccountNotFound(source_id))?;

        // A concurrent debit may have landed since validation
        if source_balance.is_sign_negative() {
            return Err(TransferError::InsufficientFunds {
                available: source_balance + amount,
                requested: amount,
            });
        }

        let destination_balance = tx
            .apply_delta(destination_id, amount)
            .await?
            .ok_or(TransferError::DestinationAccountNotFound(destination_id))?;

        Ok(AppliedTransfer {
            source_balance,
            destination_balance,
        })
    }
}
