use std::sync::Arc;

use super::engine::TransferEngine;
use super::error::TransferError;
use super::receipt::TransferReceipt;
use super::validator::TransferValidator;
use crate::account::AccountRepository;
use crate::ledger::{AccountId, LedgerStore};

/// Validate → apply → re-read, for one transfer request.
///
/// Stateless between calls; safe to share across request tasks.
pub struct TransferService {
    accounts: AccountRepository,
    validator: TransferValidator,
    engine: TransferEngine,
}

impl TransferService {
    pub fn new(store: Arc<dyn LedgerStore>) -> Self {
        let accounts = AccountRepository::new(store.clone());
        Self {
            validator: TransferValidator::new(accounts.clone()),
            engine: TransferEngine::new(store),
            accounts,
        }
    }

    /// Execute a transfer
    pub async fn execute(
        &self,
        source_id: AccountId,
        destination_id: AccountId,
        amount: &str,
    ) -> Result<TransferReceipt, TransferError> {
        // 1. Validation (no ledger writes)
        let request = match self.validator.validate(source_id, destination_id, amount).await {
            Ok(req) => req,
            Err(e) => {
                log_failure(source_id, destination_id, amount, &e);
                return Err(e);
            }
        };

        // 2. Atomic two-row update
        if let Err(e) = self
            .engine
            .apply(request.source.id, request.destination.id, request.amount)
            .await
        {
            log_failure(source_id, destination_id, amount, &e);
            return Err(e);
        }

        // 3. Fresh balances for the caller
        let receipt = TransferReceipt::assemble(&self.accounts, source_id, destination_id)
            .await
            .inspect_err(|e| {
                tracing::error!(
                    source_id,
                    destination_id,
                    "transfer committed but re-read failed: {}",
                    e
                )
            })?;

        tracing::info!(
            source_id,
            destination_id,
            amount = %request.amount,
            source_balance = %receipt.source_balance,
            destination_balance = %receipt.destination_balance,
            "transfer committed"
        );
        Ok(receipt)
    }
}

fn log_failure(source_id: AccountId, destination_id: AccountId, amount: &str, e: &TransferError) {
    if e.is_validation() {
        tracing::warn!(source_id, destination_id, amount, code = e.code(), "transfer rejected: {}", e);
    } else {
        tracing::error!(source_id, destination_id, amount, code = e.code(), "transfer failed: {}", e);
    }
}
