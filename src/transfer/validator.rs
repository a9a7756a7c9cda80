//! Request Validator
//!
//! Turns raw transfer input into a [`TransferRequest`] or the first
//! applicable rejection. Checks run in a fixed order and stop at the first
//! failure:
//!
//! 1. amount parses (strict decimal format)   → `InvalidAmount`
//! 2. amount > 0                               → `InvalidAmount`
//! 3. source != destination                    → `SameAccount`
//! 4. source exists                            → `SourceNotFound`
//! 5. destination exists                       → `DestinationNotFound`
//! 6. source balance >= amount                 → `InsufficientFunds`
//!
//! Steps 1-3 never touch the ledger.

use rust_decimal::Decimal;

use super::error::TransferError;
use crate::account::{Account, AccountRepository};
use crate::ledger::AccountId;
use crate::money;

/// A transfer that passed validation, with the balances observed at the time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferRequest {
    pub source: Account,
    pub destination: Account,
    pub amount: Decimal,
}

pub struct TransferValidator {
    accounts: AccountRepository,
}

impl TransferValidator {
    pub fn new(accounts: AccountRepository) -> Self {
        Self { accounts }
    }

    pub async fn validate(
        &self,
        source_id: AccountId,
        destination_id: AccountId,
        amount: &str,
    ) -> Result<TransferRequest, TransferError> {
        let amount = money::parse_amount(amount)?;

        if source_id == destination_id {
            return Err(TransferError::SameAccount);
        }

        let source = self
            .accounts
            .find(source_id)
            .await?
            .ok_or(TransferError::SourceNotFound(source_id))?;

        let destination = self
            .accounts
            .find(destination_id)
            .await?
            .ok_or(TransferError::DestinationNotFound(destination_id))?;

        if !source.can_cover(amount) {
            return Err(TransferError::InsufficientFunds {
                available: source.balance,
                requested: amount,
            });
        }

        Ok(TransferRequest {
            source,
            destination,
            amount,
        })
    }
}
