//! Transfer Error Types
//!
//! One variant per client-discriminable failure reason.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::ledger::{AccountId, StoreError};
use crate::money::AmountError;

/// Transfer error types
#[derive(Error, Debug)]
pub enum TransferError {
    // === Input Errors ===
    #[error("Invalid amount: {0}")]
    InvalidAmount(#[from] AmountError),

    #[error("Source and destination account cannot be the same")]
    SameAccount,

    // === Validation-time Account Errors ===
    #[error("Source account not found: {0}")]
    SourceNotFound(AccountId),

    #[error("Destination account not found: {0}")]
    DestinationNotFound(AccountId),

    #[error("Insufficient funds: available {available}, requested {requested}")]
    InsufficientFunds {
        available: Decimal,
        requested: Decimal,
    },

    // === Mutation-time Account Errors (row vanished after validation) ===
    #[error("Source account {0} disappeared during transfer")]
    SourceAccountNotFound(AccountId),

    #[error("Destination account {0} disappeared during transfer")]
    DestinationAccountNotFound(AccountId),

    // === System Errors ===
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl TransferError {
    /// Get the error code for API responses
    pub fn code(&self) -> &'static str {
        match self {
            TransferError::InvalidAmount(_) => "INVALID_AMOUNT",
            TransferError::SameAccount => "SAME_ACCOUNT",
            TransferError::SourceNotFound(_) => "SOURCE_NOT_FOUND",
            TransferError::DestinationNotFound(_) => "DESTINATION_NOT_FOUND",
            TransferError::InsufficientFunds { .. } => "INSUFFICIENT_FUNDS",
            TransferError::SourceAccountNotFound(_) => "SOURCE_ACCOUNT_VANISHED",
            TransferError::DestinationAccountNotFound(_) => "DESTINATION_ACCOUNT_VANISHED",
            TransferError::Store(_) => "STORE_ERROR",
        }
    }

    /// Get HTTP status code suggestion
    pub fn http_status(&self) -> u16 {
        match self {
            TransferError::InvalidAmount(_) | TransferError::SameAccount => 400,
            TransferError::SourceNotFound(_) | TransferError::DestinationNotFound(_) => 404,
            TransferError::SourceAccountNotFound(_)
            | TransferError::DestinationAccountNotFound(_) => 409,
            TransferError::InsufficientFunds { .. } => 422,
            TransferError::Store(_) => 500,
        }
    }

    /// Rejected before the ledger was mutated; resubmitting unchanged fails the same way.
    pub fn is_validation(&self) -> bool {
        !matches!(
            self,
            TransferError::Store(_)
                | TransferError::SourceAccountNotFound(_)
                | TransferError::DestinationAccountNotFound(_)
        )
    }
}
