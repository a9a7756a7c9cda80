use thiserror::Error;

use crate::ledger::{AccountId, StoreError};
use crate::money::AmountError;

#[derive(Error, Debug)]
pub enum AccountError {
    #[error("Account not found: {0}")]
    NotFound(AccountId),

    #[error("Invalid initial balance: {0}")]
    InvalidBalance(#[from] AmountError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl AccountError {
    /// Get the error code for API responses
    pub fn code(&self) -> &'static str {
        match self {
            AccountError::NotFound(_) => "ACCOUNT_NOT_FOUND",
            AccountError::InvalidBalance(_) => "INVALID_BALANCE",
            AccountError::Store(_) => "STORE_ERROR",
        }
    }

    /// Get HTTP status code suggestion
    pub fn http_status(&self) -> u16 {
        match self {
            AccountError::NotFound(_) => 404,
            AccountError::InvalidBalance(_) => 400,
            AccountError::Store(_) => 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(AccountError::NotFound(7).code(), "ACCOUNT_NOT_FOUND");
        assert_eq!(AccountError::NotFound(7).http_status(), 404);
        assert_eq!(
            AccountError::InvalidBalance(AmountError::Negative).http_status(),
            400
        );
        let store = AccountError::Store(StoreError::Unavailable("down".into()));
        assert_eq!(store.code(), "STORE_ERROR");
        assert_eq!(store.http_status(), 500);
    }

    #[test]
    fn test_display() {
        assert_eq!(AccountError::NotFound(7).to_string(), "Account not found: 7");
        let store = AccountError::Store(StoreError::Unavailable("down".into()));
        assert_eq!(store.to_string(), "Ledger unavailable: down");
    }
}
