//! Account management module
//!
//! Read path for account balances plus account creation.

pub mod error;
pub mod models;
pub mod repository;

// Re-export commonly used types
pub use error::AccountError;
pub use models::Account;
pub use repository::AccountRepository;
