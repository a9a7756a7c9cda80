use thiserror::Error;

/// Failures of the ledger store itself (connectivity, constraints, I/O).
///
/// Never used for "row not found": lookups return `Option` so callers can
/// tell a missing account apart from an unreachable store.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Ledger unavailable: {0}")]
    Unavailable(String),

    #[error("Constraint violated: {0}")]
    Constraint(String),
}
