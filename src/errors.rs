use thiserror::Error;

/// Error type that captures common ledger store failures.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("Invalid reference: {0}")]
    InvalidRef(String),
    #[error("Not found: {0}")]
    NotFound(String),
}
