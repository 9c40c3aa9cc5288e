//! Error types for Memmate core operations.
//!
//! Only genuine failures surface as errors: a file that cannot be read or
//! written, or an existing data file that does not parse as a store document.
//! Expected conditions - an unknown verse id, an out-of-range comfort level
//! or score - are ordinary return values (`Ok(None)` / `Ok(false)`) and never
//! raise, so callers can distinguish "rejected" from "broken".

use thiserror::Error;

/// Result type alias for Memmate operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Core error type for Memmate operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Data file unreadable at load or unwritable at save
    #[error("Storage error: {0}")]
    Storage(String),

    /// Existing data file is not a valid store document
    #[error("Corrupt data file: {0}")]
    Corrupt(String),
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Corrupt(err.to_string())
    }
}
