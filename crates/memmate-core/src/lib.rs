//! # Memmate Core
//!
//! Core library for Memmate - a CLI-first personal tracker for memorizing
//! short texts ("verses").
//!
//! This crate provides the data model, storage abstraction, and the JSON-file
//! backend independent of the CLI interface.
//!
//! ## Architecture
//!
//! - **store**: the `VerseStore` trait, record types, and the `JsonFileStore`
//!   backend (in-memory collections mirrored to a single JSON document)
//! - **error**: the core error hierarchy
//! - **fs**: atomic file-write utilities used by the backend

pub mod error;
pub mod fs;
pub mod store;

pub use error::{Result, StoreError};
pub use store::{JsonFileStore, VerseStore};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
