//! Storage abstraction for Memmate.
//!
//! This module defines the `VerseStore` trait and the record types for the
//! verse collection, plus the JSON-file backend.
//!
//! ## Architecture
//!
//! The store layer is designed to be backend-agnostic:
//! - `JsonFileStore`: in-memory collections mirrored to a single JSON document
//! - Future: SQLite, sync-capable backends, etc.
//!
//! All backends implement the `VerseStore` trait, which provides a consistent
//! interface for verse management, progress tracking, the test-result log,
//! and statistics.

pub mod json_file;
pub mod traits;
pub mod types;

// Re-export public types
pub use json_file::JsonFileStore;
pub use traits::VerseStore;
pub use types::{
    HistoryFilter, NewVerse, OverallStats, TestResult, Verse, VerseProgress, VerseStats,
    VerseUpdate, DEFAULT_TRANSLATION,
};
