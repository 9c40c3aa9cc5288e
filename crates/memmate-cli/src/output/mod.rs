//! Output formatting helpers for the CLI.
//!
//! This module provides formatting utilities for displaying verses, test
//! history, and statistics in various formats (JSON, table, plain text).

mod json;
mod text;

// Re-export public API
pub use json::{overall_stats_json, results_json, verse_json, verse_stats_json, verses_json};
pub use text::{
    print_history, print_overall_stats, print_verse_detail, print_verse_list, print_verse_stats,
    verse_reference_map,
};
