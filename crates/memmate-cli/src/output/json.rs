//! JSON output formatting for verses, history, and stats.

use memmate_core::store::{OverallStats, TestResult, Verse, VerseStats};

/// Convert a verse to JSON for output.
pub fn verse_json(verse: &Verse) -> serde_json::Value {
    serde_json::json!({
        "id": verse.id,
        "reference": verse.reference,
        "text": verse.text,
        "translation": verse.translation,
        "created_at": verse.created_at,
        "archived": verse.archived,
    })
}

/// Convert multiple verses to a JSON array for output.
pub fn verses_json(verses: &[Verse]) -> Vec<serde_json::Value> {
    verses.iter().map(verse_json).collect()
}

/// Convert test results to a JSON array for output.
pub fn results_json(results: &[TestResult]) -> Vec<serde_json::Value> {
    results
        .iter()
        .map(|result| {
            serde_json::json!({
                "id": result.id,
                "verse_id": result.verse_id,
                "timestamp": result.timestamp,
                "passed": result.passed,
                "score": result.score,
            })
        })
        .collect()
}

/// Convert collection-wide stats to JSON for output.
pub fn overall_stats_json(stats: &OverallStats) -> serde_json::Value {
    serde_json::json!(stats)
}

/// Convert per-verse stats to JSON for output.
pub fn verse_stats_json(stats: &VerseStats) -> serde_json::Value {
    serde_json::json!(stats)
}
