//! Core data types for the verse store.
//!
//! These types are the durable data model: they serialize 1:1 into the JSON
//! store document, so field names and optionality are part of the on-disk
//! contract.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Translation label applied when a new verse does not specify one and the
/// store has not been configured with a different default.
pub const DEFAULT_TRANSLATION: &str = "NIV";

/// A memorizable verse or text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verse {
    /// Unique identifier, generated at creation and immutable afterwards
    pub id: Uuid,

    /// Citation shown in listings (e.g., "John 3:16")
    pub reference: String,

    /// The text being memorized
    pub text: String,

    /// Translation or edition label (e.g., "NIV", "ESV")
    pub translation: String,

    /// When this verse was added; never mutated
    pub created_at: DateTime<Utc>,

    /// Soft-delete flag; archived verses are hidden from default listings
    /// but retained in storage
    #[serde(default)]
    pub archived: bool,
}

/// Memorization progress for one verse.
///
/// At most one record exists per verse, created lazily by the store on the
/// first practice, test, or comfort-set. A verse with no activity has no
/// progress record at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerseProgress {
    /// The verse this progress belongs to (unique per record)
    pub verse_id: Uuid,

    /// Number of practice sessions recorded
    #[serde(default)]
    pub times_practiced: u32,

    /// Number of test attempts recorded
    #[serde(default)]
    pub times_tested: u32,

    /// Number of passed test attempts; never exceeds `times_tested`
    #[serde(default)]
    pub times_correct: u32,

    /// When the verse was last practiced
    #[serde(default)]
    pub last_practiced: Option<DateTime<Utc>>,

    /// When the verse was last tested
    #[serde(default)]
    pub last_tested: Option<DateTime<Utc>>,

    /// Self-assessed comfort on a 1-5 scale, independent of measured accuracy
    #[serde(default = "default_comfort_level")]
    pub comfort_level: u8,
}

fn default_comfort_level() -> u8 {
    1
}

impl VerseProgress {
    /// A zero-valued progress record, as if the verse had never been
    /// practiced, tested, or rated.
    pub fn new(verse_id: Uuid) -> Self {
        Self {
            verse_id,
            times_practiced: 0,
            times_tested: 0,
            times_correct: 0,
            last_practiced: None,
            last_tested: None,
            comfort_level: default_comfort_level(),
        }
    }

    /// Fraction of test attempts passed, 0.0 when never tested.
    pub fn accuracy(&self) -> f64 {
        if self.times_tested == 0 {
            0.0
        } else {
            f64::from(self.times_correct) / f64::from(self.times_tested)
        }
    }
}

/// One immutable test attempt against a verse.
///
/// Results are append-only: they are created by `record_test_result` and
/// destroyed only by cascade (removing the verse, or resetting its progress).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestResult {
    /// Unique identifier for this attempt
    pub id: Uuid,

    /// The verse that was tested; referenced a live verse at creation time
    pub verse_id: Uuid,

    /// When the attempt was recorded
    pub timestamp: DateTime<Utc>,

    /// Whether the attempt counted as a pass
    pub passed: bool,

    /// Optional accuracy score in [0.0, 1.0]
    #[serde(default)]
    pub score: Option<f64>,
}

/// Builder for adding a verse to the store.
#[derive(Debug, Clone)]
pub struct NewVerse {
    /// Citation (e.g., "John 3:16")
    pub reference: String,

    /// The text to memorize
    pub text: String,

    /// Translation label; `None` uses the store's configured default
    pub translation: Option<String>,
}

impl NewVerse {
    pub fn new(reference: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            reference: reference.into(),
            text: text.into(),
            translation: None,
        }
    }

    pub fn translation(mut self, translation: impl Into<String>) -> Self {
        self.translation = Some(translation.into());
        self
    }
}

/// Partial update for a verse.
///
/// Each field is independently "absent" (`None`, leave the stored value
/// unchanged) or "present" (`Some`, overwrite it). An explicitly empty string
/// is a real update, not a no-op, so clearing a field and omitting it are
/// distinct inputs.
#[derive(Debug, Clone, Default)]
pub struct VerseUpdate {
    pub reference: Option<String>,
    pub text: Option<String>,
    pub translation: Option<String>,
}

impl VerseUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = Some(reference.into());
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn translation(mut self, translation: impl Into<String>) -> Self {
        self.translation = Some(translation.into());
        self
    }

    /// True when no field is present (applying it changes nothing).
    pub fn is_empty(&self) -> bool {
        self.reference.is_none() && self.text.is_none() && self.translation.is_none()
    }
}

/// Query parameters for the test-result log.
#[derive(Debug, Clone, Default)]
pub struct HistoryFilter {
    /// Restrict to results for one verse
    pub verse_id: Option<Uuid>,

    /// Maximum number of results (most recent first); a limit at or above the
    /// available count returns everything
    pub limit: Option<usize>,
}

impl HistoryFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn verse(mut self, verse_id: Uuid) -> Self {
        self.verse_id = Some(verse_id);
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Collection-wide statistics, computed on demand from the current state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverallStats {
    /// Non-archived verse count
    pub total_verses: usize,

    /// Archived verse count
    pub total_archived: usize,

    /// Practice sessions summed over all progress records, regardless of
    /// verse archived state
    pub total_practiced: u64,

    /// Test attempts summed over all progress records
    pub total_tested: u64,

    /// Passed attempts summed over all progress records
    pub total_correct: u64,

    /// `total_correct / total_tested`, 0.0 when nothing has been tested
    pub overall_accuracy: f64,

    /// Progress records at comfort level 5
    pub verses_with_perfect_comfort: usize,

    /// Mean comfort level over all progress records, 0.0 when none exist
    pub average_comfort_level: f64,
}

/// Per-verse statistics.
///
/// A verse that exists but has never been practiced, tested, or rated yields
/// the all-zeros record (comfort level 1, empty timestamps) rather than an
/// absent result, so "no activity" and "no such verse" stay distinguishable.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VerseStats {
    /// Citation of the verse these stats describe
    pub reference: String,

    pub times_practiced: u32,
    pub times_tested: u32,
    pub times_correct: u32,

    /// `times_correct / times_tested`, 0.0 when never tested
    pub accuracy: f64,

    pub comfort_level: u8,

    pub last_practiced: Option<DateTime<Utc>>,
    pub last_tested: Option<DateTime<Utc>>,

    /// Trailing passes counted newest-first, stopping at the first failure;
    /// 0 when the most recent attempt failed or no attempts exist
    pub consecutive_correct: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_accuracy_zero_when_untested() {
        let progress = VerseProgress::new(Uuid::new_v4());
        assert_eq!(progress.accuracy(), 0.0);
    }

    #[test]
    fn test_progress_accuracy_ratio() {
        let mut progress = VerseProgress::new(Uuid::new_v4());
        progress.times_tested = 4;
        progress.times_correct = 3;
        assert_eq!(progress.accuracy(), 0.75);
    }

    #[test]
    fn test_update_is_empty() {
        assert!(VerseUpdate::new().is_empty());
        assert!(!VerseUpdate::new().reference("Psalm 23:1").is_empty());
        // An explicitly empty string is still a present field.
        assert!(!VerseUpdate::new().text("").is_empty());
    }

    #[test]
    fn test_progress_tolerates_missing_fields() {
        // Legacy documents may omit counters; they default to the
        // never-practiced state.
        let verse_id = Uuid::new_v4();
        let progress: VerseProgress =
            serde_json::from_value(serde_json::json!({ "verse_id": verse_id })).unwrap();
        assert_eq!(progress, VerseProgress::new(verse_id));
    }
}
