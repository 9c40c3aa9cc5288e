//! Store trait definition.
//!
//! The `VerseStore` trait defines the interface that all storage backends
//! must implement. Callers depend on this abstraction, not on any concrete
//! backend, so the persistence layer can be swapped without touching them.

use uuid::Uuid;

use super::types::{
    HistoryFilter, NewVerse, OverallStats, TestResult, Verse, VerseProgress, VerseStats,
    VerseUpdate,
};
use crate::error::Result;

/// Store interface for verses, progress tracking, and the test-result log.
///
/// All implementations must ensure:
/// - Progress records and test results never outlive their verse (removal
///   cascades)
/// - A progress record exists only for verses with recorded activity
/// - Test results are append-only; they are never updated in place
/// - Every mutation is durable before the call returns
///
/// Expected conditions - an unknown id, an out-of-range comfort level or
/// score - are reported as `Ok(false)` / `Ok(None)` with no side effects.
/// `Err` is reserved for storage failures.
pub trait VerseStore {
    // --- Verse management ---

    /// Add a new verse with a fresh id and the current timestamp.
    ///
    /// When `new.translation` is `None`, the store's configured default
    /// translation label is applied.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Storage` if the mutation cannot be persisted.
    fn add_verse(&mut self, new: &NewVerse) -> Result<Verse>;

    /// Retrieve a verse by id.
    ///
    /// # Returns
    ///
    /// Returns `Ok(Some(verse))` if found, `Ok(None)` if not found.
    fn get_verse(&self, id: Uuid) -> Result<Option<Verse>>;

    /// List verses in insertion order (ascending creation time, id as the
    /// tie-break), excluding archived verses unless requested.
    fn list_verses(&self, include_archived: bool) -> Result<Vec<Verse>>;

    /// Update a verse, applying only the fields present in `update`.
    ///
    /// # Returns
    ///
    /// Returns the updated verse, or `Ok(None)` if no verse has this id.
    fn update_verse(&mut self, id: Uuid, update: &VerseUpdate) -> Result<Option<Verse>>;

    /// Permanently delete a verse and everything that depends on it: its
    /// progress record (if any) and all of its test results.
    ///
    /// # Returns
    ///
    /// Returns `Ok(true)` if the verse existed. A second call with the same
    /// id returns `Ok(false)` and writes nothing.
    fn remove_verse(&mut self, id: Uuid) -> Result<bool>;

    /// Archive a verse (soft delete - hides it from default listings).
    ///
    /// Archiving an already-archived verse still reports success.
    fn archive_verse(&mut self, id: Uuid) -> Result<bool>;

    /// Restore an archived verse to active status.
    fn unarchive_verse(&mut self, id: Uuid) -> Result<bool>;

    // --- Progress tracking ---

    /// Record a practice session: increments `times_practiced` and stamps
    /// `last_practiced`, creating the progress record if this is the verse's
    /// first activity.
    fn record_practice(&mut self, verse_id: Uuid) -> Result<bool>;

    /// Set the self-assessed comfort level.
    ///
    /// # Returns
    ///
    /// Returns `Ok(false)` - with no mutation and no write - when the verse
    /// is unknown or `level` is outside 1-5.
    fn set_comfort_level(&mut self, verse_id: Uuid, level: u8) -> Result<bool>;

    /// Retrieve the progress record for a verse.
    ///
    /// # Returns
    ///
    /// Returns `Ok(None)` when the verse has no recorded activity, even if
    /// the verse itself exists.
    fn get_progress(&self, verse_id: Uuid) -> Result<Option<VerseProgress>>;

    /// Reset a verse to its never-practiced state.
    ///
    /// This is destructive beyond the counters: it replaces the progress
    /// record with a zero-valued one AND purges every test result for the
    /// verse. It is a full history reset, not just a counter reset.
    fn reset_progress(&mut self, verse_id: Uuid) -> Result<bool>;

    // --- Test results ---

    /// Record a test attempt and fold it into the verse's progress
    /// (`times_tested`, `times_correct` on a pass, `last_tested`).
    ///
    /// # Returns
    ///
    /// Returns `Ok(None)` - with no side effects - when the verse is unknown
    /// or `score` is provided and falls outside [0.0, 1.0]. The boundary
    /// values 0.0 and 1.0 are accepted.
    fn record_test_result(
        &mut self,
        verse_id: Uuid,
        passed: bool,
        score: Option<f64>,
    ) -> Result<Option<TestResult>>;

    /// Retrieve test history, newest first.
    ///
    /// Results with identical timestamps keep their recording order (stable
    /// sort), so repeated queries always return the same sequence.
    fn test_history(&self, filter: &HistoryFilter) -> Result<Vec<TestResult>>;

    // --- Statistics ---

    /// Collection-wide statistics computed from the current state.
    fn overall_stats(&self) -> Result<OverallStats>;

    /// Per-verse statistics.
    ///
    /// # Returns
    ///
    /// Returns `Ok(None)` only when the verse does not exist; a verse with no
    /// activity yields the all-zeros record.
    fn verse_stats(&self, verse_id: Uuid) -> Result<Option<VerseStats>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // These tests verify the trait contract exists
    // Actual implementations are tested in their own modules

    #[test]
    fn test_trait_definition_compiles() {
        fn _accepts_verse_store<T: VerseStore>(_store: T) {}
    }
}
