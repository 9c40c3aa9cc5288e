//! JSON-file storage backend.
//!
//! The whole collection lives in memory and is mirrored to a single JSON
//! document: the document is loaded wholesale at construction, and every
//! mutating call rewrites it in full before returning. A full rewrite is
//! O(total records) per mutation, which is acceptable for a personal-sized
//! collection and keeps the on-disk format trivially inspectable.
//!
//! Mutations are staged on a copy of the state and committed to memory only
//! after the document has been written, so a failed save leaves the pre-call
//! state in place as the last known-good. Writes go through
//! [`crate::fs::write_atomic`], so a crash mid-save leaves either the old or
//! the new document on disk, never a torn one.
//!
//! Single writer/reader only: two stores pointed at the same file are
//! last-writer-wins, which is an explicit limitation rather than a supported
//! mode.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Result, StoreError};
use crate::fs::write_atomic;
use crate::store::traits::VerseStore;
use crate::store::types::{
    HistoryFilter, NewVerse, OverallStats, TestResult, Verse, VerseProgress, VerseStats,
    VerseUpdate, DEFAULT_TRANSLATION,
};

/// The full store state, shaped exactly like the durable JSON document.
///
/// All three keys default to empty collections so legacy or partial files
/// (e.g., a document written before test tracking existed) load cleanly.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct StoreDocument {
    #[serde(default)]
    verses: HashMap<Uuid, Verse>,

    #[serde(default)]
    progress: HashMap<Uuid, VerseProgress>,

    #[serde(default)]
    test_results: Vec<TestResult>,
}

/// Verse store backed by a single JSON file.
pub struct JsonFileStore {
    path: PathBuf,
    default_translation: String,
    state: StoreDocument,
}

impl JsonFileStore {
    /// Open the store at `path`, loading the existing document.
    ///
    /// A missing file is not an error - the store starts empty and the file
    /// is created on the first mutation.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Storage` if an existing file cannot be read, or
    /// `StoreError::Corrupt` if it does not parse as a store document.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let state = Self::load(&path)?;
        Ok(Self {
            path,
            default_translation: DEFAULT_TRANSLATION.to_string(),
            state,
        })
    }

    /// Set the translation label applied when `NewVerse.translation` is
    /// omitted.
    pub fn with_default_translation(mut self, label: impl Into<String>) -> Self {
        self.default_translation = label.into();
        self
    }

    /// Path of the durable document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the current state to disk without mutating it.
    ///
    /// Mutating operations persist themselves; this exists to materialize
    /// the document for a brand-new (possibly empty) store.
    pub fn save(&mut self) -> Result<()> {
        let staged = self.state.clone();
        self.commit(staged, ())
    }

    fn load(path: &Path) -> Result<StoreDocument> {
        if !path.exists() {
            return Ok(StoreDocument::default());
        }

        let contents = fs::read_to_string(path).map_err(|err| {
            StoreError::Storage(format!("Failed to read {}: {}", path.display(), err))
        })?;
        serde_json::from_str(&contents).map_err(|err| {
            StoreError::Corrupt(format!("{}: {}", path.display(), err))
        })
    }

    /// Write `staged` to disk, then adopt it as the in-memory state.
    ///
    /// Ordering matters: the state is only replaced after the document is
    /// durable, so a save failure leaves the previous state observable.
    fn commit<T>(&mut self, staged: StoreDocument, output: T) -> Result<T> {
        let json = serde_json::to_string_pretty(&staged)
            .map_err(|err| StoreError::Storage(format!("Failed to serialize store: {}", err)))?;
        write_atomic(&self.path, json.as_bytes()).map_err(|err| {
            StoreError::Storage(format!("Failed to write {}: {}", self.path.display(), err))
        })?;
        self.state = staged;
        Ok(output)
    }

    /// Existing-or-fresh progress record for a verse, gated on the verse
    /// existing. This is the single entry point through which all progress
    /// mutation flows, preserving the invariant that progress never exists
    /// for a nonexistent verse.
    fn ensure_progress(state: &mut StoreDocument, verse_id: Uuid) -> Option<&mut VerseProgress> {
        if !state.verses.contains_key(&verse_id) {
            return None;
        }
        Some(
            state
                .progress
                .entry(verse_id)
                .or_insert_with(|| VerseProgress::new(verse_id)),
        )
    }

    fn set_archived(&mut self, id: Uuid, archived: bool) -> Result<bool> {
        let mut staged = self.state.clone();
        let Some(verse) = staged.verses.get_mut(&id) else {
            return Ok(false);
        };
        verse.archived = archived;
        self.commit(staged, true)
    }

    /// Trailing passes for a verse, newest-first, stopping at the first
    /// failure.
    fn consecutive_correct(&self, verse_id: Uuid) -> u32 {
        let mut results: Vec<&TestResult> = self
            .state
            .test_results
            .iter()
            .filter(|result| result.verse_id == verse_id)
            .collect();
        results.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        results.iter().take_while(|result| result.passed).count() as u32
    }
}

impl VerseStore for JsonFileStore {
    fn add_verse(&mut self, new: &NewVerse) -> Result<Verse> {
        let verse = Verse {
            id: Uuid::new_v4(),
            reference: new.reference.clone(),
            text: new.text.clone(),
            translation: new
                .translation
                .clone()
                .unwrap_or_else(|| self.default_translation.clone()),
            created_at: Utc::now(),
            archived: false,
        };

        let mut staged = self.state.clone();
        staged.verses.insert(verse.id, verse.clone());
        self.commit(staged, verse)
    }

    fn get_verse(&self, id: Uuid) -> Result<Option<Verse>> {
        Ok(self.state.verses.get(&id).cloned())
    }

    fn list_verses(&self, include_archived: bool) -> Result<Vec<Verse>> {
        let mut verses: Vec<Verse> = self
            .state
            .verses
            .values()
            .filter(|verse| include_archived || !verse.archived)
            .cloned()
            .collect();
        // Insertion order, made explicit: creation time with the id as a
        // deterministic tie-break, stable across reloads.
        verses.sort_by(|a, b| (a.created_at, a.id).cmp(&(b.created_at, b.id)));
        Ok(verses)
    }

    fn update_verse(&mut self, id: Uuid, update: &VerseUpdate) -> Result<Option<Verse>> {
        let mut staged = self.state.clone();
        let Some(verse) = staged.verses.get_mut(&id) else {
            return Ok(None);
        };

        if let Some(reference) = &update.reference {
            verse.reference = reference.clone();
        }
        if let Some(text) = &update.text {
            verse.text = text.clone();
        }
        if let Some(translation) = &update.translation {
            verse.translation = translation.clone();
        }

        let updated = verse.clone();
        self.commit(staged, Some(updated))
    }

    fn remove_verse(&mut self, id: Uuid) -> Result<bool> {
        if !self.state.verses.contains_key(&id) {
            return Ok(false);
        }

        let mut staged = self.state.clone();
        staged.verses.remove(&id);
        staged.progress.remove(&id);
        staged.test_results.retain(|result| result.verse_id != id);
        self.commit(staged, true)
    }

    fn archive_verse(&mut self, id: Uuid) -> Result<bool> {
        self.set_archived(id, true)
    }

    fn unarchive_verse(&mut self, id: Uuid) -> Result<bool> {
        self.set_archived(id, false)
    }

    fn record_practice(&mut self, verse_id: Uuid) -> Result<bool> {
        let mut staged = self.state.clone();
        let Some(progress) = Self::ensure_progress(&mut staged, verse_id) else {
            return Ok(false);
        };

        progress.times_practiced += 1;
        progress.last_practiced = Some(Utc::now());
        self.commit(staged, true)
    }

    fn set_comfort_level(&mut self, verse_id: Uuid, level: u8) -> Result<bool> {
        if !(1..=5).contains(&level) {
            return Ok(false);
        }

        let mut staged = self.state.clone();
        let Some(progress) = Self::ensure_progress(&mut staged, verse_id) else {
            return Ok(false);
        };

        progress.comfort_level = level;
        self.commit(staged, true)
    }

    fn get_progress(&self, verse_id: Uuid) -> Result<Option<VerseProgress>> {
        Ok(self.state.progress.get(&verse_id).cloned())
    }

    fn reset_progress(&mut self, verse_id: Uuid) -> Result<bool> {
        if !self.state.verses.contains_key(&verse_id) {
            return Ok(false);
        }

        let mut staged = self.state.clone();
        staged
            .progress
            .insert(verse_id, VerseProgress::new(verse_id));
        staged
            .test_results
            .retain(|result| result.verse_id != verse_id);
        self.commit(staged, true)
    }

    fn record_test_result(
        &mut self,
        verse_id: Uuid,
        passed: bool,
        score: Option<f64>,
    ) -> Result<Option<TestResult>> {
        if !self.state.verses.contains_key(&verse_id) {
            return Ok(None);
        }
        if let Some(score) = score {
            // NaN fails the range check and is rejected with everything else.
            if !(0.0..=1.0).contains(&score) {
                return Ok(None);
            }
        }

        let result = TestResult {
            id: Uuid::new_v4(),
            verse_id,
            timestamp: Utc::now(),
            passed,
            score,
        };

        let mut staged = self.state.clone();
        staged.test_results.push(result.clone());
        if let Some(progress) = Self::ensure_progress(&mut staged, verse_id) {
            progress.times_tested += 1;
            if passed {
                progress.times_correct += 1;
            }
            progress.last_tested = Some(result.timestamp);
        }

        self.commit(staged, Some(result))
    }

    fn test_history(&self, filter: &HistoryFilter) -> Result<Vec<TestResult>> {
        let mut results: Vec<TestResult> = self
            .state
            .test_results
            .iter()
            .filter(|result| filter.verse_id.map_or(true, |id| result.verse_id == id))
            .cloned()
            .collect();

        // Newest first; the sort is stable, so results sharing a timestamp
        // keep their recording order.
        results.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

        if let Some(limit) = filter.limit {
            results.truncate(limit);
        }
        Ok(results)
    }

    fn overall_stats(&self) -> Result<OverallStats> {
        let total_verses = self
            .state
            .verses
            .values()
            .filter(|verse| !verse.archived)
            .count();
        let total_archived = self.state.verses.len() - total_verses;

        let mut total_practiced = 0u64;
        let mut total_tested = 0u64;
        let mut total_correct = 0u64;
        let mut comfort_sum = 0u64;
        let mut verses_with_perfect_comfort = 0usize;
        for progress in self.state.progress.values() {
            total_practiced += u64::from(progress.times_practiced);
            total_tested += u64::from(progress.times_tested);
            total_correct += u64::from(progress.times_correct);
            comfort_sum += u64::from(progress.comfort_level);
            if progress.comfort_level == 5 {
                verses_with_perfect_comfort += 1;
            }
        }

        let overall_accuracy = if total_tested == 0 {
            0.0
        } else {
            total_correct as f64 / total_tested as f64
        };
        let average_comfort_level = if self.state.progress.is_empty() {
            0.0
        } else {
            comfort_sum as f64 / self.state.progress.len() as f64
        };

        Ok(OverallStats {
            total_verses,
            total_archived,
            total_practiced,
            total_tested,
            total_correct,
            overall_accuracy,
            verses_with_perfect_comfort,
            average_comfort_level,
        })
    }

    fn verse_stats(&self, verse_id: Uuid) -> Result<Option<VerseStats>> {
        let Some(verse) = self.state.verses.get(&verse_id) else {
            return Ok(None);
        };

        // A verse with no activity reports the zero-valued defaults rather
        // than an absent result.
        let progress = self
            .state
            .progress
            .get(&verse_id)
            .cloned()
            .unwrap_or_else(|| VerseProgress::new(verse_id));

        Ok(Some(VerseStats {
            reference: verse.reference.clone(),
            times_practiced: progress.times_practiced,
            times_tested: progress.times_tested,
            times_correct: progress.times_correct,
            accuracy: progress.accuracy(),
            comfort_level: progress.comfort_level,
            last_practiced: progress.last_practiced,
            last_tested: progress.last_tested,
            consecutive_correct: self.consecutive_correct(verse_id),
        }))
    }
}
