//! Text and table output formatting for verses, history, and stats.

use std::collections::HashMap;

use comfy_table::{presets::UTF8_FULL_CONDENSED, ContentArrangement, Table};
use owo_colors::OwoColorize;
use uuid::Uuid;

use memmate_core::store::{OverallStats, TestResult, Verse, VerseStats};
use memmate_core::{JsonFileStore, VerseStore};

use crate::helpers::OutputFormat;

/// Build a map of verse id -> reference for display, archived included.
pub fn verse_reference_map(store: &JsonFileStore) -> anyhow::Result<HashMap<Uuid, String>> {
    let verses = store.list_verses(true)?;
    let mut map = HashMap::new();
    for verse in verses {
        map.insert(verse.id, verse.reference);
    }
    Ok(map)
}

/// First block of a UUID; enough to paste back as a unique prefix.
fn short_id(id: Uuid) -> String {
    id.to_string().chars().take(8).collect()
}

fn format_timestamp(timestamp: chrono::DateTime<chrono::Utc>) -> String {
    timestamp.format("%Y-%m-%d %H:%M").to_string()
}

/// Print a verse listing in the requested format.
pub fn print_verse_list(verses: &[Verse], format: OutputFormat, quiet: bool) {
    if quiet || format == OutputFormat::Plain {
        for verse in verses {
            println!(
                "{}  {} ({})",
                short_id(verse.id),
                verse.reference,
                verse.translation
            );
        }
        return;
    }

    if verses.is_empty() {
        println!("No verses yet. Add one with `memmate add`.");
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["ID", "Reference", "Translation", "Added", "Status"]);
    for verse in verses {
        let status = if verse.archived { "archived" } else { "active" };
        table.add_row(vec![
            short_id(verse.id),
            verse.reference.clone(),
            verse.translation.clone(),
            format_timestamp(verse.created_at),
            status.to_string(),
        ]);
    }
    println!("{table}");
}

/// Print one verse in full, with its stats when available.
pub fn print_verse_detail(verse: &Verse, stats: Option<&VerseStats>, quiet: bool) {
    if quiet {
        println!("{}", verse.id);
        return;
    }

    println!("{}", verse.reference.bold());
    println!("  ID: {}", verse.id);
    println!("  Translation: {}", verse.translation);
    println!("  Added: {}", format_timestamp(verse.created_at));
    if verse.archived {
        println!("  Status: {}", "archived".dimmed());
    }
    println!();
    println!("  {}", verse.text);

    if let Some(stats) = stats {
        println!();
        print_verse_stats(stats, quiet);
    }
}

/// Print test history, newest first.
pub fn print_history(results: &[TestResult], references: &HashMap<Uuid, String>, quiet: bool) {
    if quiet {
        for result in results {
            println!("{}", result.id);
        }
        return;
    }

    if results.is_empty() {
        println!("No test results recorded.");
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["When", "Verse", "Outcome", "Score"]);
    for result in results {
        let verse = references
            .get(&result.verse_id)
            .cloned()
            .unwrap_or_else(|| short_id(result.verse_id));
        let outcome = if result.passed {
            "PASS".green().to_string()
        } else {
            "FAIL".red().to_string()
        };
        let score = result
            .score
            .map(|score| format!("{:.0}%", score * 100.0))
            .unwrap_or_else(|| "-".to_string());
        table.add_row(vec![
            format_timestamp(result.timestamp),
            verse,
            outcome,
            score,
        ]);
    }
    println!("{table}");
}

/// Print collection-wide statistics.
pub fn print_overall_stats(stats: &OverallStats, quiet: bool) {
    if quiet {
        println!(
            "{} {} {} {} {}",
            stats.total_verses,
            stats.total_archived,
            stats.total_practiced,
            stats.total_tested,
            stats.total_correct
        );
        return;
    }

    println!("{}", "Collection".bold());
    println!(
        "  Verses: {} active, {} archived",
        stats.total_verses, stats.total_archived
    );
    println!("  Practice sessions: {}", stats.total_practiced);
    println!(
        "  Tests: {} ({} passed, {:.0}% accuracy)",
        stats.total_tested,
        stats.total_correct,
        stats.overall_accuracy * 100.0
    );
    println!(
        "  Comfort: {:.1} average, {} at level 5",
        stats.average_comfort_level, stats.verses_with_perfect_comfort
    );
}

/// Print per-verse statistics.
pub fn print_verse_stats(stats: &VerseStats, quiet: bool) {
    if quiet {
        println!(
            "{} {} {} {}",
            stats.times_practiced, stats.times_tested, stats.times_correct, stats.comfort_level
        );
        return;
    }

    println!("{}", format!("Progress for {}", stats.reference).bold());
    println!("  Practiced: {} times", stats.times_practiced);
    println!(
        "  Tested: {} times ({} passed, {:.0}% accuracy)",
        stats.times_tested,
        stats.times_correct,
        stats.accuracy * 100.0
    );
    println!("  Comfort level: {}/5", stats.comfort_level);
    println!("  Streak: {} consecutive correct", stats.consecutive_correct);
    match stats.last_practiced {
        Some(timestamp) => println!("  Last practiced: {}", format_timestamp(timestamp)),
        None => println!("  Last practiced: never"),
    }
    match stats.last_tested {
        Some(timestamp) => println!("  Last tested: {}", format_timestamp(timestamp)),
        None => println!("  Last tested: never"),
    }
}
