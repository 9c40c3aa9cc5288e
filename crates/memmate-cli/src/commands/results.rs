//! Test-result commands: record an attempt, show history.

use memmate_core::store::HistoryFilter;
use memmate_core::VerseStore;

use crate::app::{resolve_verse_id, AppContext};
use crate::cli::{HistoryArgs, TestArgs};
use crate::output::{print_history, results_json, verse_reference_map};

pub fn handle_test(ctx: &AppContext, args: &TestArgs) -> anyhow::Result<()> {
    if let Some(score) = args.score {
        if !(0.0..=1.0).contains(&score) {
            anyhow::bail!("Score must be between 0.0 and 1.0 (got {})", score);
        }
    }

    let mut store = ctx.open_store()?;
    let id = resolve_verse_id(&store, &args.id)?;

    // clap guarantees exactly one of --passed/--failed was given.
    let passed = args.passed;
    match store.record_test_result(id, passed, args.score)? {
        Some(result) => {
            if ctx.quiet() {
                println!("{}", result.id);
            } else {
                let outcome = if result.passed { "pass" } else { "fail" };
                match result.score {
                    Some(score) => {
                        println!("Recorded {} at {:.0}%", outcome, score * 100.0)
                    }
                    None => println!("Recorded {}", outcome),
                }
            }
            Ok(())
        }
        None => anyhow::bail!("No verse found with id {}", args.id),
    }
}

pub fn handle_history(ctx: &AppContext, args: &HistoryArgs) -> anyhow::Result<()> {
    let store = ctx.open_store()?;

    let mut filter = HistoryFilter::new();
    if let Some(input) = &args.id {
        filter = filter.verse(resolve_verse_id(&store, input)?);
    }
    if let Some(limit) = args.limit {
        filter = filter.limit(limit);
    }

    let results = store.test_history(&filter)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&results_json(&results))?);
        return Ok(());
    }

    let references = verse_reference_map(&store)?;
    print_history(&results, &references, ctx.quiet());
    Ok(())
}
