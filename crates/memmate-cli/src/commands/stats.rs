//! Statistics command: collection-wide or per-verse.

use memmate_core::VerseStore;

use crate::app::{resolve_verse_id, AppContext};
use crate::cli::StatsArgs;
use crate::output::{overall_stats_json, print_overall_stats, print_verse_stats, verse_stats_json};

pub fn handle_stats(ctx: &AppContext, args: &StatsArgs) -> anyhow::Result<()> {
    let store = ctx.open_store()?;

    match &args.id {
        Some(input) => {
            let id = resolve_verse_id(&store, input)?;
            let Some(stats) = store.verse_stats(id)? else {
                anyhow::bail!("No verse found with id {}", input);
            };
            if args.json {
                println!("{}", serde_json::to_string_pretty(&verse_stats_json(&stats))?);
            } else {
                print_verse_stats(&stats, ctx.quiet());
            }
        }
        None => {
            let stats = store.overall_stats()?;
            if args.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&overall_stats_json(&stats))?
                );
            } else {
                print_overall_stats(&stats, ctx.quiet());
            }
        }
    }
    Ok(())
}
