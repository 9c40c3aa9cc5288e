use memmate_core::VerseStore;

use crate::app::{resolve_verse_id, AppContext};
use crate::cli::ShowArgs;
use crate::output::{print_verse_detail, verse_json, verse_stats_json};

pub fn handle_show(ctx: &AppContext, args: &ShowArgs) -> anyhow::Result<()> {
    let store = ctx.open_store()?;
    let id = resolve_verse_id(&store, &args.id)?;

    let Some(verse) = store.get_verse(id)? else {
        anyhow::bail!("No verse found with id {}", args.id);
    };
    let stats = store.verse_stats(id)?;

    if args.json {
        let value = serde_json::json!({
            "verse": verse_json(&verse),
            "stats": stats.as_ref().map(verse_stats_json),
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    print_verse_detail(&verse, stats.as_ref(), ctx.quiet());
    Ok(())
}
