//! Progress commands: practice, comfort, reset.

use memmate_core::VerseStore;

use crate::app::{resolve_verse_id, AppContext};
use crate::cli::{ComfortArgs, IdArgs, ResetArgs};
use crate::helpers::confirm_destructive;

pub fn handle_practice(ctx: &AppContext, args: &IdArgs) -> anyhow::Result<()> {
    let mut store = ctx.open_store()?;
    let id = resolve_verse_id(&store, &args.id)?;

    if !store.record_practice(id)? {
        anyhow::bail!("No verse found with id {}", args.id);
    }

    if !ctx.quiet() {
        let times = store
            .get_progress(id)?
            .map(|progress| progress.times_practiced)
            .unwrap_or(0);
        println!("Practice recorded ({} sessions total)", times);
    }
    Ok(())
}

pub fn handle_comfort(ctx: &AppContext, args: &ComfortArgs) -> anyhow::Result<()> {
    // Range-check up front so the user sees the right complaint; the store
    // would reject out-of-range levels with the same "false" it uses for a
    // missing verse.
    if !(1..=5).contains(&args.level) {
        anyhow::bail!("Comfort level must be between 1 and 5 (got {})", args.level);
    }

    let mut store = ctx.open_store()?;
    let id = resolve_verse_id(&store, &args.id)?;

    if !store.set_comfort_level(id, args.level)? {
        anyhow::bail!("No verse found with id {}", args.id);
    }

    if !ctx.quiet() {
        println!("Comfort level set to {}/5", args.level);
    }
    Ok(())
}

pub fn handle_reset(ctx: &AppContext, args: &ResetArgs) -> anyhow::Result<()> {
    let mut store = ctx.open_store()?;
    let id = resolve_verse_id(&store, &args.id)?;

    let Some(verse) = store.get_verse(id)? else {
        anyhow::bail!("No verse found with id {}", args.id);
    };

    let prompt = format!(
        "Reset all progress for {}? This also deletes its test history.",
        verse.reference
    );
    if !confirm_destructive(&prompt, args.yes)? {
        println!("Aborted.");
        return Ok(());
    }

    store.reset_progress(id)?;
    if !ctx.quiet() {
        println!("Progress reset and test history purged for {}", verse.reference);
    }
    Ok(())
}
