use memmate_core::VerseStore;

use crate::app::{resolve_verse_id, AppContext};
use crate::cli::RemoveArgs;
use crate::helpers::confirm_destructive;

pub fn handle_remove(ctx: &AppContext, args: &RemoveArgs) -> anyhow::Result<()> {
    let mut store = ctx.open_store()?;
    let id = resolve_verse_id(&store, &args.id)?;

    let Some(verse) = store.get_verse(id)? else {
        anyhow::bail!("No verse found with id {}", args.id);
    };

    let prompt = format!(
        "Permanently remove {} and all of its progress and test history?",
        verse.reference
    );
    if !confirm_destructive(&prompt, args.yes)? {
        println!("Aborted.");
        return Ok(());
    }

    store.remove_verse(id)?;
    if !ctx.quiet() {
        println!(
            "Removed {} (progress and test history deleted)",
            verse.reference
        );
    }
    Ok(())
}
