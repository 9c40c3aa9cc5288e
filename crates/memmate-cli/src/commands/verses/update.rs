use memmate_core::store::VerseUpdate;
use memmate_core::VerseStore;

use crate::app::{resolve_verse_id, AppContext};
use crate::cli::UpdateArgs;

pub fn handle_update(ctx: &AppContext, args: &UpdateArgs) -> anyhow::Result<()> {
    let mut store = ctx.open_store()?;
    let id = resolve_verse_id(&store, &args.id)?;

    // Only flags the user passed become updates; an explicitly empty value
    // still counts as one.
    let mut update = VerseUpdate::new();
    if let Some(reference) = &args.reference {
        update = update.reference(reference);
    }
    if let Some(text) = &args.text {
        update = update.text(text);
    }
    if let Some(translation) = &args.translation {
        update = update.translation(translation);
    }
    if update.is_empty() {
        anyhow::bail!("Nothing to update (pass --reference, --text, or --translation)");
    }

    match store.update_verse(id, &update)? {
        Some(verse) => {
            if ctx.quiet() {
                println!("{}", verse.id);
            } else {
                println!("Updated {} ({})", verse.reference, verse.translation);
            }
            Ok(())
        }
        None => anyhow::bail!("No verse found with id {}", args.id),
    }
}
