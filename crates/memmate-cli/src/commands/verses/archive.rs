use memmate_core::VerseStore;

use crate::app::{resolve_verse_id, AppContext};
use crate::cli::IdArgs;

pub fn handle_archive(ctx: &AppContext, args: &IdArgs) -> anyhow::Result<()> {
    set_archived(ctx, args, true)
}

pub fn handle_unarchive(ctx: &AppContext, args: &IdArgs) -> anyhow::Result<()> {
    set_archived(ctx, args, false)
}

fn set_archived(ctx: &AppContext, args: &IdArgs, archived: bool) -> anyhow::Result<()> {
    let mut store = ctx.open_store()?;
    let id = resolve_verse_id(&store, &args.id)?;

    let changed = if archived {
        store.archive_verse(id)?
    } else {
        store.unarchive_verse(id)?
    };
    if !changed {
        anyhow::bail!("No verse found with id {}", args.id);
    }

    if !ctx.quiet() {
        let verse = store.get_verse(id)?.map(|verse| verse.reference);
        let action = if archived { "Archived" } else { "Restored" };
        println!("{} {}", action, verse.unwrap_or_else(|| args.id.clone()));
    }
    Ok(())
}
