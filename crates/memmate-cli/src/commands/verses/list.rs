use memmate_core::VerseStore;

use crate::app::AppContext;
use crate::cli::ListArgs;
use crate::helpers::parse_output_format;
use crate::output::{print_verse_list, verses_json};

pub fn handle_list(ctx: &AppContext, args: &ListArgs) -> anyhow::Result<()> {
    let store = ctx.open_store()?;
    let verses = store.list_verses(args.archived)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&verses_json(&verses))?);
        return Ok(());
    }

    let format = parse_output_format(args.format.as_deref())?;
    print_verse_list(&verses, format, ctx.quiet());
    Ok(())
}
