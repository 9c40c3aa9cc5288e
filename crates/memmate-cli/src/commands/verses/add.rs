use memmate_core::store::NewVerse;
use memmate_core::VerseStore;

use crate::app::AppContext;
use crate::cli::AddArgs;
use crate::helpers::read_verse_text;

pub fn handle_add(ctx: &AppContext, args: &AddArgs) -> anyhow::Result<()> {
    let mut store = ctx.open_store()?;

    let text = read_verse_text(args.text.as_deref(), args.no_input)?;
    let mut new = NewVerse::new(&args.reference, text);
    if let Some(translation) = &args.translation {
        new = new.translation(translation);
    }

    let verse = store.add_verse(&new)?;
    if ctx.quiet() {
        println!("{}", verse.id);
    } else {
        println!(
            "Added {} ({}) with id {}",
            verse.reference, verse.translation, verse.id
        );
    }
    Ok(())
}
