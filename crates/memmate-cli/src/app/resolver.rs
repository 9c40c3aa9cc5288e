//! Store-path and verse-id resolution.

use std::path::PathBuf;

use uuid::Uuid;

use memmate_core::{JsonFileStore, VerseStore};

use crate::cli::Cli;
use crate::config::{default_store_path, MemmateConfig};

/// Resolve the store file path.
///
/// Precedence: `--store` flag / `MEMMATE_STORE` env (clap folds both into the
/// same argument) > config file > default data path.
pub fn resolve_store_path(cli: &Cli, config: Option<&MemmateConfig>) -> anyhow::Result<PathBuf> {
    if let Some(path) = &cli.store {
        return Ok(PathBuf::from(path));
    }
    if let Some(config) = config {
        return Ok(PathBuf::from(&config.store.path));
    }
    default_store_path()
}

/// Resolve a verse-id argument: a full UUID, or a unique prefix of one.
///
/// Prefix matching covers archived verses too, so archived entries stay
/// addressable by id.
pub fn resolve_verse_id(store: &JsonFileStore, input: &str) -> anyhow::Result<Uuid> {
    if let Ok(id) = Uuid::parse_str(input) {
        return Ok(id);
    }

    let needle = input.to_ascii_lowercase();
    let matches: Vec<Uuid> = store
        .list_verses(true)?
        .into_iter()
        .map(|verse| verse.id)
        .filter(|id| id.to_string().starts_with(&needle))
        .collect();

    match matches.as_slice() {
        [] => anyhow::bail!("No verse id matches \"{}\"", input),
        [id] => Ok(*id),
        _ => anyhow::bail!(
            "Verse id prefix \"{}\" is ambiguous ({} matches); use more characters",
            input,
            matches.len()
        ),
    }
}
