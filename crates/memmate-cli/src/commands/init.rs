use std::path::PathBuf;

use anyhow::Context;

use memmate_core::JsonFileStore;

use crate::app::AppContext;
use crate::cli::InitArgs;
use crate::config::{default_config_path, default_store_path, write_config, MemmateConfig};

/// Create the store file and write the config pointing at it.
pub fn handle_init(ctx: &AppContext, args: &InitArgs) -> anyhow::Result<()> {
    let config_path = default_config_path()?;
    if config_path.exists() && !args.force {
        anyhow::bail!(
            "Config already exists at {} (pass --force to overwrite)",
            config_path.display()
        );
    }

    let store_path = match (&args.path, &ctx.cli().store) {
        (Some(path), _) => PathBuf::from(path),
        (None, Some(path)) => PathBuf::from(path),
        (None, None) => default_store_path()?,
    };
    if let Some(parent) = store_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create store directory {}", parent.display()))?;
    }

    // Materialize the (possibly empty) document so later commands find a
    // valid store file.
    let mut store = JsonFileStore::open(&store_path)?;
    store.save()?;

    let config = MemmateConfig::new(store_path.clone(), args.translation.clone());
    let written = write_config(&config)?;

    if !ctx.quiet() {
        println!("Store created at {}", store_path.display());
        println!("Config written to {}", written.display());
    }
    Ok(())
}
