//! Application context for the Memmate CLI.
//!
//! Bundles the parsed CLI arguments with the lazily-loaded config file so
//! handlers get one value instead of threading paths and settings through
//! every call.

mod resolver;

pub use resolver::{resolve_store_path, resolve_verse_id};

use once_cell::unsync::OnceCell;

use memmate_core::JsonFileStore;

use crate::cli::Cli;
use crate::config::{load_config, MemmateConfig};

/// Application context that bundles CLI args with the config file.
pub struct AppContext<'a> {
    cli: &'a Cli,
    config: OnceCell<Option<MemmateConfig>>,
}

impl<'a> AppContext<'a> {
    /// Create a new application context from CLI arguments.
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            config: OnceCell::new(),
        }
    }

    /// Get the CLI arguments.
    pub fn cli(&self) -> &Cli {
        self.cli
    }

    /// Check if quiet mode is enabled.
    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// Get the config file contents, loading them lazily if needed.
    pub fn config(&self) -> anyhow::Result<Option<&MemmateConfig>> {
        self.config
            .get_or_try_init(load_config)
            .map(Option::as_ref)
    }

    /// Open the store at the resolved path, applying the configured default
    /// translation label.
    pub fn open_store(&self) -> anyhow::Result<JsonFileStore> {
        let path = resolve_store_path(self.cli, self.config()?)?;
        let mut store = JsonFileStore::open(&path)?;
        if let Some(label) = self
            .config()?
            .and_then(|config| config.verses.default_translation.as_deref())
        {
            store = store.with_default_translation(label);
        }
        Ok(store)
    }
}
