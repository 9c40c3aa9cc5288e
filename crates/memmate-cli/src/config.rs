use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct MemmateConfig {
    pub store: StoreSection,
    #[serde(default)]
    pub verses: VersesSection,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StoreSection {
    pub path: String,
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct VersesSection {
    /// Translation label applied when `add` is called without one
    pub default_translation: Option<String>,
}

impl MemmateConfig {
    pub fn new(store_path: PathBuf, default_translation: Option<String>) -> Self {
        Self {
            store: StoreSection {
                path: store_path.to_string_lossy().to_string(),
            },
            verses: VersesSection {
                default_translation,
            },
        }
    }
}

/// Config file location: `$XDG_CONFIG_HOME/memmate/config.toml`, falling back
/// to `~/.config/memmate/config.toml`.
pub fn default_config_path() -> anyhow::Result<PathBuf> {
    let base = std::env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".config")))
        .context("Cannot determine config directory (set XDG_CONFIG_HOME or HOME)")?;
    Ok(base.join("memmate").join("config.toml"))
}

/// Default store location: `$XDG_DATA_HOME/memmate/store.json`, falling back
/// to `~/.local/share/memmate/store.json`.
pub fn default_store_path() -> anyhow::Result<PathBuf> {
    let base = std::env::var_os("XDG_DATA_HOME")
        .map(PathBuf::from)
        .or_else(|| {
            std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".local").join("share"))
        })
        .context("Cannot determine data directory (set XDG_DATA_HOME or HOME)")?;
    Ok(base.join("memmate").join("store.json"))
}

/// Load the config file if one exists.
pub fn load_config() -> anyhow::Result<Option<MemmateConfig>> {
    let path = default_config_path()?;
    if !path.exists() {
        return Ok(None);
    }

    let contents = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config at {}", path.display()))?;
    let config = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config at {}", path.display()))?;
    Ok(Some(config))
}

/// Write the config file, creating parent directories as needed.
///
/// Returns the path it was written to.
pub fn write_config(config: &MemmateConfig) -> anyhow::Result<PathBuf> {
    let path = default_config_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory {}", parent.display()))?;
    }

    let contents = toml::to_string_pretty(config).context("Failed to serialize config")?;
    fs::write(&path, contents)
        .with_context(|| format!("Failed to write config at {}", path.display()))?;
    Ok(path)
}
