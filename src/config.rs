//! User configuration.
//!
//! Stored as TOML at the platform config dir (`webmem/config.toml`). A
//! missing file means defaults; `migrate_config` adds fields introduced by
//! newer versions without touching anything the user has set.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use toml_edit::{DocumentMut, Item, Table};

/// Errors from config migration.
#[derive(Debug, thiserror::Error)]
pub enum MigrateError {
    #[error("Invalid TOML in config file: {0}")]
    Parse(#[from] toml_edit::TomlError),

    #[error("Config entry '{0}' is not a table")]
    NotATable(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Pretty-print JSON artifacts by default.
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { pretty: false }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventsConfig {
    /// Default cap for the `events` command.
    pub default_limit: usize,
}

impl Default for EventsConfig {
    fn default() -> Self {
        Self { default_limit: 100 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartsConfig {
    /// Default event cap for the `charts` command.
    pub default_limit: usize,
}

impl Default for ChartsConfig {
    fn default() -> Self {
        Self {
            default_limit: 1000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Default event cap for the `graph` command.
    pub default_limit: usize,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self { default_limit: 500 }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub output: OutputConfig,
    pub events: EventsConfig,
    pub charts: ChartsConfig,
    pub graph: GraphConfig,
}

impl Config {
    /// Path to the config file (`<config dir>/webmem/config.toml`).
    pub fn config_path() -> Result<PathBuf> {
        let base = dirs::config_dir().context("Could not determine config directory")?;
        Ok(base.join("webmem").join("config.toml"))
    }

    /// Load the config, falling back to defaults when no file exists.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Save the config, creating the config directory if needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(&path, content)
            .with_context(|| format!("Failed to write config: {}", path.display()))?;
        tracing::debug!(path = %path.display(), "saved config");
        Ok(())
    }
}

/// Result of a config migration.
#[derive(Debug, Clone)]
pub struct MigrationResult {
    /// The migrated file content.
    pub content: String,
    /// Added fields as `section.key`.
    pub added_fields: Vec<String>,
    /// Sections that did not exist before.
    pub sections_added: Vec<String>,
}

impl MigrationResult {
    pub fn has_changes(&self) -> bool {
        !self.added_fields.is_empty()
    }
}

/// Add any missing fields/sections to an existing config file's content.
///
/// User-set values and comments are preserved; only absent keys are filled
/// in from the current defaults. An empty string produces the full default
/// config.
pub fn migrate_config(content: &str) -> Result<MigrationResult, MigrateError> {
    let mut doc: DocumentMut = content.parse()?;

    let default_toml =
        toml::to_string_pretty(&Config::default()).expect("default config serializes");
    let defaults: DocumentMut = default_toml.parse()?;

    let mut added_fields = Vec::new();
    let mut sections_added = Vec::new();

    for (section, item) in defaults.iter() {
        let Some(table) = item.as_table() else {
            continue;
        };
        if !doc.contains_key(section) {
            doc.insert(section, Item::Table(Table::new()));
            sections_added.push(section.to_string());
        }
        let dest = doc[section]
            .as_table_mut()
            .ok_or_else(|| MigrateError::NotATable(section.to_string()))?;
        for (key, value) in table.iter() {
            if !dest.contains_key(key) {
                dest.insert(key, value.clone());
                added_fields.push(format!("{}.{}", section, key));
            }
        }
    }

    Ok(MigrationResult {
        content: doc.to_string(),
        added_fields,
        sections_added,
    })
}
