//! # Configuration Persistence
//!
//! Manages user configuration stored in `~/.config/blueprint/config.json`.
//!
//! ## Overview
//!
//! The [`Config`] struct is serialized to / deserialized from a JSON file in
//! the user's XDG config directory. Persisted settings: the selected theme,
//! the tech catalog offered in the stack panel, and the default time unit.
//!
//! The catalog lives here rather than as a constant so deployments can offer
//! a different stack list without touching the interaction logic.
//!
//! ## File Location
//!
//! ```text
//! ~/.config/blueprint/config.json
//! ```
//!
//! The `directories` crate is used to resolve the platform-appropriate config
//! directory.

use crate::intake::{TechCatalog, TimeUnit};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Persisted user configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// The name of the selected theme (must match a built-in theme name).
    #[serde(default = "default_theme_name")]
    pub theme: String,

    /// Tech labels offered as chips, in display order. The "Suggest me"
    /// sentinel is implied and need not be listed.
    #[serde(default = "default_tech_options")]
    pub tech_options: Vec<String>,

    /// Unit preselected in the time panel.
    #[serde(default)]
    pub default_time_unit: TimeUnit,
}

fn default_theme_name() -> String {
    "Catppuccin Mocha".to_string()
}

fn default_tech_options() -> Vec<String> {
    TechCatalog::default()
        .labels()
        .iter()
        .filter(|l| *l != crate::intake::SUGGEST_LABEL)
        .cloned()
        .collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme_name(),
            tech_options: default_tech_options(),
            default_time_unit: TimeUnit::default(),
        }
    }
}

impl Config {
    /// Load configuration from disk. Returns `Config::default()` if the file
    /// does not exist or cannot be parsed.
    pub fn load() -> Self {
        Self::try_load().unwrap_or_default()
    }

    /// Try to load configuration, returning an error on failure.
    fn try_load() -> Result<Self> {
        let path = Self::config_path()?;
        Self::load_from(&path)
    }

    /// Load configuration from a specific path. Returns `Config::default()` if
    /// the file does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    /// Save the current configuration to disk.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        self.save_to(&path)
    }

    /// Save the current configuration to a specific path.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Build the injected tech catalog from the configured options.
    pub fn catalog(&self) -> TechCatalog {
        TechCatalog::new(self.tech_options.iter().cloned())
    }

    /// Return the path to the config file.
    fn config_path() -> Result<PathBuf> {
        let dirs = directories::ProjectDirs::from("", "", "blueprint")
            .context("Could not determine config directory")?;
        Ok(dirs.config_dir().join("config.json"))
    }
}
