// src/infrastructure/config.rs
use crate::constants::DEFAULT_SUMMARY_LINES;
use crate::domain::{Background, DomainError};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

const APP_DIR: &str = "simple-note";

/// TOML configuration
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Default)]
pub struct StorageConfig {
    /// Empty means the platform data directory
    #[serde(default)]
    pub data_dir: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct DisplayConfig {
    #[serde(default = "default_summary_lines")]
    pub summary_lines: usize,
    #[serde(default = "default_background")]
    pub default_background: String,
}

fn default_summary_lines() -> usize { DEFAULT_SUMMARY_LINES }
fn default_background() -> String { Background::default().name().to_string() }

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            summary_lines: default_summary_lines(),
            default_background: default_background(),
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .context("Failed to read config file")?;

        let config: Config = toml::from_str(&content)
            .context("Failed to parse TOML config")?;

        Ok(config)
    }

    /// Load from `path` if it exists, otherwise return defaults
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            debug!(?path, "No config file, using defaults");
            return Ok(Self::default());
        }
        Self::load(path).with_context(|| format!("Invalid config at {}", path.display()))
    }

    /// Save configuration to TOML file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let toml_string = toml::to_string_pretty(self)
            .context("Failed to serialize config to TOML")?;

        std::fs::write(path.as_ref(), toml_string)
            .context("Failed to write config file")?;

        Ok(())
    }

    /// Write a default configuration file at `path`, creating parent
    /// directories. An existing file is only replaced when `force` is set.
    pub fn create_default(path: impl AsRef<Path>, force: bool) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() && !force {
            anyhow::bail!("Config already exists at {}", path.display());
        }
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let config = Self::default();
        config.save(path)?;
        Ok(config)
    }

    /// `<config_dir>/simple-note/config.toml`
    pub fn default_path() -> Result<PathBuf> {
        let dir = dirs::config_dir().context("Could not find config directory")?;
        Ok(dir.join(APP_DIR).join("config.toml"))
    }

    /// Data directory: explicit override, then config, then platform default
    pub fn data_dir(&self, cli_override: Option<&Path>) -> Result<PathBuf> {
        if let Some(dir) = cli_override {
            return Ok(dir.to_path_buf());
        }
        if !self.storage.data_dir.trim().is_empty() {
            return Ok(PathBuf::from(self.storage.data_dir.trim()));
        }
        let dir = dirs::data_dir().context("Could not find data directory")?;
        Ok(dir.join(APP_DIR))
    }

    pub fn default_background(&self) -> Result<Background, DomainError> {
        self.display
            .default_background
            .parse::<Background>()
            .map_err(DomainError::Config)
    }
}
