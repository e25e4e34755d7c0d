//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use crate::constants::{CONFIG_DIR_ENV, CONFIG_DIR_NAME};
use crate::parser::serialize::{SerializeOptions, DEFAULT_INDENT};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Largest accepted JSON indent width.
pub const MAX_INDENT: usize = 8;

/// Path configuration for file system locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PathConfig {
    /// Session store directory (defaults to `<config dir>/session`)
    #[serde(default)]
    pub store_dir: Option<PathBuf>,
}

/// Output formatting configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Spaces per JSON nesting level in the schema block
    #[serde(default = "default_indent")]
    pub indent: usize,
}

/// Default JSON indent (2 spaces)
const fn default_indent() -> usize {
    DEFAULT_INDENT
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            indent: default_indent(),
        }
    }
}

impl OutputConfig {
    /// Serialization options for this configuration.
    #[must_use]
    pub const fn serialize_options(&self) -> SerializeOptions {
        SerializeOptions {
            indent: self.indent,
        }
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/SchemaEditor/config.toml`
/// - macOS: `~/Library/Application Support/SchemaEditor/config.toml`
/// - Windows: `%APPDATA%\SchemaEditor\config.toml`
///
/// `SCHEMA_EDITOR_CONFIG_DIR` overrides the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// File system paths
    #[serde(default)]
    pub paths: PathConfig,
    /// Output formatting
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the config directory path.
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(CONFIG_DIR_NAME);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Directory of the session store, configured or default.
    pub fn store_dir(&self) -> Result<PathBuf> {
        match &self.paths.store_dir {
            Some(dir) => Ok(dir.clone()),
            None => Ok(Self::config_dir()?.join("session")),
        }
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;

        if !config_path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(&config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config = Self::from_toml(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        Ok(config)
    }

    /// Parses and validates configuration text.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save(&self) -> Result<()> {
        self.validate()?;

        // Ensure config directory exists
        let config_dir = Self::config_dir()?;
        fs::create_dir_all(&config_dir).context(format!(
            "Failed to create config directory: {}",
            config_dir.display()
        ))?;

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let config_path = Self::config_file_path()?;
        let temp_path = config_path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        // Atomic rename
        fs::rename(&temp_path, &config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        Ok(())
    }

    /// Validates configuration values.
    ///
    /// Checks:
    /// - `indent` is at most [`MAX_INDENT`]
    /// - `store_dir`, if set, is not an existing regular file
    pub fn validate(&self) -> Result<()> {
        if self.output.indent > MAX_INDENT {
            anyhow::bail!(
                "Indent width {} is too large (maximum is {MAX_INDENT})",
                self.output.indent
            );
        }

        if let Some(dir) = &self.paths.store_dir {
            if dir.is_file() {
                anyhow::bail!("Session store path is a file: {}", dir.display());
            }
        }

        Ok(())
    }
}
