//! Configuration handling for shape-patterns
//!
//! Configuration is optional. It is read from the path given with
//! `--config`, or else from `config.toml` in the user config directory
//! (`~/.config/shape-patterns/` on Linux). Missing global config means
//! defaults.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cli::OutputFormat;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config file not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to parse configuration: {0}")]
    Parse(String),
}

/// User configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Output format used when `--format` is not given
    pub default_format: OutputFormat,
}

impl Config {
    /// Loads configuration from an explicit path, or the global location
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => {
                if !path.is_file() {
                    return Err(ConfigError::NotFound(path.to_path_buf()).into());
                }
                Self::load_file(path)
            }
            None => Self::load_global(),
        }
    }

    /// Returns the global config directory
    pub fn global_config_dir() -> Option<PathBuf> {
        ProjectDirs::from("dev", "shape-patterns", "shape-patterns")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    fn load_global() -> Result<Self> {
        let config_path = match Self::global_config_dir() {
            Some(dir) => dir.join("config.toml"),
            None => return Ok(Self::default()),
        };

        if !config_path.exists() {
            return Ok(Self::default());
        }

        Self::load_file(&config_path)
    }

    /// Loads configuration from a TOML file
    pub fn load_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;

        Self::parse(&content).with_context(|| format!("Invalid config: {}", path.display()))
    }

    /// Parses configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}
