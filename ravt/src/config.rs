//! Configuration module for the ravt CLI.
//!
//! This module handles loading and saving `ravt.toml`.

use dirs::{config_dir, home_dir};
use num_cpus::get as get_num_cpus;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{RavtError, Result};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "ravt.toml";

/// Fallback worker count if the CPU count does not fit a `u32`.
const DEFAULT_THREAD_COUNT: u32 = 4;

/// Application configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Global verbose setting.
    #[serde(default)]
    pub verbose: bool,

    /// Tokens-specific configuration.
    #[serde(default)]
    pub tokens: TokensConfig,

    /// Stats-specific configuration.
    #[serde(default)]
    pub stats: StatsConfig,
}

/// Options for `ravt tokens`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TokensConfig {
    /// Output format, `text` or `json`.
    #[serde(default = "default_format")]
    pub format: String,

    /// Leave unclassified tokens out of the listing.
    #[serde(default)]
    pub skip_unclassified: bool,
}

/// Options for `ravt stats`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StatsConfig {
    /// Number of worker threads.
    #[serde(default = "default_parallel_jobs")]
    pub jobs: u32,
}

fn default_format() -> String {
    "text".to_string()
}

/// Get the default number of parallel jobs based on CPU count.
fn default_parallel_jobs() -> u32 {
    get_num_cpus().try_into().unwrap_or(DEFAULT_THREAD_COUNT)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            verbose: false,
            tokens: TokensConfig::default(),
            stats: StatsConfig::default(),
        }
    }
}

impl Default for TokensConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            skip_unclassified: false,
        }
    }
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            jobs: default_parallel_jobs(),
        }
    }
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Searches for configuration in the following order:
    /// 1. Current directory
    /// 2. `~/.config/ravt/`
    /// 3. System configuration directory
    ///
    /// Returns the default configuration if no config file is found.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(RavtError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| RavtError::Config(format!("Failed to parse configuration: {}", e)))?;

        Ok(config)
    }

    /// Save configuration to a specific path.
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| RavtError::Config(format!("Failed to serialize configuration: {}", e)))?;

        std::fs::write(path, content)?;
        Ok(())
    }

    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    fn check_home_config() -> Option<PathBuf> {
        home_dir()
            .map(|dir| dir.join(".config").join("ravt").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn check_system_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("ravt").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Find the configuration file in standard locations.
    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config()
            .or_else(Self::check_home_config)
            .or_else(Self::check_system_config)
    }
}
