//! Configuration module for the caret CLI.
//!
//! This module handles locating and loading `caret.toml`.

use dirs::{config_dir, home_dir};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::{CaretError, Result};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "caret.toml";

/// Application configuration structure.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct Config {
    /// Global verbose setting.
    #[serde(default)]
    pub verbose: bool,

    /// Token output settings.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Token output options.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct OutputConfig {
    /// Output format: `text` or `json`.
    #[serde(default = "default_format")]
    pub format: String,

    /// Print the terminal EOF token.
    #[serde(default)]
    pub show_eof: bool,

    /// Print COMMENT marker tokens.
    #[serde(default = "default_true")]
    pub show_comments: bool,
}

fn default_format() -> String {
    "text".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            show_eof: false,
            show_comments: true,
        }
    }
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Searches for configuration in the following order:
    /// 1. Current directory
    /// 2. `~/.config/caret/`
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
            return Err(CaretError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| CaretError::Config(format!("Failed to parse configuration: {}", e)))
    }

    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    fn check_home_config() -> Option<PathBuf> {
        home_dir()
            .map(|dir| dir.join(".config").join("caret").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn check_system_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("caret").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config()
            .or_else(Self::check_home_config)
            .or_else(Self::check_system_config)
    }
}
