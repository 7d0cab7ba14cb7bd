//! Configuration file support for show-browser.
//!
//! This module provides functionality for loading and saving user preferences
//! from a TOML configuration file.

use crate::error::{AppError, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::PathBuf;
use std::time::Duration;

/// Public TVmaze endpoint.
pub const DEFAULT_API_BASE_URL: &str = "https://api.tvmaze.com";

/// Which collection the show/episode selectors list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SelectorStyle {
    /// Every loaded item, regardless of the search text
    #[default]
    Full,
    /// Only the items matching the current search text
    Filtered,
}

/// User configuration settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the show metadata API
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Selector style: "full" or "filtered"
    #[serde(default)]
    pub selector: SelectorStyle,

    /// Per-request timeout in seconds; unset means wait indefinitely
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,

    /// Automatic retries of transient failures before reporting an error
    #[serde(default)]
    pub retries: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

impl Config {
    /// Create a new config with default values.
    pub fn new() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            selector: SelectorStyle::default(),
            request_timeout_secs: None,
            retries: 0,
        }
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    /// Get the path to the config file.
    ///
    /// Returns ~/.config/show-browser/config.toml on Linux,
    /// or a platform-appropriate location on other systems.
    pub fn get_config_path() -> std::result::Result<PathBuf, io::Error> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| {
                io::Error::new(io::ErrorKind::NotFound, "Could not find config directory")
            })?
            .join("show-browser");

        Ok(config_dir.join("config.toml"))
    }

    /// Load config from disk.
    ///
    /// Returns default config if the file doesn't exist.
    pub fn load() -> Result<Self> {
        let path = Self::get_config_path()?;

        if !path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(&path)?;
        Self::from_toml(&content)
    }

    /// Parse a config from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        if config.api_base_url.trim().is_empty() {
            return Err(AppError::Config("api_base_url must not be empty".to_string()));
        }
        Ok(config)
    }

    /// Save config to disk.
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::get_config_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(&path, content)?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_config_has_defaults() {
        let config = Config::new();
        assert_eq!(config.api_base_url, "https://api.tvmaze.com");
        assert_eq!(config.selector, SelectorStyle::Full);
        assert!(config.request_timeout_secs.is_none());
        assert!(config.request_timeout().is_none());
        assert_eq!(config.retries, 0);
    }

    #[test]
    fn test_config_serialization() {
        let config = Config {
            api_base_url: "http://localhost:8080".to_string(),
            selector: SelectorStyle::Filtered,
            request_timeout_secs: Some(15),
            retries: 2,
        };

        let toml_str = toml::to_string(&config).unwrap();
        assert!(toml_str.contains("api_base_url = \"http://localhost:8080\""));
        assert!(toml_str.contains("selector = \"filtered\""));
        assert!(toml_str.contains("request_timeout_secs = 15"));
        assert!(toml_str.contains("retries = 2"));
    }

    #[test]
    fn test_config_deserialization() {
        let toml_str = r#"
            api_base_url = "http://mirror.local"
            selector = "filtered"
            request_timeout_secs = 5
        "#;

        let config = Config::from_toml(toml_str).unwrap();
        assert_eq!(config.api_base_url, "http://mirror.local");
        assert_eq!(config.selector, SelectorStyle::Filtered);
        assert_eq!(config.request_timeout(), Some(Duration::from_secs(5)));
    }

    #[test]
    fn test_config_partial_deserialization() {
        // Only specify some fields, rest should use defaults
        let toml_str = r#"
            retries = 1
        "#;

        let config = Config::from_toml(toml_str).unwrap();
        assert_eq!(config.retries, 1);
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL); // default
        assert_eq!(config.selector, SelectorStyle::Full); // default
    }

    #[test]
    fn test_config_rejects_unknown_selector() {
        let err = Config::from_toml("selector = \"dropdown\"").unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn test_config_rejects_empty_base_url() {
        let err = Config::from_toml("api_base_url = \"  \"").unwrap_err();
        assert!(err.to_string().contains("api_base_url"));
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.selector, SelectorStyle::Full);
        assert_eq!(config.retries, 0);
    }
}
