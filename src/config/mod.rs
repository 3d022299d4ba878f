mod loader;

pub use loader::load_config;

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::service::DEFAULT_MAX_RETRIES;
use crate::utils::app_home_dir;

/// Config file name inside the per-user folder.
pub const CONFIG_FILENAME: &str = "config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

fn default_content_dir() -> PathBuf {
    PathBuf::from("content")
}

fn default_max_retries() -> u32 {
    DEFAULT_MAX_RETRIES
}

fn default_rotation() -> String {
    "daily".to_string()
}

fn default_level() -> String {
    "info".to_string()
}

/// Logging settings (`[logging]` table in the TOML file).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    #[serde(default)]
    pub json: bool,
    /// `daily`, `hourly` or `never`.
    #[serde(default = "default_rotation")]
    pub rotation: String,
    /// Log directory; `~/.content-store/logs` when unset.
    #[serde(default)]
    pub dir: Option<PathBuf>,
    /// Default level when `RUST_LOG` is not set.
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            json: false,
            rotation: default_rotation(),
            dir: None,
            level: default_level(),
        }
    }
}

/// Top-level configuration, deserialized from `~/.content-store/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Directory holding `products.json`, `services.json`, `team.json` and
    /// `research.json`.
    #[serde(default = "default_content_dir")]
    pub content_dir: PathBuf,
    /// Extra attempts after a version conflict.
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            content_dir: default_content_dir(),
            max_retries: default_max_retries(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// Log directory with `~` expanded, falling back to `~/.content-store/logs`.
    #[must_use]
    pub fn log_dir(&self) -> PathBuf {
        self.logging
            .dir
            .as_deref()
            .map_or_else(|| app_home_dir().join("logs"), expand_home)
    }
}

/// Resolve the default path of the config file.
#[must_use]
pub fn default_config_path() -> PathBuf {
    app_home_dir().join(CONFIG_FILENAME)
}

/// Expand a leading `~/` to the home directory.
#[must_use]
pub fn expand_home(path: &Path) -> PathBuf {
    match (path.strip_prefix("~"), dirs::home_dir()) {
        (Ok(rest), Some(home)) => home.join(rest),
        _ => path.to_path_buf(),
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
