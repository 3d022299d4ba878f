use std::path::Path;
use tracing::debug;

use super::{Config, ConfigError};

/// Load the configuration from `path`.
///
/// Returns `Ok(Config::default())` if the file does not exist.
///
/// # Errors
///
/// Returns [`ConfigError`] if the file exists but cannot be read or parsed.
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    if !path.exists() {
        debug!("Config not found at {}; using defaults", path.display());
        return Ok(Config::default());
    }
    let content = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    debug!("Loaded config from {}", path.display());
    Ok(config)
}
