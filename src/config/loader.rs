//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::ServeConfig;

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Read a TOML configuration file.
///
/// Validation happens later, in `lifecycle::startup`, because command-line
/// flags may still fill in required fields such as the allow-list.
pub fn read_config(path: &Path) -> Result<ServeConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: ServeConfig = toml::from_str(&content)?;
    Ok(config)
}
