//! Configuration loader
//!
//! Reads the TOML file and hands the parsed value to
//! [`AppConfig::from_toml`]. No business rules live here.

use std::path::{Path, PathBuf};

use anyhow::Context;
use kb_core::AppConfig;
use tracing::warn;

/// Load configuration from a TOML file.
///
/// # Errors
///
/// Fails when the file cannot be read, is not valid TOML, or a value has
/// the wrong type.
pub fn load_config(config_path: PathBuf) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    AppConfig::from_toml(&toml_value)
}

/// Like [`load_config`], but a missing path or file yields the defaults.
pub fn load_config_or_default(config_path: Option<&Path>) -> anyhow::Result<AppConfig> {
    match config_path {
        Some(path) if path.exists() => load_config(path.to_path_buf()),
        Some(path) => {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(AppConfig::default())
        }
        None => Ok(AppConfig::default()),
    }
}
