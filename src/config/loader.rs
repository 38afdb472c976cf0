//! Config file discovery and parsing
//!
//! Reads `~/.config/shelfseek/config.toml` (platform equivalent via `dirs`).
//! A missing file is not an error; a malformed one is surfaced so the user
//! can fix it rather than silently losing their settings.

use std::path::PathBuf;

use crate::error::ShelfError;

use super::types::Config;

/// Path of the user config file, if a config directory exists on this platform
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("shelfseek").join("config.toml"))
}

/// Load configuration, falling back to defaults when no file exists
pub fn load_config() -> Result<Config, ShelfError> {
    match config_path() {
        Some(path) if path.exists() => load_from_path(&path),
        _ => {
            log::debug!("No config file found, using defaults");
            Ok(Config::default())
        }
    }
}

fn load_from_path(path: &std::path::Path) -> Result<Config, ShelfError> {
    let contents = std::fs::read_to_string(path)?;
    toml::from_str(&contents).map_err(|e| ShelfError::Config(e.to_string()))
}
