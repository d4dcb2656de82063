// SPDX-License-Identifier: MPL-2.0
//! Loading and saving of user preferences in a `settings.toml` file.
//!
//! Preferences cover the theme mode, optional overrides for the default
//! toast/flash auto-dismiss durations, and the diagnostics buffer capacity.
//! Durations are stored in milliseconds; a zero or negative override means
//! "never auto-dismiss". Out-of-range capacities are clamped where the
//! config is applied, so a hand-edited file cannot request nonsensical
//! values.
//!
//! # Examples
//!
//! ```no_run
//! use alankara::config::{self, Config};
//!
//! let mut config = config::load().unwrap_or_default();
//! config.toast_duration_ms = Some(2_500);
//! config::save(&config).expect("Failed to save config");
//! ```

use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "Alankara";

pub const MIN_DIAGNOSTICS_BUFFER_CAPACITY: usize = 100;
pub const MAX_DIAGNOSTICS_BUFFER_CAPACITY: usize = 10_000;
pub const DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY: usize = 1_000;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub theme_mode: ThemeMode,
    /// Default toast auto-dismiss override in milliseconds (`<= 0` disables).
    /// `None` keeps the per-kind defaults.
    #[serde(default)]
    pub toast_duration_ms: Option<i64>,
    /// Default flash auto-dismiss override in milliseconds (`<= 0` disables).
    #[serde(default)]
    pub flash_duration_ms: Option<i64>,
    #[serde(default)]
    pub diagnostics_capacity: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme_mode: ThemeMode::System,
            toast_duration_ms: None,
            flash_duration_ms: None,
            diagnostics_capacity: Some(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY),
        }
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)?;
    let config = toml::from_str(&contents)?;
    Ok(config)
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        save_to_path(config, &path)?;
    }
    Ok(())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let contents = toml::to_string_pretty(config)?;
    fs::write(path, contents)?;
    Ok(())
}

/// Clamps a configured diagnostics capacity into the supported range.
#[must_use]
pub fn clamp_diagnostics_capacity(value: usize) -> usize {
    value.clamp(
        MIN_DIAGNOSTICS_BUFFER_CAPACITY,
        MAX_DIAGNOSTICS_BUFFER_CAPACITY,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn default_config_uses_per_kind_durations() {
        let config = Config::default();
        assert_eq!(config.toast_duration_ms, None);
        assert_eq!(config.flash_duration_ms, None);
        assert_eq!(config.theme_mode, ThemeMode::System);
    }

    #[test]
    fn round_trip_preserves_settings() {
        let dir = tempdir().expect("Failed to create temporary directory");
        let path = dir.path().join(CONFIG_FILE);

        let config = Config {
            theme_mode: ThemeMode::Dark,
            toast_duration_ms: Some(2_500),
            flash_duration_ms: Some(0),
            diagnostics_capacity: Some(500),
        };
        save_to_path(&config, &path).expect("Failed to save config");

        let loaded = load_from_path(&path).expect("Failed to load config");
        assert_eq!(loaded.theme_mode, ThemeMode::Dark);
        assert_eq!(loaded.toast_duration_ms, Some(2_500));
        assert_eq!(loaded.flash_duration_ms, Some(0));
        assert_eq!(loaded.diagnostics_capacity, Some(500));
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: Config = toml::from_str("theme_mode = \"light\"").expect("parse");
        assert_eq!(config.theme_mode, ThemeMode::Light);
        assert_eq!(config.toast_duration_ms, None);
    }

    #[test]
    fn malformed_file_is_a_config_error() {
        let dir = tempdir().expect("Failed to create temporary directory");
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "theme_mode = [ not valid").expect("write");

        assert!(load_from_path(&path).is_err());
    }

    #[test]
    fn capacity_is_clamped_into_bounds() {
        assert_eq!(
            clamp_diagnostics_capacity(0),
            MIN_DIAGNOSTICS_BUFFER_CAPACITY
        );
        assert_eq!(
            clamp_diagnostics_capacity(usize::MAX),
            MAX_DIAGNOSTICS_BUFFER_CAPACITY
        );
        assert_eq!(clamp_diagnostics_capacity(750), 750);
    }
}
