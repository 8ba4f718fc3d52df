// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Theme mode
//! - `[notification]` - Notification defaults (auto-hide, delay, kind)
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass `--config-dir` on the command line
//! 3. Set `ICED_TOAST_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_toast::config::{self, Config};
//!
//! let (mut config, _warning) = config::load();
//! config.notification.duration_ms = Some(2500);
//! config::save_with_override(&config, None).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::presenter::{DismissDelay, Kind};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// Warning key reported when an existing config file cannot be read.
pub const LOAD_ERROR_WARNING: &str = "notification-config-load-error";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// Application theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Defaults applied to every notification the application shows.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NotificationConfig {
    /// Hide notifications automatically after `duration_ms`.
    #[serde(default = "default_auto_hide", skip_serializing_if = "Option::is_none")]
    pub auto_hide: Option<bool>,

    /// Auto-hide delay in milliseconds. Clamped on use.
    #[serde(default = "default_duration_ms", skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<i64>,

    /// Kind preselected for new notifications.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<Kind>,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            auto_hide: default_auto_hide(),
            duration_ms: default_duration_ms(),
            kind: Some(Kind::default()),
        }
    }
}

impl NotificationConfig {
    #[must_use]
    pub fn auto_hide(&self) -> bool {
        self.auto_hide.unwrap_or(DEFAULT_AUTO_HIDE)
    }

    /// Returns the configured delay, clamped into the accepted range.
    #[must_use]
    pub fn dismiss_delay(&self) -> DismissDelay {
        self.duration_ms
            .map_or_else(DismissDelay::default, DismissDelay::clamped)
    }

    #[must_use]
    pub fn kind(&self) -> Kind {
        self.kind.unwrap_or_default()
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub notification: NotificationConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_auto_hide() -> Option<bool> {
    Some(DEFAULT_AUTO_HIDE)
}

fn default_duration_ms() -> Option<i64> {
    i64::try_from(DEFAULT_DURATION_MS).ok()
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    log::warn!("failed to load {}: {err}", path.display());
                    return (Config::default(), Some(LOAD_ERROR_WARNING.to_string()));
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                theme_mode: ThemeMode::Light,
            },
            notification: NotificationConfig {
                auto_hide: Some(false),
                duration_ms: Some(2500),
                kind: Some(Kind::Warning),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(_)) => {}
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.general.theme_mode, ThemeMode::System);
        assert!(config.notification.auto_hide());
        assert_eq!(
            config.notification.dismiss_delay().as_millis(),
            DEFAULT_DURATION_MS
        );
        assert_eq!(config.notification.kind(), Kind::Success);
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[general]\ntheme_mode = \"dark\"\n").expect("write config");

        let loaded = load_from_path(&config_path).expect("load partial config");
        assert_eq!(loaded.general.theme_mode, ThemeMode::Dark);
        assert_eq!(loaded.notification, NotificationConfig::default());
    }

    #[test]
    fn sectioned_format_loads_correctly() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        let content = r#"
[general]
theme_mode = "light"

[notification]
auto_hide = false
duration_ms = 7000
kind = "error"
"#;
        fs::write(&config_path, content).expect("write config");

        let loaded = load_from_path(&config_path).expect("load config");
        assert_eq!(loaded.general.theme_mode, ThemeMode::Light);
        assert!(!loaded.notification.auto_hide());
        assert_eq!(loaded.notification.dismiss_delay().as_millis(), 7000);
        assert_eq!(loaded.notification.kind(), Kind::Error);
    }

    #[test]
    fn out_of_range_duration_is_clamped() {
        let negative = NotificationConfig {
            duration_ms: Some(-100),
            ..NotificationConfig::default()
        };
        assert_eq!(negative.dismiss_delay().as_millis(), MIN_DURATION_MS);

        let huge = NotificationConfig {
            duration_ms: Some(10_000_000),
            ..NotificationConfig::default()
        };
        assert_eq!(huge.dismiss_delay().as_millis(), MAX_DURATION_MS);
    }

    #[test]
    fn unknown_kind_is_a_config_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[notification]\nkind = \"fatal\"\n").expect("write config");

        assert!(matches!(
            load_from_path(&config_path),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn saved_config_uses_sectioned_format() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");

        save_to_path(&Config::default(), &config_path).expect("save config");

        let content = fs::read_to_string(&config_path).expect("read config");
        assert!(content.contains("[general]"), "should have [general] section");
        assert!(
            content.contains("[notification]"),
            "should have [notification] section"
        );
    }

    #[test]
    fn load_with_override_from_empty_directory_returns_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert!(warning.is_none(), "should not warn for missing file");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_with_override_from_corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();
        fs::write(base_dir.join("settings.toml"), "not = valid = toml").expect("write file");

        let (config, warning) = load_with_override(Some(base_dir));
        assert_eq!(warning.as_deref(), Some(LOAD_ERROR_WARNING));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn save_with_override_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let nested_dir = temp_dir.path().join("nested").join("deeply");

        save_with_override(&Config::default(), Some(nested_dir.clone()))
            .expect("save should succeed");
        assert!(nested_dir.join("settings.toml").exists());
    }
}
