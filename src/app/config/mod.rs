// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[catalog]` - Product API base URL and request timeout
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `PRODUCT_SHOWCASE_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use product_showcase::app::config::{self, Config};
//!
//! let (mut config, _warning) = config::load();
//! config.catalog.api_base = Some("http://shop.local:5000".to_string());
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::catalog::RequestTimeout;
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
        }
    }
}

/// Product API settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogConfig {
    /// Base URL of the product API, without the `/api/products` path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_base: Option<String>,

    /// Timeout for each request, in seconds.
    #[serde(
        default = "default_request_timeout_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub request_timeout_secs: Option<u64>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            api_base: None,
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl CatalogConfig {
    /// Returns the configured timeout, clamped to the valid range.
    #[must_use]
    pub fn request_timeout(&self) -> RequestTimeout {
        self.request_timeout_secs
            .map(RequestTimeout::new)
            .unwrap_or_default()
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Product API settings.
    #[serde(default)]
    pub catalog: CatalogConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_request_timeout_secs() -> Option<u64> {
    Some(DEFAULT_REQUEST_TIMEOUT_SECS)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// API Base Resolution
// =============================================================================

/// Picks the API base from the CLI flag, the environment, then the config file.
///
/// Blank values are skipped. A trailing slash is removed so the products path
/// can be appended directly.
#[must_use]
pub fn resolve_api_base(
    cli: Option<&str>,
    env: Option<&str>,
    config: &CatalogConfig,
) -> String {
    [cli, env, config.api_base.as_deref()]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|value| !value.is_empty())
        .unwrap_or(DEFAULT_API_BASE)
        .trim_end_matches('/')
        .to_string()
}

/// Same as [`resolve_api_base`], reading the environment variable itself.
#[must_use]
pub fn resolve_api_base_from_env(cli: Option<&str>, config: &CatalogConfig) -> String {
    let env = std::env::var(ENV_API_BASE).ok();
    resolve_api_base(cli, env.as_deref(), config)
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
/// default config with an i18n key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            return match load_from_path(&path) {
                Ok(config) => (config, None),
                Err(_) => (
                    Config::default(),
                    Some("notification-config-load-error".to_string()),
                ),
            };
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

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

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
    use crate::error::Error;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                theme_mode: ThemeMode::Light,
            },
            catalog: CatalogConfig {
                api_base: Some("http://shop.test:8080".to_string()),
                request_timeout_secs: Some(30),
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
    fn invalid_file_falls_back_to_defaults_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[general]\ntheme_mode = \"neon\"\n")
            .expect("failed to write config");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
    }

    #[test]
    fn missing_file_yields_defaults_without_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn partial_file_fills_missing_sections() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join(CONFIG_FILE);
        fs::write(&config_path, "[catalog]\napi_base = \"http://api.test\"\n")
            .expect("failed to write config");

        let config = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(config.catalog.api_base.as_deref(), Some("http://api.test"));
        assert_eq!(
            config.catalog.request_timeout_secs,
            Some(DEFAULT_REQUEST_TIMEOUT_SECS)
        );
        assert_eq!(config.general, GeneralConfig::default());
    }

    #[test]
    fn theme_mode_is_case_insensitive() {
        let config: Config =
            toml::from_str("[general]\ntheme_mode = \"DARK\"\n").expect("valid toml");
        assert_eq!(config.general.theme_mode, ThemeMode::Dark);
    }

    #[test]
    fn request_timeout_is_clamped() {
        let catalog = CatalogConfig {
            api_base: None,
            request_timeout_secs: Some(9_999),
        };
        assert_eq!(catalog.request_timeout().secs(), MAX_REQUEST_TIMEOUT_SECS);

        let unset = CatalogConfig {
            api_base: None,
            request_timeout_secs: None,
        };
        assert_eq!(unset.request_timeout().secs(), DEFAULT_REQUEST_TIMEOUT_SECS);
    }

    #[test]
    fn api_base_precedence_is_cli_env_file() {
        let file = CatalogConfig {
            api_base: Some("http://file.test".to_string()),
            ..CatalogConfig::default()
        };

        assert_eq!(
            resolve_api_base(Some("http://cli.test"), Some("http://env.test"), &file),
            "http://cli.test"
        );
        assert_eq!(
            resolve_api_base(None, Some("http://env.test"), &file),
            "http://env.test"
        );
        assert_eq!(resolve_api_base(None, None, &file), "http://file.test");
        assert_eq!(
            resolve_api_base(None, None, &CatalogConfig::default()),
            DEFAULT_API_BASE
        );
    }

    #[test]
    fn api_base_skips_blank_values_and_trailing_slash() {
        let file = CatalogConfig::default();
        assert_eq!(
            resolve_api_base(Some("  "), Some("http://env.test/"), &file),
            "http://env.test"
        );
    }
}
