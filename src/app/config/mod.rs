// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, loaded from a
//! `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[notifications]` - Toast display window and animation timing
//! - `[sign_in]` - Simulated sign-in latency
//! - `[display]` - Optional hero image
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `SOLARSHARE_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use solarshare::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! config.general.language = Some("fr".to_string());
//! config::save_with_override(&config, None).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Toast notification timing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NotificationsConfig {
    /// Seconds a toast stays visible before it is dismissed automatically.
    #[serde(
        default = "default_display_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub display_secs: Option<u64>,

    /// Duration of the slide-out animation in milliseconds.
    #[serde(
        default = "default_exit_animation_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub exit_animation_ms: Option<u64>,
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            display_secs: default_display_secs(),
            exit_animation_ms: default_exit_animation_ms(),
        }
    }
}

impl NotificationsConfig {
    /// Display window, clamped to the supported range.
    #[must_use]
    pub fn display_duration(&self) -> Duration {
        let secs = self
            .display_secs
            .unwrap_or(DEFAULT_NOTIFICATION_DISPLAY_SECS)
            .clamp(MIN_NOTIFICATION_DISPLAY_SECS, MAX_NOTIFICATION_DISPLAY_SECS);
        Duration::from_secs(secs)
    }

    /// Exit animation duration, clamped to the supported range.
    #[must_use]
    pub fn exit_duration(&self) -> Duration {
        let ms = self
            .exit_animation_ms
            .unwrap_or(DEFAULT_EXIT_ANIMATION_MS)
            .min(MAX_EXIT_ANIMATION_MS);
        Duration::from_millis(ms)
    }
}

/// Sign-in form settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SignInConfig {
    /// Simulated round trip before the sign-in succeeds, in milliseconds.
    #[serde(
        default = "default_simulated_latency_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub simulated_latency_ms: Option<u64>,
}

impl Default for SignInConfig {
    fn default() -> Self {
        Self {
            simulated_latency_ms: default_simulated_latency_ms(),
        }
    }
}

impl SignInConfig {
    #[must_use]
    pub fn simulated_latency(&self) -> Duration {
        let ms = self
            .simulated_latency_ms
            .unwrap_or(DEFAULT_SIMULATED_LATENCY_MS)
            .min(MAX_SIMULATED_LATENCY_MS);
        Duration::from_millis(ms)
    }
}

/// Display settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct DisplayConfig {
    /// Image shown in the hero region instead of the generated illustration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hero_image: Option<PathBuf>,
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
    pub notifications: NotificationsConfig,

    #[serde(default)]
    pub sign_in: SignInConfig,

    #[serde(default)]
    pub display: DisplayConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_display_secs() -> Option<u64> {
    Some(DEFAULT_NOTIFICATION_DISPLAY_SECS)
}

fn default_exit_animation_ms() -> Option<u64> {
    Some(DEFAULT_EXIT_ANIMATION_MS)
}

fn default_simulated_latency_ms() -> Option<u64> {
    Some(DEFAULT_SIMULATED_LATENCY_MS)
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
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "falling back to default config");
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
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
