// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[general]` - Language and theme mode
//! - `[accessibility]` - Font size, high contrast and magnifier toggle
//! - `[magnifier]` - Lens zoom factor, size and gesture timing
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `PICS_LENS_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use pics_lens::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.accessibility.magnifier_enabled = Some(true);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::accessibility::{AccessibilityPreferences, FontSize};
use crate::app::paths;
use crate::error::{Error, Result};
use crate::magnifier::{GestureConfig, LensGeometry, MagnificationFactor};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

/// i18n key of the warning shown when the settings file cannot be parsed.
pub const CONFIG_LOAD_WARNING_KEY: &str = "notification-config-load-error";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "pt-BR").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default, deserialize_with = "deserialize_theme_mode")]
    pub theme_mode: ThemeMode,
}

/// Accessibility preferences shared by every screen.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AccessibilityConfig {
    /// Text size preset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<FontSize>,

    /// Whether the high-contrast color scheme is active.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub high_contrast: Option<bool>,

    /// Whether double-tapping content opens the magnifier lens.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub magnifier_enabled: Option<bool>,
}

impl Default for AccessibilityConfig {
    fn default() -> Self {
        Self {
            font_size: Some(FontSize::default()),
            high_contrast: Some(false),
            magnifier_enabled: Some(false),
        }
    }
}

/// Magnifier lens tuning.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MagnifierConfig {
    /// Zoom factor applied inside the lens.
    #[serde(
        default = "default_magnification",
        skip_serializing_if = "Option::is_none"
    )]
    pub magnification: Option<f32>,

    /// Lens diameter in logical pixels.
    #[serde(
        default = "default_lens_diameter",
        skip_serializing_if = "Option::is_none"
    )]
    pub lens_diameter: Option<f32>,

    /// Inset between the lens and the viewport edges.
    #[serde(
        default = "default_edge_margin",
        skip_serializing_if = "Option::is_none"
    )]
    pub edge_margin: Option<f32>,

    /// Maximum delay between the taps of a double-tap, in milliseconds.
    #[serde(
        default = "default_double_tap_window_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub double_tap_window_ms: Option<u64>,
}

impl Default for MagnifierConfig {
    fn default() -> Self {
        Self {
            magnification: default_magnification(),
            lens_diameter: default_lens_diameter(),
            edge_margin: default_edge_margin(),
            double_tap_window_ms: default_double_tap_window_ms(),
        }
    }
}

impl MagnifierConfig {
    /// Lens geometry described by this section, clamped to valid bounds.
    #[must_use]
    pub fn lens_geometry(&self) -> LensGeometry {
        LensGeometry::new(
            self.lens_diameter.unwrap_or(DEFAULT_LENS_DIAMETER),
            self.edge_margin.unwrap_or(DEFAULT_LENS_MARGIN),
        )
    }

    /// Gesture thresholds described by this section.
    #[must_use]
    pub fn gesture_config(&self) -> GestureConfig {
        let window_ms = self
            .double_tap_window_ms
            .unwrap_or(DEFAULT_DOUBLE_TAP_WINDOW_MS)
            .clamp(MIN_DOUBLE_TAP_WINDOW_MS, MAX_DOUBLE_TAP_WINDOW_MS);
        GestureConfig {
            double_tap_window: Duration::from_millis(window_ms),
            ..GestureConfig::default()
        }
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

    /// Accessibility preferences.
    #[serde(default)]
    pub accessibility: AccessibilityConfig,

    /// Magnifier lens tuning.
    #[serde(default)]
    pub magnifier: MagnifierConfig,
}

impl Config {
    /// Accessibility preferences described by this configuration.
    #[must_use]
    pub fn accessibility_preferences(&self) -> AccessibilityPreferences {
        AccessibilityPreferences {
            font_size: self.accessibility.font_size.unwrap_or_default(),
            high_contrast: self.accessibility.high_contrast.unwrap_or(false),
            magnifier_enabled: self.accessibility.magnifier_enabled.unwrap_or(false),
            magnification: MagnificationFactor::new(
                self.magnifier
                    .magnification
                    .unwrap_or(DEFAULT_MAGNIFICATION),
            ),
        }
    }

    /// Writes accessibility preferences back into their sections.
    pub fn set_accessibility_preferences(&mut self, preferences: &AccessibilityPreferences) {
        self.accessibility.font_size = Some(preferences.font_size);
        self.accessibility.high_contrast = Some(preferences.high_contrast);
        self.accessibility.magnifier_enabled = Some(preferences.magnifier_enabled);
        self.magnifier.magnification = Some(preferences.magnification.value());
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_magnification() -> Option<f32> {
    Some(DEFAULT_MAGNIFICATION)
}

fn default_lens_diameter() -> Option<f32> {
    Some(DEFAULT_LENS_DIAMETER)
}

fn default_edge_margin() -> Option<f32> {
    Some(DEFAULT_LENS_MARGIN)
}

fn default_double_tap_window_ms() -> Option<u64> {
    Some(DEFAULT_DOUBLE_TAP_WINDOW_MS)
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
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
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
/// default config with the i18n key of a warning explaining what went wrong.
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
                    log::warn!("Ignoring unreadable settings file {}: {err}", path.display());
                    return (Config::default(), Some(CONFIG_LOAD_WARNING_KEY.to_string()));
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
    log::debug!("Settings written to {}", path.display());
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
                language: Some("pt-BR".to_string()),
                theme_mode: ThemeMode::Light,
            },
            accessibility: AccessibilityConfig {
                font_size: Some(FontSize::ExtraLarge),
                high_contrast: Some(true),
                magnifier_enabled: Some(true),
            },
            magnifier: MagnifierConfig {
                magnification: Some(3.0),
                lens_diameter: Some(160.0),
                edge_margin: Some(12.0),
                double_tap_window_ms: Some(250),
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
            Err(Error::Config(message)) => assert!(message.contains("expected")),
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn load_with_override_falls_back_with_warning_on_invalid_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[accessibility\n")
            .expect("failed to write broken toml");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some(CONFIG_LOAD_WARNING_KEY));
    }

    #[test]
    fn load_with_override_without_file_returns_defaults_silently() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("deep").join("path").join("settings.toml");

        save_to_path(&Config::default(), &config_path).expect("save should create directories");
        assert!(config_path.exists());
    }

    #[test]
    fn missing_sections_use_defaults() {
        let config: Config = toml::from_str(
            r#"
            [accessibility]
            font_size = "large"
            "#,
        )
        .expect("partial config should parse");

        assert_eq!(config.accessibility.font_size, Some(FontSize::Large));
        assert_eq!(config.magnifier.magnification, Some(DEFAULT_MAGNIFICATION));
        assert_eq!(config.general.theme_mode, ThemeMode::System);
    }

    #[test]
    fn theme_mode_is_case_insensitive() {
        let config: Config = toml::from_str(
            r#"
            [general]
            theme_mode = "Dark"
            "#,
        )
        .expect("theme mode should parse");
        assert_eq!(config.general.theme_mode, ThemeMode::Dark);
    }

    #[test]
    fn out_of_range_magnifier_values_are_clamped_on_use() {
        let section = MagnifierConfig {
            magnification: Some(0.5),
            lens_diameter: Some(10_000.0),
            edge_margin: Some(-4.0),
            double_tap_window_ms: Some(5),
        };
        let config = Config {
            magnifier: section.clone(),
            ..Config::default()
        };

        let lens = section.lens_geometry();
        assert_eq!(lens.diameter(), MAX_LENS_DIAMETER);
        assert_eq!(lens.margin(), 0.0);
        assert_eq!(
            section.gesture_config().double_tap_window,
            Duration::from_millis(MIN_DOUBLE_TAP_WINDOW_MS)
        );
        assert_eq!(
            config.accessibility_preferences().magnification.value(),
            MIN_MAGNIFICATION
        );
    }

    #[test]
    fn accessibility_preferences_round_trip_through_sections() {
        let mut config = Config::default();
        let preferences = AccessibilityPreferences {
            font_size: FontSize::Small,
            high_contrast: true,
            magnifier_enabled: true,
            magnification: MagnificationFactor::new(2.5),
        };

        config.set_accessibility_preferences(&preferences);

        assert_eq!(config.accessibility_preferences(), preferences);
    }

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.accessibility.font_size, Some(FontSize::Medium));
        assert_eq!(config.accessibility.high_contrast, Some(false));
        assert_eq!(config.accessibility.magnifier_enabled, Some(false));
        assert_eq!(config.magnifier.lens_diameter, Some(DEFAULT_LENS_DIAMETER));
        assert_eq!(config.general.theme_mode, ThemeMode::System);
    }
}
