// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! viewer preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[display]` - Logical screen size used for layout and pan snap points
//! - `[gestures]` - Pan, pinch and double-tap tuning
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass `--config-dir` to the binary (see [`paths::init_cli_override`])
//! 3. Set `PHOTO_LENS_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use photo_lens::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.display.screen_height = Some(900.0);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;
pub mod paths;

// Re-export all default constants for convenient access
pub use defaults::*;

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// Display settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplayConfig {
    /// Logical screen width in pixels.
    #[serde(
        default = "default_screen_width",
        skip_serializing_if = "Option::is_none"
    )]
    pub screen_width: Option<f32>,

    /// Logical screen height in pixels (also the off-screen pan snap point).
    #[serde(
        default = "default_screen_height",
        skip_serializing_if = "Option::is_none"
    )]
    pub screen_height: Option<f32>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            screen_width: default_screen_width(),
            screen_height: default_screen_height(),
        }
    }
}

/// Gesture tuning settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GestureConfig {
    /// Vertical drag distance over which the viewer fades.
    #[serde(
        default = "default_pan_fade_distance",
        skip_serializing_if = "Option::is_none"
    )]
    pub pan_fade_distance: Option<f32>,

    /// Opacity reached at the end of the fade distance.
    #[serde(
        default = "default_pan_min_opacity",
        skip_serializing_if = "Option::is_none"
    )]
    pub pan_min_opacity: Option<f32>,

    /// Snap-back animation duration in milliseconds.
    #[serde(default = "default_snap_back_ms", skip_serializing_if = "Option::is_none")]
    pub snap_back_ms: Option<u64>,

    /// Released pinch scales above this value snap back to natural size.
    #[serde(
        default = "default_pinch_snap_back_scale",
        skip_serializing_if = "Option::is_none"
    )]
    pub pinch_snap_back_scale: Option<f32>,

    /// Finished pinch scales below this value dismiss the viewer.
    #[serde(
        default = "default_pinch_dismiss_scale",
        skip_serializing_if = "Option::is_none"
    )]
    pub pinch_dismiss_scale: Option<f32>,

    /// Zoom factor reached by double-tapping.
    #[serde(
        default = "default_double_tap_zoom",
        skip_serializing_if = "Option::is_none"
    )]
    pub double_tap_zoom: Option<f32>,

    /// Double-tap animation duration in milliseconds.
    #[serde(
        default = "default_double_tap_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub double_tap_ms: Option<u64>,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            pan_fade_distance: default_pan_fade_distance(),
            pan_min_opacity: default_pan_min_opacity(),
            snap_back_ms: default_snap_back_ms(),
            pinch_snap_back_scale: default_pinch_snap_back_scale(),
            pinch_dismiss_scale: default_pinch_dismiss_scale(),
            double_tap_zoom: default_double_tap_zoom(),
            double_tap_ms: default_double_tap_ms(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// Display settings.
    #[serde(default)]
    pub display: DisplayConfig,

    /// Gesture tuning settings.
    #[serde(default)]
    pub gestures: GestureConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_screen_width() -> Option<f32> {
    Some(DEFAULT_SCREEN_WIDTH)
}

fn default_screen_height() -> Option<f32> {
    Some(DEFAULT_SCREEN_HEIGHT)
}

fn default_pan_fade_distance() -> Option<f32> {
    Some(DEFAULT_PAN_FADE_DISTANCE)
}

fn default_pan_min_opacity() -> Option<f32> {
    Some(DEFAULT_PAN_MIN_OPACITY)
}

fn default_snap_back_ms() -> Option<u64> {
    Some(DEFAULT_SNAP_BACK_MS)
}

fn default_pinch_snap_back_scale() -> Option<f32> {
    Some(DEFAULT_PINCH_SNAP_BACK_SCALE)
}

fn default_pinch_dismiss_scale() -> Option<f32> {
    Some(DEFAULT_PINCH_DISMISS_SCALE)
}

fn default_double_tap_zoom() -> Option<f32> {
    Some(DEFAULT_DOUBLE_TAP_ZOOM)
}

fn default_double_tap_ms() -> Option<u64> {
    Some(DEFAULT_DOUBLE_TAP_MS)
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
/// default config with a warning message explaining what went wrong.
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
                    log::warn!("Falling back to default settings: {err}");
                    return (Config::default(), Some(err.to_string()));
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config = toml::from_str(&content)?;
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
    match get_config_path_with_override(base_dir) {
        Some(path) => save_to_path(config, &path),
        None => Err(Error::Config(
            "no configuration directory available".to_string(),
        )),
    }
}

/// Saves configuration to a specific path, creating parent directories.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
