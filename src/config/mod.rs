// SPDX-License-Identifier: MPL-2.0
//! This module handles the gallery configuration, loading and saving it
//! from a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language used for accessibility announcements
//! - `[timing]` - Slide-change coalescing window and announcement lifetime
//! - `[thumbnails]` - Visibility threshold and scroll strategy
//! - `[layout]` - The desktop layout flag
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with an explicit path
//! 2. Set the `MEDIA_GALLERY_CONFIG_DIR` environment variable
//! 3. Falls back to the platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use media_gallery::config::{self, Config};
//!
//! let (mut config, _warning) = config::load();
//! config.timing.slide_change_debounce_ms = Some(250);
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::domain::gallery::{AnnouncementDelay, DebounceDelay, VisibilityThreshold};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "MediaGallery";

/// Environment variable overriding the config directory.
pub const ENV_CONFIG_DIR: &str = "MEDIA_GALLERY_CONFIG_DIR";

// =============================================================================
// Enums
// =============================================================================

/// How the thumbnail strip is scrolled when the current thumbnail is hidden.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ScrollStrategy {
    /// Scroll to the thumbnail's offset so its leading edge meets the
    /// strip's leading edge.
    #[default]
    AlignLeadingEdge,
    /// Scroll by the exact distance between the two leading edges.
    ExactOffset,
}

// =============================================================================
// Section Structs
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// Announcement language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TimingConfig {
    /// Quiet period before a burst of slide-change notifications is handled.
    #[serde(default = "default_debounce_ms", skip_serializing_if = "Option::is_none")]
    pub slide_change_debounce_ms: Option<u64>,

    /// Delay before an announcement is hidden again.
    #[serde(
        default = "default_announcement_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub announcement_clear_ms: Option<u64>,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            slide_change_debounce_ms: default_debounce_ms(),
            announcement_clear_ms: default_announcement_ms(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ThumbnailConfig {
    /// Pixels trimmed from the strip's trailing edge when testing visibility.
    #[serde(default = "default_threshold_px", skip_serializing_if = "Option::is_none")]
    pub visibility_threshold_px: Option<f32>,

    #[serde(default)]
    pub scroll_strategy: ScrollStrategy,
}

impl Default for ThumbnailConfig {
    fn default() -> Self {
        Self {
            visibility_threshold_px: default_threshold_px(),
            scroll_strategy: ScrollStrategy::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct LayoutConfig {
    /// Whether the page is laid out for desktop widths.
    #[serde(default)]
    pub desktop: bool,
}

/// Gallery configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub timing: TimingConfig,
    #[serde(default)]
    pub thumbnails: ThumbnailConfig,
    #[serde(default)]
    pub layout: LayoutConfig,
}

impl Config {
    #[must_use]
    pub fn debounce_delay(&self) -> DebounceDelay {
        self.timing
            .slide_change_debounce_ms
            .map(DebounceDelay::from_millis)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn announcement_delay(&self) -> AnnouncementDelay {
        self.timing
            .announcement_clear_ms
            .map(AnnouncementDelay::from_millis)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn visibility_threshold(&self) -> VisibilityThreshold {
        self.thumbnails
            .visibility_threshold_px
            .map(VisibilityThreshold::new)
            .unwrap_or_default()
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_debounce_ms() -> Option<u64> {
    Some(DEFAULT_DEBOUNCE_MS)
}

fn default_announcement_ms() -> Option<u64> {
    Some(DEFAULT_ANNOUNCEMENT_MS)
}

fn default_threshold_px() -> Option<f32> {
    Some(DEFAULT_THRESHOLD_PX)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn config_dir_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    base_dir
        .or_else(|| std::env::var_os(ENV_CONFIG_DIR).map(PathBuf::from))
        .or_else(|| dirs::config_dir().map(|dir| dir.join(APP_NAME)))
}

fn config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, the
/// default config is returned together with a message describing the
/// failure.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "Falling back to default settings");
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
    if let Some(path) = config_path_with_override(base_dir) {
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
