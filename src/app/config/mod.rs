// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, loaded from a
//! `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[consent]` - Which tabs must be read before agreeing
//! - `[reading]` - Reading gate geometry and the layout breakpoint
//!
//! Theme and language are *preferences*, not configuration; they live in
//! `preferences.toml` (see [`crate::app::preferences`]).
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()` with an explicit path
//! 2. `--config-dir` on the command line
//! 3. Set `POLICY_PORTAL_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use policy_portal::app::config;
//!
//! let (config, _warning) = config::load();
//! let threshold = config.reading.visibility_threshold();
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use crate::ui::state::ConsentScope;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// Toast shown when an existing settings file cannot be used.
pub const LOAD_WARNING: &str = "Settings could not be read. Defaults are in use.";

// =============================================================================
// Section Structs
// =============================================================================

/// Agreement requirements.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ConsentConfig {
    #[serde(default)]
    pub scope: ConsentScope,
}

/// Reading gate and layout settings.
///
/// Stored values are clamped into range when read, so a hand-edited file
/// cannot produce a gate that never opens.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ReadingConfig {
    /// Visible fraction of the end marker that counts as "read".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility_threshold: Option<f32>,

    /// Bottom band (px) excluded from the window in the single layout.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub narrow_bottom_margin: Option<f32>,

    /// Window width (px) at which the split layout starts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub split_breakpoint: Option<f32>,
}

impl ReadingConfig {
    #[must_use]
    pub fn visibility_threshold(&self) -> f32 {
        clamp_or_default(
            self.visibility_threshold,
            DEFAULT_VISIBILITY_THRESHOLD,
            MIN_VISIBILITY_THRESHOLD,
            MAX_VISIBILITY_THRESHOLD,
        )
    }

    #[must_use]
    pub fn narrow_bottom_margin(&self) -> f32 {
        clamp_or_default(
            self.narrow_bottom_margin,
            DEFAULT_NARROW_BOTTOM_MARGIN,
            MIN_NARROW_BOTTOM_MARGIN,
            MAX_NARROW_BOTTOM_MARGIN,
        )
    }

    #[must_use]
    pub fn split_breakpoint(&self) -> f32 {
        clamp_or_default(
            self.split_breakpoint,
            DEFAULT_SPLIT_BREAKPOINT,
            MIN_SPLIT_BREAKPOINT,
            MAX_SPLIT_BREAKPOINT,
        )
    }
}

fn clamp_or_default(value: Option<f32>, default: f32, min: f32, max: f32) -> f32 {
    match value {
        Some(v) if v.is_finite() => v.clamp(min, max),
        _ => default,
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub consent: ConsentConfig,

    #[serde(default)]
    pub reading: ReadingConfig,
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
/// Returns a tuple of (config, optional_warning). A missing file silently
/// yields defaults; an unreadable one yields defaults plus a warning message.
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
                    tracing::warn!(path = %path.display(), error = %err, "ignoring unreadable settings");
                    return (Config::default(), Some(LOAD_WARNING.to_string()));
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
// Tests
// =============================================================================
