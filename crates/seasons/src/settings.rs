//! Season switcher settings, loaded once at startup from a JSON file.

use std::fmt;
use std::path::Path;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::assets::{SeasonAssetSet, SeasonAssets};

/// Default cross-fade length in seconds.
pub const DEFAULT_BLEND_DURATION_SECS: f32 = 2.5;

// =============================================================================
// Errors
// =============================================================================

#[derive(Debug)]
pub enum SettingsError {
    /// The settings file could not be read.
    Io(std::io::Error),
    /// The settings file is not valid JSON for `SeasonSwitcherSettings`.
    Parse(serde_json::Error),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "I/O error: {e}"),
            SettingsError::Parse(e) => write!(f, "Parse error: {e}"),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Io(e) => Some(e),
            SettingsError::Parse(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for SettingsError {
    fn from(e: std::io::Error) -> Self {
        SettingsError::Io(e)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(e: serde_json::Error) -> Self {
        SettingsError::Parse(e)
    }
}

// =============================================================================
// Settings
// =============================================================================

/// Configuration for the season switcher. Fixed for the session once the
/// switcher has been created from it.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeasonSwitcherSettings {
    /// Seconds for one cross-fade. Zero or negative values finish on the
    /// first frame after the trigger.
    pub blend_duration_secs: f32,
    /// Also blend normal maps alongside the albedo textures.
    pub use_normals: bool,
    /// Asset paths of each season's textures.
    pub textures: SeasonAssets<String>,
}

impl Default for SeasonSwitcherSettings {
    fn default() -> Self {
        Self {
            blend_duration_secs: DEFAULT_BLEND_DURATION_SECS,
            use_normals: false,
            textures: default_texture_paths(),
        }
    }
}

fn albedo_path(name: &str) -> SeasonAssetSet<String> {
    SeasonAssetSet::new(Some(format!("textures/{name}_albedo.png")), None)
}

/// `textures/<season>_albedo.png` for every season, no normal maps.
pub fn default_texture_paths() -> SeasonAssets<String> {
    SeasonAssets {
        winter: albedo_path("winter"),
        spring: albedo_path("spring"),
        summer: albedo_path("summer"),
        autumn: albedo_path("autumn"),
    }
}

impl SeasonSwitcherSettings {
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load `path`, falling back to defaults when the file is missing or
    /// invalid. Invalid files are reported with a warning.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(settings) => {
                info!("SeasonSwitcher: loaded settings from {}", path.display());
                settings
            }
            Err(SettingsError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                info!(
                    "SeasonSwitcher: no settings at {}, using defaults",
                    path.display()
                );
                Self::default()
            }
            Err(e) => {
                warn!(
                    "SeasonSwitcher: ignoring settings at {}: {e}",
                    path.display()
                );
                Self::default()
            }
        }
    }
}
