//! User preset files.
//!
//! One JSON file per preset in the preset directory, named after the
//! sanitized `manufacturer_name`. A file holds the manufacturer, the name and
//! the same per-slot records as the plugin state, so loading a user preset
//! restores channels and values too, not only the CC assignments.
//!
//! The directory defaults to `<platform data dir>/Presets`.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use slotcc_utils::sanitize_file_stem;

use crate::error::{PresetError, PresetResult};
use crate::state::{lenient_records, SlotRecord};

/// File extension of user preset files.
pub const PRESET_EXTENSION: &str = "json";

fn unknown_manufacturer() -> String {
    "Unknown".to_string()
}

fn unnamed() -> String {
    "Unnamed".to_string()
}

/// A saved user preset.
///
/// `slots` is required: a JSON file without it is not a preset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserPreset {
    #[serde(default = "unknown_manufacturer")]
    pub manufacturer: String,
    #[serde(default = "unnamed")]
    pub name: String,
    #[serde(deserialize_with = "lenient_records")]
    pub slots: Vec<SlotRecord>,
}

impl UserPreset {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Storage key of this preset.
    pub fn file_stem(&self) -> String {
        sanitize_file_stem(&self.manufacturer, &self.name)
    }
}

/// Entry in the user preset listing.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct PresetSummary {
    pub manufacturer: String,
    pub name: String,
    pub path: PathBuf,
}

/// Directory of user preset files.
#[derive(Debug, Clone)]
pub struct PresetStore {
    dir: Option<PathBuf>,
}

impl PresetStore {
    /// Store presets in `dir`. The directory is created on first save.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: Some(dir.into()),
        }
    }

    /// Store presets in the platform data directory.
    ///
    /// When the platform has none, saving fails with
    /// [`PresetError::NoPresetDirectory`] and the listing is empty.
    pub fn default_location() -> Self {
        let dir = ProjectDirs::from("com", "SlotCC", "SlotCC")
            .map(|dirs| dirs.data_dir().join("Presets"));
        if dir.is_none() {
            log::warn!("No data directory on this platform; user presets are disabled");
        }
        Self { dir }
    }

    /// The preset directory, if any.
    pub fn directory(&self) -> Option<&Path> {
        self.dir.as_deref()
    }

    /// File a preset with this manufacturer and name is stored in.
    pub fn path_for(&self, manufacturer: &str, name: &str) -> PresetResult<PathBuf> {
        let dir = self.dir.as_ref().ok_or(PresetError::NoPresetDirectory)?;
        // Appended, not set: names may contain dots.
        Ok(dir.join(format!(
            "{}.{}",
            sanitize_file_stem(manufacturer, name),
            PRESET_EXTENSION
        )))
    }

    /// Write a preset, replacing any file with the same key.
    pub fn save(&self, preset: &UserPreset) -> PresetResult<PathBuf> {
        let path = self.path_for(&preset.manufacturer, &preset.name)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, preset.to_json()?)?;
        log::info!(
            "Saved user preset {} / {} to {}",
            preset.manufacturer,
            preset.name,
            path.display()
        );
        Ok(path)
    }

    /// Read a preset file.
    pub fn load(path: &Path) -> PresetResult<UserPreset> {
        let json = fs::read_to_string(path)?;
        Ok(UserPreset::from_json(&json)?)
    }

    /// Read the preset stored under this manufacturer and name.
    pub fn find(&self, manufacturer: &str, name: &str) -> PresetResult<UserPreset> {
        let path = self.path_for(manufacturer, name)?;
        if !path.is_file() {
            return Err(PresetError::NotFound {
                manufacturer: manufacturer.to_string(),
                name: name.to_string(),
            });
        }
        Self::load(&path)
    }

    /// All readable presets, sorted by manufacturer then name.
    ///
    /// Files that are not valid presets are skipped.
    pub fn list(&self) -> Vec<PresetSummary> {
        let Some(dir) = self.dir.as_ref() else {
            return Vec::new();
        };
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                log::debug!("Cannot read preset directory {}: {}", dir.display(), e);
                return Vec::new();
            }
        };

        let mut presets: Vec<PresetSummary> = entries
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file() && path.extension().is_some_and(|ext| ext == PRESET_EXTENSION)
            })
            .filter_map(|path| match Self::load(&path) {
                Ok(preset) => Some(PresetSummary {
                    manufacturer: preset.manufacturer,
                    name: preset.name,
                    path,
                }),
                Err(e) => {
                    log::warn!("Skipping preset file {}: {}", path.display(), e);
                    None
                }
            })
            .collect();

        presets.sort();
        presets
    }
}

impl Default for PresetStore {
    fn default() -> Self {
        Self::default_location()
    }
}
