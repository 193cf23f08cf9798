//! Preset errors.

use std::fmt;
use std::io;

/// Errors from saving, loading or looking up presets.
#[derive(Debug)]
pub enum PresetError {
    /// A preset name is required and was empty after trimming.
    EmptyName,
    /// No built-in or user preset with this manufacturer and name.
    NotFound { manufacturer: String, name: String },
    /// The platform has no data directory and none was configured.
    NoPresetDirectory,
    /// Reading or writing a preset file failed.
    Io(io::Error),
    /// A preset file is not a valid user preset.
    Serialization(serde_json::Error),
}

impl fmt::Display for PresetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Please enter a preset name"),
            Self::NotFound { manufacturer, name } => {
                write!(f, "Preset not found: {} / {}", manufacturer, name)
            }
            Self::NoPresetDirectory => write!(f, "No preset directory available"),
            Self::Io(e) => write!(f, "Preset file error: {}", e),
            Self::Serialization(e) => write!(f, "Invalid preset file: {}", e),
        }
    }
}

impl std::error::Error for PresetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Serialization(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for PresetError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for PresetError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization(e)
    }
}

/// Result type for preset operations.
pub type PresetResult<T> = Result<T, PresetError>;
