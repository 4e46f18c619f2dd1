//! Preset file serialization for save/load functionality.
//!
//! A preset file captures one module's preset bank as JSON, so a tuned set
//! of parameter values can be carried between sessions.

use serde::{Deserialize, Serialize};

use crate::params::PresetBank;

/// Current preset file format version.
/// Increment this when making breaking changes to the format.
pub const PRESET_FORMAT_VERSION: u32 = 1;

/// On-disk container for a module's presets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PresetFile {
    /// Name of the module the presets were saved from. Informational only;
    /// loading does not require a name match.
    pub module_name: String,
    /// File format version for future compatibility.
    pub version: u32,
    /// The saved presets.
    pub presets: PresetBank,
}

impl PresetFile {
    /// Wraps a module's preset bank for saving.
    pub fn new(module_name: impl Into<String>, presets: PresetBank) -> Self {
        Self {
            module_name: module_name.into(),
            version: PRESET_FORMAT_VERSION,
            presets,
        }
    }

    /// Check if this file's version is compatible with the current format.
    pub fn is_compatible(&self) -> bool {
        self.version <= PRESET_FORMAT_VERSION
    }
}

/// Error type for preset file operations.
#[derive(Debug)]
pub enum PresetFileError {
    /// File I/O error.
    IoError(std::io::Error),
    /// JSON serialization/deserialization error.
    SerializationError(serde_json::Error),
    /// Incompatible file format version.
    IncompatibleVersion { found: u32, expected: u32 },
}

impl std::fmt::Display for PresetFileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IoError(e) => write!(f, "File error: {}", e),
            Self::SerializationError(e) => write!(f, "Serialization error: {}", e),
            Self::IncompatibleVersion { found, expected } => {
                write!(
                    f,
                    "Incompatible preset file version: found {}, expected <= {}",
                    found, expected
                )
            }
        }
    }
}

impl std::error::Error for PresetFileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::IoError(e) => Some(e),
            Self::SerializationError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for PresetFileError {
    fn from(err: std::io::Error) -> Self {
        Self::IoError(err)
    }
}

impl From<serde_json::Error> for PresetFileError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err)
    }
}

/// Save a preset file as pretty-printed JSON.
pub fn save_to_file(file: &PresetFile, path: &std::path::Path) -> Result<(), PresetFileError> {
    let json = serde_json::to_string_pretty(file)?;
    std::fs::write(path, json)?;
    log::info!(
        "Saved {} preset(s) for '{}' to {}",
        file.presets.len(),
        file.module_name,
        path.display()
    );
    Ok(())
}

/// Load a preset file from JSON.
pub fn load_from_file(path: &std::path::Path) -> Result<PresetFile, PresetFileError> {
    let json = std::fs::read_to_string(path)?;
    let file: PresetFile = serde_json::from_str(&json)?;

    // Version check
    if !file.is_compatible() {
        log::warn!(
            "Rejecting preset file {}: version {} is newer than {}",
            path.display(),
            file.version,
            PRESET_FORMAT_VERSION
        );
        return Err(PresetFileError::IncompatibleVersion {
            found: file.version,
            expected: PRESET_FORMAT_VERSION,
        });
    }

    Ok(file)
}
