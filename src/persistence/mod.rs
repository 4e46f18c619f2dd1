//! Persistence module
//!
//! Preset bank save/load functionality using serde and JSON.

pub mod preset_file;

pub use preset_file::{
    load_from_file, save_to_file, PresetFile, PresetFileError, PRESET_FORMAT_VERSION,
};
