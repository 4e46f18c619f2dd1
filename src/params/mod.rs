//! Parameter registry core.
//!
//! Typed parameter cells, ordered parameter lists, modules that own them,
//! and named preset snapshots.

pub mod list;
pub mod module;
pub mod parameter;
pub mod preset;
pub mod value;

pub use list::{ParamId, ParameterList};
pub use module::{Module, ModuleContext};
pub use parameter::Parameter;
pub use preset::{Preset, PresetBank, PresetError, PresetValue};
pub use value::{ParamKind, ParamValue};
