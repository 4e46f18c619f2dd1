//! Modules module
//!
//! Built-in renderer modules for the viewer.

pub mod backdrop;
pub mod oscilloscope;

// Re-export commonly used types
pub use backdrop::Backdrop;
pub use oscilloscope::{DisplayMode, Oscilloscope};
