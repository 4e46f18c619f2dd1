//! Widgets module
//!
//! Custom UI controls for the viewer interface.

pub mod property_tree;

pub use property_tree::property_tree;
