//! Application module
//!
//! Contains the main egui application, theme definitions, and UI state management.

pub mod theme;
pub mod viewer_app;

pub use viewer_app::ViewerApp;
