//! Modview Library
//!
//! Core library for the module viewer: a typed parameter registry with an
//! egui property panel, renderer modules, and preset persistence.

pub mod app;
pub mod modules;
pub mod params;
pub mod persistence;
pub mod render;
pub mod widgets;
