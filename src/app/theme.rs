//! Theme definitions for the viewer UI
//!
//! Color constants and styling for a dark, tool-like aesthetic.

use eframe::egui::{self, Color32, Rounding, Stroke, Vec2};

/// Background colors
pub mod background {
    use super::Color32;

    /// Main window background
    pub const MAIN: Color32 = Color32::from_rgb(28, 28, 36);

    /// Panel background - slightly lighter than main
    pub const PANEL: Color32 = Color32::from_rgb(36, 36, 46);

    /// Widget background (buttons, inputs)
    pub const WIDGET: Color32 = Color32::from_rgb(46, 46, 60);

    /// Widget background when hovered
    pub const WIDGET_HOVERED: Color32 = Color32::from_rgb(56, 56, 74);

    /// Widget background when active/pressed
    pub const WIDGET_ACTIVE: Color32 = Color32::from_rgb(66, 66, 90);
}

/// Text colors
pub mod text {
    use super::Color32;

    /// Primary text - bright
    pub const PRIMARY: Color32 = Color32::from_rgb(238, 238, 244);

    /// Secondary text - dimmed
    pub const SECONDARY: Color32 = Color32::from_rgb(158, 158, 172);

    /// Disabled text
    pub const DISABLED: Color32 = Color32::from_rgb(100, 100, 114);
}

/// UI accent colors
pub mod accent {
    use super::Color32;

    /// Primary accent - blue
    pub const PRIMARY: Color32 = Color32::from_rgb(80, 160, 240);

    /// Success/active - green
    pub const SUCCESS: Color32 = Color32::from_rgb(129, 199, 132);

    /// Error - red
    pub const ERROR: Color32 = Color32::from_rgb(239, 83, 80);
}

/// Standard rounding for UI elements
pub const ROUNDING: Rounding = Rounding {
    nw: 5.0,
    ne: 5.0,
    sw: 5.0,
    se: 5.0,
};

/// Apply the dark viewer theme to an egui context
pub fn apply_theme(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();

    let visuals = &mut style.visuals;
    visuals.dark_mode = true;
    visuals.window_fill = background::PANEL;
    visuals.window_stroke = Stroke::new(1.0, Color32::from_rgb(62, 62, 80));
    visuals.window_rounding = ROUNDING;
    visuals.panel_fill = background::MAIN;

    visuals.widgets.noninteractive.bg_fill = background::WIDGET;
    visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, text::SECONDARY);
    visuals.widgets.inactive.bg_fill = background::WIDGET;
    visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, text::PRIMARY);
    visuals.widgets.hovered.bg_fill = background::WIDGET_HOVERED;
    visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, text::PRIMARY);
    visuals.widgets.active.bg_fill = background::WIDGET_ACTIVE;
    visuals.widgets.active.fg_stroke = Stroke::new(1.5, accent::PRIMARY);

    visuals.selection.bg_fill = accent::PRIMARY.gamma_multiply(0.3);
    visuals.selection.stroke = Stroke::new(1.0, accent::PRIMARY);
    visuals.extreme_bg_color = Color32::from_rgb(22, 22, 30);

    style.spacing.item_spacing = Vec2::new(8.0, 6.0);
    style.spacing.button_padding = Vec2::new(10.0, 5.0);

    ctx.set_style(style);
}
