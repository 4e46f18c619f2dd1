//! Backdrop module.
//!
//! Clears the canvas to a theme color and optionally draws a reference
//! grid. The simplest possible renderer, useful as a second module in the
//! viewer and as a template for new ones.

use eframe::egui::{Color32, Painter, Pos2, Rect, Stroke};

use crate::params::{Module, ModuleContext, ParamId, Parameter};
use crate::render::RenderModule;

/// Fill themes in selection-index order.
const THEME_LABELS: [&str; 3] = ["Charcoal", "Paper", "Blueprint"];

/// Fill and grid colors per theme, indexed like `THEME_LABELS`.
const THEME_COLORS: [(Color32, Color32); 3] = [
    (
        Color32::from_rgb(30, 30, 34),
        Color32::from_rgb(52, 52, 58),
    ),
    (
        Color32::from_rgb(236, 233, 225),
        Color32::from_rgb(210, 206, 196),
    ),
    (
        Color32::from_rgb(22, 48, 94),
        Color32::from_rgb(48, 80, 134),
    ),
];

/// A clear-screen renderer with an optional grid overlay.
pub struct Backdrop {
    module: Module,
    theme: ParamId,
    show_grid: ParamId,
    spacing: ParamId,
}

impl Backdrop {
    /// Creates a backdrop and registers its parameters.
    pub fn new(ctx: &mut ModuleContext) -> Self {
        let mut module = Module::new(ctx, "Backdrop");
        let params = module.params_mut();

        let theme = params.push(Parameter::choice("Theme", &THEME_LABELS, 0));
        let show_grid = params.push(Parameter::toggle("Show grid", true));

        let mut spacing_param = Parameter::int("Grid spacing", 32);
        spacing_param.set_limits_int(8, 128);
        let spacing = params.push(spacing_param);

        Self {
            module,
            theme,
            show_grid,
            spacing,
        }
    }

    fn colors(&self) -> (Color32, Color32) {
        let index = self.module.params()[self.theme].as_index().unwrap_or(0);
        THEME_COLORS[index.min(THEME_COLORS.len() - 1)]
    }
}

impl RenderModule for Backdrop {
    fn module(&self) -> &Module {
        &self.module
    }

    fn module_mut(&mut self) -> &mut Module {
        &mut self.module
    }

    fn initialize(&mut self) {}

    fn update(&mut self, _delta_time: f32) {}

    fn render(&mut self, painter: &Painter, rect: Rect) {
        let (fill, grid) = self.colors();
        painter.rect_filled(rect, 0.0, fill);

        let show_grid = self.module.params()[self.show_grid].as_bool().unwrap_or(false);
        if !show_grid {
            return;
        }
        let spacing = self.module.params()[self.spacing].as_int().unwrap_or(32) as f32;
        let stroke = Stroke::new(1.0, grid);

        let mut x = rect.left() + spacing;
        while x < rect.right() {
            painter.line_segment(
                [Pos2::new(x, rect.top()), Pos2::new(x, rect.bottom())],
                stroke,
            );
            x += spacing;
        }
        let mut y = rect.top() + spacing;
        while y < rect.bottom() {
            painter.line_segment(
                [Pos2::new(rect.left(), y), Pos2::new(rect.right(), y)],
                stroke,
            );
            y += spacing;
        }
    }

    fn resize(&mut self, _width: f32, _height: f32) {}
}
