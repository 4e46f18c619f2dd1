//! Main application struct for the module viewer
//!
//! Contains the ViewerApp which implements eframe::App and wires the
//! renderer modules, the property tree, and the preset controls together.

use eframe::egui::{self, Align, Layout, RichText};

use super::theme;
use crate::modules::{Backdrop, Oscilloscope};
use crate::params::ModuleContext;
use crate::persistence::{self, PresetFile};
use crate::render::RenderModule;
use crate::widgets::property_tree;

/// Actions collected from the side panel for deferred execution
#[derive(Default)]
struct PanelActions {
    add_oscilloscope: bool,
}

/// Main application state for the module viewer
pub struct ViewerApp {
    /// Construction context shared by all modules (owns the name counter)
    module_ctx: ModuleContext,

    /// Renderer modules, painted in list order
    modules: Vec<Box<dyn RenderModule>>,

    /// Index of the module shown in the property tree
    selected: usize,

    /// Contents of the preset-name text field
    preset_name: String,

    /// Last info message to display in the status bar
    status_message: Option<String>,

    /// Last error message to display in the status bar
    error_message: Option<String>,

    /// Canvas size from the previous frame, for resize notifications
    canvas_size: egui::Vec2,

    /// Whether theme has been applied
    theme_applied: bool,
}

impl ViewerApp {
    /// Create a new ViewerApp with the default module set.
    pub fn new() -> Self {
        let mut module_ctx = ModuleContext::new();
        let mut modules: Vec<Box<dyn RenderModule>> = vec![
            Box::new(Backdrop::new(&mut module_ctx)),
            Box::new(Oscilloscope::new(&mut module_ctx)),
        ];
        for module in &mut modules {
            module.initialize();
        }

        Self {
            module_ctx,
            modules,
            selected: 1,
            preset_name: String::new(),
            status_message: None,
            error_message: None,
            canvas_size: egui::Vec2::ZERO,
            theme_applied: false,
        }
    }

    fn add_oscilloscope(&mut self) {
        let mut scope = Oscilloscope::new(&mut self.module_ctx);
        scope.initialize();
        self.selected = self.modules.len();
        self.modules.push(Box::new(scope));
    }

    /// Draw the module list, property tree, and preset controls.
    fn draw_side_panel(&mut self, ui: &mut egui::Ui) -> PanelActions {
        let mut actions = PanelActions::default();

        ui.add_space(4.0);
        ui.label(RichText::new("MODULES").color(theme::text::SECONDARY).small());
        for (i, module) in self.modules.iter().enumerate() {
            let name = module.module().name().to_owned();
            if ui.selectable_label(self.selected == i, name).clicked() {
                self.selected = i;
            }
        }
        if ui.button("Add oscilloscope").clicked() {
            actions.add_oscilloscope = true;
        }

        ui.separator();

        let module = self.modules[self.selected].as_mut();
        ui.label(
            RichText::new(module.module().name().to_owned())
                .color(theme::text::PRIMARY)
                .strong(),
        );
        ui.add_space(4.0);
        property_tree(ui, module.module_mut().params_mut());

        ui.separator();
        ui.label(RichText::new("PRESETS").color(theme::text::SECONDARY).small());

        ui.horizontal(|ui| {
            ui.text_edit_singleline(&mut self.preset_name);
            if ui.button("Save").clicked() && !self.preset_name.is_empty() {
                module.module_mut().save_preset(self.preset_name.clone());
                self.status_message = Some(format!("Saved preset '{}'", self.preset_name));
                self.error_message = None;
            }
        });

        let names: Vec<String> = module.module().presets().names().map(str::to_owned).collect();
        for name in names {
            ui.horizontal(|ui| {
                ui.label(&name);
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    if ui.button("✕").clicked() {
                        module.module_mut().presets_mut().remove(&name);
                    }
                    if ui.button("Apply").clicked() {
                        match module.module_mut().apply_preset(&name) {
                            Ok(()) => {
                                self.status_message = Some(format!("Applied preset '{}'", name));
                                self.error_message = None;
                            }
                            Err(e) => self.error_message = Some(e.to_string()),
                        }
                    }
                });
            });
        }

        ui.add_space(4.0);
        ui.horizontal(|ui| {
            if ui.button("Export…").clicked() {
                if let Some(path) = rfd::FileDialog::new()
                    .add_filter("JSON preset", &["json"])
                    .set_file_name("presets.json")
                    .save_file()
                {
                    let file = PresetFile::new(
                        module.module().name(),
                        module.module().presets().clone(),
                    );
                    match persistence::save_to_file(&file, &path) {
                        Ok(()) => {
                            self.status_message =
                                Some(format!("Exported presets to {}", path.display()));
                            self.error_message = None;
                        }
                        Err(e) => self.error_message = Some(e.to_string()),
                    }
                }
            }
            if ui.button("Import…").clicked() {
                if let Some(path) = rfd::FileDialog::new()
                    .add_filter("JSON preset", &["json"])
                    .pick_file()
                {
                    match persistence::load_from_file(&path) {
                        Ok(file) => {
                            *module.module_mut().presets_mut() = file.presets;
                            self.status_message =
                                Some(format!("Imported presets from {}", path.display()));
                            self.error_message = None;
                        }
                        Err(e) => self.error_message = Some(e.to_string()),
                    }
                }
            }
        });

        actions
    }

    /// Draw the canvas and drive the renderer lifecycle for this frame.
    fn draw_canvas(&mut self, ui: &mut egui::Ui, delta_time: f32) {
        let (response, painter) = ui.allocate_painter(ui.available_size(), egui::Sense::hover());
        let rect = response.rect;

        if rect.size() != self.canvas_size {
            self.canvas_size = rect.size();
            for module in &mut self.modules {
                module.resize(rect.width(), rect.height());
            }
        }

        for module in &mut self.modules {
            module.update(delta_time);
            module.render(&painter, rect);
        }
    }

    /// Draw the bottom status bar
    fn draw_status_bar(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);

            if let Some(ref error) = self.error_message {
                ui.label(
                    RichText::new(format!("⚠ {}", error))
                        .color(theme::accent::ERROR)
                        .small(),
                );
            } else if let Some(ref status) = self.status_message {
                ui.label(RichText::new(status).color(theme::text::SECONDARY).small());
            } else {
                ui.label(RichText::new("Ready").color(theme::text::SECONDARY).small());
            }

            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                ui.label(
                    RichText::new("modview v0.1")
                        .color(theme::text::DISABLED)
                        .small(),
                );
            });
        });
    }
}

impl Default for ViewerApp {
    fn default() -> Self {
        Self::new()
    }
}

impl eframe::App for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Apply theme on first frame
        if !self.theme_applied {
            theme::apply_theme(ctx);
            self.theme_applied = true;
        }

        // Clamp so a stall does not jump the animation
        let delta_time = ctx.input(|i| i.stable_dt).min(0.1);

        let actions = egui::SidePanel::left("module_panel")
            .default_width(280.0)
            .show(ctx, |ui| self.draw_side_panel(ui))
            .inner;

        egui::TopBottomPanel::bottom("status_bar")
            .frame(
                egui::Frame::none()
                    .fill(theme::background::PANEL)
                    .inner_margin(egui::Margin::symmetric(0.0, 4.0)),
            )
            .show(ctx, |ui| {
                self.draw_status_bar(ui);
            });

        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                self.draw_canvas(ui, delta_time);
            });

        // Handle deferred actions (to avoid borrow checker issues)
        if actions.add_oscilloscope {
            self.add_oscilloscope();
        }

        // The trace animates, so keep frames coming
        ctx.request_repaint();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_module_set() {
        let app = ViewerApp::new();
        assert_eq!(app.modules.len(), 2);
        assert_eq!(app.modules[0].module().name(), "Backdrop");
        assert_eq!(app.modules[1].module().name(), "Oscilloscope");
        assert_eq!(app.selected, 1);
        assert_eq!(app.module_ctx.module_count(), 2);
    }

    #[test]
    fn test_add_oscilloscope_selects_it() {
        let mut app = ViewerApp::new();
        app.add_oscilloscope();

        assert_eq!(app.modules.len(), 3);
        assert_eq!(app.selected, 2);
        assert_eq!(app.module_ctx.module_count(), 3);
    }
}
