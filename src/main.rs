//! Modview - A parameter-driven module viewer
//!
//! Entry point for the application.

use eframe::egui;
use modview::app::ViewerApp;

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1024.0, 640.0])
            .with_title("Modview"),
        ..Default::default()
    };

    eframe::run_native(
        "Modview",
        options,
        Box::new(|_cc| Ok(Box::new(ViewerApp::new()))),
    )
}
