mod app;
mod canvas;
mod color;
mod config;
mod data;
mod plot;
mod state;
mod ui;
mod vis;

use app::GalleryApp;
use config::GalleryConfig;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let config = GalleryConfig::load().unwrap_or_else(|e| {
        log::error!("Invalid configuration, using defaults: {e:#}");
        GalleryConfig::default()
    });
    let [w, h] = config.canvas_size();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([w + 240.0, h + 60.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Data Visualisation Gallery",
        options,
        Box::new(move |cc| Ok(Box::new(GalleryApp::new(cc, &config)))),
    )
}
