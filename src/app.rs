use eframe::egui;

use crate::config::GalleryConfig;
use crate::state::GalleryState;
use crate::ui::{chart, panels};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct GalleryApp {
    pub state: GalleryState,
}

impl GalleryApp {
    /// Build the gallery and start loading every dataset in the background.
    pub fn new(cc: &eframe::CreationContext<'_>, config: &GalleryConfig) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::light());

        let mut state = GalleryState::new(config);
        state.load_all(panels::repaint_notifier(&cc.egui_ctx));
        state.select(0);
        Self { state }
    }
}

impl eframe::App for GalleryApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.poll_loads();

        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: year sliders ----
        egui::SidePanel::left("controls_panel")
            .default_width(200.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: chart canvas ----
        egui::CentralPanel::default().show(ctx, |ui| {
            chart::gallery_canvas(ui, &mut self.state);
        });
    }
}
