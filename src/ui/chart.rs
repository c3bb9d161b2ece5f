use eframe::egui::{self, Color32, Sense, Ui};

use crate::canvas::PainterSurface;
use crate::state::GalleryState;

// ---------------------------------------------------------------------------
// Chart canvas (central panel)
// ---------------------------------------------------------------------------

/// Paint the active visualisation onto a fixed-size white canvas.
pub fn gallery_canvas(ui: &mut Ui, state: &mut GalleryState) {
    let size = egui::Vec2::from(state.canvas_size);

    let Some(vis) = state.active_mut() else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Pick a visualisation from the menu bar");
        });
        return;
    };

    egui::ScrollArea::both()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            let (response, painter) = ui.allocate_painter(size, Sense::hover());
            painter.rect_filled(response.rect, 0.0, Color32::WHITE);

            let mut surface = PainterSurface::new(&painter, response.rect);
            vis.draw(&mut surface, size);
        });
}
