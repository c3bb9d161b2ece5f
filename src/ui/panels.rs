use eframe::egui::{self, Color32, RichText, Ui};

use crate::state::GalleryState;
use crate::vis::Notify;

/// Completion callback for loader threads: wake the UI to poll the result.
pub fn repaint_notifier(ctx: &egui::Context) -> impl Fn() -> Notify + '_ {
    move || -> Notify {
        let ctx = ctx.clone();
        Box::new(move || ctx.request_repaint())
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the menu bar: data folder, visualisation picker, status.
pub fn top_bar(ui: &mut Ui, state: &mut GalleryState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open data folder…").clicked() {
                open_folder_dialog(ui.ctx(), state);
                ui.close_menu();
            }
            if ui.button("Reload").clicked() {
                let ctx = ui.ctx().clone();
                state.load_all(repaint_notifier(&ctx));
                ui.close_menu();
            }
        });

        ui.separator();

        let mut picked = None;
        for (i, v) in state.visualisations.iter().enumerate() {
            if ui
                .selectable_label(state.active == Some(i), v.name())
                .clicked()
            {
                picked = Some(i);
            }
        }
        if let Some(i) = picked {
            state.select(i);
        }

        ui.separator();

        if state.loading > 0 {
            ui.spinner();
            ui.label(format!("Loading {} dataset(s)…", state.loading));
        }

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Side panel – slider controls of the active chart
// ---------------------------------------------------------------------------

pub fn side_panel(ui: &mut Ui, state: &mut GalleryState) {
    let data_dir = state.data_dir.display().to_string();

    match state.active_mut() {
        Some(vis) => {
            ui.heading(vis.name());
            ui.separator();
            vis.controls(ui);
        }
        None => {
            ui.heading("Gallery");
            ui.separator();
            ui.label("Pick a visualisation from the menu bar.");
        }
    }

    ui.with_layout(egui::Layout::bottom_up(egui::Align::LEFT), |ui: &mut Ui| {
        ui.small(format!("Data: {data_dir}"));
    });
}

// ---------------------------------------------------------------------------
// Folder dialog
// ---------------------------------------------------------------------------

pub fn open_folder_dialog(ctx: &egui::Context, state: &mut GalleryState) {
    let folder = rfd::FileDialog::new()
        .set_title("Open gallery data folder")
        .set_directory(&state.data_dir)
        .pick_folder();

    if let Some(path) = folder {
        log::info!("Switching data folder to {}", path.display());
        state.set_data_dir(path, repaint_notifier(ctx));
    }
}
