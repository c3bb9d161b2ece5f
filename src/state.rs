use std::path::PathBuf;

use crate::config::GalleryConfig;
use crate::vis::{self, LoadEvent, Notify, Visualisation};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct GalleryState {
    /// Every visualisation, in menu order.
    pub visualisations: Vec<Box<dyn Visualisation>>,

    /// Index of the chart on the canvas (None until the user picks one).
    pub active: Option<usize>,

    /// Folder the datasets are read from.
    pub data_dir: PathBuf,

    /// Canvas size in pixels.
    pub canvas_size: [f32; 2],

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,

    /// Number of loads still in flight.
    pub loading: usize,
}

impl GalleryState {
    pub fn new(config: &GalleryConfig) -> Self {
        Self {
            visualisations: vis::gallery(),
            active: None,
            data_dir: config.data_dir.clone(),
            canvas_size: config.canvas_size(),
            status_message: None,
            loading: 0,
        }
    }

    /// Start loading every dataset from `data_dir`. `notify` builds the
    /// completion callback handed to each loader thread.
    pub fn load_all(&mut self, notify: impl Fn() -> Notify) {
        log::info!("Loading datasets from {}", self.data_dir.display());
        self.status_message = None;
        for v in &mut self.visualisations {
            v.load(&self.data_dir, notify());
        }
        self.loading = self.visualisations.len();
    }

    /// Point the gallery at another data folder and reload everything.
    pub fn set_data_dir(&mut self, dir: PathBuf, notify: impl Fn() -> Notify) {
        self.data_dir = dir;
        self.load_all(notify);
    }

    /// Collect finished loads. Call once per frame.
    pub fn poll_loads(&mut self) {
        for v in &mut self.visualisations {
            match v.poll_load() {
                Some(LoadEvent::Loaded { rows }) => {
                    log::info!("{} loaded {rows} rows", v.name());
                    self.loading = self.loading.saturating_sub(1);
                }
                Some(LoadEvent::Failed(msg)) => {
                    log::error!("{msg}");
                    self.status_message = Some(format!("Error: {msg}"));
                    self.loading = self.loading.saturating_sub(1);
                }
                None => {}
            }
        }
    }

    /// Switch the canvas to visualisation `index`, tearing down the previous one.
    pub fn select(&mut self, index: usize) {
        if index >= self.visualisations.len() || self.active == Some(index) {
            return;
        }
        if let Some(prev) = self.active.and_then(|i| self.visualisations.get_mut(i)) {
            prev.teardown();
        }
        self.active = Some(index);
        log::debug!("Selected {}", self.visualisations[index].id());
    }

    pub fn active_mut(&mut self) -> Option<&mut (dyn Visualisation + 'static)> {
        let index = self.active?;
        self.visualisations.get_mut(index).map(|v| v.as_mut())
    }
}
