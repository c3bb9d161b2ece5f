//! The gallery's visualisations.
//!
//! Each one owns its dataset and slider range and is driven through the
//! [`Visualisation`] trait: `load` once, `poll_load` every frame until the
//! data arrives, then `controls` + `draw` every frame, and `teardown` when the
//! user switches to another chart.

use std::path::Path;

use anyhow::Result;
use eframe::egui::{self, Vec2};

use crate::canvas::Surface;
use crate::data::async_load::{AsyncLoad, LoadPoll};

pub mod climate;
pub mod pay_gap_by_job;
pub mod pay_gap_timeseries;

pub use climate::ClimateChange;
pub use pay_gap_by_job::PayGapByJob;
pub use pay_gap_timeseries::PayGapTimeSeries;

/// Callback run by a loader thread when its result is ready.
pub type Notify = Box<dyn FnOnce() + Send>;

/// What happened to a visualisation's load during this frame.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadEvent {
    Loaded { rows: usize },
    /// Loading failed; the message is for the status bar.
    Failed(String),
}

pub trait Visualisation {
    /// Unique identifier without special characters.
    fn id(&self) -> &'static str;

    /// Menu label.
    fn name(&self) -> &'static str;

    /// Start loading the dataset from `data_dir` in the background.
    fn load(&mut self, data_dir: &Path, notify: Notify);

    /// Check an in-flight load, running setup once it completes.
    fn poll_load(&mut self) -> Option<LoadEvent>;

    /// Side-panel widgets (sliders). Most charts have none.
    fn controls(&mut self, _ui: &mut egui::Ui) {}

    /// Paint one frame onto a canvas of `size` pixels. No-op until loaded.
    fn draw(&mut self, surface: &mut dyn Surface, size: Vec2);

    /// Reset per-session UI state when the chart is deactivated.
    fn teardown(&mut self) {}
}

/// Takes the result out of a finished load, clearing the handle.
fn take_finished<T>(pending: &mut Option<AsyncLoad<T>>) -> Option<Result<Vec<T>>> {
    let load = pending.as_ref()?;
    let result = match load.poll() {
        LoadPoll::Pending => return None,
        LoadPoll::Done(result) => result,
    };
    log::debug!("Finished loading {}", load.path().display());
    *pending = None;
    Some(result)
}

/// All visualisations, in menu order.
pub fn gallery() -> Vec<Box<dyn Visualisation>> {
    vec![
        Box::new(PayGapTimeSeries::default()),
        Box::new(PayGapByJob::default()),
        Box::new(ClimateChange::default()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn gallery_ids_are_unique_and_plain() {
        let vis = gallery();
        let ids: BTreeSet<&str> = vis.iter().map(|v| v.id()).collect();
        assert_eq!(ids.len(), vis.len());
        assert!(ids
            .iter()
            .all(|id| id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')));
    }
}
