use std::path::Path;

use anyhow::Result;
use eframe::egui::{pos2, Align2, Color32, Stroke, Vec2};

use super::{take_finished, LoadEvent, Notify, Visualisation};
use crate::canvas::Surface;
use crate::color::category_color;
use crate::data::async_load::AsyncLoad;
use crate::data::model::{JobPayRecord, Summary};
use crate::plot::mapper::LinearScale;

const DATA_FILE: &str = "pay-gap/occupation-hourly-pay-by-gender-2017.csv";
/// Distance from every canvas edge to the plot area.
const PAD: f32 = 60.0;
const DOT_SIZE_MIN: f64 = 15.0;
const DOT_SIZE_MAX: f64 = 40.0;
const PROPORTION_FEMALE: (f64, f64) = (0.0, 100.0);
const PAY_GAP: (f64, f64) = (-20.0, 20.0);
const DIVIDER_COLOR: Color32 = Color32::from_gray(150);
const QUADRANT_COLOR: Color32 = Color32::from_gray(100);

/// Bubble diameter for `num_jobs`, scaled between the smallest and largest
/// job counts. A single distinct count gets the smallest bubble.
pub fn bubble_diameter(num_jobs: f64, counts: &Summary) -> f32 {
    let scale = LinearScale::new((counts.min, counts.max), (DOT_SIZE_MIN, DOT_SIZE_MAX));
    if scale.is_degenerate() {
        return DOT_SIZE_MIN as f32;
    }
    scale.px(num_jobs)
}

// ---------------------------------------------------------------------------
// Pay gap by job 2017: bubble scatter split into quadrants
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct PayGapByJob {
    pending: Option<AsyncLoad<JobPayRecord>>,
    loaded: bool,
    data: Vec<JobPayRecord>,
    counts: Option<Summary>,
}

impl PayGapByJob {
    /// Accept the load result; a failure leaves the chart loaded but empty.
    pub fn setup(&mut self, result: Result<Vec<JobPayRecord>>) {
        self.data = match result {
            Ok(rows) => rows,
            Err(e) => {
                log::error!("Pay gap by job data failed to load: {e:#}");
                Vec::new()
            }
        };
        self.counts = Summary::of(self.data.iter().map(|d| d.num_jobs));
        self.loaded = true;
        log::info!("Pay gap by job: {} job subtypes", self.data.len());
    }

    fn draw_title(&self, surface: &mut dyn Surface, size: Vec2) {
        surface.text(
            pos2(size.x / 2.0, 20.0),
            Align2::CENTER_CENTER,
            "Pay Gap vs Gender Representation by Job (2017)",
            16.0,
            Color32::BLACK,
        );
        surface.text(
            pos2(size.x / 2.0, 35.0),
            Align2::CENTER_CENTER,
            "Circle size = Number of jobs",
            12.0,
            Color32::BLACK,
        );
    }

    fn add_axes(&self, surface: &mut dyn Surface, size: Vec2, x: &LinearScale, y: &LinearScale) {
        let (w, h) = (size.x, size.y);
        let divider = Stroke::new(2.0, DIVIDER_COLOR);

        // 50% female: gender parity.
        surface.line(pos2(w / 2.0, PAD), pos2(w / 2.0, h - PAD), divider);
        // 0% gap: pay equality.
        surface.line(pos2(PAD, h / 2.0), pos2(w - PAD, h / 2.0), divider);

        surface.text(
            pos2(w / 2.0, h - 15.0),
            Align2::CENTER_CENTER,
            "Proportion of Female Employees (%)",
            14.0,
            Color32::BLACK,
        );
        surface.vertical_text(pos2(15.0, h / 2.0), "Pay Gap (%)", 14.0, Color32::BLACK);

        for pct in (0..=100).step_by(25) {
            surface.text(
                pos2(x.px(pct as f64), h - PAD + 5.0),
                Align2::CENTER_TOP,
                &format!("{pct}%"),
                10.0,
                Color32::BLACK,
            );
        }
        for gap in (-20..=20).step_by(10) {
            surface.text(
                pos2(PAD - 5.0, y.px(gap as f64)),
                Align2::RIGHT_CENTER,
                &format!("{gap}%"),
                10.0,
                Color32::BLACK,
            );
        }

        let quadrants = [
            (0.75, PAD + 30.0, "Male-dominated\nMen paid more"),
            (0.25, PAD + 30.0, "Female-dominated\nMen paid more"),
            (0.75, h - PAD - 30.0, "Male-dominated\nWomen paid more"),
            (0.25, h - PAD - 30.0, "Female-dominated\nWomen paid more"),
        ];
        for (fx, qy, label) in quadrants {
            surface.text(pos2(w * fx, qy), Align2::CENTER_CENTER, label, 11.0, QUADRANT_COLOR);
        }
    }

    fn draw_legend(&self, surface: &mut dyn Surface, size: Vec2) {
        let (lx, ly) = (size.x - 150.0, 80.0);
        surface.text(
            pos2(lx, ly),
            Align2::LEFT_CENTER,
            "Circle Size Legend:",
            12.0,
            Color32::BLACK,
        );

        let medium = (DOT_SIZE_MIN + DOT_SIZE_MAX) / 2.0;
        let entries = [
            (20.0, DOT_SIZE_MIN, "Fewer jobs"),
            (40.0, medium, "Medium"),
            (65.0, DOT_SIZE_MAX, "More jobs"),
        ];
        for (dy, diameter, label) in entries {
            surface.circle(
                pos2(lx + 20.0, ly + dy),
                diameter as f32,
                Color32::from_gray(150),
                Stroke::new(1.0, Color32::BLACK),
            );
            surface.text(
                pos2(lx + 35.0, ly + dy),
                Align2::LEFT_CENTER,
                label,
                10.0,
                Color32::BLACK,
            );
        }
    }
}

impl Visualisation for PayGapByJob {
    fn id(&self) -> &'static str {
        "pay-gap-by-job-2017"
    }

    fn name(&self) -> &'static str {
        "Pay gap by job: 2017"
    }

    fn load(&mut self, data_dir: &Path, notify: Notify) {
        self.loaded = false;
        self.pending = Some(AsyncLoad::spawn(data_dir.join(DATA_FILE), notify));
    }

    fn poll_load(&mut self) -> Option<LoadEvent> {
        let result = take_finished(&mut self.pending)?;
        let event = match &result {
            Ok(rows) => LoadEvent::Loaded { rows: rows.len() },
            Err(e) => LoadEvent::Failed(format!("{}: {e:#}", self.name())),
        };
        self.setup(result);
        Some(event)
    }

    fn draw(&mut self, surface: &mut dyn Surface, size: Vec2) {
        if !self.loaded {
            log::debug!("Data not yet loaded");
            return;
        }
        let Some(counts) = self.counts else {
            log::debug!("No job data to draw");
            return;
        };

        let x = LinearScale::new(PROPORTION_FEMALE, (PAD as f64, (size.x - PAD) as f64));
        let y = LinearScale::new(PAY_GAP, ((size.y - PAD) as f64, PAD as f64));

        self.draw_title(surface, size);
        self.add_axes(surface, size, &x, &y);

        for job in &self.data {
            let center = pos2(x.px(job.proportion_female), y.px(job.pay_gap));
            let diameter = bubble_diameter(job.num_jobs, &counts);

            surface.circle(
                center,
                diameter,
                category_color(job.job_type_code),
                Stroke::new(1.0, Color32::BLACK),
            );
            surface.text(
                pos2(center.x, center.y + diameter / 2.0 + 10.0),
                Align2::CENTER_CENTER,
                &job.job_subtype,
                8.0,
                Color32::BLACK,
            );
        }

        self.draw_legend(surface, size);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::recording::RecordingSurface;
    use crate::color::JOB_PALETTE;
    use anyhow::anyhow;
    use eframe::egui::vec2;

    const CANVAS: Vec2 = vec2(1000.0, 600.0);

    fn job(name: &str, female: f64, gap: f64, num_jobs: f64, code: f64) -> JobPayRecord {
        JobPayRecord {
            job_subtype: name.to_string(),
            proportion_female: female,
            pay_gap: gap,
            num_jobs,
            job_type_code: code,
        }
    }

    fn loaded() -> PayGapByJob {
        let mut vis = PayGapByJob::default();
        vis.setup(Ok(vec![
            job("Nurses", 88.0, -2.0, 600.0, 6.0),
            job("Engineers", 10.0, 12.0, 100.0, 0.0),
            job("Parity", 50.0, 0.0, 350.0, 14.0),
        ]));
        vis
    }

    #[test]
    fn bubble_sizes_span_min_to_max() {
        let counts = Summary::of([100.0, 350.0, 600.0]).unwrap();
        assert_eq!(bubble_diameter(100.0, &counts), 15.0);
        assert_eq!(bubble_diameter(600.0, &counts), 40.0);
        assert_eq!(bubble_diameter(350.0, &counts), 27.5);
    }

    #[test]
    fn single_count_uses_min_size() {
        let counts = Summary::of([42.0]).unwrap();
        assert_eq!(bubble_diameter(42.0, &counts), 15.0);
    }

    #[test]
    fn bubbles_placed_and_coloured() {
        let mut vis = loaded();
        let mut surface = RecordingSurface::default();
        vis.draw(&mut surface, CANVAS);

        // Three jobs plus three legend circles.
        let circles = surface.circles();
        assert_eq!(circles.len(), 6);

        let (center, diameter, fill) = circles[2];
        assert_eq!(center, pos2(500.0, 300.0));
        assert_eq!(diameter, 27.5);
        assert_eq!(fill, JOB_PALETTE[2]);

        let (engineers, _, fill) = circles[1];
        assert_eq!(fill, JOB_PALETTE[0]);
        assert!(engineers.x < 500.0 && engineers.y < 300.0);
    }

    #[test]
    fn axes_ticks_and_quadrants() {
        let mut vis = loaded();
        let mut surface = RecordingSurface::default();
        vis.draw(&mut surface, CANVAS);
        let texts = surface.texts();

        for label in ["0%", "25%", "50%", "75%", "100%", "-20%", "-10%", "20%"] {
            assert!(texts.contains(&label), "missing tick {label}");
        }
        assert!(texts.contains(&"Female-dominated\nMen paid more"));
        assert!(texts.contains(&"Male-dominated\nWomen paid more"));
        assert!(texts.contains(&"Pay Gap (%)"));
        assert!(texts.contains(&"Nurses"));

        let dividers = surface.lines_with(DIVIDER_COLOR);
        assert_eq!(dividers.len(), 2);
        assert_eq!(dividers[0].0, pos2(500.0, PAD));
        assert_eq!(dividers[1].0, pos2(PAD, 300.0));
    }

    #[test]
    fn failed_load_draws_nothing() {
        let mut vis = PayGapByJob::default();
        vis.setup(Err(anyhow!("missing")));
        let mut surface = RecordingSurface::default();
        vis.draw(&mut surface, CANVAS);
        assert!(surface.ops.is_empty());
    }
}
