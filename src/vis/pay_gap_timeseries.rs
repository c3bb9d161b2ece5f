use std::path::Path;

use anyhow::Result;
use eframe::egui::{self, pos2, vec2, Align2, Color32, Stroke, Vec2};

use super::{take_finished, LoadEvent, Notify, Visualisation};
use crate::canvas::Surface;
use crate::data::async_load::AsyncLoad;
use crate::data::filter::{filter_range, ViewRange};
use crate::data::model::{PayGapRecord, Summary};
use crate::plot::axis::{
    draw_axis, draw_axis_labels, draw_reference_line, draw_x_axis_tick_label,
    draw_y_axis_tick_labels, tick_step,
};
use crate::plot::layout::LayoutConfig;
use crate::plot::mapper::LinearScale;
use crate::plot::series::{draw_range_series, SeriesStyle};

const DATA_FILE: &str = "pay-gap/all-employees-hourly-pay-by-gender-1997-2017.csv";
const TITLE: &str = "Gender Pay Gap: Average difference between male and female pay.";
const SUBTITLE: &str =
    "Shows declining wage gap over 20-year period (higher percentage = larger gap)";
const MARGIN: f32 = 35.0;
const TITLE_SPACE: f32 = 30.0;
const MIN_SPAN: f64 = 1.0;
/// Pay equality.
const MIN_PAY_GAP: f64 = 0.0;
const CRIMSON: Color32 = Color32::from_rgb(220, 20, 60);
const EQUALITY_GREEN: Color32 = Color32::from_rgb(0, 150, 0);

/// Change in the gap between the first and last visible year.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trend {
    /// Percentage points the gap closed by.
    pub improvement: f64,
    /// Improvement relative to the starting gap, in percent.
    pub percent_reduction: f64,
}

impl Trend {
    pub fn between(first: &PayGapRecord, last: &PayGapRecord) -> Self {
        let improvement = first.pay_gap - last.pay_gap;
        Self {
            improvement,
            percent_reduction: improvement / first.pay_gap * 100.0,
        }
    }
}

// ---------------------------------------------------------------------------
// Pay gap 1997–2017: line chart of the all-employee gap
// ---------------------------------------------------------------------------

pub struct PayGapTimeSeries {
    pending: Option<AsyncLoad<PayGapRecord>>,
    loaded: bool,
    data: Vec<PayGapRecord>,
    /// First and last year in the file; the data is sorted by year.
    years: Option<(f64, f64)>,
    max_pay_gap: f64,
    range: ViewRange,
}

impl Default for PayGapTimeSeries {
    fn default() -> Self {
        Self {
            pending: None,
            loaded: false,
            data: Vec::new(),
            years: None,
            max_pay_gap: MIN_PAY_GAP,
            range: ViewRange::new(0.0, MIN_SPAN),
        }
    }
}

impl PayGapTimeSeries {
    /// Accept the load result. A failed load still counts as loaded, leaving
    /// nothing to draw.
    pub fn setup(&mut self, result: Result<Vec<PayGapRecord>>) {
        self.data = match result {
            Ok(rows) => rows,
            Err(e) => {
                log::error!("Pay gap data failed to load: {e:#}");
                Vec::new()
            }
        };
        self.loaded = true;

        self.years = self
            .data
            .first()
            .zip(self.data.last())
            .map(|(first, last)| (first.year, last.year));
        self.max_pay_gap = Summary::of(self.data.iter().map(|d| d.pay_gap))
            .map(|s| s.max)
            .unwrap_or(MIN_PAY_GAP);
        self.reset_range();

        if let Some((start, end)) = self.years {
            log::info!(
                "Pay gap series: {} rows, {start} to {end}, max gap {:.1}%",
                self.data.len(),
                self.max_pay_gap
            );
        }
    }

    fn reset_range(&mut self) {
        if let Some((start, end)) = self.years {
            self.range = ViewRange::new(start, end);
        }
    }

    fn draw_title(&self, surface: &mut dyn Surface, layout: &LayoutConfig) {
        surface.text(
            pos2(layout.center_x(), layout.top_margin - 15.0),
            Align2::CENTER_CENTER,
            TITLE,
            18.0,
            Color32::BLACK,
        );
        surface.text(
            pos2(layout.center_x(), layout.top_margin),
            Align2::CENTER_CENTER,
            SUBTITLE,
            12.0,
            Color32::from_gray(100),
        );
    }

    fn draw_annotations(
        &self,
        surface: &mut dyn Surface,
        visible: &[&PayGapRecord],
        x: &LinearScale,
        y: &LinearScale,
    ) {
        let (Some(first), Some(last)) = (visible.first(), visible.last()) else {
            return;
        };
        for point in [first, last] {
            surface.text(
                pos2(x.px(point.year), y.px(point.pay_gap) - 15.0),
                Align2::CENTER_TOP,
                &format!("{:.1}%", point.pay_gap),
                10.0,
                Color32::BLACK,
            );
        }
    }

    fn draw_trend_summary(
        &self,
        surface: &mut dyn Surface,
        layout: &LayoutConfig,
        visible: &[&PayGapRecord],
    ) {
        if visible.len() < 2 {
            return;
        }
        let (first, last) = (visible[0], visible[visible.len() - 1]);
        let trend = Trend::between(first, last);

        let left = layout.right_margin - 175.0;
        let top = layout.top_margin;
        surface.rect(
            pos2(layout.right_margin - 180.0, top + 20.0),
            vec2(175.0, 92.0),
            Color32::from_gray(240),
            Stroke::new(1.0, Color32::from_gray(200)),
        );
        surface.text(
            pos2(left, top + 25.0),
            Align2::LEFT_TOP,
            &format!("{}-Year Summary:", last.year - first.year),
            11.0,
            Color32::BLACK,
        );

        let lines = [
            format!("{}: {:.1}% gap", first.year, first.pay_gap),
            format!("{}: {:.1}% gap", last.year, last.pay_gap),
            format!("Improvement: {:.1} percentage points", trend.improvement),
            format!("({:.0}% reduction)", trend.percent_reduction),
            format!(
                "Median pay: £{:.2} men / £{:.2} women",
                last.median_male, last.median_female
            ),
        ];
        for (i, line) in lines.iter().enumerate() {
            surface.text(
                pos2(left, top + 40.0 + 12.0 * i as f32),
                Align2::LEFT_TOP,
                line,
                9.0,
                Color32::BLACK,
            );
        }
    }
}

impl Visualisation for PayGapTimeSeries {
    fn id(&self) -> &'static str {
        "pay-gap-timeseries"
    }

    fn name(&self) -> &'static str {
        "Pay gap: 1997-2017"
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

    fn controls(&mut self, ui: &mut egui::Ui) {
        let Some((min, max)) = self.years else {
            return;
        };
        ui.label("Start Year");
        ui.add(egui::Slider::new(&mut self.range.start, min..=max - MIN_SPAN).step_by(1.0));
        ui.label("End Year");
        ui.add(egui::Slider::new(&mut self.range.end, min + MIN_SPAN..=max).step_by(1.0));
    }

    fn draw(&mut self, surface: &mut dyn Surface, size: Vec2) {
        if !self.loaded {
            log::debug!("Data not yet loaded");
            return;
        }
        if self.data.is_empty() {
            log::debug!("No pay gap data to draw");
            return;
        }

        self.range.clamp(MIN_SPAN);

        let layout =
            LayoutConfig::new(size.x, size.y, MARGIN, TITLE_SPACE).with_tick_labels(10, 8);
        let x = LinearScale::new(
            (self.range.start, self.range.end),
            (layout.left_margin as f64, layout.right_margin as f64),
        );
        let y = LinearScale::new(
            (MIN_PAY_GAP, self.max_pay_gap),
            (layout.bottom_margin as f64, layout.top_margin as f64),
        );

        self.draw_title(surface, &layout);
        draw_y_axis_tick_labels(surface, MIN_PAY_GAP, self.max_pay_gap, &layout, |v| y.px(v), 1);
        draw_axis(surface, &layout);
        draw_axis_labels(surface, "year", "%", &layout);
        draw_reference_line(
            surface,
            &layout,
            y.px(0.0),
            "Pay Equality",
            Stroke::new(1.0, EQUALITY_GREEN),
            true,
        );

        let step = tick_step(self.range.span(), layout.num_x_tick_labels, 1) as i64;
        for row in filter_range(&self.data, &self.range) {
            if ((row.year - self.range.start) as i64) % step == 0 {
                draw_x_axis_tick_label(surface, row.year, &layout, |v| x.px(v));
            }
        }

        let style = SeriesStyle {
            line: Stroke::new(2.0, CRIMSON),
            marker_fill: CRIMSON,
            marker_stroke: Stroke::new(1.0, Color32::WHITE),
            marker_diameter: 6.0,
        };
        let visible = draw_range_series(
            surface,
            &self.data,
            &self.range,
            &layout,
            &x,
            &y,
            |d| d.pay_gap,
            &style,
            None,
        );

        self.draw_annotations(surface, &visible, &x, &y);
        self.draw_trend_summary(surface, &layout, &visible);
    }

    fn teardown(&mut self) {
        self.reset_range();
    }
}
