use std::fmt;
use std::path::Path;

use anyhow::Result;
use eframe::egui::{self, pos2, Align2, Color32, Stroke, Vec2};

use super::{take_finished, LoadEvent, Notify, Visualisation};
use crate::canvas::Surface;
use crate::color::Gradient;
use crate::data::async_load::AsyncLoad;
use crate::data::filter::ViewRange;
use crate::data::model::{Summary, TemperatureRecord};
use crate::plot::axis::{
    draw_axis, draw_axis_labels, draw_reference_line, draw_x_axis_tick_label,
    draw_y_axis_tick_labels, tick_step,
};
use crate::plot::layout::LayoutConfig;
use crate::plot::mapper::LinearScale;
use crate::plot::series::{draw_range_series, Bands, SeriesStyle};

const DATA_FILE: &str = "surface-temperature/surface-temperature.csv";
const MARGIN: f32 = 35.0;
const TITLE_SPACE: f32 = 50.0;
/// Minimum number of years between the two sliders.
const MIN_SPAN: f64 = 5.0;
const LINE_COLOR: Color32 = Color32::from_rgb(0, 0, 150);

/// Anomalies used when the CSV cannot be read.
const FALLBACK: [(f64, f64); 29] = [
    (1880.0, -0.2),
    (1885.0, -0.25),
    (1890.0, -0.3),
    (1895.0, -0.22),
    (1900.0, -0.1),
    (1905.0, -0.28),
    (1910.0, -0.4),
    (1915.0, -0.15),
    (1920.0, -0.2),
    (1925.0, -0.18),
    (1930.0, -0.12),
    (1935.0, -0.15),
    (1940.0, 0.05),
    (1945.0, -0.02),
    (1950.0, -0.18),
    (1955.0, -0.15),
    (1960.0, -0.05),
    (1965.0, -0.12),
    (1970.0, 0.02),
    (1975.0, -0.05),
    (1980.0, 0.25),
    (1985.0, 0.1),
    (1990.0, 0.42),
    (1995.0, 0.43),
    (2000.0, 0.58),
    (2005.0, 0.65),
    (2010.0, 0.7),
    (2015.0, 0.85),
    (2020.0, 1.02),
];

fn fallback_data() -> Vec<TemperatureRecord> {
    FALLBACK
        .iter()
        .map(|&(year, temperature)| TemperatureRecord { year, temperature })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    Csv,
    Fallback,
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::Csv => write!(f, "CSV"),
            DataSource::Fallback => write!(f, "Fallback"),
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct ClimateStats {
    years: Summary,
    temperature: Summary,
}

// ---------------------------------------------------------------------------
// Climate change: temperature anomaly line over a warm/cold gradient
// ---------------------------------------------------------------------------

pub struct ClimateChange {
    pending: Option<AsyncLoad<TemperatureRecord>>,
    loaded: bool,
    data: Vec<TemperatureRecord>,
    source: DataSource,
    stats: Option<ClimateStats>,
    range: ViewRange,
}

impl Default for ClimateChange {
    fn default() -> Self {
        Self {
            pending: None,
            loaded: false,
            data: Vec::new(),
            source: DataSource::Csv,
            stats: None,
            range: ViewRange::new(0.0, MIN_SPAN),
        }
    }
}

impl ClimateChange {
    /// Accept the load result, substituting the fallback series when the CSV
    /// is missing, unreadable or empty.
    pub fn setup(&mut self, result: Result<Vec<TemperatureRecord>>) {
        let (data, source) = match result {
            Ok(rows) if !rows.is_empty() => {
                log::info!("Using CSV data with {} rows", rows.len());
                (rows, DataSource::Csv)
            }
            Ok(_) => {
                log::warn!("CSV has no rows, using fallback data");
                (fallback_data(), DataSource::Fallback)
            }
            Err(e) => {
                log::warn!("CSV loading failed, using fallback data: {e:#}");
                (fallback_data(), DataSource::Fallback)
            }
        };

        self.stats = Summary::of(data.iter().map(|d| d.year))
            .zip(Summary::of(data.iter().map(|d| d.temperature)))
            .map(|(years, temperature)| ClimateStats { years, temperature });

        if let Some(stats) = &self.stats {
            log::info!(
                "Climate data ({source}): years {} to {}, temperature {} to {}, {} points",
                stats.years.min,
                stats.years.max,
                stats.temperature.min,
                stats.temperature.max,
                data.len()
            );
        }

        self.data = data;
        self.source = source;
        self.loaded = true;
        self.reset_range();
    }

    fn reset_range(&mut self) {
        if let Some(stats) = &self.stats {
            self.range = ViewRange::new(stats.years.min, stats.years.max);
        }
    }

    fn draw_temperature_visualisation(
        &self,
        surface: &mut dyn Surface,
        layout: &LayoutConfig,
        stats: &ClimateStats,
        y: &LinearScale,
    ) {
        let x = LinearScale::new(
            (self.range.start, self.range.end),
            (layout.left_margin as f64, layout.right_margin as f64),
        );
        let gradient = Gradient::temperature(stats.temperature.min, stats.temperature.max);
        let band_color = |d: &TemperatureRecord| gradient.color_for(d.temperature);
        let style = SeriesStyle {
            line: Stroke::new(2.0, LINE_COLOR),
            marker_fill: LINE_COLOR,
            marker_stroke: Stroke::NONE,
            marker_diameter: 6.0,
        };

        let visible = draw_range_series(
            surface,
            &self.data,
            &self.range,
            layout,
            &x,
            y,
            |d| d.temperature,
            &style,
            Some(Bands {
                width: layout.plot_width() / self.range.span() as f32,
                color: &band_color,
            }),
        );
        if visible.is_empty() {
            return;
        }

        // Year labels only where a data point exists.
        let step = tick_step(self.range.span(), layout.num_x_tick_labels, 5) as f64;
        let mut year = self.range.start;
        while year <= self.range.end {
            if visible.iter().any(|d| d.year == year) {
                draw_x_axis_tick_label(surface, year, layout, |v| x.px(v));
            }
            year += step;
        }
    }
}

impl Visualisation for ClimateChange {
    fn id(&self) -> &'static str {
        "climate-change"
    }

    fn name(&self) -> &'static str {
        "Climate Change"
    }

    fn load(&mut self, data_dir: &Path, notify: Notify) {
        self.loaded = false;
        self.pending = Some(AsyncLoad::spawn(data_dir.join(DATA_FILE), notify));
    }

    fn poll_load(&mut self) -> Option<LoadEvent> {
        let result = take_finished(&mut self.pending)?;
        let event = match &result {
            Ok(rows) => LoadEvent::Loaded { rows: rows.len() },
            Err(e) => LoadEvent::Failed(format!("{}: {e:#} (showing fallback data)", self.name())),
        };
        self.setup(result);
        Some(event)
    }

    fn controls(&mut self, ui: &mut egui::Ui) {
        let Some(stats) = self.stats else {
            return;
        };
        let (min, max) = (stats.years.min, stats.years.max);

        ui.label("Start Year");
        ui.add(egui::Slider::new(&mut self.range.start, min..=max - MIN_SPAN).step_by(1.0));
        ui.label("End Year");
        ui.add(egui::Slider::new(&mut self.range.end, min + MIN_SPAN..=max).step_by(1.0));
    }

    fn draw(&mut self, surface: &mut dyn Surface, size: Vec2) {
        let Some(stats) = self.stats.filter(|_| self.loaded && !self.data.is_empty()) else {
            log::debug!("Climate data not ready for drawing");
            return;
        };

        self.range.clamp(MIN_SPAN);

        let layout = LayoutConfig::new(size.x, size.y, MARGIN, TITLE_SPACE);
        let y = LinearScale::new(
            (stats.temperature.min, stats.temperature.max),
            (layout.bottom_margin as f64, layout.top_margin as f64),
        );

        surface.text(
            pos2(size.x / 2.0, 50.0),
            Align2::CENTER_CENTER,
            "Global Surface Temperature Anomalies",
            18.0,
            Color32::BLACK,
        );
        surface.text(
            pos2(size.x / 2.0, 95.0),
            Align2::CENTER_CENTER,
            &format!(
                "Temperature variations from long-term average (°C) - {} Data",
                self.source
            ),
            12.0,
            Color32::from_gray(100),
        );

        draw_axis(surface, &layout);
        draw_axis_labels(surface, "year", "℃", &layout);
        draw_y_axis_tick_labels(
            surface,
            stats.temperature.min,
            stats.temperature.max,
            &layout,
            |v| y.px(v),
            1,
        );

        draw_reference_line(
            surface,
            &layout,
            y.px(stats.temperature.mean),
            &format!("Average ({:.2}°C)", stats.temperature.mean),
            Stroke::new(1.0, Color32::from_gray(150)),
            false,
        );

        self.draw_temperature_visualisation(surface, &layout, &stats, &y);

        surface.text(
            pos2(layout.left_margin, size.y - 5.0),
            Align2::LEFT_BOTTOM,
            &format!(
                "Showing: {} - {} | Data points: {} ({})",
                self.range.start,
                self.range.end,
                self.data.len(),
                self.source
            ),
            10.0,
            Color32::BLACK,
        );
    }

    fn teardown(&mut self) {
        self.reset_range();
    }
}
