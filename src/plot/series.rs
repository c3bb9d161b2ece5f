use eframe::egui::{pos2, vec2, Color32, Pos2, Stroke};

use super::layout::LayoutConfig;
use super::mapper::LinearScale;
use crate::canvas::Surface;
use crate::data::filter::{filter_range, ViewRange};
use crate::data::model::Yearly;

// ---------------------------------------------------------------------------
// Range-filtered line series
// ---------------------------------------------------------------------------

/// Line and marker styling for one series.
#[derive(Debug, Clone, Copy)]
pub struct SeriesStyle {
    pub line: Stroke,
    pub marker_fill: Color32,
    pub marker_stroke: Stroke,
    pub marker_diameter: f32,
}

/// Optional per-point background band spanning the full plot height.
pub struct Bands<'a, T> {
    pub width: f32,
    pub color: &'a dyn Fn(&T) -> Color32,
}

/// Draws the rows of `rows` inside `range`: background bands first, then the
/// connecting line, then markers on top.
///
/// `x` maps years to pixels, `y` maps `value(row)` to pixels. Returns the
/// rows that were drawn; nothing is painted when that set is empty.
#[allow(clippy::too_many_arguments)]
pub fn draw_range_series<'a, T: Yearly>(
    surface: &mut dyn Surface,
    rows: &'a [T],
    range: &ViewRange,
    layout: &LayoutConfig,
    x: &LinearScale,
    y: &LinearScale,
    value: impl Fn(&T) -> f64,
    style: &SeriesStyle,
    bands: Option<Bands<'_, T>>,
) -> Vec<&'a T> {
    let visible = filter_range(rows, range);
    if visible.is_empty() {
        return visible;
    }

    if let Some(bands) = bands {
        for row in &visible {
            let cx = x.px(row.year());
            surface.rect(
                pos2(cx - bands.width / 2.0, layout.top_margin),
                vec2(bands.width, layout.plot_height()),
                (bands.color)(*row),
                Stroke::NONE,
            );
        }
    }

    let points: Vec<Pos2> = visible
        .iter()
        .map(|row| pos2(x.px(row.year()), y.px(value(*row))))
        .collect();

    for pair in points.windows(2) {
        surface.line(pair[0], pair[1], style.line);
    }
    for p in &points {
        surface.circle(*p, style.marker_diameter, style.marker_fill, style.marker_stroke);
    }

    visible
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::recording::RecordingSurface;
    use crate::data::model::TemperatureRecord;

    const NAVY: Color32 = Color32::from_rgb(0, 0, 150);

    fn style() -> SeriesStyle {
        SeriesStyle {
            line: Stroke::new(2.0, NAVY),
            marker_fill: NAVY,
            marker_stroke: Stroke::NONE,
            marker_diameter: 6.0,
        }
    }

    fn rows() -> Vec<TemperatureRecord> {
        (0..10)
            .map(|i| TemperatureRecord {
                year: 1900.0 + 10.0 * i as f64,
                temperature: i as f64 * 0.1,
            })
            .collect()
    }

    #[test]
    fn draws_segments_between_visible_points() {
        let layout = LayoutConfig::new(1000.0, 600.0, 35.0, 50.0);
        let range = ViewRange::new(1920.0, 1950.0);
        let x = LinearScale::new((1920.0, 1950.0), (70.0, 965.0));
        let y = LinearScale::new((0.0, 0.9), (530.0, 85.0));
        let data = rows();
        let mut surface = RecordingSurface::default();

        let drawn = draw_range_series(
            &mut surface, &data, &range, &layout, &x, &y, |r| r.temperature, &style(), None,
        );

        assert_eq!(drawn.len(), 4);
        let segments = surface.lines_with(NAVY);
        assert_eq!(segments.len(), 3);
        assert_eq!(segments[0].0.x, 70.0);
        assert_eq!(segments[2].1.x, 965.0);
        let markers = surface.circles();
        assert_eq!(markers.len(), 4);
        assert!(markers.iter().all(|(_, d, _)| *d == 6.0));
    }

    #[test]
    fn bands_painted_behind_each_point() {
        let layout = LayoutConfig::new(1000.0, 600.0, 35.0, 50.0);
        let range = ViewRange::new(1900.0, 1990.0);
        let x = LinearScale::new((1900.0, 1990.0), (70.0, 965.0));
        let y = LinearScale::new((0.0, 0.9), (530.0, 85.0));
        let data = rows();
        let band_color = |_: &TemperatureRecord| Color32::RED;
        let mut surface = RecordingSurface::default();

        draw_range_series(
            &mut surface,
            &data,
            &range,
            &layout,
            &x,
            &y,
            |r| r.temperature,
            &style(),
            Some(Bands { width: 10.0, color: &band_color }),
        );

        let rects = surface.rects();
        assert_eq!(rects.len(), 10);
        assert_eq!(rects[0].0, pos2(65.0, layout.top_margin));
        assert_eq!(rects[0].1, vec2(10.0, layout.plot_height()));
        // Bands come before any line or marker.
        assert!(matches!(
            surface.ops[0],
            crate::canvas::recording::DrawOp::Rect { .. }
        ));
    }

    #[test]
    fn empty_range_draws_nothing() {
        let layout = LayoutConfig::new(1000.0, 600.0, 35.0, 50.0);
        let range = ViewRange::new(2050.0, 2060.0);
        let x = LinearScale::new((2050.0, 2060.0), (70.0, 965.0));
        let y = LinearScale::new((0.0, 1.0), (530.0, 85.0));
        let data = rows();
        let mut surface = RecordingSurface::default();

        let drawn = draw_range_series(
            &mut surface, &data, &range, &layout, &x, &y, |r| r.temperature, &style(), None,
        );
        assert!(drawn.is_empty());
        assert!(surface.ops.is_empty());
    }
}
