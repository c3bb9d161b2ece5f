use eframe::egui::{pos2, Align2, Color32, Pos2, Stroke};

use super::layout::LayoutConfig;
use crate::canvas::Surface;

// ---------------------------------------------------------------------------
// Tick spacing
// ---------------------------------------------------------------------------

/// Spacing between labelled ticks so that roughly `desired_ticks` labels fit
/// in `range_size` units, never closer than `min_step`.
///
/// Steps are whole units of the index (years), not "nice" numbers.
pub fn tick_step(range_size: f64, desired_ticks: u32, min_step: u32) -> u32 {
    if desired_ticks == 0 || !range_size.is_finite() || range_size <= 0.0 {
        return min_step.max(1);
    }
    let raw = (range_size / desired_ticks as f64).floor() as u32;
    raw.max(min_step).max(1)
}

/// Evenly spaced tick values from `min` to `max` inclusive (`count + 1` values).
pub fn tick_values(min: f64, max: f64, count: u32) -> Vec<f64> {
    if count == 0 {
        return vec![min];
    }
    let step = (max - min) / count as f64;
    (0..=count).map(|i| min + i as f64 * step).collect()
}

// ---------------------------------------------------------------------------
// Axis rendering
// ---------------------------------------------------------------------------

const AXIS_COLOR: Color32 = Color32::BLACK;
const Y_GRID_COLOR: Color32 = Color32::from_gray(200);
const X_GRID_COLOR: Color32 = Color32::from_gray(220);
const TICK_FONT: f32 = 12.0;
const LABEL_FONT: f32 = 14.0;

/// Draw the x axis along the bottom margin and the y axis along the left.
pub fn draw_axis(surface: &mut dyn Surface, layout: &LayoutConfig) {
    let stroke = Stroke::new(1.0, AXIS_COLOR);
    surface.line(
        pos2(layout.left_margin, layout.bottom_margin),
        pos2(layout.right_margin, layout.bottom_margin),
        stroke,
    );
    surface.line(
        pos2(layout.left_margin, layout.top_margin),
        pos2(layout.left_margin, layout.bottom_margin),
        stroke,
    );
}

/// Axis titles: x centred below the plot, y rotated left of the tick labels.
pub fn draw_axis_labels(
    surface: &mut dyn Surface,
    x_label: &str,
    y_label: &str,
    layout: &LayoutConfig,
) {
    surface.text(
        pos2(layout.center_x(), layout.bottom_margin + layout.margin_size * 1.5),
        Align2::CENTER_CENTER,
        x_label,
        LABEL_FONT,
        AXIS_COLOR,
    );
    surface.vertical_text(
        pos2(
            layout.margin_size / 2.0,
            layout.top_margin + layout.plot_height() / 2.0,
        ),
        y_label,
        LABEL_FONT,
        AXIS_COLOR,
    );
}

/// Labels `num_y_tick_labels + 1` evenly spaced values between `min` and
/// `max`, with horizontal grid lines when the layout asks for them.
pub fn draw_y_axis_tick_labels(
    surface: &mut dyn Surface,
    min: f64,
    max: f64,
    layout: &LayoutConfig,
    map: impl Fn(f64) -> f32,
    decimal_places: usize,
) {
    for value in tick_values(min, max, layout.num_y_tick_labels) {
        let y = map(value);
        surface.text(
            pos2(layout.left_margin - layout.pad, y),
            Align2::RIGHT_CENTER,
            &format!("{value:.decimal_places$}"),
            TICK_FONT,
            AXIS_COLOR,
        );
        if layout.grid {
            surface.line(
                pos2(layout.left_margin, y),
                pos2(layout.right_margin, y),
                Stroke::new(1.0, Y_GRID_COLOR),
            );
        }
    }
}

/// A single x tick label below the axis plus its vertical grid line.
pub fn draw_x_axis_tick_label(
    surface: &mut dyn Surface,
    value: f64,
    layout: &LayoutConfig,
    map: impl Fn(f64) -> f32,
) {
    let x = map(value);
    surface.text(
        pos2(x, layout.bottom_margin + layout.margin_size / 2.0),
        Align2::CENTER_CENTER,
        &format!("{value}"),
        TICK_FONT,
        AXIS_COLOR,
    );
    if layout.grid {
        surface.line(
            pos2(x, layout.top_margin),
            pos2(x, layout.bottom_margin),
            Stroke::new(1.0, X_GRID_COLOR),
        );
    }
}

/// Horizontal reference line across the plot with a label in the left margin.
pub fn draw_reference_line(
    surface: &mut dyn Surface,
    layout: &LayoutConfig,
    y: f32,
    label: &str,
    stroke: Stroke,
    dashed: bool,
) {
    let from = pos2(layout.left_margin, y);
    let to = pos2(layout.right_margin, y);
    if dashed {
        surface.dashed_line(from, to, stroke, 5.0, 5.0);
    } else {
        surface.line(from, to, stroke);
    }
    surface.text(
        Pos2::new(layout.left_margin - 10.0, y),
        Align2::RIGHT_CENTER,
        label,
        10.0,
        stroke.color,
    );
}
