use eframe::egui::Color32;
use palette::{Mix, Srgb};

use crate::plot::mapper::map_value;

// ---------------------------------------------------------------------------
// Value → colour gradient
// ---------------------------------------------------------------------------

/// Linear two-stop gradient over a numeric domain, e.g. cold blue → warm red
/// across the temperature range.
#[derive(Debug, Clone, Copy)]
pub struct Gradient {
    min: f64,
    max: f64,
    low: Srgb<f32>,
    high: Srgb<f32>,
    alpha: u8,
}

impl Gradient {
    pub fn new(min: f64, max: f64, low: Srgb<u8>, high: Srgb<u8>, alpha: u8) -> Self {
        Self {
            min,
            max,
            low: low.into_format(),
            high: high.into_format(),
            alpha,
        }
    }

    /// Blue (80, 0, 255) at `min` to red (255, 0, 80) at `max`, translucent.
    pub fn temperature(min: f64, max: f64) -> Self {
        Self::new(
            min,
            max,
            Srgb::new(80, 0, 255),
            Srgb::new(255, 0, 80),
            120,
        )
    }

    /// Colour for `value`. Positions outside the domain saturate at the
    /// nearest endpoint; an undefined position (NaN) yields the cold endpoint.
    pub fn color_for(&self, value: f64) -> Color32 {
        let t = map_value(value, self.min, self.max, 0.0, 1.0);
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let rgb: Srgb<u8> = self.low.mix(self.high, t as f32).into_format();
        Color32::from_rgba_unmultiplied(rgb.red, rgb.green, rgb.blue, self.alpha)
    }
}

// ---------------------------------------------------------------------------
// Categorical palette
// ---------------------------------------------------------------------------

/// Fill colours for job categories, indexed by job type code.
pub const JOB_PALETTE: [Color32; 12] = [
    Color32::from_rgb(255, 100, 100), // tech
    Color32::from_rgb(100, 255, 100), // creative
    Color32::from_rgb(100, 100, 255), // business
    Color32::from_rgb(255, 255, 100), // finance
    Color32::from_rgb(255, 100, 255), // operations
    Color32::from_rgb(100, 255, 255), // legal
    Color32::from_rgb(255, 150, 100), // healthcare
    Color32::from_rgb(150, 255, 100), // education
    Color32::from_rgb(200, 100, 255), // retail
    Color32::from_rgb(255, 200, 100), // service
    Color32::from_rgb(100, 200, 255), // manual
    Color32::from_rgb(200, 200, 100), // transport
];

/// Palette entry for a category code, wrapping modulo the palette length.
/// Codes that are not finite numbers fall back to grey.
pub fn category_color(code: f64) -> Color32 {
    if !code.is_finite() {
        return Color32::GRAY;
    }
    let idx = (code as i64).rem_euclid(JOB_PALETTE.len() as i64) as usize;
    JOB_PALETTE[idx]
}
