// ---------------------------------------------------------------------------
// Plot geometry derived from the canvas size
// ---------------------------------------------------------------------------

/// Margins and tick settings shared by the axis and series renderers.
///
/// Left and bottom margins are twice `margin_size` to leave room for tick
/// labels and axis titles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    pub margin_size: f32,
    pub left_margin: f32,
    pub right_margin: f32,
    pub top_margin: f32,
    pub bottom_margin: f32,
    pub pad: f32,
    /// Draw grid lines behind tick labels.
    pub grid: bool,
    pub num_x_tick_labels: u32,
    pub num_y_tick_labels: u32,
}

impl LayoutConfig {
    /// Build a layout for a `width × height` canvas. `title_space` is extra
    /// room added above the plot for titles.
    pub fn new(width: f32, height: f32, margin_size: f32, title_space: f32) -> Self {
        Self {
            margin_size,
            left_margin: margin_size * 2.0,
            right_margin: width - margin_size,
            top_margin: margin_size + title_space,
            bottom_margin: height - margin_size * 2.0,
            pad: 5.0,
            grid: true,
            num_x_tick_labels: 8,
            num_y_tick_labels: 8,
        }
    }

    pub fn with_tick_labels(mut self, x: u32, y: u32) -> Self {
        self.num_x_tick_labels = x;
        self.num_y_tick_labels = y;
        self
    }

    pub fn plot_width(&self) -> f32 {
        self.right_margin - self.left_margin
    }

    pub fn plot_height(&self) -> f32 {
        self.bottom_margin - self.top_margin
    }

    pub fn center_x(&self) -> f32 {
        self.left_margin + self.plot_width() / 2.0
    }
}
