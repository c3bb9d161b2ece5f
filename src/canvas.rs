use std::f32::consts::FRAC_PI_2;

use eframe::egui::{self, epaint::TextShape, Align2, Color32, FontId, Pos2, Rect, Stroke, Vec2};

// ---------------------------------------------------------------------------
// Drawing surface
// ---------------------------------------------------------------------------

/// Everything a visualisation needs to paint a frame.
///
/// Coordinates are canvas pixels with the origin at the canvas' top-left
/// corner; the implementation is responsible for placing them on screen.
pub trait Surface {
    fn line(&mut self, from: Pos2, to: Pos2, stroke: Stroke);

    fn dashed_line(&mut self, from: Pos2, to: Pos2, stroke: Stroke, dash: f32, gap: f32);

    /// Circle given by its diameter, like an ellipse with equal axes.
    fn circle(&mut self, center: Pos2, diameter: f32, fill: Color32, stroke: Stroke);

    fn rect(&mut self, min: Pos2, size: Vec2, fill: Color32, stroke: Stroke);

    fn text(&mut self, pos: Pos2, align: Align2, text: &str, size: f32, color: Color32);

    /// Text rotated a quarter turn anticlockwise, centred on `center`.
    fn vertical_text(&mut self, center: Pos2, text: &str, size: f32, color: Color32);
}

// ---------------------------------------------------------------------------
// egui backend
// ---------------------------------------------------------------------------

/// [`Surface`] over an [`egui::Painter`], offsetting by the canvas origin.
pub struct PainterSurface<'a> {
    painter: &'a egui::Painter,
    origin: Pos2,
}

impl<'a> PainterSurface<'a> {
    pub fn new(painter: &'a egui::Painter, canvas: Rect) -> Self {
        Self {
            painter,
            origin: canvas.min,
        }
    }

    fn at(&self, p: Pos2) -> Pos2 {
        self.origin + p.to_vec2()
    }
}

impl Surface for PainterSurface<'_> {
    fn line(&mut self, from: Pos2, to: Pos2, stroke: Stroke) {
        self.painter.line_segment([self.at(from), self.at(to)], stroke);
    }

    fn dashed_line(&mut self, from: Pos2, to: Pos2, stroke: Stroke, dash: f32, gap: f32) {
        let points = [self.at(from), self.at(to)];
        self.painter
            .extend(egui::Shape::dashed_line(&points, stroke, dash, gap));
    }

    fn circle(&mut self, center: Pos2, diameter: f32, fill: Color32, stroke: Stroke) {
        self.painter
            .circle(self.at(center), diameter / 2.0, fill, stroke);
    }

    fn rect(&mut self, min: Pos2, size: Vec2, fill: Color32, stroke: Stroke) {
        let rect = Rect::from_min_size(self.at(min), size);
        self.painter.rect_filled(rect, 0.0, fill);
        if stroke.width > 0.0 {
            self.painter
                .rect_stroke(rect, 0.0, stroke, egui::StrokeKind::Inside);
        }
    }

    fn text(&mut self, pos: Pos2, align: Align2, text: &str, size: f32, color: Color32) {
        self.painter
            .text(self.at(pos), align, text, FontId::proportional(size), color);
    }

    fn vertical_text(&mut self, center: Pos2, text: &str, size: f32, color: Color32) {
        let galley = self
            .painter
            .layout_no_wrap(text.to_string(), FontId::proportional(size), color);
        let extent = galley.size();
        // Rotating by -90° about the galley's top-left corner makes the text
        // run upwards from that corner.
        let anchor = self.at(center) + egui::vec2(-extent.y / 2.0, extent.x / 2.0);
        self.painter
            .add(TextShape::new(anchor, galley, color).with_angle(-FRAC_PI_2));
    }
}

// ---------------------------------------------------------------------------
// Recording backend for tests
// ---------------------------------------------------------------------------

#[cfg(test)]
pub mod recording {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    pub enum DrawOp {
        Line { from: Pos2, to: Pos2, stroke: Stroke },
        DashedLine { from: Pos2, to: Pos2 },
        Circle { center: Pos2, diameter: f32, fill: Color32 },
        Rect { min: Pos2, size: Vec2, fill: Color32 },
        Text { pos: Pos2, text: String },
    }

    #[derive(Debug, Default)]
    pub struct RecordingSurface {
        pub ops: Vec<DrawOp>,
    }

    impl RecordingSurface {
        pub fn texts(&self) -> Vec<&str> {
            self.ops
                .iter()
                .filter_map(|op| match op {
                    DrawOp::Text { text, .. } => Some(text.as_str()),
                    _ => None,
                })
                .collect()
        }

        pub fn circles(&self) -> Vec<(Pos2, f32, Color32)> {
            self.ops
                .iter()
                .filter_map(|op| match op {
                    DrawOp::Circle { center, diameter, fill } => Some((*center, *diameter, *fill)),
                    _ => None,
                })
                .collect()
        }

        pub fn lines_with(&self, color: Color32) -> Vec<(Pos2, Pos2)> {
            self.ops
                .iter()
                .filter_map(|op| match op {
                    DrawOp::Line { from, to, stroke } if stroke.color == color => Some((*from, *to)),
                    _ => None,
                })
                .collect()
        }

        pub fn rects(&self) -> Vec<(Pos2, Vec2, Color32)> {
            self.ops
                .iter()
                .filter_map(|op| match op {
                    DrawOp::Rect { min, size, fill } => Some((*min, *size, *fill)),
                    _ => None,
                })
                .collect()
        }
    }

    impl Surface for RecordingSurface {
        fn line(&mut self, from: Pos2, to: Pos2, stroke: Stroke) {
            self.ops.push(DrawOp::Line { from, to, stroke });
        }

        fn dashed_line(&mut self, from: Pos2, to: Pos2, _stroke: Stroke, _dash: f32, _gap: f32) {
            self.ops.push(DrawOp::DashedLine { from, to });
        }

        fn circle(&mut self, center: Pos2, diameter: f32, fill: Color32, _stroke: Stroke) {
            self.ops.push(DrawOp::Circle { center, diameter, fill });
        }

        fn rect(&mut self, min: Pos2, size: Vec2, fill: Color32, _stroke: Stroke) {
            self.ops.push(DrawOp::Rect { min, size, fill });
        }

        fn text(&mut self, pos: Pos2, _align: Align2, text: &str, _size: f32, _color: Color32) {
            self.ops.push(DrawOp::Text {
                pos,
                text: text.to_string(),
            });
        }

        fn vertical_text(&mut self, center: Pos2, text: &str, _size: f32, _color: Color32) {
            self.ops.push(DrawOp::Text {
                pos: center,
                text: text.to_string(),
            });
        }
    }
}
