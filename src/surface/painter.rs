use egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Shape};

use super::{PathBuilder, SubPath, Surface, SurfaceTransform};

/// Interactive canvas: draws into an egui painter clipped to the canvas rect
pub struct PainterSurface {
    painter: Painter,
    rect: Rect,
    transform: SurfaceTransform,
    line_width: f32,
    path: PathBuilder,
    ink: Color32,
    background: Color32,
}

impl PainterSurface {
    /// `rect` is where the canvas sits on screen; logical (0, 0) maps to its top-left corner
    pub fn new(painter: &Painter, rect: Rect, scale: f32) -> Self {
        Self {
            painter: painter.with_clip_rect(rect),
            rect,
            transform: SurfaceTransform::scaled(scale).with_origin(rect.min),
            line_width: 1.0,
            path: PathBuilder::default(),
            ink: Color32::BLACK,
            background: Color32::WHITE,
        }
    }

    fn stroke(&self) -> egui::Stroke {
        egui::Stroke::new(self.transform.apply_length(self.line_width), self.ink)
    }
}

impl Surface for PainterSurface {
    fn clear(&mut self) {
        self.painter.rect_filled(self.rect, 0.0, self.background);
    }

    fn set_line_width(&mut self, width: f32) {
        self.line_width = width;
    }

    fn begin_path(&mut self) {
        self.path.clear();
    }

    fn move_to(&mut self, point: Pos2) {
        self.path.move_to(self.transform.apply(point));
    }

    fn line_to(&mut self, point: Pos2) {
        self.path.line_to(self.transform.apply(point));
    }

    fn circle(&mut self, center: Pos2, radius: f32) {
        self.path
            .circle(self.transform.apply(center), self.transform.apply_length(radius));
    }

    fn stroke_path(&mut self) {
        let stroke = self.stroke();
        for subpath in self.path.subpaths() {
            match subpath {
                SubPath::Polyline(points) if points.len() >= 2 => {
                    self.painter.add(Shape::line(points.clone(), stroke));
                }
                SubPath::Polyline(_) => {}
                SubPath::Circle { center, radius } => {
                    self.painter.circle_stroke(*center, *radius, stroke);
                }
            }
        }
    }

    fn fill_text(&mut self, text: &str, anchor: Pos2, font_size: f32) {
        // egui has no baseline alignment; the bottom of the row is close enough at this size
        self.painter.text(
            self.transform.apply(anchor),
            Align2::LEFT_BOTTOM,
            text,
            FontId::proportional(self.transform.apply_length(font_size)),
            self.ink,
        );
    }
}
