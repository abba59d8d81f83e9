//! Drawing surfaces the render operations are replayed against.
//!
//! A surface exposes a small canvas-like immediate mode API: a current line width,
//! a path built from `move_to`/`line_to`/`circle`, and text. Every surface owns a
//! [`SurfaceTransform`] that maps logical canvas coordinates to its own pixels, so the
//! same operations draw the interactive canvas and the enlarged export unmodified.

mod painter;
mod raster;

pub use painter::PainterSurface;
pub use raster::RasterSurface;

use egui::{Pos2, Vec2};

/// Drawing primitives consumed by the renderer
pub trait Surface {
    /// Erase everything drawn so far
    fn clear(&mut self);

    /// Line width, in logical units, for subsequent `stroke_path` calls
    fn set_line_width(&mut self, width: f32);

    /// Start a new, empty path
    fn begin_path(&mut self);

    /// Start a new sub-path at `point`
    fn move_to(&mut self, point: Pos2);

    /// Extend the current sub-path to `point`
    fn line_to(&mut self, point: Pos2);

    /// Add a full circle as its own sub-path
    fn circle(&mut self, center: Pos2, radius: f32);

    /// Outline the current path with the current line width
    fn stroke_path(&mut self);

    /// Fill `text` with its baseline starting at `anchor`
    fn fill_text(&mut self, text: &str, anchor: Pos2, font_size: f32);
}

/// Uniform scale followed by a translation, like a canvas `scale` + `translate`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceTransform {
    pub origin: Pos2,
    pub scale: f32,
}

impl Default for SurfaceTransform {
    fn default() -> Self {
        Self::identity()
    }
}

impl SurfaceTransform {
    pub fn identity() -> Self {
        Self {
            origin: Pos2::ZERO,
            scale: 1.0,
        }
    }

    pub fn scaled(scale: f32) -> Self {
        Self {
            origin: Pos2::ZERO,
            scale,
        }
    }

    pub fn with_origin(mut self, origin: Pos2) -> Self {
        self.origin = origin;
        self
    }

    pub fn apply(&self, point: Pos2) -> Pos2 {
        self.origin + point.to_vec2() * self.scale
    }

    pub fn apply_length(&self, length: f32) -> f32 {
        length * self.scale
    }

    /// Maps a surface position back to logical canvas coordinates
    pub fn invert(&self, point: Pos2) -> Pos2 {
        Pos2::ZERO + (point - self.origin) / self.scale
    }
}

/// One piece of a path, already in surface coordinates
#[derive(Debug, Clone, PartialEq)]
pub enum SubPath {
    Polyline(Vec<Pos2>),
    Circle { center: Pos2, radius: f32 },
}

/// Path under construction between `begin_path` and `stroke_path`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathBuilder {
    subpaths: Vec<SubPath>,
}

impl PathBuilder {
    pub fn clear(&mut self) {
        self.subpaths.clear();
    }

    pub fn move_to(&mut self, point: Pos2) {
        self.subpaths.push(SubPath::Polyline(vec![point]));
    }

    pub fn line_to(&mut self, point: Pos2) {
        match self.subpaths.last_mut() {
            Some(SubPath::Polyline(points)) => points.push(point),
            // Without a current point line_to behaves like move_to
            _ => self.move_to(point),
        }
    }

    pub fn circle(&mut self, center: Pos2, radius: f32) {
        self.subpaths.push(SubPath::Circle { center, radius });
    }

    pub fn subpaths(&self) -> &[SubPath] {
        &self.subpaths
    }
}

/// A primitive as seen by a [`RecordingSurface`], in surface coordinates
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Clear,
    Polyline {
        points: Vec<Pos2>,
        width: f32,
    },
    Circle {
        center: Pos2,
        radius: f32,
        width: f32,
    },
    Text {
        text: String,
        anchor: Pos2,
        font_size: f32,
    },
}

impl DrawCall {
    /// The same call drawn on a surface `factor` times larger
    pub fn scaled(&self, factor: f32) -> Self {
        let scale = |p: &Pos2| Pos2::ZERO + p.to_vec2() * factor;
        match self {
            DrawCall::Clear => DrawCall::Clear,
            DrawCall::Polyline { points, width } => DrawCall::Polyline {
                points: points.iter().map(scale).collect(),
                width: width * factor,
            },
            DrawCall::Circle {
                center,
                radius,
                width,
            } => DrawCall::Circle {
                center: scale(center),
                radius: radius * factor,
                width: width * factor,
            },
            DrawCall::Text {
                text,
                anchor,
                font_size,
            } => DrawCall::Text {
                text: text.clone(),
                anchor: scale(anchor),
                font_size: font_size * factor,
            },
        }
    }
}

/// Surface that remembers what was drawn instead of producing pixels.
///
/// A `clear` drops earlier calls, so `calls()` always describes what is visible.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    transform: SurfaceTransform,
    line_width: f32,
    path: PathBuilder,
    calls: Vec<DrawCall>,
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::with_transform(SurfaceTransform::identity())
    }

    pub fn with_transform(transform: SurfaceTransform) -> Self {
        Self {
            transform,
            line_width: 1.0,
            path: PathBuilder::default(),
            calls: Vec::new(),
        }
    }

    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self) {
        self.calls.clear();
        self.calls.push(DrawCall::Clear);
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
        let width = self.transform.apply_length(self.line_width);
        for subpath in self.path.subpaths() {
            let call = match subpath {
                SubPath::Polyline(points) => DrawCall::Polyline {
                    points: points.clone(),
                    width,
                },
                SubPath::Circle { center, radius } => DrawCall::Circle {
                    center: *center,
                    radius: *radius,
                    width,
                },
            };
            self.calls.push(call);
        }
    }

    fn fill_text(&mut self, text: &str, anchor: Pos2, font_size: f32) {
        self.calls.push(DrawCall::Text {
            text: text.to_owned(),
            anchor: self.transform.apply(anchor),
            font_size: self.transform.apply_length(font_size),
        });
    }
}

/// Shortest distance from `p` to the segment `a`-`b`
pub(crate) fn distance_to_segment(p: Pos2, a: Pos2, b: Pos2) -> f32 {
    let ab: Vec2 = b - a;
    let len_sq = ab.length_sq();
    if len_sq == 0.0 {
        return p.distance(a);
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    p.distance(a + ab * t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transform_round_trip() {
        let transform = SurfaceTransform::scaled(4.0).with_origin(Pos2::new(10.0, 20.0));
        let p = Pos2::new(3.0, 5.0);
        assert_eq!(transform.apply(p), Pos2::new(22.0, 40.0));
        assert_eq!(transform.invert(transform.apply(p)), p);
    }

    #[test]
    fn test_line_to_without_move_starts_subpath() {
        let mut path = PathBuilder::default();
        path.line_to(Pos2::new(1.0, 1.0));
        path.line_to(Pos2::new(2.0, 2.0));
        path.circle(Pos2::ZERO, 3.0);
        path.line_to(Pos2::new(4.0, 4.0));

        assert_eq!(path.subpaths().len(), 3);
        assert_eq!(
            path.subpaths()[0],
            SubPath::Polyline(vec![Pos2::new(1.0, 1.0), Pos2::new(2.0, 2.0)])
        );
    }

    #[test]
    fn test_recording_surface_clear_resets_calls() {
        let mut surface = RecordingSurface::new();
        surface.fill_text("⭐", Pos2::new(1.0, 2.0), 32.0);
        surface.clear();
        assert_eq!(surface.calls(), &[DrawCall::Clear]);
    }

    #[test]
    fn test_distance_to_segment() {
        let a = Pos2::new(0.0, 0.0);
        let b = Pos2::new(10.0, 0.0);
        assert_eq!(distance_to_segment(Pos2::new(5.0, 3.0), a, b), 3.0);
        assert_eq!(distance_to_segment(Pos2::new(-4.0, 3.0), a, b), 5.0);
        assert!((distance_to_segment(Pos2::new(2.0, 2.0), a, a) - 8.0_f32.sqrt()).abs() < 1e-5);
    }
}
