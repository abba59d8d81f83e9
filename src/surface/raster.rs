use ab_glyph::{Font, FontArc, PxScale, ScaleFont};
use egui::Pos2;
use image::{Rgba, RgbaImage};

use super::{PathBuilder, SubPath, Surface, SurfaceTransform, distance_to_segment};
use crate::error::{SketchpadError, SketchpadResult};

/// Software surface backed by an RGBA pixel buffer.
///
/// Starts fully transparent, draws black anti-aliased ink. Text uses the fonts
/// bundled with egui so exported stickers match what is shown on screen.
pub struct RasterSurface {
    image: RgbaImage,
    transform: SurfaceTransform,
    line_width: f32,
    path: PathBuilder,
    ink: Rgba<u8>,
    fonts: Vec<FontArc>,
}

impl RasterSurface {
    pub fn new(width: u32, height: u32, scale: f32) -> SketchpadResult<Self> {
        if width == 0 || height == 0 {
            return Err(SketchpadError::SurfaceUnavailable(format!(
                "{width}x{height} pixel surface"
            )));
        }
        if !(scale > 0.0) || !scale.is_finite() {
            return Err(SketchpadError::SurfaceUnavailable(format!("scale factor {scale}")));
        }

        let fonts = bundled_fonts();
        if fonts.is_empty() {
            log::warn!("No fonts available, stickers will be missing from the export");
        }

        Ok(Self {
            image: RgbaImage::new(width, height),
            transform: SurfaceTransform::scaled(scale),
            line_width: 1.0,
            path: PathBuilder::default(),
            ink: Rgba([0, 0, 0, 255]),
            fonts,
        })
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    fn stroke_polyline(&mut self, points: &[Pos2], width: f32) {
        if points.len() < 2 {
            return;
        }
        let half_width = width / 2.0;
        let (min, max) = points.iter().fold(
            (Pos2::new(f32::MAX, f32::MAX), Pos2::new(f32::MIN, f32::MIN)),
            |(min, max), p| (min.min(*p), max.max(*p)),
        );
        let margin = half_width + 1.0;
        self.cover(min.x - margin, min.y - margin, max.x + margin, max.y + margin, |p| {
            let distance = points
                .windows(2)
                .map(|segment| distance_to_segment(p, segment[0], segment[1]))
                .fold(f32::MAX, f32::min);
            coverage(distance, half_width)
        });
    }

    fn stroke_circle(&mut self, center: Pos2, radius: f32, width: f32) {
        let half_width = width / 2.0;
        let reach = radius + half_width + 1.0;
        self.cover(
            center.x - reach,
            center.y - reach,
            center.x + reach,
            center.y + reach,
            |p| coverage((p.distance(center) - radius).abs(), half_width),
        );
    }

    /// Blend ink into every pixel of the box, weighted by `coverage_at` the pixel centre
    fn cover(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, coverage_at: impl Fn(Pos2) -> f32) {
        let (width, height) = self.image.dimensions();
        let x_start = x0.floor().max(0.0) as u32;
        let y_start = y0.floor().max(0.0) as u32;
        let x_end = (x1.ceil().max(0.0) as u32).min(width);
        let y_end = (y1.ceil().max(0.0) as u32).min(height);

        for y in y_start..y_end {
            for x in x_start..x_end {
                let alpha = coverage_at(Pos2::new(x as f32 + 0.5, y as f32 + 0.5));
                if alpha > 0.0 {
                    blend(&mut self.image, self.ink, x as i64, y as i64, alpha);
                }
            }
        }
    }
}

impl Surface for RasterSurface {
    fn clear(&mut self) {
        for pixel in self.image.pixels_mut() {
            *pixel = Rgba([0, 0, 0, 0]);
        }
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
        let subpaths = std::mem::take(&mut self.path);
        for subpath in subpaths.subpaths() {
            match subpath {
                SubPath::Polyline(points) => self.stroke_polyline(points, width),
                SubPath::Circle { center, radius } => self.stroke_circle(*center, *radius, width),
            }
        }
        // canvas semantics: the path stays current after stroking
        self.path = subpaths;
    }

    fn fill_text(&mut self, text: &str, anchor: Pos2, font_size: f32) {
        let scale = PxScale::from(self.transform.apply_length(font_size));
        let mut caret = self.transform.apply(anchor);
        let Self {
            image, ink, fonts, ..
        } = self;

        for ch in text.chars() {
            // First bundled font that has the glyph, like egui's fallback chain
            let Some(font) = fonts.iter().find(|font| font.glyph_id(ch).0 != 0) else {
                log::debug!("No glyph for {ch:?}");
                continue;
            };
            let scaled = font.as_scaled(scale);
            let mut glyph = scaled.scaled_glyph(ch);
            glyph.position = ab_glyph::point(caret.x, caret.y);
            caret.x += scaled.h_advance(glyph.id);

            if let Some(outlined) = font.outline_glyph(glyph) {
                let bounds = outlined.px_bounds();
                outlined.draw(|gx, gy, alpha| {
                    let x = bounds.min.x as i64 + gx as i64;
                    let y = bounds.min.y as i64 + gy as i64;
                    blend(image, *ink, x, y, alpha);
                });
            }
        }
    }
}

/// Fonts egui ships with, in its proportional fallback order
fn bundled_fonts() -> Vec<FontArc> {
    let definitions = egui::FontDefinitions::default();
    let Some(order) = definitions.families.get(&egui::FontFamily::Proportional) else {
        return Vec::new();
    };
    order
        .iter()
        .filter_map(|name| definitions.font_data.get(name).map(|data| (name, data)))
        .filter_map(|(name, data)| match FontArc::try_from_vec(data.font.to_vec()) {
            Ok(font) => Some(font),
            Err(err) => {
                log::warn!("Skipping font {name}: {err}");
                None
            }
        })
        .collect()
}

/// Anti-aliased coverage of a pixel whose centre is `distance` from the centre line
fn coverage(distance: f32, half_width: f32) -> f32 {
    (half_width + 0.5 - distance).clamp(0.0, 1.0)
}

/// Source-over blend of `ink` at `alpha` into one pixel; out of bounds pixels are ignored
fn blend(image: &mut RgbaImage, ink: Rgba<u8>, x: i64, y: i64, alpha: f32) {
    if x < 0 || y < 0 || x >= image.width() as i64 || y >= image.height() as i64 {
        return;
    }
    let pixel = image.get_pixel_mut(x as u32, y as u32);
    let src_a = alpha.clamp(0.0, 1.0) * (ink[3] as f32 / 255.0);
    let dst_a = pixel[3] as f32 / 255.0;
    let out_a = src_a + dst_a * (1.0 - src_a);
    if out_a <= 0.0 {
        return;
    }
    for channel in 0..3 {
        let src = ink[channel] as f32;
        let dst = pixel[channel] as f32;
        let out = (src * src_a + dst * dst_a * (1.0 - src_a)) / out_a;
        pixel[channel] = out.round().clamp(0.0, 255.0) as u8;
    }
    pixel[3] = (out_a * 255.0).round().clamp(0.0, 255.0) as u8;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alpha_at(surface: &RasterSurface, x: u32, y: u32) -> u8 {
        surface.image().get_pixel(x, y)[3]
    }

    #[test]
    fn test_zero_sized_surface_is_unavailable() {
        assert!(matches!(
            RasterSurface::new(0, 10, 1.0),
            Err(SketchpadError::SurfaceUnavailable(_))
        ));
        assert!(matches!(
            RasterSurface::new(10, 10, 0.0),
            Err(SketchpadError::SurfaceUnavailable(_))
        ));
    }

    #[test]
    fn test_stroke_covers_line() {
        let mut surface = RasterSurface::new(64, 64, 1.0).unwrap();
        surface.set_line_width(4.0);
        surface.begin_path();
        surface.move_to(Pos2::new(10.0, 20.0));
        surface.line_to(Pos2::new(50.0, 20.0));
        surface.stroke_path();

        assert_eq!(alpha_at(&surface, 30, 20), 255);
        assert_eq!(alpha_at(&surface, 30, 19), 255);
        assert_eq!(alpha_at(&surface, 30, 40), 0);
        assert_eq!(alpha_at(&surface, 60, 20), 0);
    }

    #[test]
    fn test_circle_is_a_ring() {
        let mut surface = RasterSurface::new(64, 64, 1.0).unwrap();
        surface.set_line_width(2.0);
        surface.begin_path();
        surface.circle(Pos2::new(32.0, 32.0), 10.0);
        surface.stroke_path();

        // centre stays empty, the rim is inked
        assert_eq!(alpha_at(&surface, 32, 32), 0);
        assert_eq!(alpha_at(&surface, 41, 31), 255);
    }

    #[test]
    fn test_clear_makes_transparent() {
        let mut surface = RasterSurface::new(16, 16, 1.0).unwrap();
        surface.set_line_width(4.0);
        surface.begin_path();
        surface.move_to(Pos2::new(0.0, 8.0));
        surface.line_to(Pos2::new(16.0, 8.0));
        surface.stroke_path();
        surface.clear();

        assert!(surface.image().pixels().all(|p| p[3] == 0));
    }

    #[test]
    fn test_text_leaves_ink() {
        let mut surface = RasterSurface::new(128, 128, 1.0).unwrap();
        surface.fill_text("A", Pos2::new(40.0, 100.0), 32.0);

        let inked = surface
            .image()
            .enumerate_pixels()
            .filter(|(x, y, p)| p[3] > 0 && (40..90).contains(x) && (60..=101).contains(y))
            .count();
        assert!(inked > 0);
    }

    #[test]
    fn test_blend_accumulates_alpha() {
        let mut image = RgbaImage::new(1, 1);
        let ink = Rgba([0, 0, 0, 255]);
        blend(&mut image, ink, 0, 0, 0.5);
        let first = image.get_pixel(0, 0)[3];
        blend(&mut image, ink, 0, 0, 0.5);
        assert!(image.get_pixel(0, 0)[3] > first);
        // out of bounds writes are ignored
        blend(&mut image, ink, -1, 3, 1.0);
    }
}
