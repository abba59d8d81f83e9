use std::fs;
use std::io::Cursor;
use std::path::Path;

use image::{ImageFormat, RgbaImage};

use crate::command::CommandHistory;
use crate::config::SketchpadConfig;
use crate::error::SketchpadResult;
use crate::renderer::Renderer;
use crate::surface::{RasterSurface, Surface};

/// Size of the exported image relative to the interactive canvas
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExportSettings {
    /// Side length of the square output, in pixels
    pub size: u32,
    /// Side length of the interactive canvas, in logical pixels
    pub canvas_size: f32,
}

impl ExportSettings {
    pub fn scale(&self) -> f32 {
        self.size as f32 / self.canvas_size
    }
}

impl From<&SketchpadConfig> for ExportSettings {
    fn from(config: &SketchpadConfig) -> Self {
        Self {
            size: config.export_size,
            canvas_size: config.canvas_size,
        }
    }
}

/// Replays the displayed history onto a blank, scaled surface. Previews are not exported.
pub fn render_export(
    history: &CommandHistory,
    renderer: &Renderer,
    settings: ExportSettings,
) -> SketchpadResult<RgbaImage> {
    let mut surface = RasterSurface::new(settings.size, settings.size, settings.scale())?;
    surface.clear();
    renderer.replay(&mut surface, history.done());
    Ok(surface.into_image())
}

pub fn encode_png(image: &RgbaImage) -> SketchpadResult<Vec<u8>> {
    let mut bytes = Vec::new();
    image.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}

/// Render, encode and write the drawing to `path`
pub fn save_png(
    history: &CommandHistory,
    renderer: &Renderer,
    settings: ExportSettings,
    path: &Path,
) -> SketchpadResult<()> {
    let image = render_export(history, renderer, settings)?;
    let bytes = encode_png(&image)?;
    fs::write(path, &bytes)?;
    log::info!(
        "Exported {} operations to {} ({}x{}, {} bytes)",
        history.len(),
        path.display(),
        image.width(),
        image.height(),
        bytes.len()
    );
    Ok(())
}
