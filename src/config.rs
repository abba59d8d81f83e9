use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{SketchpadError, SketchpadResult};

/// Environment variable naming an optional JSON configuration file
pub const CONFIG_ENV_VAR: &str = "SKETCHPAD_CONFIG";

/// Application settings. Missing fields fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SketchpadConfig {
    /// Side length of the square interactive canvas, in logical pixels
    pub canvas_size: f32,
    /// Side length of the square exported image, in pixels
    pub export_size: u32,
    /// Marker width of the "Thin" tool
    pub thin_width: f32,
    /// Marker width of the "Thick" tool
    pub thick_width: f32,
    /// Line width of the circular tool preview
    pub preview_line_width: f32,
    /// Font size stickers are drawn with
    pub sticker_font_size: f32,
    /// Offset from the cursor to the text anchor, so the glyph is centred on the cursor
    pub sticker_offset: [f32; 2],
    /// Stickers available at startup
    pub default_stickers: Vec<String>,
    /// Text prefilled in the "Add Sticker" dialog
    pub sticker_prompt_default: String,
    /// Where "Export" writes the PNG
    pub export_path: PathBuf,
}

impl Default for SketchpadConfig {
    fn default() -> Self {
        Self {
            canvas_size: 256.0,
            export_size: 1024,
            thin_width: 1.0,
            thick_width: 4.0,
            preview_line_width: 1.0,
            sticker_font_size: 32.0,
            sticker_offset: [-21.0, 12.0],
            default_stickers: vec!["😊".to_owned(), "💖".to_owned(), "⭐".to_owned()],
            sticker_prompt_default: "🧽".to_owned(),
            export_path: PathBuf::from("sketchpad.png"),
        }
    }
}

impl SketchpadConfig {
    /// Parse a configuration from JSON
    pub fn from_json(json: &str) -> SketchpadResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file
    pub fn load(path: &Path) -> SketchpadResult<Self> {
        let json = fs::read_to_string(path)?;
        log::info!("Loading configuration from {}", path.display());
        Self::from_json(&json)
    }

    /// Load the file named by `SKETCHPAD_CONFIG`, or the defaults when it is unset
    pub fn from_env() -> SketchpadResult<Self> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => Self::load(Path::new(&path)),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> SketchpadResult<()> {
        if !(self.canvas_size.is_finite() && self.canvas_size > 0.0) {
            return Err(SketchpadError::InvalidConfig(format!(
                "canvas_size must be finite and positive, got {}",
                self.canvas_size
            )));
        }
        if self.export_size == 0 {
            return Err(SketchpadError::InvalidConfig("export_size must be positive".to_owned()));
        }
        for (name, width) in [
            ("thin_width", self.thin_width),
            ("thick_width", self.thick_width),
            ("preview_line_width", self.preview_line_width),
            ("sticker_font_size", self.sticker_font_size),
        ] {
            if !(width.is_finite() && width > 0.0) {
                return Err(SketchpadError::InvalidConfig(format!(
                    "{name} must be finite and positive, got {width}"
                )));
            }
        }
        // The Thin and Thick buttons tell the marker widths apart
        if self.thin_width == self.thick_width {
            return Err(SketchpadError::InvalidConfig(format!(
                "thin_width and thick_width must differ, both are {}",
                self.thin_width
            )));
        }
        Ok(())
    }

    /// Scale factor between the export image and the interactive canvas
    pub fn export_scale(&self) -> f32 {
        self.export_size as f32 / self.canvas_size
    }
}
