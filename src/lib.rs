#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod command;
pub mod components;
pub mod config;
pub mod error;
pub mod event;
pub mod export;
pub mod input;
pub mod panels;
pub mod renderer;
pub mod session;
pub mod state;
pub mod sticker;
pub mod stroke;
pub mod surface;
pub mod tools;

pub const APP_NAME: &str = "Sticker Sketchpad";

pub use app::SketchpadApp;
pub use command::{Command, CommandHistory, Preview};
pub use config::SketchpadConfig;
pub use error::{SketchpadError, SketchpadResult};
pub use input::{InputEvent, InputLocation};
pub use renderer::Renderer;
pub use session::Session;
pub use state::EditorState;
pub use sticker::{StickerPlacement, StickerSet};
pub use stroke::Stroke;
pub use surface::Surface;
pub use tools::{Tool, ToolType};
