#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use sticker_sketchpad::{APP_NAME, SketchpadApp, SketchpadConfig};

// When compiling natively:
#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    // A broken config file is fatal; a missing SKETCHPAD_CONFIG means defaults
    let config = SketchpadConfig::from_env()?;

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(APP_NAME)
            .with_inner_size([config.canvas_size + 320.0, config.canvas_size + 160.0])
            .with_min_inner_size([300.0, 220.0]),
        ..Default::default()
    };

    // Failing to get a window and drawing surface is not recoverable
    eframe::run_native(
        APP_NAME,
        native_options,
        Box::new(|cc| Ok(Box::new(SketchpadApp::new(cc, config)))),
    )?;
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {
    log::error!("{APP_NAME} has no web entry point; build for a native target");
}
