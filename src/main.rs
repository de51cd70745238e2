//! Skin Editor: paint a 64x64 character skin and see it on a 3D figure
//!
//! - Brush, eyedropper and bucket fill on a pixel canvas
//! - Live preview of the skin wrapped around a box humanoid
//! - PNG import and export (file dialogs on desktop, download/upload in the browser)

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod app;
mod canvas_view;
mod config;
mod editor;
mod logger;
mod model;
mod preview;
mod texture;
mod ui;
#[cfg(any(target_arch = "wasm32", test))]
mod web;

use macroquad::prelude::*;

use app::AppState;
use config::EditorConfig;

fn window_conf() -> Conf {
    Conf {
        window_title: format!("Skin Editor v{}", VERSION),
        window_width: 1280,
        window_height: 720,
        window_resizable: true,
        // Viewport math for the preview assumes 1:1 logical to physical pixels
        high_dpi: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    // Initialize crash logging FIRST (before any other code)
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    // Log at info until the config says otherwise, so config warnings show
    logger::init(log::LevelFilter::Info);
    let config = EditorConfig::load();
    log::set_max_level(logger::parse_level(&config.log_level));
    log::info!("Skin Editor v{}", VERSION);

    #[cfg(not(target_arch = "wasm32"))]
    {
        let path = EditorConfig::path();
        if !path.exists() {
            match config.save_to(&path) {
                Ok(()) => log::info!("wrote default settings to {}", path.display()),
                Err(e) => log::warn!("could not write {}: {}", path.display(), e),
            }
        }
    }

    let mut app = AppState::new(config);

    loop {
        app.frame();
        next_frame().await;
    }
}
