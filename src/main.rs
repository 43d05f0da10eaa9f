//! PLANK: a 2D level editor for platform games
//!
//! Place players, platforms, enemies, coins, spikes and goals on a grid,
//! tweak them in the inspector and save the level as JSON.

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod app;
mod config;
mod editor;
mod ui;
mod world;

use macroquad::prelude::*;
use app::App;
use config::EditorConfig;
use editor::SystemPicker;
use ui::{theme, Rect};

fn window_conf() -> Conf {
    Conf {
        window_title: format!("PLANK v{}", VERSION),
        window_width: 1280,
        window_height: 720,
        window_resizable: true,
        high_dpi: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    // Initialize crash logging FIRST (before any other code)
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    #[cfg(not(target_arch = "wasm32"))]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = EditorConfig::load_or_default();
    let mut app = App::new(config, Box::new(SystemPicker));

    // Closing the window goes through shutdown so settings get written
    prevent_quit();

    log::info!("=== PLANK v{} ===", VERSION);

    loop {
        clear_background(theme::BG_COLOR);

        let screen = Rect::screen(screen_width(), screen_height());
        app.frame(get_time(), screen);

        if is_quit_requested() {
            app.shutdown();
            break;
        }

        next_frame().await;
    }
}
