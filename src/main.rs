#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use sketchpad::config::{AppConfig, WINDOW_TITLE};
use sketchpad::PaintApp;

fn main() -> eframe::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::default();
    log::info!("Starting with a {} canvas", config.canvas_size);

    eframe::run_native(
        WINDOW_TITLE,
        config.native_options(),
        Box::new(move |cc| Ok(Box::new(PaintApp::new(cc, config)))),
    )
}
