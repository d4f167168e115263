#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // Windows release: hide console window

use clap::Parser;
use eframe::NativeOptions;
use std::{panic, path::PathBuf};
use tokio::runtime::Runtime;

use ma_confluence::config::PERSISTENCE;
use ma_confluence::ui::UI_TEXT;
use ma_confluence::{Cli, run_app};

fn main() -> eframe::Result {
    panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::force_capture();
        log::error!("CRITICAL PANIC:\n{}\nStack Trace:\n{}", info, backtrace);
    }));

    let (global_level, my_code_level) = if cfg!(debug_assertions) {
        (log::LevelFilter::Warn, log::LevelFilter::Info)
    } else {
        (log::LevelFilter::Error, log::LevelFilter::Error)
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, global_level)
        .filter(Some("ma_confluence"), my_code_level)
        .init();

    let args = Cli::parse();
    let runtime = Runtime::new().expect("Failed to create Tokio runtime");

    let options = NativeOptions {
        persistence_path: Some(PathBuf::from(PERSISTENCE.app.state_path)),
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_title(UI_TEXT.window_title),
        ..Default::default()
    };

    eframe::run_native(
        "MA Confluence",
        options,
        Box::new(move |cc| Ok(Box::new(run_app(cc, args, runtime)))),
    )
}
