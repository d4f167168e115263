// User interface components
pub mod app;
pub mod app_async;
pub mod config;
pub mod ui_plot_view;
pub mod ui_render;
pub mod utils;

// Re-export main app
pub use app::ConfluenceApp;
pub use config::{UI_CONFIG, UI_TEXT};
