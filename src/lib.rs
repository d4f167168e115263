// Core modules
pub mod analysis;
pub mod config;
pub mod data;
pub mod domain;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use analysis::{Condition, Confluence, ScoreError, score_series};
pub use data::{BinanceHistory, PriceHistoryProvider, fetch_price_history};
pub use domain::{Interval, Period, PricePoint, PriceSeries, Query};
pub use ui::ConfluenceApp;

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Symbol to load on startup (overrides the persisted selection)
    #[arg(long)]
    pub symbol: Option<String>,
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(
    cc: &eframe::CreationContext<'_>,
    args: Cli,
    runtime: tokio::runtime::Runtime,
) -> ConfluenceApp {
    ConfluenceApp::new(cc, args.symbol, runtime)
}
