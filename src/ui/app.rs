use eframe::{Frame, egui};
use poll_promise::Promise;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

use crate::analysis::Confluence;
use crate::domain::{PriceSeries, Query};
use crate::ui::app_async::AsyncFetchResult;
use crate::ui::ui_plot_view::PlotView;
use crate::ui::utils::setup_custom_visuals;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// Error types for application operations
#[derive(Debug, Clone)]
pub enum AppError {
    /// The provider returned zero points for this query
    NoData(Query),
    /// The symbol input was blank
    BlankSymbol,
    /// Fetch from the provider failed
    FetchFailed(String),
    /// Scoring failed
    ScoreFailed(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NoData(query) => write!(f, "No data available for {}", query),
            AppError::BlankSymbol => write!(f, "No symbol entered"),
            AppError::FetchFailed(msg) => write!(f, "Fetch failed: {}", msg),
            AppError::ScoreFailed(msg) => write!(f, "Scoring failed: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

/// One completed fetch-and-score pass, shared with the render side untouched.
pub struct ScoredQuery {
    pub query: Query,
    pub series: PriceSeries,
    pub confluence: Confluence,
    pub provider_signature: &'static str,
}

/// Runtime-only data produced by fetches; never persisted.
#[derive(Default)]
pub struct DataState {
    pub scored: Option<Arc<ScoredQuery>>,
    pub last_error: Option<AppError>,
}

#[derive(Deserialize, Serialize)]
pub struct ConfluenceApp {
    // UI state (persisted)
    #[serde(default)]
    pub(super) query: Query,

    // Runtime-only state
    #[serde(skip)]
    pub(super) symbol_input: String,
    #[serde(skip)]
    pub(super) data_state: DataState,
    #[serde(skip)]
    pub(super) plot_view: PlotView,
    #[serde(skip)]
    pub(super) fetch_promise: Option<Promise<AsyncFetchResult>>,
    #[serde(skip)]
    pub(super) runtime: Option<tokio::runtime::Runtime>,
}

impl Default for ConfluenceApp {
    fn default() -> Self {
        Self {
            query: Query::default(),
            symbol_input: String::new(),
            data_state: DataState::default(),
            plot_view: PlotView::default(),
            fetch_promise: None,
            runtime: None,
        }
    }
}

impl ConfluenceApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        initial_symbol: Option<String>,
        runtime: tokio::runtime::Runtime,
    ) -> Self {
        let mut app: ConfluenceApp = if let Some(storage) = cc.storage {
            if let Some(value) = eframe::get_value(storage, eframe::APP_KEY) {
                #[cfg(debug_assertions)]
                if DEBUG_FLAGS.print_state_serde {
                    log::info!("Successfully loaded persisted state");
                }
                value
            } else {
                #[cfg(debug_assertions)]
                if DEBUG_FLAGS.print_state_serde {
                    log::info!("No persisted state found. Creating anew.");
                }
                ConfluenceApp::default()
            }
        } else {
            ConfluenceApp::default()
        };

        if let Some(symbol) = initial_symbol {
            app.query.symbol = symbol;
        }
        app.symbol_input = app.query.symbol.clone();
        app.runtime = Some(runtime);

        // First render pass should already have data on the way.
        app.start_fetch();
        app
    }

    /// Pick up the edited symbol and kick off a fresh fetch-and-score pass.
    pub(super) fn apply_query_change(&mut self) {
        self.query.symbol = self.symbol_input.trim().to_uppercase();
        self.symbol_input = self.query.symbol.clone();
        self.start_fetch();
    }
}

impl eframe::App for ConfluenceApp {
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        // Drop any in-flight fetch so its sender does not outlive the app
        if let Some(promise) = self.fetch_promise.take() {
            drop(promise);
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self);
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        setup_custom_visuals(ctx);

        self.poll_fetch(ctx);

        self.render_side_panel(ctx);
        self.render_status_panel(ctx);
        self.render_central_panel(ctx);
    }
}
