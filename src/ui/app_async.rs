use eframe::egui;
use poll_promise::Promise;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::analysis::score_series;
use crate::data::{BinanceHistory, PriceHistoryProvider, fetch_price_history};
use crate::domain::Query;
use crate::ui::app::{AppError, ConfluenceApp, ScoredQuery};

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

pub(super) struct AsyncFetchResult {
    pub(super) result: Result<Arc<ScoredQuery>, AppError>,
    elapsed_time: Duration,
}

impl ConfluenceApp {
    pub(super) fn start_fetch(&mut self) {
        if self.fetch_promise.is_some() {
            return;
        }

        let Some(symbol) = self.query.normalized_symbol() else {
            self.data_state.last_error = Some(AppError::BlankSymbol);
            return;
        };

        let Some(handle) = self.runtime.as_ref().map(|rt| rt.handle().clone()) else {
            return;
        };

        let query = Query {
            symbol,
            ..self.query.clone()
        };

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_fetch_progress {
            log::info!("Starting fetch for {}", query);
        }

        self.fetch_promise = Some(Promise::spawn_thread("history_fetch", move || {
            run_fetch_and_score(handle, query)
        }));
    }

    pub(super) fn poll_fetch(&mut self, ctx: &egui::Context) {
        let outcome = self.fetch_promise.as_ref().and_then(|promise| {
            promise.ready().map(|fetch_result| {
                let result = fetch_result
                    .result
                    .as_ref()
                    .map(Arc::clone)
                    .map_err(|err| err.clone());
                (result, fetch_result.elapsed_time)
            })
        });

        if let Some((result, elapsed)) = outcome {
            self.fetch_promise = None;

            match result {
                Ok(scored) => {
                    #[cfg(debug_assertions)]
                    if DEBUG_FLAGS.print_fetch_progress {
                        log::info!(
                            "{} scored {}/4 from {} points in {:.2}s",
                            scored.query,
                            scored.confluence.score(),
                            scored.series.len(),
                            elapsed.as_secs_f32()
                        );
                    }
                    self.data_state.scored = Some(scored);
                    self.data_state.last_error = None;
                }
                Err(error) => {
                    log::error!("Fetch-and-score failed: {}", error);
                    self.data_state.scored = None;
                    self.data_state.last_error = Some(error);
                }
            }
        } else if self.fetch_promise.is_some() {
            ctx.request_repaint();
        }
    }

    pub(super) fn is_fetching(&self) -> bool {
        self.fetch_promise.is_some()
    }
}

/// The whole fetch-then-compute pass for one query, run off the UI thread.
/// Any failure aborts this pass only; the UI shows the error and stays up.
fn run_fetch_and_score(handle: tokio::runtime::Handle, query: Query) -> AsyncFetchResult {
    let fetch_start = Instant::now();

    let providers: Vec<Box<dyn PriceHistoryProvider>> = vec![Box::new(BinanceHistory)];
    let result = match handle.block_on(fetch_price_history(&providers, &query)) {
        Ok((series, provider_signature)) => {
            if series.is_empty() {
                Err(AppError::NoData(query.clone()))
            } else {
                match score_series(&series) {
                    Ok(confluence) => Ok(Arc::new(ScoredQuery {
                        query: query.clone(),
                        series,
                        confluence,
                        provider_signature,
                    })),
                    Err(e) => Err(AppError::ScoreFailed(e.to_string())),
                }
            }
        }
        Err(e) => Err(AppError::FetchFailed(format!("{:#}", e))),
    };

    AsyncFetchResult {
        result,
        elapsed_time: fetch_start.elapsed(),
    }
}
