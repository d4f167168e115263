use eframe::egui;
use egui_plot::{AxisHints, Corner, HPlacement, Legend, Line, Plot, PlotPoints};

use crate::config::ANALYSIS;
use crate::ui::app::ScoredQuery;
use crate::ui::config::UI_CONFIG;
use crate::ui::utils::format_price;
use crate::utils::maths_utils;
use crate::utils::time_utils::epoch_ms_to_axis_label;

/// The four-series line chart: Close plus the three moving averages,
/// aligned on the kline timestamps.
#[derive(Default)]
pub struct PlotView;

impl PlotView {
    pub fn show(&mut self, ui: &mut egui::Ui, scored: &ScoredQuery) {
        let series = &scored.series;
        let indicators = &scored.confluence.indicators;

        let timestamps: Vec<f64> = series
            .points
            .iter()
            .map(|p| p.timestamp_ms as f64)
            .collect();

        let close_points: Vec<[f64; 2]> = series
            .points
            .iter()
            .map(|p| [p.timestamp_ms as f64, p.close])
            .collect();
        let ema_fast_points: Vec<[f64; 2]> = timestamps
            .iter()
            .zip(&indicators.ema_fast)
            .map(|(&x, &y)| [x, y])
            .collect();
        let ema_slow_points: Vec<[f64; 2]> = timestamps
            .iter()
            .zip(&indicators.ema_slow)
            .map(|(&x, &y)| [x, y])
            .collect();
        // The SMA line starts where its window fills up
        let sma_points: Vec<[f64; 2]> = timestamps
            .iter()
            .zip(&indicators.sma_mid)
            .filter_map(|(&x, y)| y.map(|y| [x, y]))
            .collect();

        let (y_min, y_max) = y_bounds(series.closes(), indicators);
        let windows = &ANALYSIS.windows;

        Plot::new("confluence_plot")
            .legend(Legend::default().position(Corner::RightTop))
            .custom_x_axes(vec![create_x_axis()])
            .custom_y_axes(vec![create_y_axis()])
            .allow_scroll(false)
            .allow_boxed_zoom(false)
            .show(ui, |plot_ui| {
                plot_ui.set_plot_bounds_y(y_min..=y_max);

                plot_ui.line(
                    Line::new("Close", PlotPoints::new(close_points))
                        .color(UI_CONFIG.colors.close_line),
                );
                plot_ui.line(
                    Line::new(
                        format!("EMA{}", windows.ema_fast),
                        PlotPoints::new(ema_fast_points),
                    )
                    .color(UI_CONFIG.colors.ema_fast_line),
                );
                plot_ui.line(
                    Line::new(
                        format!("EMA{}", windows.ema_slow),
                        PlotPoints::new(ema_slow_points),
                    )
                    .color(UI_CONFIG.colors.ema_slow_line),
                );
                plot_ui.line(
                    Line::new(format!("SMA{}", windows.sma), PlotPoints::new(sma_points))
                        .color(UI_CONFIG.colors.sma_line),
                );
            });
    }
}

/// Common bounds over the close column and every defined indicator value,
/// padded so the lines never sit on the plot frame.
fn y_bounds(closes: Vec<f64>, indicators: &crate::analysis::IndicatorSet) -> (f64, f64) {
    let mut values = closes;
    values.extend_from_slice(&indicators.ema_fast);
    values.extend_from_slice(&indicators.ema_slow);
    values.extend(indicators.sma_mid.iter().flatten().copied());

    let (min, max) = maths_utils::get_min_max(&values);
    let margin = ((max - min) * 0.05).max(f64::EPSILON);
    (min - margin, max + margin)
}

fn create_x_axis() -> AxisHints<'static> {
    AxisHints::new_x().formatter(|grid_mark, _range| epoch_ms_to_axis_label(grid_mark.value as i64))
}

fn create_y_axis() -> AxisHints<'static> {
    AxisHints::new_y()
        .placement(HPlacement::Right)
        .formatter(|grid_mark, _range| format_price(grid_mark.value))
}
