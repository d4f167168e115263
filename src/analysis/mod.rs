// Indicator computation and scoring
pub mod confluence;

pub use confluence::{Condition, Confluence, IndicatorSet, ScoreError, ema, score_series, sma};
