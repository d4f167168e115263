use std::fmt;

use crate::config::ANALYSIS;
use crate::domain::PriceSeries;

/// Exponential moving average, seeded at the first close.
///
/// alpha = 2 / (window + 1); ema[i] = alpha * close[i] + (1 - alpha) * ema[i-1].
/// Defined at every index, so the output length always equals the input length.
pub fn ema(closes: &[f64], window: usize) -> Vec<f64> {
    let alpha = 2.0 / (window as f64 + 1.0);
    let mut out = Vec::with_capacity(closes.len());
    for &close in closes {
        let next = match out.last() {
            Some(&prev) => alpha * close + (1.0 - alpha) * prev,
            None => close,
        };
        out.push(next);
    }
    out
}

/// Trailing simple moving average. `None` until a full window is available,
/// so the output stays aligned index-for-index with the input.
pub fn sma(closes: &[f64], window: usize) -> Vec<Option<f64>> {
    debug_assert!(window > 0);
    let mut out = Vec::with_capacity(closes.len());
    let mut rolling_sum = 0.0;
    for (i, &close) in closes.iter().enumerate() {
        rolling_sum += close;
        if i >= window {
            rolling_sum -= closes[i - window];
        }
        out.push((i + 1 >= window).then(|| rolling_sum / window as f64));
    }
    out
}

/// The four bullish trend conditions evaluated at the latest close.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    CloseAboveEmaFast,
    CloseAboveEmaSlow,
    CloseAboveSma,
    EmaFastAboveSlow,
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let w = &ANALYSIS.windows;
        match self {
            Condition::CloseAboveEmaFast => write!(f, "Above EMA{}", w.ema_fast),
            Condition::CloseAboveEmaSlow => write!(f, "Above EMA{}", w.ema_slow),
            Condition::CloseAboveSma => write!(f, "Above SMA{}", w.sma),
            Condition::EmaFastAboveSlow => write!(f, "EMA{} > EMA{}", w.ema_fast, w.ema_slow),
        }
    }
}

/// The three indicator columns, each aligned with the input series.
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorSet {
    pub ema_fast: Vec<f64>,
    pub ema_slow: Vec<f64>,
    pub sma_mid: Vec<Option<f64>>,
}

/// Result of one scoring pass: the 0-4 score, which conditions held,
/// and the indicator series for charting.
#[derive(Debug, Clone, PartialEq)]
pub struct Confluence {
    pub satisfied: Vec<Condition>,
    pub indicators: IndicatorSet,
}

impl Confluence {
    pub fn score(&self) -> usize {
        self.satisfied.len()
    }

    pub fn is_satisfied(&self, condition: Condition) -> bool {
        self.satisfied.contains(&condition)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScoreError {
    EmptySeries,
}

impl fmt::Display for ScoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoreError::EmptySeries => write!(f, "price series has no points"),
        }
    }
}

impl std::error::Error for ScoreError {}

/// Score a price series against the configured moving averages.
///
/// Pure and stateless: indicators are recomputed in full on every call, and
/// only the last index is compared. All four conditions use strict `>`, so
/// exact equality never counts. An SMA still warming up at the last index is
/// treated as not-satisfied rather than an error.
pub fn score_series(series: &PriceSeries) -> Result<Confluence, ScoreError> {
    if series.is_empty() {
        return Err(ScoreError::EmptySeries);
    }

    let closes = series.closes();
    let windows = &ANALYSIS.windows;
    let ema_fast = ema(&closes, windows.ema_fast);
    let ema_slow = ema(&closes, windows.ema_slow);
    let sma_mid = sma(&closes, windows.sma);

    let last = closes.len() - 1;
    let mut satisfied = Vec::new();
    if closes[last] > ema_fast[last] {
        satisfied.push(Condition::CloseAboveEmaFast);
    }
    if closes[last] > ema_slow[last] {
        satisfied.push(Condition::CloseAboveEmaSlow);
    }
    if let Some(sma_last) = sma_mid[last]
        && closes[last] > sma_last
    {
        satisfied.push(Condition::CloseAboveSma);
    }
    if ema_fast[last] > ema_slow[last] {
        satisfied.push(Condition::EmaFastAboveSlow);
    }

    Ok(Confluence {
        satisfied,
        indicators: IndicatorSet {
            ema_fast,
            ema_slow,
            sma_mid,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PricePoint;

    const TOLERANCE: f64 = 1e-9;

    fn series_from_closes(closes: &[f64]) -> PriceSeries {
        let points = closes
            .iter()
            .enumerate()
            .map(|(i, &close)| PricePoint {
                timestamp_ms: i as i64 * 60_000,
                close,
            })
            .collect();
        PriceSeries::new("TESTUSDT", points)
    }

    #[test]
    fn test_ema_seed_and_recurrence() {
        let closes = [10.0, 12.5, 11.0, 14.75, 13.2, 13.2, 9.0];
        let window = 5;
        let alpha = 2.0 / (window as f64 + 1.0);

        let result = ema(&closes, window);
        assert_eq!(result.len(), closes.len());
        assert_eq!(result[0], closes[0]);
        for i in 1..closes.len() {
            let expected = alpha * closes[i] + (1.0 - alpha) * result[i - 1];
            assert!((result[i] - expected).abs() < TOLERANCE);
        }
    }

    #[test]
    fn test_sma_defined_iff_window_reached() {
        let closes = [1.0, 2.0, 3.0, 4.0];
        let result = sma(&closes, 3);
        assert_eq!(result, vec![None, None, Some(2.0), Some(3.0)]);
    }

    #[test]
    fn test_sma_equals_trailing_mean_at_full_window() {
        // closes = 0..60; SMA50 at the last index is the mean of 10..=59
        let closes: Vec<f64> = (0..60).map(f64::from).collect();
        let result = sma(&closes, 50);
        for i in 0..49 {
            assert_eq!(result[i], None);
        }
        let expected: f64 = (10..60).map(f64::from).sum::<f64>() / 50.0;
        assert!((result[59].unwrap() - expected).abs() < TOLERANCE);
        assert!((expected - 34.5).abs() < TOLERANCE);
    }

    #[test]
    fn test_indicator_lengths_match_series() {
        let closes: Vec<f64> = (1..=120).map(f64::from).collect();
        let confluence = score_series(&series_from_closes(&closes)).unwrap();
        assert_eq!(confluence.indicators.ema_fast.len(), closes.len());
        assert_eq!(confluence.indicators.ema_slow.len(), closes.len());
        assert_eq!(confluence.indicators.sma_mid.len(), closes.len());
    }

    #[test]
    fn test_empty_series_fails() {
        let series = PriceSeries::new("TESTUSDT", Vec::new());
        assert_eq!(score_series(&series), Err(ScoreError::EmptySeries));
    }

    #[test]
    fn test_constant_series_scores_zero() {
        // Every indicator equals the close exactly, and equality never counts.
        let closes = vec![10.0; 60];
        let confluence = score_series(&series_from_closes(&closes)).unwrap();
        assert_eq!(confluence.score(), 0);
        assert!(confluence.satisfied.is_empty());
    }

    #[test]
    fn test_rising_series_scores_four() {
        // All three MAs lag a strictly rising close, and the fast EMA tracks
        // the recent highs more closely than the slow one.
        let closes: Vec<f64> = (1..=100).map(f64::from).collect();
        let confluence = score_series(&series_from_closes(&closes)).unwrap();
        assert_eq!(confluence.score(), 4);
        assert!(confluence.is_satisfied(Condition::CloseAboveEmaFast));
        assert!(confluence.is_satisfied(Condition::CloseAboveEmaSlow));
        assert!(confluence.is_satisfied(Condition::CloseAboveSma));
        assert!(confluence.is_satisfied(Condition::EmaFastAboveSlow));
    }

    #[test]
    fn test_short_series_skips_undefined_sma() {
        // 10 points: SMA50 is still warming up at the last index, so the SMA
        // condition cannot be satisfied and the maximum score is 3.
        let closes: Vec<f64> = (1..=10).map(f64::from).collect();
        let confluence = score_series(&series_from_closes(&closes)).unwrap();
        assert_eq!(confluence.indicators.sma_mid[9], None);
        assert!(!confluence.is_satisfied(Condition::CloseAboveSma));
        assert_eq!(confluence.score(), 3);
    }

    #[test]
    fn test_single_point_series() {
        // EMAs seed at the only close, so every strict comparison is false.
        let confluence = score_series(&series_from_closes(&[42.0])).unwrap();
        assert_eq!(confluence.score(), 0);
        assert_eq!(confluence.indicators.sma_mid, vec![None]);
    }

    #[test]
    fn test_condition_labels() {
        assert_eq!(Condition::CloseAboveEmaFast.to_string(), "Above EMA34");
        assert_eq!(Condition::CloseAboveEmaSlow.to_string(), "Above EMA89");
        assert_eq!(Condition::CloseAboveSma.to_string(), "Above SMA50");
        assert_eq!(Condition::EmaFastAboveSlow.to_string(), "EMA34 > EMA89");
    }
}
