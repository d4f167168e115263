use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

use crate::config::ANALYSIS;
use crate::utils::TimeUtils;

/// How far back the price history request reaches.
#[derive(
    Serialize, Deserialize, Display, EnumIter, Debug, Clone, Copy, PartialEq, Eq, Default,
)]
pub enum Period {
    #[strum(to_string = "1d")]
    OneDay,
    #[strum(to_string = "5d")]
    FiveDays,
    #[default]
    #[strum(to_string = "7d")]
    SevenDays,
    #[strum(to_string = "1mo")]
    OneMonth,
}

impl Period {
    pub fn lookback_ms(&self) -> i64 {
        match self {
            Period::OneDay => TimeUtils::MS_IN_D,
            Period::FiveDays => 5 * TimeUtils::MS_IN_D,
            Period::SevenDays => TimeUtils::MS_IN_W,
            Period::OneMonth => TimeUtils::MS_IN_1_MO,
        }
    }
}

/// Kline sampling width.
#[derive(
    Serialize, Deserialize, Display, EnumIter, Debug, Clone, Copy, PartialEq, Eq, Default,
)]
pub enum Interval {
    #[strum(to_string = "1m")]
    OneMinute,
    #[default]
    #[strum(to_string = "5m")]
    FiveMinutes,
    #[strum(to_string = "15m")]
    FifteenMinutes,
    #[strum(to_string = "1h")]
    OneHour,
}

impl Interval {
    pub fn width_ms(&self) -> i64 {
        match self {
            Interval::OneMinute => TimeUtils::MS_IN_MIN,
            Interval::FiveMinutes => TimeUtils::MS_IN_5_MIN,
            Interval::FifteenMinutes => TimeUtils::MS_IN_15_MIN,
            Interval::OneHour => TimeUtils::MS_IN_H,
        }
    }
}

/// The three user-selected inputs for one fetch-and-score pass.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub symbol: String,
    pub period: Period,
    pub interval: Interval,
}

impl Default for Query {
    fn default() -> Self {
        Self {
            symbol: ANALYSIS.default_symbol.to_string(),
            period: Period::default(),
            interval: Interval::default(),
        }
    }
}

impl Query {
    /// Trimmed, uppercased symbol, or `None` when the input is blank.
    pub fn normalized_symbol(&self) -> Option<String> {
        let trimmed = self.symbol.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_uppercase())
        }
    }
}

impl std::fmt::Display for Query {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} @ {}", self.symbol, self.period, self.interval)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_ui_defaults() {
        let query = Query::default();
        assert_eq!(query.symbol, "SPY");
        assert_eq!(query.period, Period::SevenDays);
        assert_eq!(query.interval, Interval::FiveMinutes);
    }

    #[test]
    fn test_period_lookback() {
        assert_eq!(Period::OneDay.lookback_ms(), 86_400_000);
        assert_eq!(Period::FiveDays.lookback_ms(), 5 * 86_400_000);
        assert_eq!(Period::SevenDays.lookback_ms(), 7 * 86_400_000);
        assert_eq!(Period::OneMonth.lookback_ms(), 30 * 86_400_000);
    }

    #[test]
    fn test_interval_widths() {
        assert_eq!(Interval::OneMinute.width_ms(), 60_000);
        assert_eq!(Interval::FiveMinutes.width_ms(), 300_000);
        assert_eq!(Interval::FifteenMinutes.width_ms(), 900_000);
        assert_eq!(Interval::OneHour.width_ms(), 3_600_000);
    }

    #[test]
    fn test_display_labels() {
        assert_eq!(Period::OneMonth.to_string(), "1mo");
        assert_eq!(Interval::FifteenMinutes.to_string(), "15m");
    }

    #[test]
    fn test_symbol_normalization() {
        let mut query = Query::default();
        query.symbol = "  ethusdt ".to_string();
        assert_eq!(query.normalized_symbol().as_deref(), Some("ETHUSDT"));

        query.symbol = "   ".to_string();
        assert_eq!(query.normalized_symbol(), None);
    }
}
