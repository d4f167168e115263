//! Analysis and computation configuration

/// Moving-average window lengths used by the confluence scorer.
pub struct MaWindows {
    /// Fast exponential moving average window
    pub ema_fast: usize,
    /// Slow exponential moving average window
    pub ema_slow: usize,
    /// Simple moving average window
    pub sma: usize,
}

/// The Master Analysis Configuration
pub struct AnalysisConfig {
    pub windows: MaWindows,
    /// Symbol loaded when no persisted selection exists
    pub default_symbol: &'static str,
}

pub const ANALYSIS: AnalysisConfig = AnalysisConfig {
    windows: MaWindows {
        ema_fast: 34,
        ema_slow: 89,
        sma: 50,
    },
    default_symbol: "SPY",
};
