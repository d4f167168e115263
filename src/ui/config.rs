use eframe::egui::Color32;

/// UI Colors for consistent theming
#[derive(Clone, Copy, Default)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub subsection_heading: Color32,
    pub central_panel: Color32,
    pub side_panel: Color32,
    pub error: Color32,
    pub score: Color32,
    pub close_line: Color32,
    pub ema_fast_line: Color32,
    pub ema_slow_line: Color32,
    pub sma_line: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Default, Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    pub side_panel_min_width: f32,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::GRAY,
        heading: Color32::YELLOW,
        subsection_heading: Color32::ORANGE,
        central_panel: Color32::from_rgb(20, 22, 28),
        side_panel: Color32::from_rgb(25, 25, 25),
        error: Color32::from_rgb(235, 100, 100),
        score: Color32::from_rgb(130, 200, 140),
        close_line: Color32::from_rgb(230, 230, 230),
        ema_fast_line: Color32::from_rgb(100, 180, 255),
        ema_slow_line: Color32::from_rgb(255, 160, 80),
        sma_line: Color32::from_rgb(180, 130, 230),
    },
    side_panel_min_width: 180.0,
};

/// Static UI strings, kept together so panel code stays readable.
pub struct UiText {
    pub window_title: &'static str,
    pub query_heading: &'static str,
    pub symbol_label: &'static str,
    pub period_label: &'static str,
    pub interval_label: &'static str,
    pub refresh_button: &'static str,
    pub score_heading: &'static str,
    pub conditions_heading: &'static str,
    pub fetching_message: &'static str,
    pub no_data_hint: &'static str,
    pub blank_symbol_hint: &'static str,
}

pub static UI_TEXT: UiText = UiText {
    window_title: "MA Confluence Dashboard",
    query_heading: "Query",
    symbol_label: "Symbol",
    period_label: "Period",
    interval_label: "Interval",
    refresh_button: "Refresh",
    score_heading: "MA Confluence Score",
    conditions_heading: "Satisfied conditions",
    fetching_message: "Fetching price data...",
    no_data_hint: "Try another symbol, or a wider period/interval combination.",
    blank_symbol_hint: "Enter a symbol to fetch price history.",
};
