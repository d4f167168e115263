// Price history retrieval
pub mod binance;
pub mod provider;

// Re-export commonly used types
pub use binance::BinanceHistory;
pub use provider::{PriceHistoryProvider, fetch_price_history};
