//! Configuration module for the dashboard.

pub mod analysis;
pub mod binance;

mod debug; // Private; forces files to use crate::config::DEBUG_FLAGS via the re-export
pub use debug::DEBUG_FLAGS;

pub mod persistence;

// Re-export commonly used items
pub use analysis::ANALYSIS;
pub use binance::BINANCE;
pub use persistence::PERSISTENCE;
