// Core value types shared across data, analysis and UI
pub mod price_series;
pub mod query;

pub use price_series::{PricePoint, PriceSeries};
pub use query::{Interval, Period, Query};
