/// One observed closing price.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricePoint {
    pub timestamp_ms: i64,
    pub close: f64,
}

/// An ordered closing-price history for a single symbol.
///
/// Points ascend by timestamp with no duplicates; the provider validates
/// this before constructing the series. Treated as immutable after fetch.
#[derive(Debug, Clone, Default)]
pub struct PriceSeries {
    pub symbol: String,
    pub points: Vec<PricePoint>,
}

impl PriceSeries {
    pub fn new(symbol: impl Into<String>, points: Vec<PricePoint>) -> Self {
        Self {
            symbol: symbol.into(),
            points,
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn last(&self) -> Option<&PricePoint> {
        self.points.last()
    }

    /// The close column, in timestamp order.
    pub fn closes(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.close).collect()
    }

    pub fn first_timestamp_ms(&self) -> Option<i64> {
        self.points.first().map(|p| p.timestamp_ms)
    }

    pub fn last_timestamp_ms(&self) -> Option<i64> {
        self.points.last().map(|p| p.timestamp_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let series = PriceSeries::new(
            "BTCUSDT",
            vec![
                PricePoint {
                    timestamp_ms: 1_000,
                    close: 10.0,
                },
                PricePoint {
                    timestamp_ms: 2_000,
                    close: 11.5,
                },
            ],
        );
        assert_eq!(series.len(), 2);
        assert!(!series.is_empty());
        assert_eq!(series.closes(), vec![10.0, 11.5]);
        assert_eq!(series.first_timestamp_ms(), Some(1_000));
        assert_eq!(series.last_timestamp_ms(), Some(2_000));
        assert_eq!(series.last().unwrap().close, 11.5);
    }

    #[test]
    fn test_empty_series() {
        let series = PriceSeries::default();
        assert!(series.is_empty());
        assert_eq!(series.last(), None);
        assert_eq!(series.first_timestamp_ms(), None);
    }
}
