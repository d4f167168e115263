// Std library crates
use std::collections::HashSet;

// External crates
use anyhow::{Result, bail};
use async_trait::async_trait;
use binance_sdk::config::ConfigurationRestApi;
use binance_sdk::errors::ConnectorError;
use binance_sdk::spot::{
    SpotRestApi,
    rest_api::{KlinesIntervalEnum, KlinesItemInner, KlinesParams, RestApi},
};

// Local crates
use crate::config::binance::{BINANCE, BinanceApiConfig};
use crate::data::provider::PriceHistoryProvider;
use crate::domain::{Interval, PricePoint, PriceSeries, Query};
use crate::utils::TimeUtils;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
#[cfg(debug_assertions)]
use crate::utils::time_utils;

/// Map our UI interval onto the SDK's kline interval enum.
fn to_binance_interval(interval: Interval) -> KlinesIntervalEnum {
    match interval {
        Interval::OneMinute => KlinesIntervalEnum::Interval1m,
        Interval::FiveMinutes => KlinesIntervalEnum::Interval5m,
        Interval::FifteenMinutes => KlinesIntervalEnum::Interval15m,
        Interval::OneHour => KlinesIntervalEnum::Interval1h,
    }
}

/// Pull (open_time, close) out of one raw kline row. Rows with a missing or
/// unparseable close are dropped by the caller; gaps are expected in the feed.
fn parse_kline_row(row: Vec<KlinesItemInner>) -> Option<PricePoint> {
    let mut items = row.into_iter();
    let timestamp_ms = match items.next()? {
        KlinesItemInner::Integer(ms) => ms,
        _ => return None,
    };
    // Skip open/high/low; the scorer only consumes the close column.
    let close = match items.nth(3)? {
        KlinesItemInner::String(s) => s.parse::<f64>().ok()?,
        _ => return None,
    };
    Some(PricePoint {
        timestamp_ms,
        close,
    })
}

/// The series invariant: ascending timestamps, no duplicates.
fn ensure_ascending_unique(points: &[PricePoint]) -> Result<()> {
    let mut seen = HashSet::new();
    for pair in points.windows(2) {
        if pair[1].timestamp_ms < pair[0].timestamp_ms {
            bail!(
                "klines out of order: {} after {}",
                pair[1].timestamp_ms,
                pair[0].timestamp_ms
            );
        }
    }
    for point in points {
        if !seen.insert(point.timestamp_ms) {
            bail!("duplicate kline open time: {}", point.timestamp_ms);
        }
    }
    Ok(())
}

async fn configure_binance_client() -> Result<RestApi> {
    let config = BinanceApiConfig::default();
    let rest_conf = ConfigurationRestApi::builder()
        .timeout(config.timeout_ms)
        .retries(config.retries)
        .backoff(config.backoff_ms)
        .build()?;
    Ok(SpotRestApi::production(rest_conf))
}

async fn fetch_klines_batch(
    rest_client: &RestApi,
    symbol: &str,
    interval: KlinesIntervalEnum,
    end_time: Option<i64>,
) -> Result<Vec<Vec<KlinesItemInner>>> {
    let params = KlinesParams::builder(symbol.to_string(), interval)
        .limit(BINANCE.limits.klines_limit)
        .end_time(end_time)
        .build()?;

    match rest_client.klines(params).await {
        Ok(response) => Ok(response.data().await?),
        Err(e) => {
            if let Some(conn_err) = e.downcast_ref::<ConnectorError>() {
                match conn_err {
                    ConnectorError::BadRequestError(msg)
                    | ConnectorError::ConnectorClientError(msg) => {
                        log::error!("{} client error, check request parameters: {}", symbol, msg);
                    }
                    ConnectorError::TooManyRequestsError(msg) => {
                        log::error!("{} rate limit exceeded: {}", symbol, msg);
                    }
                    ConnectorError::NetworkError(msg) => {
                        log::error!("{} network error: {}", symbol, msg);
                    }
                    other => {
                        log::error!("{} unexpected connector error: {:?}", symbol, other);
                    }
                }
            }
            Err(e.context(format!("Binance klines call failed for {}", symbol)))
        }
    }
}

/// Live spot-kline history from the Binance REST API.
///
/// Batches are requested newest-first via `end_time` and prepended until the
/// lookback window is covered, then trimmed to the exact window. Each request
/// overlaps the previous batch by one kline (Binance's `end_time` is
/// inclusive), so the overlap row is dropped before prepending.
pub struct BinanceHistory;

#[async_trait]
impl PriceHistoryProvider for BinanceHistory {
    fn signature(&self) -> &'static str {
        "Binance API"
    }

    async fn fetch(&self, query: &Query) -> Result<PriceSeries> {
        let rest_client = configure_binance_client().await?;
        let interval = to_binance_interval(query.interval);
        let start_ms = TimeUtils::now_ms() - query.period.lookback_ms();

        let mut points: Vec<PricePoint> = Vec::new();
        let mut end_time: Option<i64> = None;

        loop {
            let rows = fetch_klines_batch(&rest_client, &query.symbol, interval.clone(), end_time).await?;
            let raw_count = rows.len();
            let mut batch: Vec<PricePoint> = rows.into_iter().filter_map(parse_kline_row).collect();
            if batch.is_empty() {
                break;
            }

            if let Some(oldest_held) = points.first().map(|p| p.timestamp_ms) {
                // Drop the inclusive end_time row that duplicates what we hold.
                while batch
                    .last()
                    .is_some_and(|p| p.timestamp_ms >= oldest_held)
                {
                    batch.pop();
                }
                if batch.is_empty() {
                    break;
                }
            }

            let batch_first_ts = batch[0].timestamp_ms;
            let read_all = raw_count < BINANCE.limits.klines_limit as usize;
            points.splice(0..0, batch);

            if read_all || batch_first_ts <= start_ms {
                break;
            }
            end_time = Some(batch_first_ts);
        }

        points.retain(|p| p.timestamp_ms >= start_ms);
        ensure_ascending_unique(&points)?;

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_fetch_progress && !points.is_empty() {
            log::info!(
                "{}: {} klines from {} to {}",
                query,
                points.len(),
                time_utils::epoch_ms_to_utc(points[0].timestamp_ms),
                time_utils::epoch_ms_to_utc(points[points.len() - 1].timestamp_ms),
            );
        }

        Ok(PriceSeries::new(query.symbol.clone(), points))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kline_row(open_time: i64, close: &str) -> Vec<KlinesItemInner> {
        vec![
            KlinesItemInner::Integer(open_time),
            KlinesItemInner::String("1.0".to_string()), // open
            KlinesItemInner::String("2.0".to_string()), // high
            KlinesItemInner::String("0.5".to_string()), // low
            KlinesItemInner::String(close.to_string()), // close
            KlinesItemInner::String("100.0".to_string()), // volume
            KlinesItemInner::Integer(open_time + 59_999), // close time
        ]
    }

    #[test]
    fn test_parse_kline_row() {
        let point = parse_kline_row(kline_row(1_000, "42.5")).unwrap();
        assert_eq!(point.timestamp_ms, 1_000);
        assert_eq!(point.close, 42.5);
    }

    #[test]
    fn test_parse_kline_row_rejects_bad_close() {
        assert!(parse_kline_row(kline_row(1_000, "not-a-number")).is_none());
        // Timestamp in the wrong slot
        let mut row = kline_row(1_000, "42.5");
        row[0] = KlinesItemInner::String("1000".to_string());
        assert!(parse_kline_row(row).is_none());
    }

    #[test]
    fn test_ensure_ascending_unique() {
        let good = [
            PricePoint {
                timestamp_ms: 1,
                close: 1.0,
            },
            PricePoint {
                timestamp_ms: 2,
                close: 2.0,
            },
        ];
        assert!(ensure_ascending_unique(&good).is_ok());

        let duplicated = [good[0], good[0]];
        assert!(ensure_ascending_unique(&duplicated).is_err());

        let descending = [good[1], good[0]];
        assert!(ensure_ascending_unique(&descending).is_err());
    }
}
