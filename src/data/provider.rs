use anyhow::{Result, anyhow};
use async_trait::async_trait;

use crate::domain::{PriceSeries, Query};

/// The price-history collaborator. The rest of the app only sees this seam:
/// it hands over a query and gets back an ordered closing-price series, or
/// an error with no retry semantics attached.
#[async_trait]
pub trait PriceHistoryProvider {
    async fn fetch(&self, query: &Query) -> Result<PriceSeries>;

    /// A unique identifier for this implementation (so that afterwards we know which one we used).
    fn signature(&self) -> &'static str;
}

/// Try each provider in order, returning the first success with its signature.
pub async fn fetch_price_history(
    providers: &[Box<dyn PriceHistoryProvider>],
    query: &Query,
) -> Result<(PriceSeries, &'static str)> {
    for provider in providers {
        match provider.fetch(query).await {
            Ok(series) => return Ok((series, provider.signature())),
            Err(e) => {
                log::info!("Provider {} failed: {:#}", provider.signature(), e);
                // Continue to the next implementation
            }
        }
    }
    Err(anyhow!("all price history providers failed"))
}
