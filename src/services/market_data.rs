//! Market data provider interface.

use crate::config::{Interval, Period};
use crate::models::Bar;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MarketDataError {
    #[error("data source request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("symbol not found: {0}")]
    UnknownSymbol(String),
    #[error("data source unavailable: {0}")]
    Unavailable(String),
    #[error("data source rejected the request: {0}")]
    Rejected(String),
    #[error("malformed data source response: {0}")]
    Malformed(String),
}

#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Fetch the bar series for a symbol over the given period and interval.
    ///
    /// A valid-but-dataless query returns an empty series; network failures
    /// and unknown symbols are errors.
    async fn fetch_bars(
        &self,
        symbol: &str,
        period: Period,
        interval: Interval,
    ) -> Result<Vec<Bar>, MarketDataError>;
}
