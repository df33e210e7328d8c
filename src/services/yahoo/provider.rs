//! HTTP provider hitting the Yahoo Finance chart endpoint.

use crate::config::{Interval, Period};
use crate::models::Bar;
use crate::services::market_data::{MarketDataError, MarketDataProvider};
use crate::services::yahoo::response::ChartResponse;
use async_trait::async_trait;
use backon::{ExponentialBuilder, Retryable};
use reqwest::StatusCode;
use std::time::Duration;
use tracing::{debug, warn};

const DEFAULT_BASE_URL: &str = "https://query1.finance.yahoo.com";
const USER_AGENT: &str = concat!("vwaptrix/", env!("CARGO_PKG_VERSION"));

pub struct YahooProvider {
    client: reqwest::Client,
    base_url: String,
    retry_cap: Duration,
}

impl YahooProvider {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Point the provider at a different host (used by tests).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            retry_cap: Duration::from_secs(60),
        }
    }

    /// Upper bound on a single retry delay. Kept at or below the refresh
    /// interval so a failing fetch cannot stall the cycle longer than one
    /// tick would.
    pub fn with_retry_cap(mut self, cap: Duration) -> Self {
        self.retry_cap = cap;
        self
    }

    fn chart_url(&self, symbol: &str, period: Period, interval: Interval) -> String {
        format!(
            "{}/v8/finance/chart/{}?range={}&interval={}&includeAdjustedClose=true",
            self.base_url, symbol, period, interval
        )
    }

    async fn fetch_once(&self, url: &str, symbol: &str) -> Result<ChartResponse, MarketDataError> {
        let response = self
            .client
            .get(url)
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .send()
            .await?;

        match response.status() {
            StatusCode::NOT_FOUND => {
                return Err(MarketDataError::UnknownSymbol(symbol.to_string()))
            }
            status if status.is_server_error() => {
                return Err(MarketDataError::Unavailable(format!(
                    "chart endpoint returned {status}"
                )))
            }
            status if !status.is_success() => {
                // Surface the body's error block when Yahoo sends one.
                if let Ok(parsed) = response.json::<ChartResponse>().await {
                    if let Some(err) = parsed.chart.error {
                        return Err(MarketDataError::Rejected(format!(
                            "{}: {}",
                            err.code, err.description
                        )));
                    }
                }
                return Err(MarketDataError::Rejected(format!(
                    "chart endpoint returned {status}"
                )));
            }
            _ => {}
        }

        let parsed = response.json::<ChartResponse>().await?;
        Ok(parsed)
    }
}

impl Default for YahooProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MarketDataProvider for YahooProvider {
    async fn fetch_bars(
        &self,
        symbol: &str,
        period: Period,
        interval: Interval,
    ) -> Result<Vec<Bar>, MarketDataError> {
        let url = self.chart_url(symbol, period, interval);
        debug!(symbol = %symbol, period = %period, interval = %interval, "fetching chart data");

        // Transient transport failures are retried with capped exponential
        // backoff; symbol and payload errors are final for this cycle.
        let response = (|| self.fetch_once(&url, symbol))
            .retry(
                ExponentialBuilder::default()
                    .with_max_times(3)
                    .with_max_delay(self.retry_cap),
            )
            .when(|e| {
                matches!(
                    e,
                    MarketDataError::Transport(_) | MarketDataError::Unavailable(_)
                )
            })
            .notify(|err, after| {
                warn!(symbol = %symbol, error = %err, retry_in = ?after, "fetch failed, retrying");
            })
            .await?;

        let bars = response.into_bars(symbol)?;
        debug!(symbol = %symbol, count = bars.len(), "fetched {} bars", bars.len());
        Ok(bars)
    }
}
