//! Wire format of the Yahoo Finance v8 chart endpoint.

use crate::models::Bar;
use crate::services::market_data::MarketDataError;
use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ChartResponse {
    pub chart: Chart,
}

#[derive(Debug, Deserialize)]
pub struct Chart {
    pub result: Option<Vec<ChartResult>>,
    pub error: Option<ChartError>,
}

#[derive(Debug, Deserialize)]
pub struct ChartError {
    pub code: String,
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub struct ChartResult {
    /// Absent for a valid symbol with no data in the requested range.
    pub timestamp: Option<Vec<i64>>,
    pub indicators: Indicators,
}

#[derive(Debug, Deserialize)]
pub struct Indicators {
    pub quote: Vec<Quote>,
    pub adjclose: Option<Vec<AdjClose>>,
}

#[derive(Debug, Deserialize)]
pub struct Quote {
    #[serde(default)]
    pub close: Option<Vec<Option<f64>>>,
    #[serde(default)]
    pub volume: Option<Vec<Option<f64>>>,
}

#[derive(Debug, Deserialize)]
pub struct AdjClose {
    pub adjclose: Vec<Option<f64>>,
}

impl ChartResponse {
    /// Flatten the column-oriented chart payload into bars.
    ///
    /// Uses the adjusted close as the reference price, falling back to the
    /// raw close when the endpoint omits the adjclose block (some intraday
    /// intervals do). Rows with a null price are skipped; a null volume
    /// counts as zero.
    pub fn into_bars(self, symbol: &str) -> Result<Vec<Bar>, MarketDataError> {
        if let Some(err) = self.chart.error {
            return if err.code.eq_ignore_ascii_case("not found") {
                Err(MarketDataError::UnknownSymbol(symbol.to_string()))
            } else {
                Err(MarketDataError::Rejected(format!(
                    "{}: {}",
                    err.code, err.description
                )))
            };
        }

        let result = self
            .chart
            .result
            .and_then(|mut r| if r.is_empty() { None } else { Some(r.remove(0)) })
            .ok_or_else(|| {
                MarketDataError::Malformed("chart response carried no result".to_string())
            })?;

        let timestamps = match result.timestamp {
            Some(ts) => ts,
            None => return Ok(Vec::new()),
        };

        let quote = result.indicators.quote.into_iter().next().ok_or_else(|| {
            MarketDataError::Malformed("chart response carried no quote block".to_string())
        })?;

        let prices: Vec<Option<f64>> = match result.indicators.adjclose {
            Some(mut adj) if !adj.is_empty() => adj.remove(0).adjclose,
            _ => quote.close.ok_or_else(|| {
                MarketDataError::Malformed("chart response carried no close prices".to_string())
            })?,
        };

        let volumes = quote.volume.unwrap_or_default();

        let mut bars = Vec::with_capacity(timestamps.len());
        for (i, ts) in timestamps.iter().enumerate() {
            let price = match prices.get(i).copied().flatten() {
                Some(p) => p,
                None => continue,
            };
            let volume = volumes.get(i).copied().flatten().unwrap_or(0.0);
            let timestamp: DateTime<Utc> =
                DateTime::from_timestamp(*ts, 0).ok_or_else(|| {
                    MarketDataError::Malformed(format!("timestamp out of range: {ts}"))
                })?;
            bars.push(Bar::new(timestamp, price, volume));
        }

        Ok(bars)
    }
}
