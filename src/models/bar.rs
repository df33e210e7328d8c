use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One sampled interval of market activity.
///
/// `price` is the adjusted close, the reference price for VWAP. Bars in a
/// series are strictly ascending by `timestamp`; `volume` is non-negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub timestamp: DateTime<Utc>,
    pub price: f64,
    pub volume: f64,
}

impl Bar {
    pub fn new(timestamp: DateTime<Utc>, price: f64, volume: f64) -> Self {
        Self {
            timestamp,
            price,
            volume,
        }
    }
}
