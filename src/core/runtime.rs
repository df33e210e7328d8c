//! One refresh cycle: fetch, prepare, compute, derive, render.

use crate::config::Config;
use crate::indicators::volume::calculate_vwap;
use crate::models::Bar;
use crate::render::{FrameRenderer, RenderFrame, SignalIndicator, VwapLine};
use crate::series;
use crate::services::market_data::{MarketDataError, MarketDataProvider};
use crate::signals::derive_signal;
use std::sync::Arc;
use tracing::debug;

/// Runs one cycle of the fetch/compute/render pipeline from a configuration
/// snapshot. Holds no state between cycles; each cycle owns its series.
pub struct WatchRuntime {
    provider: Arc<dyn MarketDataProvider>,
    renderer: Arc<dyn FrameRenderer>,
}

impl WatchRuntime {
    pub fn new(provider: Arc<dyn MarketDataProvider>, renderer: Arc<dyn FrameRenderer>) -> Self {
        Self { provider, renderer }
    }

    /// Execute one full cycle. A fetch failure propagates to the caller,
    /// which contains it; no frame is rendered in that case.
    pub async fn run_cycle(&self, config: &Config) -> Result<(), MarketDataError> {
        let raw = self
            .provider
            .fetch_bars(&config.symbol, config.period, config.interval)
            .await?;

        let bars = series::prepare(&raw, config.requested_count);
        debug!(
            symbol = %config.symbol,
            available = raw.len(),
            displayed = bars.len(),
            "prepared series"
        );

        let frame = build_frame(config, bars);
        self.renderer.render(&frame);
        Ok(())
    }
}

/// Assemble the render frame for a prepared series: three labelled VWAP
/// lines and their latest-bar signals, plus the chart title.
pub fn build_frame(config: &Config, bars: Vec<Bar>) -> RenderFrame {
    let mut lines = Vec::with_capacity(3);
    let mut signals = Vec::with_capacity(3);
    for window in config.windows() {
        let values = calculate_vwap(&bars, window);
        signals.push(SignalIndicator::new(window, derive_signal(&bars, &values)));
        lines.push(VwapLine::new(window, values));
    }

    RenderFrame {
        title: format!(
            "VWAP for {} at {} interval",
            config.symbol, config.interval
        ),
        bars,
        lines,
        signals,
    }
}
