//! vwap-watch
//!
//! Polls the market-data source for one instrument and re-renders three
//! rolling-window VWAP lines with above/below signals on every tick.

use dotenvy::dotenv;
use std::sync::Arc;
use std::time::Duration;
use tokio::signal;
use tracing::info;
use vwaptrix::config::{ControlSurface, EnvControlSurface};
use vwaptrix::core::runtime::WatchRuntime;
use vwaptrix::core::scheduler::RefreshScheduler;
use vwaptrix::logging;
use vwaptrix::render::LogRenderer;
use vwaptrix::services::yahoo::YahooProvider;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env if present
    dotenv().ok();

    logging::init_logging();

    let control = Arc::new(EnvControlSurface);
    let startup = control.snapshot();
    info!("Starting vwap-watch");
    info!(
        symbol = %startup.symbol,
        period = %startup.period,
        interval = %startup.interval,
        refresh_seconds = startup.refresh_seconds,
        "Watching {} ({} bars, windows {}/{}/{})",
        startup.symbol,
        startup.requested_count,
        startup.window1,
        startup.window2,
        startup.window3
    );

    // Cap retry backoff at the configured refresh interval.
    let provider = Arc::new(
        YahooProvider::new().with_retry_cap(Duration::from_secs(startup.refresh_seconds)),
    );
    let renderer = Arc::new(LogRenderer);
    let runtime = Arc::new(WatchRuntime::new(provider, renderer));

    let scheduler = RefreshScheduler::new(runtime, control);
    scheduler.start().await;

    signal::ctrl_c().await?;
    info!("Shutdown signal received");
    scheduler.stop().await;

    Ok(())
}
