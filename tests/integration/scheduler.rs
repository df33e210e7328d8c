//! Integration tests for the refresh scheduler

use async_trait::async_trait;
use chrono::{Duration as ChronoDuration, Utc};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use vwaptrix::config::{Config, ControlSurface, Interval, Period};
use vwaptrix::core::runtime::WatchRuntime;
use vwaptrix::core::scheduler::RefreshScheduler;
use vwaptrix::models::Bar;
use vwaptrix::render::{FrameRenderer, RenderFrame};
use vwaptrix::services::market_data::{MarketDataError, MarketDataProvider};

fn test_bars(count: usize) -> Vec<Bar> {
    let start = Utc::now();
    (0..count)
        .map(|i| {
            Bar::new(
                start + ChronoDuration::minutes(i as i64),
                100.0 + i as f64,
                1000.0,
            )
        })
        .collect()
}

/// Provider that fails its first `failures` calls, then serves bars.
struct FlakyProvider {
    calls: AtomicUsize,
    failures: usize,
    symbols_seen: Mutex<Vec<String>>,
}

impl FlakyProvider {
    fn new(failures: usize) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            failures,
            symbols_seen: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl MarketDataProvider for FlakyProvider {
    async fn fetch_bars(
        &self,
        symbol: &str,
        _period: Period,
        _interval: Interval,
    ) -> Result<Vec<Bar>, MarketDataError> {
        self.symbols_seen.lock().unwrap().push(symbol.to_string());
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        if call < self.failures {
            Err(MarketDataError::Unavailable("mock outage".to_string()))
        } else {
            Ok(test_bars(60))
        }
    }
}

struct CountingRenderer {
    frames: AtomicUsize,
}

impl FrameRenderer for CountingRenderer {
    fn render(&self, _frame: &RenderFrame) {
        self.frames.fetch_add(1, Ordering::SeqCst);
    }
}

struct FixedControl(Config);

impl ControlSurface for FixedControl {
    fn snapshot(&self) -> Config {
        self.0.clone()
    }
}

/// Control surface whose symbol changes after the first snapshot.
struct SwitchingControl {
    snapshots: AtomicUsize,
}

impl ControlSurface for SwitchingControl {
    fn snapshot(&self) -> Config {
        let n = self.snapshots.fetch_add(1, Ordering::SeqCst);
        Config {
            symbol: if n == 0 { "GGAL" } else { "AAPL" }.to_string(),
            refresh_seconds: 10,
            ..Config::default()
        }
    }
}

#[tokio::test(start_paused = true)]
async fn test_loop_survives_fetch_failures() {
    let provider = Arc::new(FlakyProvider::new(1));
    let renderer = Arc::new(CountingRenderer {
        frames: AtomicUsize::new(0),
    });
    let control = Arc::new(FixedControl(Config {
        refresh_seconds: 10,
        ..Config::default()
    }));

    let runtime = Arc::new(WatchRuntime::new(provider.clone(), renderer.clone()));
    let scheduler = RefreshScheduler::new(runtime, control);
    scheduler.start().await;
    assert!(scheduler.is_running().await);

    // Four ticks of virtual time: first cycle fails, later ones render
    tokio::time::sleep(Duration::from_secs(35)).await;
    scheduler.stop().await;

    let calls = provider.calls.load(Ordering::SeqCst);
    let frames = renderer.frames.load(Ordering::SeqCst);
    assert!(calls >= 3, "expected several cycles, saw {calls}");
    assert_eq!(frames, calls - 1, "every cycle after the outage renders");
    assert!(!scheduler.is_running().await);
}

#[tokio::test(start_paused = true)]
async fn test_config_changes_apply_on_next_tick() {
    let provider = Arc::new(FlakyProvider::new(0));
    let renderer = Arc::new(CountingRenderer {
        frames: AtomicUsize::new(0),
    });
    let control = Arc::new(SwitchingControl {
        snapshots: AtomicUsize::new(0),
    });

    let runtime = Arc::new(WatchRuntime::new(provider.clone(), renderer));
    let scheduler = RefreshScheduler::new(runtime, control);
    scheduler.start().await;

    tokio::time::sleep(Duration::from_secs(25)).await;
    scheduler.stop().await;

    let seen = provider.symbols_seen.lock().unwrap().clone();
    assert!(seen.len() >= 2);
    assert_eq!(seen[0], "GGAL");
    assert!(seen[1..].iter().all(|s| s == "AAPL"));
}

#[tokio::test]
async fn test_stop_is_idempotent() {
    let provider = Arc::new(FlakyProvider::new(0));
    let renderer = Arc::new(CountingRenderer {
        frames: AtomicUsize::new(0),
    });
    let control = Arc::new(FixedControl(Config::default()));
    let runtime = Arc::new(WatchRuntime::new(provider, renderer));

    let scheduler = RefreshScheduler::new(runtime, control);
    assert!(!scheduler.is_running().await);
    scheduler.start().await;
    scheduler.stop().await;
    scheduler.stop().await;
    assert!(!scheduler.is_running().await);
}
