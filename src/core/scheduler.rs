//! Polling scheduler driving the refresh cycle.

use crate::config::ControlSurface;
use crate::core::runtime::WatchRuntime;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{error, info};

/// Runs the refresh loop: snapshot config, run one cycle, sleep, repeat.
///
/// Cycles are strictly sequential; a slow fetch delays the next tick rather
/// than overlapping it. A failed cycle is logged and the loop proceeds to
/// sleep — sleeping is never skipped, so a flapping data source retries at
/// the configured cadence instead of at full speed. The configuration is
/// re-read every tick, so operator changes apply on the next cycle.
pub struct RefreshScheduler {
    runtime: Arc<WatchRuntime>,
    control: Arc<dyn ControlSurface>,
    handle: Arc<RwLock<Option<tokio::task::JoinHandle<()>>>>,
}

impl RefreshScheduler {
    pub fn new(runtime: Arc<WatchRuntime>, control: Arc<dyn ControlSurface>) -> Self {
        Self {
            runtime,
            control,
            handle: Arc::new(RwLock::new(None)),
        }
    }

    /// Start the polling loop on a background task.
    pub async fn start(&self) {
        let runtime = self.runtime.clone();
        let control = self.control.clone();

        let handle = tokio::spawn(async move {
            info!("RefreshScheduler: started");
            loop {
                let config = control.snapshot().sanitized();

                match runtime.run_cycle(&config).await {
                    Ok(()) => {}
                    Err(e) => {
                        // Contained: no frame this cycle, retry next tick.
                        error!(symbol = %config.symbol, error = %e, "cycle failed: {}", e);
                    }
                }

                tokio::time::sleep(Duration::from_secs(config.refresh_seconds)).await;
            }
        });

        let mut slot = self.handle.write().await;
        *slot = Some(handle);
    }

    /// Stop the polling loop. In-flight sleeps are aborted.
    pub async fn stop(&self) {
        let mut handle = self.handle.write().await;
        if let Some(h) = handle.take() {
            h.abort();
            info!("RefreshScheduler: stopped");
        }
    }

    pub async fn is_running(&self) -> bool {
        let handle = self.handle.read().await;
        handle.as_ref().is_some_and(|h| !h.is_finished())
    }
}
