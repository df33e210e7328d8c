//! Render seam: everything a presentation surface needs for one cycle.

use crate::models::Bar;
use crate::signals::Signal;
use serde::{Deserialize, Serialize};
use tracing::info;

/// One VWAP line with its display label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VwapLine {
    pub window: usize,
    pub label: String,
    pub values: Vec<Option<f64>>,
}

impl VwapLine {
    pub fn new(window: usize, values: Vec<Option<f64>>) -> Self {
        Self {
            window,
            label: format!("VWAP ({window} periods)"),
            values,
        }
    }
}

/// One per-window signal with its display label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalIndicator {
    pub window: usize,
    pub signal: Signal,
    pub label: String,
}

impl SignalIndicator {
    pub fn new(window: usize, signal: Signal) -> Self {
        let label = match signal {
            Signal::Above => format!("Price above VWAP ({window} periods)"),
            Signal::Below => format!("Price below VWAP ({window} periods)"),
            Signal::Undetermined => format!("No VWAP signal ({window} periods)"),
        };
        Self {
            window,
            signal,
            label,
        }
    }
}

/// Everything one refresh cycle hands to the presentation surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    pub title: String,
    pub bars: Vec<Bar>,
    pub lines: Vec<VwapLine>,
    pub signals: Vec<SignalIndicator>,
}

pub trait FrameRenderer: Send + Sync {
    fn render(&self, frame: &RenderFrame);
}

/// Renderer that writes the frame summary to the log stream.
///
/// The interactive chart surface is a separate collaborator; this is the
/// built-in headless rendering.
pub struct LogRenderer;

impl FrameRenderer for LogRenderer {
    fn render(&self, frame: &RenderFrame) {
        let last_price = frame.bars.last().map(|b| b.price);
        info!(
            title = %frame.title,
            bars = frame.bars.len(),
            last_price = ?last_price,
            "{}",
            frame.title
        );
        for line in &frame.lines {
            let last = line.values.last().copied().flatten();
            info!(window = line.window, value = ?last, "{}", line.label);
        }
        for indicator in &frame.signals {
            match indicator.signal {
                Signal::Above => info!(window = indicator.window, signal = "above", "{}", indicator.label),
                Signal::Below => info!(window = indicator.window, signal = "below", "{}", indicator.label),
                Signal::Undetermined => {
                    info!(window = indicator.window, signal = "undetermined", "{}", indicator.label)
                }
            }
        }
    }
}
