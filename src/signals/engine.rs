//! Price-versus-VWAP signal classification.

use crate::models::Bar;
use serde::{Deserialize, Serialize};

/// Position of the latest price relative to a VWAP line.
///
/// `Undetermined` is a first-class value, not a failure: it covers an empty
/// series and an undefined last VWAP entry, and renders as a neutral
/// indicator rather than a stale positive/negative one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Signal {
    Above,
    Below,
    Undetermined,
}

impl Signal {
    pub fn is_determined(&self) -> bool {
        !matches!(self, Signal::Undetermined)
    }
}

/// Classify the last bar's price against the last VWAP value.
///
/// Strictly greater classifies as `Above`; equal or lower as `Below` (a tie
/// is "not above"). An empty series or an undefined last VWAP entry yields
/// `Undetermined`.
pub fn derive_signal(bars: &[Bar], vwap: &[Option<f64>]) -> Signal {
    let last_price = match bars.last() {
        Some(bar) => bar.price,
        None => return Signal::Undetermined,
    };
    match vwap.last() {
        Some(Some(value)) => {
            if last_price > *value {
                Signal::Above
            } else {
                Signal::Below
            }
        }
        _ => Signal::Undetermined,
    }
}
