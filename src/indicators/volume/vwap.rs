//! VWAP (Volume-Weighted Average Price) indicator.
//!
//! Rolling VWAP over a trailing window:
//! VWAP[i] = sum(price * volume over the window ending at i)
//!         / sum(volume over the window ending at i)

use crate::models::Bar;

/// Calculate the rolling VWAP series for a trailing window.
///
/// The output is parallel to `bars`, one entry per bar. An entry is `None`
/// when fewer than `window` bars of trailing history exist (a partial-window
/// average would not be comparable across windows of different lengths) or
/// when the rolling volume sum is zero.
///
/// Runs in O(n) via prefix sums; the series is recomputed on every poll tick.
pub fn calculate_vwap(bars: &[Bar], window: usize) -> Vec<Option<f64>> {
    let n = bars.len();
    let mut vwap = vec![None; n];
    if window == 0 || window > n {
        return vwap;
    }

    // Prefix sums of price*volume and volume; index i+1 covers bars[..=i].
    let mut cum_pv = vec![0.0; n + 1];
    let mut cum_vol = vec![0.0; n + 1];
    for (i, bar) in bars.iter().enumerate() {
        cum_pv[i + 1] = cum_pv[i] + bar.price * bar.volume;
        cum_vol[i + 1] = cum_vol[i] + bar.volume;
    }

    for (i, slot) in vwap.iter_mut().enumerate().skip(window - 1) {
        let pv_sum = cum_pv[i + 1] - cum_pv[i + 1 - window];
        let vol_sum = cum_vol[i + 1] - cum_vol[i + 1 - window];
        if vol_sum > 0.0 {
            *slot = Some(pv_sum / vol_sum);
        }
    }

    vwap
}
