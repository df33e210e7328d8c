//! Unit tests for signal derivation

use chrono::{Duration, Utc};
use vwaptrix::indicators::volume::calculate_vwap;
use vwaptrix::models::Bar;
use vwaptrix::signals::{derive_signal, Signal};

fn bars_from(prices: &[f64]) -> Vec<Bar> {
    let start = Utc::now();
    prices
        .iter()
        .enumerate()
        .map(|(i, &p)| Bar::new(start + Duration::minutes(i as i64), p, 100.0))
        .collect()
}

#[test]
fn test_price_above_vwap() {
    let bars = bars_from(&[10.0, 10.0, 16.0]);
    let vwap = calculate_vwap(&bars, 3); // last = 12.0
    assert_eq!(derive_signal(&bars, &vwap), Signal::Above);
}

#[test]
fn test_price_below_vwap() {
    let bars = bars_from(&[16.0, 16.0, 10.0]);
    let vwap = calculate_vwap(&bars, 3); // last = 14.0
    assert_eq!(derive_signal(&bars, &vwap), Signal::Below);
}

#[test]
fn test_tie_classifies_as_below() {
    // Constant price: last price equals the VWAP exactly
    let bars = bars_from(&[12.0, 12.0, 12.0]);
    let vwap = calculate_vwap(&bars, 3);
    assert_eq!(vwap[2], Some(12.0));
    assert_eq!(derive_signal(&bars, &vwap), Signal::Below);
}

#[test]
fn test_empty_series_is_undetermined() {
    assert_eq!(derive_signal(&[], &[]), Signal::Undetermined);
}

#[test]
fn test_undefined_last_vwap_is_undetermined() {
    // Window longer than the series leaves every entry undefined
    let bars = bars_from(&[10.0, 11.0]);
    let vwap = calculate_vwap(&bars, 5);
    assert_eq!(derive_signal(&bars, &vwap), Signal::Undetermined);
}

#[test]
fn test_is_determined() {
    assert!(Signal::Above.is_determined());
    assert!(Signal::Below.is_determined());
    assert!(!Signal::Undetermined.is_determined());
}
