//! vwaptrix — rolling-window VWAP watcher.
//!
//! Fetches OHLCV bars for a single instrument on a polling cadence, computes
//! three rolling volume-weighted average price series and derives above/below
//! signals from the latest price. The compute path is pure; the refresh loop
//! and data provider live in `core` and `services`.

pub mod config;
pub mod core;
pub mod indicators;
pub mod logging;
pub mod models;
pub mod render;
pub mod series;
pub mod services;
pub mod signals;
