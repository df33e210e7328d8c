//! Yahoo Finance chart-API market data provider.

pub mod provider;
pub mod response;

pub use provider::YahooProvider;
