//! Operator configuration: the control-surface seam.
//!
//! Each refresh tick takes a fresh [`Config`] snapshot from a
//! [`ControlSurface`], so a changed setting applies on the next tick rather
//! than mid-cycle. The engine never mutates configuration.

use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Bounds for the refresh slider, in seconds.
pub const MIN_REFRESH_SECONDS: u64 = 10;
pub const MAX_REFRESH_SECONDS: u64 = 600;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unrecognized data period: {0}")]
    InvalidPeriod(String),
    #[error("unrecognized data interval: {0}")]
    InvalidInterval(String),
}

/// How far back the data source should reach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Period {
    OneDay,
    FiveDays,
    OneMonth,
    ThreeMonths,
    SixMonths,
    OneYear,
    TwoYears,
    FiveYears,
    TenYears,
    YearToDate,
    Max,
}

impl Period {
    pub const ALL: [Period; 11] = [
        Period::OneDay,
        Period::FiveDays,
        Period::OneMonth,
        Period::ThreeMonths,
        Period::SixMonths,
        Period::OneYear,
        Period::TwoYears,
        Period::FiveYears,
        Period::TenYears,
        Period::YearToDate,
        Period::Max,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Period::OneDay => "1d",
            Period::FiveDays => "5d",
            Period::OneMonth => "1mo",
            Period::ThreeMonths => "3mo",
            Period::SixMonths => "6mo",
            Period::OneYear => "1y",
            Period::TwoYears => "2y",
            Period::FiveYears => "5y",
            Period::TenYears => "10y",
            Period::YearToDate => "ytd",
            Period::Max => "max",
        }
    }
}

impl FromStr for Period {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Period::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| ConfigError::InvalidPeriod(s.to_string()))
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for Period {
    type Error = ConfigError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Period> for String {
    fn from(p: Period) -> Self {
        p.as_str().to_string()
    }
}

/// Bar sampling interval offered by the data source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Interval {
    OneMinute,
    TwoMinutes,
    FiveMinutes,
    FifteenMinutes,
    ThirtyMinutes,
    SixtyMinutes,
    NinetyMinutes,
    OneDay,
    FiveDays,
    OneWeek,
    OneMonth,
    ThreeMonths,
}

impl Interval {
    pub const ALL: [Interval; 12] = [
        Interval::OneMinute,
        Interval::TwoMinutes,
        Interval::FiveMinutes,
        Interval::FifteenMinutes,
        Interval::ThirtyMinutes,
        Interval::SixtyMinutes,
        Interval::NinetyMinutes,
        Interval::OneDay,
        Interval::FiveDays,
        Interval::OneWeek,
        Interval::OneMonth,
        Interval::ThreeMonths,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Interval::OneMinute => "1m",
            Interval::TwoMinutes => "2m",
            Interval::FiveMinutes => "5m",
            Interval::FifteenMinutes => "15m",
            Interval::ThirtyMinutes => "30m",
            Interval::SixtyMinutes => "60m",
            Interval::NinetyMinutes => "90m",
            Interval::OneDay => "1d",
            Interval::FiveDays => "5d",
            Interval::OneWeek => "1wk",
            Interval::OneMonth => "1mo",
            Interval::ThreeMonths => "3mo",
        }
    }
}

impl FromStr for Interval {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Interval::ALL
            .into_iter()
            .find(|i| i.as_str() == s)
            .ok_or_else(|| ConfigError::InvalidInterval(s.to_string()))
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for Interval {
    type Error = ConfigError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Interval> for String {
    fn from(i: Interval) -> Self {
        i.as_str().to_string()
    }
}

/// Snapshot of the operator-set configuration for one refresh cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub symbol: String,
    pub requested_count: usize,
    pub window1: usize,
    pub window2: usize,
    pub window3: usize,
    pub period: Period,
    pub interval: Interval,
    pub refresh_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            symbol: "GGAL".to_string(),
            requested_count: 100,
            window1: 14,
            window2: 26,
            window3: 50,
            period: Period::OneDay,
            interval: Interval::OneMinute,
            refresh_seconds: 60,
        }
    }
}

impl Config {
    /// Clamp out-of-range values to the bounds the control surface enforces.
    pub fn sanitized(mut self) -> Self {
        self.requested_count = self.requested_count.max(1);
        self.window1 = self.window1.max(1);
        self.window2 = self.window2.max(1);
        self.window3 = self.window3.max(1);
        self.refresh_seconds = self
            .refresh_seconds
            .clamp(MIN_REFRESH_SECONDS, MAX_REFRESH_SECONDS);
        self
    }

    pub fn windows(&self) -> [usize; 3] {
        [self.window1, self.window2, self.window3]
    }
}

/// Per-tick supplier of the current operator configuration.
pub trait ControlSurface: Send + Sync {
    fn snapshot(&self) -> Config;
}

/// Control surface backed by environment variables, re-read every tick.
pub struct EnvControlSurface;

impl EnvControlSurface {
    fn var_or<T: FromStr>(name: &str, default: T) -> T {
        match env::var(name) {
            Ok(raw) => match raw.parse() {
                Ok(value) => value,
                Err(_) => {
                    tracing::warn!(var = name, value = %raw, "ignoring unparseable setting");
                    default
                }
            },
            Err(_) => default,
        }
    }
}

impl ControlSurface for EnvControlSurface {
    fn snapshot(&self) -> Config {
        let defaults = Config::default();
        Config {
            symbol: env::var("TICKER").unwrap_or(defaults.symbol),
            requested_count: Self::var_or("RECORD_COUNT", defaults.requested_count),
            window1: Self::var_or("WINDOW1", defaults.window1),
            window2: Self::var_or("WINDOW2", defaults.window2),
            window3: Self::var_or("WINDOW3", defaults.window3),
            period: Self::var_or("DATA_PERIOD", defaults.period),
            interval: Self::var_or("DATA_INTERVAL", defaults.interval),
            refresh_seconds: Self::var_or("REFRESH_SECONDS", defaults.refresh_seconds),
        }
        .sanitized()
    }
}

/// Deployment environment, used to pick the log format.
pub fn get_environment() -> String {
    env::var("ENVIRONMENT").unwrap_or_else(|_| "sandbox".to_string())
}
