//! Indicator calculations, grouped by category.

pub mod volume;
