//! Shared data models spanning the engine layers.

pub mod bar;

pub use bar::Bar;
