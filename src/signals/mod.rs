//! Signal derivation from indicator output.

pub mod engine;

pub use engine::{derive_signal, Signal};
