//! Core application primitives (refresh cycle, scheduler).

pub mod runtime;
pub mod scheduler;

pub use runtime::*;
pub use scheduler::*;
