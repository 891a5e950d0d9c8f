//! Output Module
//!
//! - Sink: where sealed bulks are delivered
//! - DualSinkEmitter: console stream plus a per-bulk log file
//! - Clock: injected time source naming the log files

mod clock;
mod emitter;

pub use clock::{Clock, FixedClock, SystemClock};
pub use emitter::{DualSinkEmitter, Sink};
