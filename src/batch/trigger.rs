//! Batch Trigger Module
//!
//! Decides when the pending buffer must be sealed by size.
//! Block delimiters are handled by the engine itself; this only covers the
//! size-based trigger, which is suppressed inside a dynamic block.

use crate::Mode;
use std::num::NonZeroUsize;

/// Size trigger
///
/// Fires exactly when the buffer has reached the bulk size in normal mode.
pub fn size_reached(mode: Mode, pending: usize, bulk_size: NonZeroUsize) -> bool {
    match mode {
        Mode::Normal => pending >= bulk_size.get(),
        Mode::DynamicBlock => false,
    }
}
