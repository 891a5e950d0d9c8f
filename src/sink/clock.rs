//! Time source used to name log artifacts.

use std::cell::Cell;

/// Supplies the epoch-seconds identifier for a flush
pub trait Clock {
    fn epoch_seconds(&self) -> i64;
}

/// Wall-clock time at one-second resolution
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn epoch_seconds(&self) -> i64 {
        chrono::Utc::now().timestamp()
    }
}

/// Clock returning a fixed second, optionally advanced by hand.
///
/// Useful for deterministic artifact names.
#[derive(Debug, Clone, Default)]
pub struct FixedClock {
    now: Cell<i64>,
}

impl FixedClock {
    pub fn new(epoch_seconds: i64) -> Self {
        Self {
            now: Cell::new(epoch_seconds),
        }
    }

    pub fn advance(&self, seconds: i64) {
        self.now.set(self.now.get() + seconds);
    }
}

impl Clock for FixedClock {
    fn epoch_seconds(&self) -> i64 {
        self.now.get()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn epoch_seconds(&self) -> i64 {
        (**self).epoch_seconds()
    }
}
