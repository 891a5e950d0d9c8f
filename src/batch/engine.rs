//! Batch Engine Module
//!
//! The batching state machine. Classified tokens go in, sealed bulks come out.
//! The engine performs no I/O; emitting a bulk is the orchestrator's job.
//!
//! | State        | Event              | Action              | Next State   |
//! |--------------|--------------------|---------------------|--------------|
//! | Normal       | payload, buffer→N  | append, seal        | Normal       |
//! | Normal       | payload, buffer<N  | append              | Normal       |
//! | Normal       | `{`                | seal if non-empty   | DynamicBlock |
//! | Normal       | `}`                | ignore              | Normal       |
//! | DynamicBlock | payload            | append              | DynamicBlock |
//! | DynamicBlock | `{`                | ignore              | DynamicBlock |
//! | DynamicBlock | `}`                | seal                | Normal       |
//! | any          | EOF                | seal if non-empty   | terminal     |

use super::trigger;
use crate::{Bulk, Mode, Token};
use std::num::NonZeroUsize;
use tracing::debug;

/// Bulk creation engine
///
/// Accumulates commands and seals them into bulks according to the current
/// mode. Maintains a sequential bulk counter.
#[derive(Debug)]
pub struct BatchEngine {
    /// Commands per bulk in normal mode
    bulk_size: NonZeroUsize,
    mode: Mode,
    /// Commands waiting to be sealed, in arrival order
    pending: Vec<String>,
    /// Sequence number for the next sealed bulk (starts at 1)
    next_sequence: u64,
}

impl BatchEngine {
    pub fn new(bulk_size: NonZeroUsize) -> Self {
        Self {
            bulk_size,
            mode: Mode::Normal,
            pending: Vec::new(),
            next_sequence: 1,
        }
    }

    /// Feed one classified input line
    ///
    /// # Returns
    /// `Some(Bulk)` if this token sealed a bulk, `None` otherwise.
    /// A single token seals at most one bulk.
    pub fn submit(&mut self, token: Token) -> Option<Bulk> {
        match token {
            Token::Open => self.open_block(),
            Token::Close => self.close_block(),
            Token::Payload(command) => self.push(command),
        }
    }

    /// Seal whatever is left once input is exhausted, whatever the mode
    pub fn finalize(&mut self) -> Option<Bulk> {
        if self.mode == Mode::DynamicBlock {
            debug!("Input ended inside an unterminated block");
        }
        self.seal()
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn pending(&self) -> &[String] {
        &self.pending
    }

    pub fn bulk_size(&self) -> NonZeroUsize {
        self.bulk_size
    }

    fn open_block(&mut self) -> Option<Bulk> {
        if self.mode == Mode::DynamicBlock {
            // No nesting
            debug!("Ignoring nested block open");
            return None;
        }

        // Close out the partial size-based bulk before the block starts
        let sealed = self.seal();
        self.mode = Mode::DynamicBlock;
        debug!("Entered dynamic block");
        sealed
    }

    fn close_block(&mut self) -> Option<Bulk> {
        if self.mode == Mode::Normal {
            debug!("Ignoring block close outside a block");
            return None;
        }

        self.mode = Mode::Normal;
        debug!(
            "Left dynamic block with {} pending commands",
            self.pending.len()
        );
        self.seal()
    }

    fn push(&mut self, command: String) -> Option<Bulk> {
        self.pending.push(command);

        if trigger::size_reached(self.mode, self.pending.len(), self.bulk_size) {
            self.seal()
        } else {
            None
        }
    }

    /// Drain the pending buffer into a bulk. Empty buffer seals nothing.
    fn seal(&mut self) -> Option<Bulk> {
        if self.pending.is_empty() {
            return None;
        }

        let commands = std::mem::take(&mut self.pending);
        let bulk = Bulk {
            sequence: self.next_sequence,
            commands,
        };

        // Increment for next bulk
        self.next_sequence += 1;
        Some(bulk)
    }
}
