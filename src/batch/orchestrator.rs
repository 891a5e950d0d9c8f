//! Batch Orchestrator Module
//!
//! Connects the input stream, the batching engine and the output sink.
//!
//! # Flow
//! 1. Read one line (split on `\n`, nothing else stripped)
//! 2. Classify it into a `Token`
//! 3. Submit it to the `BatchEngine`
//! 4. Deliver any sealed bulk to the `Sink`
//! 5. On end of input, finalize the engine and deliver the remainder

use crate::{Bulk, Token, batch::BatchEngine, sink::Sink};
use anyhow::Context;
use std::io::BufRead;
use tracing::{debug, info};

/// Counters for one run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Lines read from input, control tokens included
    pub lines_read: u64,
    /// Payload commands accepted
    pub commands: u64,
    /// Bulks delivered to the sink
    pub bulks: u64,
}

/// Bulk processor
///
/// Drives the engine one line at a time and hands every sealed bulk to the
/// sink before the next line is read.
pub struct BulkProcessor<S> {
    engine: BatchEngine,
    sink: S,
    summary: RunSummary,
}

impl<S: Sink> BulkProcessor<S> {
    pub fn new(engine: BatchEngine, sink: S) -> Self {
        Self {
            engine,
            sink,
            summary: RunSummary::default(),
        }
    }

    /// Process a single input line
    pub fn process_line(&mut self, line: &str) -> anyhow::Result<()> {
        self.summary.lines_read += 1;

        let token = Token::classify(line);
        if matches!(token, Token::Payload(_)) {
            self.summary.commands += 1;
        }

        if let Some(bulk) = self.engine.submit(token) {
            self.emit(bulk)?;
        }
        Ok(())
    }

    /// Flush the remainder after input is exhausted
    pub fn finish(&mut self) -> anyhow::Result<RunSummary> {
        if let Some(bulk) = self.engine.finalize() {
            self.emit(bulk)?;
        }
        Ok(self.summary)
    }

    /// Consume `reader` until end of input, then finalize
    ///
    /// # Returns
    /// * `Ok(RunSummary)` once input is exhausted and the remainder is emitted
    /// * `Err` if reading input or writing to the console fails
    pub fn run<R: BufRead>(&mut self, mut reader: R) -> anyhow::Result<RunSummary> {
        info!(
            "Bulk processor starting (bulk_size={})",
            self.engine.bulk_size()
        );

        let mut buf = Vec::new();
        loop {
            buf.clear();
            let read = reader
                .read_until(b'\n', &mut buf)
                .context("failed to read input")?;
            if read == 0 {
                break;
            }

            if buf.last() == Some(&b'\n') {
                buf.pop();
            }
            let line = String::from_utf8_lossy(&buf);
            self.process_line(&line)?;
        }

        let summary = self.finish()?;
        info!(
            "Input exhausted: {} lines, {} commands, {} bulks",
            summary.lines_read, summary.commands, summary.bulks
        );
        Ok(summary)
    }

    pub fn engine(&self) -> &BatchEngine {
        &self.engine
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    fn emit(&mut self, bulk: Bulk) -> anyhow::Result<()> {
        self.sink
            .deliver(&bulk)
            .with_context(|| format!("failed to emit bulk #{}", bulk.sequence))?;

        self.summary.bulks += 1;
        debug!(
            "Bulk #{} emitted with {} commands",
            bulk.sequence,
            bulk.len()
        );
        Ok(())
    }
}
