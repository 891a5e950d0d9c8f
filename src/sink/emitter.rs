//! Dual-sink emitter
//!
//! Writes every bulk to the console and to a freshly created
//! `bulk<epoch_seconds>.log` file. Both receive the same rendered bytes.
//!
//! Two bulks sealed within the same second map to the same file name; the
//! later one replaces the earlier (last flush wins).

use super::clock::Clock;
use crate::{Bulk, error::EmitError, log_file_name};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Delivery interface for sealed bulks.
///
/// Synchronous: a slow sink blocks the reader, which keeps memory bounded.
pub trait Sink {
    fn deliver(&mut self, bulk: &Bulk) -> Result<(), EmitError>;
}

/// Production sink: console stream plus one log file per bulk
pub struct DualSinkEmitter<W, C> {
    console: W,
    clock: C,
    output_dir: PathBuf,
}

impl<W: Write, C: Clock> DualSinkEmitter<W, C> {
    /// # Arguments
    /// * `console` - Live stream receiving one line per bulk (stdout in the binary)
    /// * `clock` - Source of the epoch-seconds file identifier
    /// * `output_dir` - Directory in which log files are created
    pub fn new(console: W, clock: C, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            console,
            clock,
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Give back the console writer
    pub fn into_console(self) -> W {
        self.console
    }

    fn write_console(&mut self, line: &[u8]) -> Result<(), EmitError> {
        self.console.write_all(line).map_err(EmitError::Console)?;
        self.console.flush().map_err(EmitError::Console)
    }

    /// Create (or truncate) the artifact and write the line. The file is
    /// closed when it goes out of scope, before this returns.
    fn write_log_file(&self, path: &Path, line: &[u8]) -> Result<(), EmitError> {
        let to_error = |source| EmitError::File {
            path: path.to_path_buf(),
            source,
        };
        let mut file = File::create(path).map_err(to_error)?;
        file.write_all(line).map_err(to_error)?;
        file.flush().map_err(to_error)
    }
}

impl<W: Write, C: Clock> Sink for DualSinkEmitter<W, C> {
    fn deliver(&mut self, bulk: &Bulk) -> Result<(), EmitError> {
        if bulk.is_empty() {
            return Ok(());
        }

        let name = log_file_name(self.clock.epoch_seconds());
        let path = self.output_dir.join(name);
        let line = bulk.render();

        self.write_console(line.as_bytes())?;

        // File sink is best effort: the bulk has already reached the console
        match self.write_log_file(&path, line.as_bytes()) {
            Ok(()) => debug!("Bulk #{} written to {}", bulk.sequence, path.display()),
            Err(e) => warn!("Bulk #{} emitted to console only: {}", bulk.sequence, e),
        }

        Ok(())
    }
}
