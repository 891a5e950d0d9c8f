use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building the configuration from the command line.
///
/// All of them are fatal and reported before any input is read.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("usage: bulk <bulk_size>")]
    Usage,

    #[error("invalid bulk size: {0}")]
    InvalidBulkSize(String),

    #[error("bulk size out of range: {0}")]
    BulkSizeOutOfRange(String),

    #[error("bulk size must be positive: {0}")]
    ZeroBulkSize(String),
}

/// Errors raised while emitting a bulk
#[derive(Error, Debug)]
pub enum EmitError {
    #[error("console write failed: {0}")]
    Console(#[source] io::Error),

    #[error("log file {} could not be written: {source}", path.display())]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
