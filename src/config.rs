//! Configuration Module
//!
//! The batcher takes its whole configuration from the command line:
//! a single positional bulk size. There is no configuration file.

use crate::error::ConfigError;
use std::ffi::OsStr;
use std::num::{IntErrorKind, NonZeroUsize};

/// Runtime configuration
///
/// # Fields
/// - `bulk_size`: Number of commands that seals a bulk in normal mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub bulk_size: NonZeroUsize,
}

impl Config {
    pub fn new(bulk_size: NonZeroUsize) -> Self {
        Self { bulk_size }
    }

    /// Build the configuration from positional arguments (program name excluded)
    ///
    /// Takes raw OS strings so that an argument which is not valid UTF-8 is
    /// reported as an invalid bulk size.
    ///
    /// # Returns
    /// * `Ok(Config)` if exactly one valid bulk size was given
    /// * `Err(ConfigError::Usage)` on missing or extra arguments
    /// * `Err` describing why the bulk size was rejected otherwise
    pub fn from_args<I, S>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let mut args = args.into_iter();
        let raw = match (args.next(), args.next()) {
            (Some(raw), None) => raw,
            _ => return Err(ConfigError::Usage),
        };

        let raw = raw.as_ref();
        let Some(text) = raw.to_str() else {
            let lossy = raw.to_string_lossy().into_owned();
            return Err(ConfigError::InvalidBulkSize(lossy));
        };

        Ok(Self::new(parse_bulk_size(text)?))
    }
}

/// Parse a bulk size literal
///
/// Accepts only a base-10 unsigned integer with no surrounding characters.
/// Zero is rejected: a bulk size of zero would seal every command alone.
pub fn parse_bulk_size(raw: &str) -> Result<NonZeroUsize, ConfigError> {
    if raw.starts_with('+') {
        return Err(ConfigError::InvalidBulkSize(raw.to_string()));
    }

    let value = raw.parse::<usize>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow => ConfigError::BulkSizeOutOfRange(raw.to_string()),
        _ => ConfigError::InvalidBulkSize(raw.to_string()),
    })?;

    match NonZeroUsize::new(value) {
        Some(size) => Ok(size),
        None => Err(ConfigError::ZeroBulkSize(raw.to_string())),
    }
}
