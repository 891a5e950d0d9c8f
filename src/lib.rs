//! This crate groups a stream of text commands into bulks.
//! Bulks are sealed by size, or by explicit `{` ... `}` dynamic blocks, and each
//! one is written to the console and to its own `bulk<epoch_seconds>.log` file.

pub mod batch; // Batching state machine and the line-driven processor.
pub mod config; // Command line configuration.
pub mod error; // Configuration and emission errors.
pub mod sink; // Console and log file output, time source.
pub mod types; // Tokens, modes and the sealed bulk.

// Re-export commonly used types and configurations for easier access.
pub use batch::{BatchEngine, BulkProcessor};
pub use config::Config;
pub use types::*;
