//! Batch Creation Module
//!
//! This module handles bulk creation and sealing:
//! - BatchEngine: Mode-aware state machine sealing commands into bulks
//! - Trigger: Size-based sealing decision
//! - BulkProcessor: Feeds input lines through the engine into a sink

mod engine;
pub mod orchestrator;
mod trigger;


pub use engine::BatchEngine;
pub use orchestrator::{BulkProcessor, RunSummary};
