use bulk::{
    BatchEngine, BulkProcessor,
    config::Config,
    sink::{DualSinkEmitter, SystemClock},
};
use std::{env, io};
use tracing::debug;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Entry point: `bulk <bulk_size>`
///
/// Reads commands from stdin until end of input. Bulk lines go to stdout,
/// diagnostics go to stderr.
fn main() -> anyhow::Result<()> {
    init_logging();

    // Rejected arguments end the process before any input is read
    let config = Config::from_args(env::args_os().skip(1))?;
    debug!("Starting with config: {:?}", config);

    // Log files land in the working directory
    let emitter = DualSinkEmitter::new(io::stdout().lock(), SystemClock, ".");
    let mut processor = BulkProcessor::new(BatchEngine::new(config.bulk_size), emitter);

    processor.run(io::stdin().lock())?;

    Ok(())
}

/// Logs go to stderr so stdout carries bulk lines only.
/// `RUST_LOG` overrides the default `warn` level.
fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}
