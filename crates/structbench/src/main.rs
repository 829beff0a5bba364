//! Structbench - Container Benchmark
//!
//! Loads the listing into a map, a stack and a queue, then times
//! construction, positional retrieval, bulk removal and bulk insertion.

mod containers;
mod suite;

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use listbench::{Config, ListingArgs, ProcessProbe, load_listing, telemetry};

#[derive(Parser)]
#[command(name = "structbench")]
#[command(about = "Time map, stack and queue operations over a file listing", long_about = None)]
#[command(version)]
struct Cli {
    #[command(flatten)]
    args: ListingArgs,
}

fn main() -> Result<()> {
    let config = Config::from(Cli::parse().args);
    telemetry::init_tracing(&config);

    tracing::info!("Starting container benchmark");

    let listing = load_listing(&config.listing_path)
        .inspect_err(|e| tracing::error!(code = e.error_code(), "{}", e))
        .with_context(|| format!("cannot benchmark without {}", config.listing_path.display()))?;

    let probe = ProcessProbe::acquire()
        .inspect_err(|e| tracing::error!(code = e.error_code(), "{}", e))
        .context("resident memory sampling is required for the container benchmark")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let suite = suite::run(&listing, &probe, &mut out)?;
    out.flush()?;

    tracing::info!(
        map = suite.map.len(),
        stack = suite.stack.len(),
        queue = suite.queue.len(),
        "Container benchmark complete"
    );

    Ok(())
}
