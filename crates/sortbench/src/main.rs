//! Sortbench - Sort Benchmark
//!
//! Times bubble, selection and insertion sort over the listing, each on its
//! own copy.

mod algorithms;
mod runner;

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use listbench::{Config, ListingArgs, load_listing, telemetry};

#[derive(Parser)]
#[command(name = "sortbench")]
#[command(about = "Time bubble, selection and insertion sort over a file listing", long_about = None)]
#[command(version)]
struct Cli {
    #[command(flatten)]
    args: ListingArgs,
}

fn main() -> Result<()> {
    let config = Config::from(Cli::parse().args);
    telemetry::init_tracing(&config);

    tracing::info!("Starting sort benchmark");

    let listing = load_listing(&config.listing_path)
        .inspect_err(|e| tracing::error!(code = e.error_code(), "{}", e))
        .with_context(|| format!("cannot benchmark without {}", config.listing_path.display()))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let timings = runner::run(&listing, &mut out)?;
    out.flush()?;

    let total: f64 = timings.iter().map(|t| t.elapsed.as_secs_f64()).sum();
    tracing::info!(
        algorithms = timings.len(),
        items = listing.len(),
        total_seconds = total,
        "Sort benchmark complete"
    );

    Ok(())
}
