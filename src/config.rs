//! Run configuration
//!
//! Both benchmarks accept the same command line: an optional listing path and
//! a verbosity counter. There is no configuration file; the only environment
//! variable consulted is `RUST_LOG`, and only for the log filter.

use std::path::PathBuf;

use clap::Args;

use crate::constants::DEFAULT_LISTING_PATH;

/// Command line arguments shared by the benchmark binaries
#[derive(Debug, Clone, Args)]
pub struct ListingArgs {
    /// Path to the listing file (one record per line)
    #[arg(value_name = "LISTING")]
    pub listing: Option<PathBuf>,

    /// Enable verbose logging (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Benchmark run configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Listing file to load
    pub listing_path: PathBuf,
    /// Number of `-v` flags given
    pub verbosity: u8,
}

impl Config {
    /// Create a configuration, falling back to the default listing path
    pub fn new(listing_path: Option<PathBuf>, verbosity: u8) -> Self {
        Self {
            listing_path: listing_path.unwrap_or_else(|| PathBuf::from(DEFAULT_LISTING_PATH)),
            verbosity,
        }
    }

    /// Log filter directive used when `RUST_LOG` is not set
    pub fn log_filter(&self) -> &'static str {
        match self.verbosity {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(None, 0)
    }
}

impl From<ListingArgs> for Config {
    fn from(args: ListingArgs) -> Self {
        Self::new(args.listing, args.verbose)
    }
}
