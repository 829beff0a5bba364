//! Listbench - Container and Sorting Benchmarks over a File Listing
//!
//! Shared pieces of the two benchmark programs:
//!
//! - `structbench` builds a map, a stack and a queue from the listing and
//!   times construction, positional retrieval, bulk removal and insertion.
//! - `sortbench` times bubble, selection and insertion sort over the listing.
//!
//! # Modules
//!
//! - **loader**: reads and cleans the listing file
//! - **probe**: wall clock and resident memory instrumentation
//! - **models**: the listing and timing samples
//! - **config** / **telemetry**: command line and logging setup

pub mod config;
pub mod constants;
pub mod error;
pub mod loader;
pub mod models;
pub mod probe;
pub mod telemetry;

// Re-export commonly used types
pub use config::{Config, ListingArgs};
pub use error::{BenchError, BenchResult};
pub use loader::{load_listing, parse_listing};
pub use models::{Listing, Sample};
pub use probe::{ProcessProbe, stopwatch};
