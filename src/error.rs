//! Error types shared by the benchmark binaries
//!
//! Only the failures that abort a run live here. Recoverable conditions
//! (a probe past the end of a container, a removal batch larger than the
//! container) are reported inline by the benchmarks and never become errors.

use std::io;
use std::path::PathBuf;

/// Library-wide error type
#[derive(Debug, thiserror::Error)]
pub enum BenchError {
    /// The listing file is missing or cannot be read
    #[error("Failed to read listing {}", .path.display())]
    ListingUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Resident memory of the running process cannot be sampled
    #[error("Process introspection unavailable: {0}")]
    ProcessIntrospection(String),
}

impl BenchError {
    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::ListingUnreadable { .. } => "LISTING_UNREADABLE",
            Self::ProcessIntrospection(_) => "PROCESS_INTROSPECTION",
        }
    }
}

/// Result type alias using BenchError
pub type BenchResult<T> = Result<T, BenchError>;
