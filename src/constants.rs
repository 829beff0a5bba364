//! Benchmark-wide constants
//!
//! Constants are grouped by the phase that uses them.

// =============================================================================
// INPUT
// =============================================================================

/// Listing file read when no path is given on the command line
pub const DEFAULT_LISTING_PATH: &str = "listing.txt";

// =============================================================================
// POSITIONAL RETRIEVAL
// =============================================================================

/// Fixed 1-based probe positions; the listing length is appended at runtime
pub const FIXED_PROBE_POSITIONS: [usize; 4] = [1, 100, 1000, 5000];

// =============================================================================
// BULK PHASES
// =============================================================================

/// Number of removals and insertions per bulk phase
pub const BULK_BATCH_SIZE: usize = 10;

/// Prefix of the synthetic records inserted during the bulk insertion phase
pub const SYNTHETIC_RECORD_PREFIX: &str = "new_file";

/// Offset added to the sequence number to form a synthetic map tag
pub const SYNTHETIC_TAG_BASE: usize = 999_999;

// =============================================================================
// UNITS
// =============================================================================

/// Bytes in one megabyte (binary)
pub const BYTES_PER_MB: f64 = 1024.0 * 1024.0;
