//! Listing loader
//!
//! Reads the listing file once at startup. Decoding is permissive: malformed
//! UTF-8 byte sequences are dropped, not replaced. Lines end at `\n`, `\r\n`
//! or a lone `\r`; each line is trimmed and blank lines are discarded.

use std::fs;
use std::path::Path;

use crate::error::{BenchError, BenchResult};
use crate::models::Listing;

/// Load and clean the listing at `path`
pub fn load_listing(path: impl AsRef<Path>) -> BenchResult<Listing> {
    let path = path.as_ref();

    let bytes = fs::read(path).map_err(|source| BenchError::ListingUnreadable {
        path: path.to_path_buf(),
        source,
    })?;

    let listing = parse_listing(&bytes);
    tracing::info!(
        path = %path.display(),
        bytes = bytes.len(),
        records = listing.len(),
        "Listing loaded"
    );

    Ok(listing)
}

/// Decode, split, trim and filter raw listing bytes
pub fn parse_listing(bytes: &[u8]) -> Listing {
    decode_dropping_invalid(bytes)
        .split(|c: char| c == '\n' || c == '\r')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Keep only the valid UTF-8 runs of `bytes`
fn decode_dropping_invalid(bytes: &[u8]) -> String {
    let mut text = String::with_capacity(bytes.len());
    let mut dropped = 0usize;

    for chunk in bytes.utf8_chunks() {
        text.push_str(chunk.valid());
        dropped += chunk.invalid().len();
    }

    if dropped > 0 {
        tracing::debug!(dropped, "Dropped malformed UTF-8 bytes from listing");
    }

    text
}
