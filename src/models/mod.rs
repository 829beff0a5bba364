//! Domain models
//!
//! The loaded listing and the timing samples produced around measured phases.

pub mod benchmark;
pub mod listing;

pub use benchmark::*;
pub use listing::*;
