//! Sort benchmark runner

use std::io::Write;
use std::time::Duration;

use anyhow::Result;
use listbench::{Listing, stopwatch};

use crate::algorithms::SortAlgorithm;

/// Timing of one algorithm over one copy of the listing
#[derive(Debug, Clone)]
pub struct SortTiming {
    pub algorithm: SortAlgorithm,
    pub elapsed: Duration,
    pub items: usize,
}

impl SortTiming {
    /// Report line for this timing
    pub fn report_line(&self) -> String {
        format!(
            "{} took {:.6} seconds to sort {} items.",
            self.algorithm.name(),
            self.elapsed.as_secs_f64(),
            self.items
        )
    }
}

/// Sort a fresh copy of `listing`. The copy is made before the clock starts.
pub fn time_algorithm(algorithm: SortAlgorithm, listing: &Listing) -> (Vec<String>, SortTiming) {
    let mut working = listing.to_vec();

    let ((), elapsed) = stopwatch(|| algorithm.sort(&mut working));

    let timing = SortTiming {
        algorithm,
        elapsed,
        items: working.len(),
    };
    tracing::debug!(
        algorithm = algorithm.name(),
        items = timing.items,
        elapsed_us = elapsed.as_micros() as u64,
        "Sort finished"
    );

    (working, timing)
}

/// Time every algorithm in turn, reporting each as it completes
pub fn run(listing: &Listing, out: &mut impl Write) -> Result<Vec<SortTiming>> {
    let mut timings = Vec::with_capacity(SortAlgorithm::ALL.len());

    for algorithm in SortAlgorithm::ALL {
        tracing::debug!(algorithm = algorithm.name(), items = listing.len(), "Sorting");
        let (_, timing) = time_algorithm(algorithm, listing);
        writeln!(out, "{}", timing.report_line())?;
        timings.push(timing);
    }

    Ok(timings)
}
