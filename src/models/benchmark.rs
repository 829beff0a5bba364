//! Benchmark sample models

use std::time::Duration;

/// One measured phase: printed right away, never aggregated
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    /// What was measured
    pub label: String,
    /// Wall clock time of the phase
    pub elapsed: Duration,
    /// Resident memory after minus before, in megabytes. May be zero or negative.
    pub memory_delta_mb: f64,
}

impl Sample {
    /// Create a new sample
    pub fn new(label: impl Into<String>, elapsed: Duration, memory_delta_mb: f64) -> Self {
        Self {
            label: label.into(),
            elapsed,
            memory_delta_mb,
        }
    }

    /// Elapsed wall clock time in seconds
    pub fn seconds(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seconds_keeps_microseconds() {
        let sample = Sample::new("stack creation", Duration::from_micros(1_500_250), -0.25);
        assert_eq!(format!("{:.6}", sample.seconds()), "1.500250");
        assert_eq!(format!("{:.6}", sample.memory_delta_mb), "-0.250000");
        assert_eq!(sample.label, "stack creation");
    }
}
