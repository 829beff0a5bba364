//! Wall clock and resident memory instrumentation
//!
//! [`ProcessProbe`] is the handle used for memory sampling. It is acquired
//! once when a benchmark starts and passed by reference to every measured
//! phase. Resident memory comes from `/proc/<pid>/statm` scaled by the system
//! page size; if either is unavailable acquisition fails instead of returning
//! a probe that reports zeros.
//!
//! All numbers are advisory. The memory delta reflects allocator and kernel
//! behaviour and is routinely zero or negative for small phases.

use std::fs;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use nix::unistd::{Pid, SysconfVar, getpid, sysconf};

use crate::constants::BYTES_PER_MB;
use crate::error::{BenchError, BenchResult};
use crate::models::Sample;

/// Handle on the running process for resident memory sampling
#[derive(Debug, Clone)]
pub struct ProcessProbe {
    pid: Pid,
    page_size: u64,
    statm_path: PathBuf,
}

impl ProcessProbe {
    /// Acquire the probe for the current process
    pub fn acquire() -> BenchResult<Self> {
        let pid = getpid();

        let page_size = sysconf(SysconfVar::PAGE_SIZE)
            .map_err(|e| BenchError::ProcessIntrospection(format!("sysconf(PAGE_SIZE): {}", e)))?
            .ok_or_else(|| {
                BenchError::ProcessIntrospection("page size not reported by the system".to_string())
            })?;
        let page_size = u64::try_from(page_size).map_err(|_| {
            BenchError::ProcessIntrospection(format!("invalid page size {}", page_size))
        })?;

        let probe = Self {
            pid,
            page_size,
            statm_path: PathBuf::from(format!("/proc/{}/statm", pid)),
        };

        // Read once up front so a missing /proc fails here and not mid-run
        let resident = probe.resident_bytes()?;
        tracing::debug!(
            pid = %pid,
            page_size,
            resident_bytes = resident,
            "Process probe acquired"
        );

        Ok(probe)
    }

    /// Process this probe samples
    pub fn pid(&self) -> Pid {
        self.pid
    }

    /// Current resident set size in bytes
    pub fn resident_bytes(&self) -> BenchResult<u64> {
        let statm = fs::read_to_string(&self.statm_path).map_err(|e| {
            BenchError::ProcessIntrospection(format!(
                "failed to read {}: {}",
                self.statm_path.display(),
                e
            ))
        })?;

        Ok(parse_resident_pages(&statm)? * self.page_size)
    }

    /// Current resident set size in megabytes
    pub fn resident_mb(&self) -> BenchResult<f64> {
        Ok(self.resident_bytes()? as f64 / BYTES_PER_MB)
    }

    /// Run `work` as one measured unit.
    ///
    /// Sampling order is start clock, start memory, work, end clock, end
    /// memory, so the first memory read is inside the timed window and the
    /// second is outside it.
    pub fn measure<T>(&self, label: &str, work: impl FnOnce() -> T) -> BenchResult<(T, Sample)> {
        let start = Instant::now();
        let start_mb = self.resident_mb()?;

        let output = work();

        let elapsed = start.elapsed();
        let end_mb = self.resident_mb()?;

        let sample = Sample::new(label, elapsed, end_mb - start_mb);
        tracing::trace!(
            label,
            elapsed_us = sample.elapsed.as_micros() as u64,
            memory_delta_mb = sample.memory_delta_mb,
            "Phase measured"
        );

        Ok((output, sample))
    }
}

/// Time `work` without sampling memory
pub fn stopwatch<T>(work: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let output = work();
    (output, start.elapsed())
}

/// Resident page count: the second field of `statm`
fn parse_resident_pages(statm: &str) -> BenchResult<u64> {
    let field = statm.split_whitespace().nth(1).ok_or_else(|| {
        BenchError::ProcessIntrospection(format!("malformed statm: {:?}", statm.trim()))
    })?;

    field.parse().map_err(|_| {
        BenchError::ProcessIntrospection(format!("invalid resident page count {:?}", field))
    })
}
