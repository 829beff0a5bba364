//! Container benchmark phases
//!
//! Runs construction, positional retrieval, bulk removal and bulk insertion
//! in that order against one set of containers, writing one report line per
//! measurement as soon as it is taken.

use std::io::Write;

use anyhow::Result;
use listbench::constants::BULK_BATCH_SIZE;
use listbench::{Listing, ProcessProbe, Sample};

use crate::containers::{
    self, ContainerKind, Probe, RecordMap, RecordQueue, RecordStack,
};

/// Containers under benchmark, plus the map key snapshot taken while probing
pub struct ContainerSuite {
    pub map: RecordMap,
    pub stack: RecordStack,
    pub queue: RecordQueue,
    /// Map keys in iteration order as of the retrieval phase
    pub key_snapshot: Vec<String>,
}

impl ContainerSuite {
    /// Build all three containers, timing each construction pass
    pub fn construct(
        listing: &Listing,
        probe: &ProcessProbe,
        out: &mut impl Write,
    ) -> Result<Self> {
        tracing::debug!(records = listing.len(), "Construction phase");

        let (map, sample) = probe.measure("hashtable creation", || containers::build_map(listing))?;
        writeln!(out, "Hashtable creation took {:.6} seconds.", sample.seconds())?;
        writeln!(out, "Memory used for hashtable: {:.6} MB.\n", sample.memory_delta_mb)?;

        let (stack, sample) = probe.measure("stack creation", || containers::build_stack(listing))?;
        writeln!(out, "Stack creation (push all) took {:.6} seconds.", sample.seconds())?;
        writeln!(out, "Memory used for stack: {:.6} MB.\n", sample.memory_delta_mb)?;

        let (queue, sample) = probe.measure("queue creation", || containers::build_queue(listing))?;
        writeln!(out, "Queue creation (enqueue all) took {:.6} seconds.", sample.seconds())?;
        writeln!(out, "Memory used for queue: {:.6} MB.\n", sample.memory_delta_mb)?;

        Ok(Self {
            map,
            stack,
            queue,
            key_snapshot: Vec::new(),
        })
    }

    /// Report the records at each probe position of every container
    pub fn report_positions(&mut self, total: usize, out: &mut impl Write) -> Result<()> {
        let positions = containers::probe_positions(total);
        tracing::debug!(?positions, "Positional retrieval phase");
        writeln!(out, "Retrieving elements from these positions: {:?} \n", positions)?;

        write_probes(out, ContainerKind::Stack, &self.stack, &positions)?;

        let queue_snapshot = containers::snapshot_queue(&self.queue);
        write_probes(out, ContainerKind::Queue, &queue_snapshot, &positions)?;

        self.key_snapshot = containers::snapshot_keys(&self.map);
        write_probes(out, ContainerKind::Hashtable, &self.key_snapshot, &positions)?;

        Ok(())
    }

    /// Remove up to one batch from each container
    pub fn remove_batch(&mut self, probe: &ProcessProbe, out: &mut impl Write) -> Result<()> {
        let stack = &mut self.stack;
        let (removed, sample) =
            probe.measure("stack pop", || containers::pop_batch(stack, BULK_BATCH_SIZE))?;
        log_batch(ContainerKind::Stack, removed, &sample);
        writeln!(
            out,
            "Stack pop({}) took {:.6} seconds, memory change: {:.6} MB.",
            BULK_BATCH_SIZE,
            sample.seconds(),
            sample.memory_delta_mb
        )?;

        let queue = &mut self.queue;
        let (removed, sample) =
            probe.measure("queue popleft", || containers::dequeue_batch(queue, BULK_BATCH_SIZE))?;
        log_batch(ContainerKind::Queue, removed, &sample);
        writeln!(
            out,
            "Queue popleft({}) took {:.6} seconds, memory change: {:.6} MB.",
            BULK_BATCH_SIZE,
            sample.seconds(),
            sample.memory_delta_mb
        )?;

        let map = &mut self.map;
        let doomed = &self.key_snapshot[..BULK_BATCH_SIZE.min(self.key_snapshot.len())];
        let (removed, sample) =
            probe.measure("hashtable removal", || containers::remove_keys(map, doomed))?;
        log_batch(ContainerKind::Hashtable, removed, &sample);
        writeln!(
            out,
            "Hashtable removal of {} items took {:.6} seconds, memory change: {:.6} MB.\n",
            BULK_BATCH_SIZE,
            sample.seconds(),
            sample.memory_delta_mb
        )?;

        Ok(())
    }

    /// Insert one batch of synthetic records into each container
    pub fn insert_batch(&mut self, probe: &ProcessProbe, out: &mut impl Write) -> Result<()> {
        let records = containers::synthetic_records(BULK_BATCH_SIZE);

        let stack = &mut self.stack;
        let ((), sample) = probe.measure("stack push", || containers::push_all(stack, &records))?;
        log_batch(ContainerKind::Stack, records.len(), &sample);
        writeln!(
            out,
            "Stack push({}) took {:.6} seconds, memory change: {:.6} MB.",
            BULK_BATCH_SIZE,
            sample.seconds(),
            sample.memory_delta_mb
        )?;

        let queue = &mut self.queue;
        let ((), sample) =
            probe.measure("queue enqueue", || containers::enqueue_all(queue, &records))?;
        log_batch(ContainerKind::Queue, records.len(), &sample);
        writeln!(
            out,
            "Queue enqueue({}) took {:.6} seconds, memory change: {:.6} MB.",
            BULK_BATCH_SIZE,
            sample.seconds(),
            sample.memory_delta_mb
        )?;

        let map = &mut self.map;
        let ((), sample) =
            probe.measure("hashtable insertion", || containers::associate_all(map, &records))?;
        log_batch(ContainerKind::Hashtable, records.len(), &sample);
        writeln!(
            out,
            "Hashtable insertion of {} new items took {:.6} seconds, memory change: {:.6} MB.\n",
            BULK_BATCH_SIZE,
            sample.seconds(),
            sample.memory_delta_mb
        )?;

        Ok(())
    }
}

/// Run every phase against `listing`
pub fn run(listing: &Listing, probe: &ProcessProbe, out: &mut impl Write) -> Result<ContainerSuite> {
    writeln!(out, "Total lines read from file: {}", listing.len())?;

    let mut suite = ContainerSuite::construct(listing, probe, out)?;
    suite.report_positions(listing.len(), out)?;
    suite.remove_batch(probe, out)?;
    suite.insert_batch(probe, out)?;

    Ok(suite)
}

fn write_probes<S: AsRef<str>>(
    out: &mut impl Write,
    kind: ContainerKind,
    items: &[S],
    positions: &[usize],
) -> Result<()> {
    for &position in positions {
        match containers::probe_at(items, position) {
            Probe::Found(record) => writeln!(out, "{} position {}: {}", kind, position, record)?,
            Probe::OutOfRange => writeln!(out, "{} position {} out of range!", kind, position)?,
        }
    }
    writeln!(out)?;
    Ok(())
}

fn log_batch(kind: ContainerKind, affected: usize, sample: &Sample) {
    tracing::debug!(
        container = kind.label(),
        affected,
        elapsed_us = sample.elapsed.as_micros() as u64,
        "{}",
        sample.label
    );
}
