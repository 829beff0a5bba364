//! The three benchmarked containers and their primitive operations
//!
//! Positional access is a benchmark convenience, not a container capability:
//! the stack is indexed from the bottom, the queue is snapshotted into a
//! `Vec` first, and the map is probed through a snapshot of its keys in
//! iteration order. Duplicate records collapse in the map, so its key
//! positions do not line up with the listing when duplicates exist.

use std::collections::VecDeque;

use indexmap::IndexMap;
use listbench::Listing;
use listbench::constants::{FIXED_PROBE_POSITIONS, SYNTHETIC_RECORD_PREFIX, SYNTHETIC_TAG_BASE};

/// Record to tag. Iterates in first-seen insertion order.
pub type RecordMap = IndexMap<String, usize>;

/// Record stack; the tail is the top
pub type RecordStack = Vec<String>;

/// Record queue; the front is the head
pub type RecordQueue = VecDeque<String>;

/// Container kind, used for report labels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerKind {
    Hashtable,
    Stack,
    Queue,
}

impl ContainerKind {
    /// Label used in report lines
    pub fn label(&self) -> &'static str {
        match self {
            ContainerKind::Hashtable => "Hashtable",
            ContainerKind::Stack => "Stack",
            ContainerKind::Queue => "Queue",
        }
    }
}

impl std::fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Outcome of probing one position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Probe<'a> {
    Found(&'a str),
    OutOfRange,
}

// =============================================================================
// Construction
// =============================================================================

/// Associate every record with its 0-based load index; later duplicates win
pub fn build_map(listing: &Listing) -> RecordMap {
    let mut map = RecordMap::new();
    for (index, record) in listing.iter().enumerate() {
        map.insert(record.clone(), index);
    }
    map
}

/// Push every record
pub fn build_stack(listing: &Listing) -> RecordStack {
    let mut stack = RecordStack::new();
    for record in listing {
        stack.push(record.clone());
    }
    stack
}

/// Enqueue every record
pub fn build_queue(listing: &Listing) -> RecordQueue {
    let mut queue = RecordQueue::new();
    for record in listing {
        queue.push_back(record.clone());
    }
    queue
}

// =============================================================================
// Positional retrieval
// =============================================================================

/// Probe positions for a listing of `total` records: the fixed set, then `total`
pub fn probe_positions(total: usize) -> Vec<usize> {
    let mut positions = FIXED_PROBE_POSITIONS.to_vec();
    positions.push(total);
    positions
}

/// Element at a 1-based position of an indexable snapshot
pub fn probe_at<S: AsRef<str>>(items: &[S], position: usize) -> Probe<'_> {
    match position.checked_sub(1).and_then(|index| items.get(index)) {
        Some(item) => Probe::Found(item.as_ref()),
        None => Probe::OutOfRange,
    }
}

/// Queue contents in enqueue order, head first
pub fn snapshot_queue(queue: &RecordQueue) -> Vec<String> {
    queue.iter().cloned().collect()
}

/// Map keys in iteration order
pub fn snapshot_keys(map: &RecordMap) -> Vec<String> {
    map.keys().cloned().collect()
}

// =============================================================================
// Bulk removal
// =============================================================================

/// Pop up to `count` records from the top. Returns how many were removed.
pub fn pop_batch(stack: &mut RecordStack, count: usize) -> usize {
    let mut removed = 0;
    for _ in 0..count {
        if stack.pop().is_some() {
            removed += 1;
        }
    }
    removed
}

/// Dequeue up to `count` records from the head. Returns how many were removed.
pub fn dequeue_batch(queue: &mut RecordQueue, count: usize) -> usize {
    let mut removed = 0;
    for _ in 0..count {
        if queue.pop_front().is_some() {
            removed += 1;
        }
    }
    removed
}

/// Delete each key that is still present, keeping the order of the rest
pub fn remove_keys(map: &mut RecordMap, keys: &[String]) -> usize {
    let mut removed = 0;
    for key in keys {
        if map.shift_remove(key).is_some() {
            removed += 1;
        }
    }
    removed
}

// =============================================================================
// Bulk insertion
// =============================================================================

/// `new_file0`, `new_file1`, ... up to `count` records
pub fn synthetic_records(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| format!("{}{}", SYNTHETIC_RECORD_PREFIX, i))
        .collect()
}

pub fn push_all(stack: &mut RecordStack, records: &[String]) {
    for record in records {
        stack.push(record.clone());
    }
}

pub fn enqueue_all(queue: &mut RecordQueue, records: &[String]) {
    for record in records {
        queue.push_back(record.clone());
    }
}

/// Associate each record with the marker tag `sequence + SYNTHETIC_TAG_BASE`
pub fn associate_all(map: &mut RecordMap, records: &[String]) {
    for (i, record) in records.iter().enumerate() {
        map.insert(record.clone(), i + SYNTHETIC_TAG_BASE);
    }
}
