//! Frontier of discovered but unexpanded nodes, ordered by `g + h`.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::graph::NodeId;

#[derive(Clone, Copy, Debug)]
pub struct OpenEntry {
    pub id: NodeId,
    pub f: f64,
    pub g: f64,
    // Insertion counter; breaks ties between equal `f` in favour of the earliest entry.
    seq: u64,
}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OpenEntry {}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap; invert so the smallest f (then smallest seq) pops first
        other.f.total_cmp(&self.f).then_with(|| other.seq.cmp(&self.seq))
    }
}

#[derive(Debug, Default)]
pub struct OpenList {
    heap: BinaryHeap<OpenEntry>,
    seq: u64,
}

impl OpenList {
    pub fn push(&mut self, id: NodeId, g: f64, h: f64) {
        let seq = self.seq;
        self.seq += 1;
        self.heap.push(OpenEntry { id, f: g + h, g, seq });
    }

    /// Removes and returns the entry with the lowest `g + h`.
    pub fn pop(&mut self) -> Option<OpenEntry> {
        self.heap.pop()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn clear(&mut self) {
        self.heap.clear();
        self.seq = 0;
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.heap.iter().any(|e| e.id == id)
    }
}
