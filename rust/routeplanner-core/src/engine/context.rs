use crate::graph::NodeId;

use super::open_list::{OpenEntry, OpenList};

/// Per-query search fields for every node, indexed by `NodeId`.
///
/// Entries are tagged with the generation that wrote them, so `reset` clears
/// all nodes at once by bumping the generation instead of rewriting the arrays.
pub struct SearchContext {
    g: Vec<f64>,
    h: Vec<f64>,
    parent: Vec<Option<NodeId>>,
    visited_gen: Vec<u32>,
    generation: u32,
    pub open: OpenList,
}

impl SearchContext {
    pub fn new(nodes: usize) -> Self {
        Self {
            g: vec![0.0; nodes],
            h: vec![0.0; nodes],
            parent: vec![None; nodes],
            visited_gen: vec![0; nodes],
            generation: 1,
            open: OpenList::default(),
        }
    }

    pub fn reset(&mut self, nodes: usize) {
        if self.g.len() != nodes {
            *self = Self::new(nodes);
        } else {
            self.generation = self.generation.wrapping_add(1);
            if self.generation == 0 {
                self.visited_gen.fill(0);
                self.generation = 1;
            }
            self.open.clear();
        }
    }

    pub fn node_count(&self) -> usize {
        self.g.len()
    }

    #[inline]
    pub fn is_visited(&self, id: NodeId) -> bool {
        self.visited_gen[id.index()] == self.generation
    }

    /// Best known cost from the start; 0 for undiscovered nodes.
    #[inline]
    pub fn g(&self, id: NodeId) -> f64 {
        if self.is_visited(id) { self.g[id.index()] } else { 0.0 }
    }

    #[inline]
    pub fn h(&self, id: NodeId) -> f64 {
        if self.is_visited(id) { self.h[id.index()] } else { 0.0 }
    }

    #[inline]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        if self.is_visited(id) { self.parent[id.index()] } else { None }
    }

    /// Records the search fields of `id` and marks it visited. Does not queue it.
    pub fn discover(&mut self, id: NodeId, parent: Option<NodeId>, g: f64, h: f64) {
        let u = id.index();
        self.visited_gen[u] = self.generation;
        self.g[u] = g;
        self.h[u] = h;
        self.parent[u] = parent;
    }

    /// An entry is stale when a cheaper path to its node was recorded after it was queued.
    #[inline]
    pub fn is_stale(&self, entry: &OpenEntry) -> bool {
        entry.g > self.g(entry.id)
    }
}
