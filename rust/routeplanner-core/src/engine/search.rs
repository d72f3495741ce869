use tracing::debug;

use crate::errors::{Result, RouteError};
use crate::graph::{NodeId, RouteGraph};
use crate::models::{PathNode, RoutePath};
use crate::options::SearchOptions;

use super::context::SearchContext;
use super::heuristics::straight_line;
use super::neighbors::add_neighbors;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchState {
    Initialized,
    Running,
    Found,
    Exhausted,
}

/// A* between two endpoints resolved once against a graph.
///
/// The graph is only read; all per-node search fields live in the planner's
/// `SearchContext`, which is reset at the start of every `search` call.
pub struct RoutePlanner<'g, G: RouteGraph + ?Sized> {
    graph: &'g G,
    start: NodeId,
    end: NodeId,
    options: SearchOptions,
    ctx: SearchContext,
    state: SearchState,
}

impl<'g, G: RouteGraph + ?Sized> RoutePlanner<'g, G> {
    /// Coordinates are in the 0-100 input range.
    pub fn new(graph: &'g G, start_x: f64, start_y: f64, end_x: f64, end_y: f64) -> Result<Self> {
        Self::with_options(graph, start_x, start_y, end_x, end_y, SearchOptions::default())
    }

    pub fn with_options(
        graph: &'g G,
        start_x: f64,
        start_y: f64,
        end_x: f64,
        end_y: f64,
        options: SearchOptions,
    ) -> Result<Self> {
        let s = options.input_scale;
        let start = graph.find_closest_node(start_x * s, start_y * s)?;
        let end = graph.find_closest_node(end_x * s, end_y * s)?;
        Ok(Self::between(graph, start, end, options))
    }

    /// Planner for already resolved endpoints.
    pub fn between(graph: &'g G, start: NodeId, end: NodeId, options: SearchOptions) -> Self {
        Self {
            graph,
            start,
            end,
            options,
            ctx: SearchContext::new(graph.node_count()),
            state: SearchState::Initialized,
        }
    }

    pub fn start_node(&self) -> NodeId {
        self.start
    }

    pub fn end_node(&self) -> NodeId {
        self.end
    }

    pub fn state(&self) -> SearchState {
        self.state
    }

    pub fn context(&self) -> &SearchContext {
        &self.ctx
    }

    pub fn search(&mut self) -> Result<RoutePath> {
        self.initialize();
        self.state = SearchState::Running;
        debug!(start = %self.start, end = %self.end, policy = ?self.options.policy, "search started");

        let mut expanded = 0usize;
        while let Some(entry) = self.ctx.open.pop() {
            if self.ctx.is_stale(&entry) {
                continue;
            }
            expanded += 1;
            if entry.id == self.end {
                let (nodes, distance) = self.construct_final_path(entry.id)?;
                self.ctx.open.clear();
                self.state = SearchState::Found;
                debug!(expanded, path_len = nodes.len(), distance, "route found");
                return Ok(RoutePath { nodes, distance, expanded });
            }
            add_neighbors(self.graph, &mut self.ctx, entry.id, self.end, self.options.policy);
        }

        self.state = SearchState::Exhausted;
        debug!(expanded, "frontier exhausted");
        Err(RouteError::NoPathFound { start: self.start, end: self.end })
    }

    fn initialize(&mut self) {
        self.ctx.reset(self.graph.node_count());
        let h = straight_line(self.graph, self.start, self.end);
        self.ctx.discover(self.start, None, 0.0, h);
        self.ctx.open.push(self.start, 0.0, h);
        self.state = SearchState::Initialized;
    }

    /// Walks parents back to the start and returns the path in start-to-end
    /// order with its length in real-world units.
    fn construct_final_path(&self, end: NodeId) -> Result<(Vec<PathNode>, f64)> {
        let limit = self.graph.node_count();
        let mut nodes = Vec::new();
        let mut distance = 0.0;
        let mut current = end;
        while current != self.start {
            if nodes.len() >= limit {
                return Err(RouteError::BrokenParentChain { node: current });
            }
            let parent = self.ctx.parent(current).ok_or(RouteError::BrokenParentChain { node: current })?;
            distance += self.graph.distance(current, parent);
            nodes.push(self.snapshot(current));
            current = parent;
        }
        nodes.push(self.snapshot(current));
        nodes.reverse();
        Ok((nodes, distance * self.graph.metric_scale()))
    }

    fn snapshot(&self, id: NodeId) -> PathNode {
        let p = self.graph.position(id);
        PathNode { id, x: p.x, y: p.y }
    }
}

/// Resolves both endpoints (0-100 input range) and runs one A* query.
pub fn find_path<G: RouteGraph + ?Sized>(graph: &G, start_x: f64, start_y: f64, end_x: f64, end_y: f64) -> Result<RoutePath> {
    RoutePlanner::new(graph, start_x, start_y, end_x, end_y)?.search()
}
