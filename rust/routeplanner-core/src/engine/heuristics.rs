use crate::graph::{NodeId, RouteGraph};

/// Straight-line distance from `node` to `goal`. Admissible whenever edge
/// weights are themselves straight-line segment lengths.
#[inline]
pub fn straight_line<G: RouteGraph + ?Sized>(graph: &G, node: NodeId, goal: NodeId) -> f64 {
    graph.distance(node, goal)
}
