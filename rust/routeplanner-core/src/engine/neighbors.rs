use crate::graph::{NodeId, RouteGraph};
use crate::options::DiscoveryPolicy;

use super::context::SearchContext;
use super::heuristics::straight_line;

/// Expands `current`: every neighbor it newly discovers gets `current` as
/// parent, its cost and heuristic recorded, and is queued on the frontier.
///
/// Under `FirstDiscovery` visited neighbors are skipped even when the path
/// through `current` is cheaper. Under `Relax` such a neighbor is updated and
/// queued again; the older entry is dropped as stale when popped.
///
/// Returns the number of frontier insertions.
pub fn add_neighbors<G: RouteGraph + ?Sized>(
    graph: &G,
    ctx: &mut SearchContext,
    current: NodeId,
    goal: NodeId,
    policy: DiscoveryPolicy,
) -> usize {
    let g_current = ctx.g(current);
    let mut queued = 0;
    for &neighbor in graph.neighbors(current) {
        let g = g_current + graph.distance(current, neighbor);
        if ctx.is_visited(neighbor) {
            match policy {
                DiscoveryPolicy::FirstDiscovery => continue,
                DiscoveryPolicy::Relax if g >= ctx.g(neighbor) => continue,
                DiscoveryPolicy::Relax => {}
            }
        }
        let h = straight_line(graph, neighbor, goal);
        ctx.discover(neighbor, Some(current), g, h);
        ctx.open.push(neighbor, g, h);
        queued += 1;
    }
    queued
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;
    use crate::graph::{Road, RoadKind, RouteModel};

    fn star() -> RouteModel {
        // 0 in the middle, 1..=3 around it.
        let points = vec![
            Point::new(0.5, 0.5),
            Point::new(0.0, 0.5),
            Point::new(1.0, 0.5),
            Point::new(0.5, 1.0),
        ];
        let roads = vec![
            Road { kind: RoadKind::Residential, nodes: vec![NodeId(1), NodeId(0), NodeId(2)] },
            Road { kind: RoadKind::Residential, nodes: vec![NodeId(0), NodeId(3)] },
        ];
        RouteModel::from_parts(points, roads, 1.0)
    }

    fn started(m: &RouteModel, start: NodeId, goal: NodeId) -> SearchContext {
        let mut ctx = SearchContext::new(m.node_count());
        ctx.discover(start, None, 0.0, straight_line(m, start, goal));
        ctx
    }

    #[test]
    fn discovers_unvisited_neighbors_with_costs() {
        let m = star();
        let mut ctx = started(&m, NodeId(0), NodeId(2));
        let queued = add_neighbors(&m, &mut ctx, NodeId(0), NodeId(2), DiscoveryPolicy::FirstDiscovery);
        assert_eq!(queued, 3);
        for n in [1, 2, 3] {
            assert!(ctx.is_visited(NodeId(n)));
            assert_eq!(ctx.parent(NodeId(n)), Some(NodeId(0)));
            assert!((ctx.g(NodeId(n)) - 0.5).abs() < 1e-12);
        }
        assert_eq!(ctx.h(NodeId(2)), 0.0);
        assert!((ctx.h(NodeId(1)) - 1.0).abs() < 1e-12);
        // The expanded node itself is left untouched.
        assert_eq!(ctx.parent(NodeId(0)), None);
        assert_eq!(ctx.g(NodeId(0)), 0.0);
    }

    #[test]
    fn expanding_twice_adds_no_duplicates() {
        let m = star();
        let mut ctx = started(&m, NodeId(0), NodeId(2));
        add_neighbors(&m, &mut ctx, NodeId(0), NodeId(2), DiscoveryPolicy::FirstDiscovery);
        let len = ctx.open.len();
        let again = add_neighbors(&m, &mut ctx, NodeId(0), NodeId(2), DiscoveryPolicy::FirstDiscovery);
        assert_eq!(again, 0);
        assert_eq!(ctx.open.len(), len);
    }

    #[test]
    fn start_node_is_never_rediscovered() {
        let m = star();
        let mut ctx = started(&m, NodeId(0), NodeId(2));
        add_neighbors(&m, &mut ctx, NodeId(0), NodeId(2), DiscoveryPolicy::FirstDiscovery);
        add_neighbors(&m, &mut ctx, NodeId(1), NodeId(2), DiscoveryPolicy::Relax);
        assert_eq!(ctx.parent(NodeId(0)), None);
        assert!(!ctx.open.contains(NodeId(0)));
    }

    #[test]
    fn relax_rewrites_only_on_strict_improvement() {
        let m = star();
        let mut ctx = started(&m, NodeId(0), NodeId(2));
        // Pretend node 3 was reached by a long detour.
        ctx.discover(NodeId(3), Some(NodeId(1)), 10.0, 0.0);
        let first = add_neighbors(&m, &mut ctx, NodeId(0), NodeId(2), DiscoveryPolicy::FirstDiscovery);
        assert_eq!(first, 2);
        assert_eq!(ctx.g(NodeId(3)), 10.0);

        let relaxed = add_neighbors(&m, &mut ctx, NodeId(0), NodeId(2), DiscoveryPolicy::Relax);
        assert_eq!(relaxed, 1);
        assert_eq!(ctx.parent(NodeId(3)), Some(NodeId(0)));
        assert!((ctx.g(NodeId(3)) - 0.5).abs() < 1e-12);
    }
}
