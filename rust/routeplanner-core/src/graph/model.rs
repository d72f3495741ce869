use std::sync::OnceLock;

use rstar::primitives::GeomWithData;
use rstar::RTree;
use rustc_hash::FxHashMap;
use tracing::debug;

use crate::errors::{Result, RouteError};
use crate::geometry::Point;

use super::map_data::{MapData, RoadKind};
use super::{NodeId, RouteGraph};

type IndexedPoint = GeomWithData<[f64; 2], usize>;

/// A routable way: an ordered run of nodes.
#[derive(Clone, Debug, PartialEq)]
pub struct Road {
    pub kind: RoadKind,
    pub nodes: Vec<NodeId>,
}

/// Road graph built from map data. Node positions are normalized to [0, 1];
/// adjacency is discovered per node on first request and cached.
pub struct RouteModel {
    points: Vec<Point>,
    roads: Vec<Road>,
    node_to_roads: Vec<Vec<usize>>,
    neighbors: Vec<OnceLock<Vec<NodeId>>>,
    rtree: RTree<IndexedPoint>,
    metric_scale: f64,
}

impl RouteModel {
    pub fn from_map(map: &MapData) -> Result<Self> {
        let projection = map.project()?;
        let mut index: FxHashMap<i64, usize> = FxHashMap::default();
        index.reserve(map.nodes.len());
        for (i, n) in map.nodes.iter().enumerate() {
            index.insert(n.id, i);
        }

        let mut roads = Vec::with_capacity(map.ways.len());
        for way in &map.ways {
            let mut nodes = Vec::with_capacity(way.nodes.len());
            for &node in &way.nodes {
                let &i = index.get(&node).ok_or(RouteError::UnknownNodeRef { way: way.id, node })?;
                nodes.push(NodeId(i));
            }
            roads.push(Road { kind: way.kind, nodes });
        }
        debug!(nodes = map.nodes.len(), ways = roads.len(), metric_scale = projection.metric_scale, "map projected");
        Ok(Self::from_parts(projection.points, roads, projection.metric_scale))
    }

    /// Builds a model from positions already in graph coordinates.
    pub fn from_parts(points: Vec<Point>, roads: Vec<Road>, metric_scale: f64) -> Self {
        let mut node_to_roads = vec![Vec::new(); points.len()];
        for (ri, road) in roads.iter().enumerate() {
            if !road.kind.is_routable() {
                continue;
            }
            for &n in &road.nodes {
                let entry = &mut node_to_roads[n.index()];
                if entry.last() != Some(&ri) {
                    entry.push(ri);
                }
            }
        }
        let routable: Vec<IndexedPoint> = points
            .iter()
            .enumerate()
            .filter(|(i, _)| !node_to_roads[*i].is_empty())
            .map(|(i, p)| GeomWithData::new([p.x, p.y], i))
            .collect();
        let neighbors = (0..points.len()).map(|_| OnceLock::new()).collect();
        Self { rtree: RTree::bulk_load(routable), points, roads, node_to_roads, neighbors, metric_scale }
    }

    pub fn roads(&self) -> &[Road] {
        &self.roads
    }

    /// Routable roads that pass through `id`.
    pub fn roads_of(&self, id: NodeId) -> impl Iterator<Item = &Road> + '_ {
        self.node_to_roads[id.index()].iter().map(move |&ri| &self.roads[ri])
    }

    /// Whether adjacency for `id` has already been computed.
    pub fn neighbors_discovered(&self, id: NodeId) -> bool {
        self.neighbors[id.index()].get().is_some()
    }

    fn discover_neighbors(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        for road in self.roads_of(id) {
            for (i, &n) in road.nodes.iter().enumerate() {
                if n != id {
                    continue;
                }
                if i > 0 {
                    out.push(road.nodes[i - 1]);
                }
                if let Some(&next) = road.nodes.get(i + 1) {
                    out.push(next);
                }
            }
        }
        out.retain(|&n| n != id);
        out.sort_unstable();
        out.dedup();
        out
    }
}

impl RouteGraph for RouteModel {
    fn node_count(&self) -> usize {
        self.points.len()
    }

    fn position(&self, id: NodeId) -> Point {
        self.points[id.index()]
    }

    fn find_closest_node(&self, x: f64, y: f64) -> Result<NodeId> {
        if !x.is_finite() || !y.is_finite() {
            return Err(RouteError::InvalidCoordinate { x, y });
        }
        self.rtree
            .nearest_neighbor(&[x, y])
            .map(|p| NodeId(p.data))
            .ok_or(RouteError::EmptyGraph)
    }

    fn neighbors(&self, id: NodeId) -> &[NodeId] {
        self.neighbors[id.index()].get_or_init(|| self.discover_neighbors(id))
    }

    fn metric_scale(&self) -> f64 {
        self.metric_scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(v: &[usize]) -> Vec<NodeId> {
        v.iter().map(|&i| NodeId(i)).collect()
    }

    // 0 - 1 - 2 on a street, 1 - 3 on a footway, 4 isolated.
    fn sample() -> RouteModel {
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(0.5, 0.0),
            Point::new(1.0, 0.0),
            Point::new(0.5, 0.5),
            Point::new(0.9, 0.9),
        ];
        let roads = vec![
            Road { kind: RoadKind::Residential, nodes: ids(&[0, 1, 2]) },
            Road { kind: RoadKind::Footway, nodes: ids(&[1, 3]) },
        ];
        RouteModel::from_parts(points, roads, 100.0)
    }

    #[test]
    fn neighbors_follow_way_order() {
        let m = sample();
        assert_eq!(m.neighbors(NodeId(1)), ids(&[0, 2]).as_slice());
        assert_eq!(m.neighbors(NodeId(0)), ids(&[1]).as_slice());
    }

    #[test]
    fn footways_are_not_routable() {
        let m = sample();
        assert!(!m.neighbors(NodeId(1)).contains(&NodeId(3)));
        assert!(m.neighbors(NodeId(3)).is_empty());
        assert_eq!(m.roads_of(NodeId(1)).count(), 1);
    }

    #[test]
    fn neighbor_discovery_is_lazy_and_idempotent() {
        let m = sample();
        assert!(!m.neighbors_discovered(NodeId(1)));
        let first = m.neighbors(NodeId(1)).to_vec();
        assert!(m.neighbors_discovered(NodeId(1)));
        assert_eq!(m.neighbors(NodeId(1)), first.as_slice());
    }

    #[test]
    fn closed_loop_way_does_not_duplicate_neighbors() {
        let points = vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(0.0, 1.0)];
        let roads = vec![Road { kind: RoadKind::Service, nodes: ids(&[0, 1, 2, 0]) }];
        let m = RouteModel::from_parts(points, roads, 1.0);
        assert_eq!(m.neighbors(NodeId(0)), ids(&[1, 2]).as_slice());
        assert_eq!(m.roads_of(NodeId(0)).count(), 1);
    }

    #[test]
    fn closest_node_skips_unroutable_nodes() {
        let m = sample();
        // (0.9, 0.9) is exactly on node 4 but node 4 is on no road; node 3 is footway-only.
        assert_eq!(m.find_closest_node(0.9, 0.9).unwrap(), NodeId(2));
        assert_eq!(m.find_closest_node(0.1, 0.05).unwrap(), NodeId(0));
    }

    #[test]
    fn closest_node_on_empty_graph_fails() {
        let m = RouteModel::from_parts(vec![Point::new(0.0, 0.0)], vec![], 1.0);
        assert!(matches!(m.find_closest_node(0.0, 0.0), Err(RouteError::EmptyGraph)));
    }

    #[test]
    fn closest_node_rejects_non_finite_queries() {
        let m = sample();
        assert!(matches!(m.find_closest_node(f64::NAN, 0.0), Err(RouteError::InvalidCoordinate { .. })));
        assert!(matches!(m.find_closest_node(0.0, f64::INFINITY), Err(RouteError::InvalidCoordinate { .. })));
    }

    #[test]
    fn from_map_rejects_unknown_node_refs() {
        let map: MapData = serde_json::from_value(serde_json::json!({
            "nodes": [ { "id": 1, "lat": 0.0, "lon": 0.0 }, { "id": 2, "lat": 0.001, "lon": 0.001 } ],
            "ways": [ { "id": 7, "nodes": [1, 99] } ]
        }))
        .unwrap();
        match RouteModel::from_map(&map) {
            Err(RouteError::UnknownNodeRef { way, node }) => {
                assert_eq!(way, 7);
                assert_eq!(node, 99);
            }
            Err(e) => panic!("unexpected error {e}"),
            Ok(_) => panic!("expected an error"),
        }
    }
}
