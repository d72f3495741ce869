use routeplanner_core::{NodeId, Point, RouteError, RouteGraph};

/// Graph with explicit undirected adjacency and raw (unnormalized) positions.
pub struct TestGraph {
    pub points: Vec<Point>,
    pub adjacency: Vec<Vec<NodeId>>,
    pub scale: f64,
}

impl TestGraph {
    pub fn new(points: &[(f64, f64)], edges: &[(usize, usize)], scale: f64) -> Self {
        let mut adjacency = vec![Vec::new(); points.len()];
        for &(a, b) in edges {
            adjacency[a].push(NodeId(b));
            adjacency[b].push(NodeId(a));
        }
        Self {
            points: points.iter().map(|&(x, y)| Point::new(x, y)).collect(),
            adjacency,
            scale,
        }
    }

    pub fn are_neighbors(&self, a: NodeId, b: NodeId) -> bool {
        self.adjacency[a.0].contains(&b)
    }
}

impl RouteGraph for TestGraph {
    fn node_count(&self) -> usize {
        self.points.len()
    }

    fn position(&self, id: NodeId) -> Point {
        self.points[id.0]
    }

    fn find_closest_node(&self, x: f64, y: f64) -> Result<NodeId, RouteError> {
        let target = Point::new(x, y);
        self.points
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| a.distance(&target).total_cmp(&b.distance(&target)))
            .map(|(i, _)| NodeId(i))
            .ok_or(RouteError::EmptyGraph)
    }

    fn neighbors(&self, id: NodeId) -> &[NodeId] {
        &self.adjacency[id.0]
    }

    fn metric_scale(&self) -> f64 {
        self.scale
    }
}

/// Input coordinates are percentages; graph units here are raw, so scale up by 100.
pub fn pct(p: (f64, f64)) -> (f64, f64) {
    (p.0 * 100.0, p.1 * 100.0)
}
