pub mod map_data;
pub mod model;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::geometry::Point;

pub use map_data::{Bounds, MapData, MapNode, MapWay, RoadKind};
pub use model::{Road, RouteModel};

/// Index of a node in its graph's node arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub usize);

impl NodeId {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What the search engine needs from a graph. Implementations stay immutable
/// while a query runs; all per-query bookkeeping lives in the engine.
pub trait RouteGraph {
    fn node_count(&self) -> usize;

    fn position(&self, id: NodeId) -> Point;

    /// Nearest node to `(x, y)` in graph coordinates.
    fn find_closest_node(&self, x: f64, y: f64) -> Result<NodeId>;

    /// Adjacent nodes of `id`. Discovery may be lazy but must be idempotent:
    /// repeated calls return the same list.
    fn neighbors(&self, id: NodeId) -> &[NodeId];

    /// Factor converting graph distance units to real-world units.
    fn metric_scale(&self) -> f64;

    fn distance(&self, a: NodeId, b: NodeId) -> f64 {
        self.position(a).distance(&self.position(b))
    }
}
