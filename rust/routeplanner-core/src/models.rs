use serde::{Deserialize, Serialize};

use crate::graph::NodeId;

/// Snapshot of a node on a returned path, in graph coordinates.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PathNode {
    pub id: NodeId,
    pub x: f64,
    pub y: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoutePath {
    /// Start to end, both inclusive.
    pub nodes: Vec<PathNode>,
    /// Path length in real-world units (meters for map-derived graphs).
    pub distance: f64,
    /// Number of nodes taken off the frontier.
    pub expanded: usize,
}

impl RoutePath {
    pub fn ids(&self) -> Vec<NodeId> {
        self.nodes.iter().map(|n| n.id).collect()
    }
}
