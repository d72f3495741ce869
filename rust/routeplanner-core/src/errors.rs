use thiserror::Error;

use crate::graph::NodeId;

#[derive(Error, Debug)]
pub enum RouteError {
    #[error("no path found between node {start} and node {end}")]
    NoPathFound { start: NodeId, end: NodeId },
    #[error("graph has no routable nodes")]
    EmptyGraph,
    #[error("parent chain broken at node {node} while reconstructing the path")]
    BrokenParentChain { node: NodeId },
    #[error("way {way} references unknown node {node}")]
    UnknownNodeRef { way: i64, node: i64 },
    #[error("invalid map bounds: {0}")]
    InvalidBounds(String),
    #[error("node {node} has out-of-range position lat={lat} lon={lon}")]
    InvalidNode { node: i64, lat: f64, lon: f64 },
    #[error("query point ({x}, {y}) is not finite")]
    InvalidCoordinate { x: f64, y: f64 },
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RouteError>;
