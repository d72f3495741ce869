pub mod engine;
pub mod errors;
pub mod geometry;
pub mod graph;
pub mod models;
pub mod options;

pub use engine::{find_path, RoutePlanner, SearchContext, SearchState};
pub use errors::RouteError;
pub use geometry::Point;
pub use graph::{MapData, NodeId, RoadKind, RouteGraph, RouteModel};
pub use models::{PathNode, RoutePath};
pub use options::{DiscoveryPolicy, SearchOptions};

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
