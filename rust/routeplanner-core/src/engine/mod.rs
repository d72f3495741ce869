pub mod context;
pub mod heuristics;
pub mod neighbors;
pub mod open_list;
pub mod search;

pub use context::SearchContext;
pub use heuristics::straight_line;
pub use neighbors::add_neighbors;
pub use open_list::{OpenEntry, OpenList};
pub use search::{find_path, RoutePlanner, SearchState};
