use routeplanner_core::RoutePath;

pub fn summary(route: &RoutePath) -> String {
    format!(
        "Distance: {:.1} meters.\nNodes on path: {}\nNodes expanded: {}",
        route.distance,
        route.nodes.len(),
        route.expanded
    )
}

pub fn json(route: &RoutePath) -> serde_json::Result<String> {
    serde_json::to_string_pretty(route)
}
