use serde::{Deserialize, Serialize};

/// Input coordinates are percentages of the map extent; the graph works in [0, 1].
pub const DEFAULT_INPUT_SCALE: f64 = 0.01;

/// How a node's cost is treated once it has been discovered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscoveryPolicy {
    /// A node is marked visited when first discovered and never updated again.
    #[default]
    FirstDiscovery,
    /// Classical A*: a cheaper path found later rewrites `g` and parent and re-queues the node.
    Relax,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchOptions {
    pub input_scale: f64,
    pub policy: DiscoveryPolicy,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self { input_scale: DEFAULT_INPUT_SCALE, policy: DiscoveryPolicy::FirstDiscovery }
    }
}

impl SearchOptions {
    pub fn relaxing() -> Self {
        Self { policy: DiscoveryPolicy::Relax, ..Self::default() }
    }
}
