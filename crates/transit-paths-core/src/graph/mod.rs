//! Transit graph and the operations over it
//!
//! - `network`: adjacency container with idempotent edge insertion
//! - `aggregate`: cost/time/distance totals along explicit paths
//! - `greedy`: nearest-unvisited-neighbor walk between two nodes

pub mod aggregate;
pub mod greedy;
pub mod network;
pub mod types;

pub use network::Graph;
pub use types::{Edge, PathDetails, PathTotals, WalkOutcome, WalkStep, WalkTrace};
