use std::collections::HashMap;

use tracing::trace;

use crate::graph::types::Edge;

/// Directed multigraph keyed by node name.
///
/// Each source keeps its outgoing edges in insertion order; aggregation and
/// the greedy walk both break ties by that order.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    adjacency: HashMap<String, Vec<Edge>>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an edge unless an identical one (same destination and weights)
    /// already leaves `source`. Returns whether the edge was appended.
    pub fn add_edge(
        &mut self,
        source: &str,
        destination: &str,
        cost: f64,
        time: f64,
        distance: f64,
    ) -> bool {
        let edge = Edge::new(destination, cost, time, distance);
        let edges = self.adjacency.entry(source.to_string()).or_default();

        if edges.contains(&edge) {
            trace!(source, destination, "duplicate_edge_ignored");
            return false;
        }

        edges.push(edge);
        true
    }

    /// Outgoing edges of `node`; unknown nodes have none
    pub fn edges(&self, node: &str) -> &[Edge] {
        self.adjacency.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Source nodes in sorted order
    pub fn sources(&self) -> Vec<&str> {
        let mut sources: Vec<&str> = self.adjacency.keys().map(String::as_str).collect();
        sources.sort_unstable();
        sources
    }

    /// Every node that appears as a source or a destination
    pub fn node_count(&self) -> usize {
        let mut nodes: Vec<&str> = self.adjacency.keys().map(String::as_str).collect();
        nodes.extend(
            self.adjacency
                .values()
                .flatten()
                .map(|edge| edge.destination()),
        );
        nodes.sort_unstable();
        nodes.dedup();
        nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }
}
