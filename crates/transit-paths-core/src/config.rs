//! Network configuration for transit-paths
//!
//! A network is a TOML document listing edges, predefined paths and the
//! default greedy walk endpoints. A built-in network ships with the crate.

pub mod types;

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::bail_network;
use crate::error::{Result, RouteError};
use crate::graph::Graph;

pub use types::{EdgeConfig, NetworkConfig, PathConfig, ReportConfig, WalkConfig};

/// Source of the built-in network
pub const BUILTIN_NETWORK: &str = include_str!("../data/default_network.toml");

impl NetworkConfig {
    /// The network bundled with the crate
    pub fn builtin() -> Result<Self> {
        Self::from_toml_str(BUILTIN_NETWORK)
    }

    /// Parse and validate a network document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: NetworkConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a network from a file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(RouteError::NetworkNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        debug!(
            path = %path.display(),
            edges = config.edges.len(),
            paths = config.paths.len(),
            "network_loaded"
        );
        Ok(config)
    }

    /// Save the network to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| RouteError::Other(format!("failed to serialize network: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Check names, weights and endpoints
    pub fn validate(&self) -> Result<()> {
        for (i, edge) in self.edges.iter().enumerate() {
            if edge.from.trim().is_empty() || edge.to.trim().is_empty() {
                bail_network!("edge #{} has an empty node name", i + 1);
            }

            for (name, value) in [
                ("cost", edge.cost),
                ("time", edge.time),
                ("distance", edge.distance),
            ] {
                if !value.is_finite() || value < 0.0 {
                    bail_network!(
                        "edge {} -> {} has invalid {} {} (must be finite and non-negative)",
                        edge.from,
                        edge.to,
                        name,
                        value
                    );
                }
            }
        }

        for (i, path) in self.paths.iter().enumerate() {
            if path.nodes.is_empty() {
                bail_network!("path #{} has no nodes", i + 1);
            }
        }

        if let Some(walk) = &self.walk {
            if walk.start.trim().is_empty() || walk.end.trim().is_empty() {
                bail_network!("walk endpoints must not be empty");
            }
        }

        Ok(())
    }

    /// Insert every edge, in file order, into a fresh graph
    pub fn build_graph(&self) -> Graph {
        let mut graph = Graph::new();
        let mut inserted = 0;
        for e in &self.edges {
            if graph.add_edge(&e.from, &e.to, e.cost, e.time, e.distance) {
                inserted += 1;
            }
        }

        debug!(
            inserted,
            duplicates = self.edges.len() - inserted,
            nodes = graph.node_count(),
            "graph_built"
        );
        graph
    }

    /// Node sequences of the predefined paths
    pub fn path_nodes(&self) -> Vec<Vec<String>> {
        self.paths.iter().map(|p| p.nodes.clone()).collect()
    }
}
