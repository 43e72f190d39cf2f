//! Network file type definitions

use serde::{Deserialize, Serialize};

/// A transit network: edges, the paths to evaluate, and walk endpoints
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// Default endpoints for the greedy walk (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub walk: Option<WalkConfig>,

    /// Report labelling
    #[serde(default)]
    pub report: ReportConfig,

    /// Directed edges, inserted in file order
    #[serde(default)]
    pub edges: Vec<EdgeConfig>,

    /// Predefined paths to aggregate
    #[serde(default)]
    pub paths: Vec<PathConfig>,
}

/// Greedy walk endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalkConfig {
    pub start: String,
    pub end: String,
}

/// Units and currency used by the human report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Prefix for cost totals
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Suffix for time totals
    #[serde(default = "default_time_unit")]
    pub time_unit: String,

    /// Suffix for distance totals and walk candidates
    #[serde(default = "default_distance_unit")]
    pub distance_unit: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        ReportConfig {
            currency: default_currency(),
            time_unit: default_time_unit(),
            distance_unit: default_distance_unit(),
        }
    }
}

fn default_currency() -> String {
    "RM".to_string()
}

fn default_time_unit() -> String {
    "mins".to_string()
}

fn default_distance_unit() -> String {
    "km".to_string()
}

/// One directed edge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeConfig {
    pub from: String,
    pub to: String,
    pub cost: f64,
    pub time: f64,
    pub distance: f64,
}

/// A path to aggregate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathConfig {
    /// Optional label shown next to the path index
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub nodes: Vec<String>,
}
