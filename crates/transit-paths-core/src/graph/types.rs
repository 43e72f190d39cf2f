use serde::Serialize;

/// A directed connection to `destination` carrying three weights
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Edge {
    destination: String,
    cost: f64,
    time: f64,
    distance: f64,
}

impl Edge {
    pub fn new(destination: impl Into<String>, cost: f64, time: f64, distance: f64) -> Self {
        Edge {
            destination: destination.into(),
            cost,
            time,
            distance,
        }
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn cost(&self) -> f64 {
        self.cost
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }
}

/// Accumulated weights along a path
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct PathTotals {
    pub cost: f64,
    pub time: f64,
    pub distance: f64,
}

impl PathTotals {
    pub const ZERO: PathTotals = PathTotals {
        cost: 0.0,
        time: 0.0,
        distance: 0.0,
    };
}

impl std::ops::Add<&Edge> for PathTotals {
    type Output = Self;

    fn add(self, edge: &Edge) -> Self {
        PathTotals {
            cost: self.cost + edge.cost,
            time: self.time + edge.time,
            distance: self.distance + edge.distance,
        }
    }
}

/// Aggregation result for one requested path
#[derive(Debug, Clone, Serialize)]
pub struct PathDetails {
    /// 1-based position in the requested path list
    pub index: usize,
    pub nodes: Vec<String>,
    #[serde(flatten)]
    pub totals: PathTotals,
}

/// One expansion of the greedy walk
#[derive(Debug, Clone, Serialize)]
pub struct WalkStep {
    /// Node being expanded
    pub from: String,
    /// Every outgoing edge of `from`, visited or not, in insertion order
    pub candidates: Vec<Edge>,
    /// Nearest unvisited edge, absent at a dead end
    pub selected: Option<Edge>,
    /// Path after applying this step
    pub path: Vec<String>,
}

/// How the greedy walk ended
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum WalkOutcome {
    /// The end node was reached
    Reached,
    /// Every outgoing edge of `at` leads to a visited node
    DeadEnd { at: String },
}

/// Full trace of a greedy walk
#[derive(Debug, Clone, Serialize)]
pub struct WalkTrace {
    pub start: String,
    pub end: String,
    pub steps: Vec<WalkStep>,
    pub path: Vec<String>,
    pub outcome: WalkOutcome,
}

impl WalkTrace {
    pub fn reached(&self) -> bool {
        self.outcome == WalkOutcome::Reached
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_totals_add_edge() {
        let ab = Edge::new("B", 4.0, 4.0, 3.0);
        let bc = Edge::new("C", 4.0, 6.0, 5.1);
        let totals = PathTotals::ZERO + &ab + &bc;
        assert_eq!(totals.cost, 8.0);
        assert_eq!(totals.time, 10.0);
        assert!((totals.distance - 8.1).abs() < 1e-9);
    }

    #[test]
    fn test_edge_equality_uses_all_weights() {
        let a = Edge::new("B", 1.0, 2.0, 3.0);
        assert_eq!(a, Edge::new("B", 1.0, 2.0, 3.0));
        assert_ne!(a, Edge::new("B", 1.0, 2.0, 3.5));
        assert_ne!(a, Edge::new("C", 1.0, 2.0, 3.0));
    }

    #[test]
    fn test_outcome_serializes_with_status_tag() {
        let json = serde_json::to_value(WalkOutcome::DeadEnd { at: "X".into() }).unwrap();
        assert_eq!(json["status"], "dead_end");
        assert_eq!(json["at"], "X");
    }
}
