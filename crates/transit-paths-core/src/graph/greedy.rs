//! Nearest-unvisited-neighbor walk
//!
//! Not a shortest-path search: each step commits to the closest unvisited
//! neighbor by edge `distance` and never backtracks, so the walk can stall in
//! a dead end even when a route to the end node exists.

use std::collections::HashSet;

use tracing::debug;

use crate::graph::network::Graph;
use crate::graph::types::{WalkOutcome, WalkStep, WalkTrace};

impl Graph {
    /// Walk from `start` towards `end`, always taking the unvisited neighbor
    /// with the smallest `distance`. Equal distances keep the edge inserted
    /// first. Cost and time play no part in the choice.
    ///
    /// A dead end is reported through [`WalkOutcome::DeadEnd`] with the
    /// partial path, never as an error.
    #[tracing::instrument(skip(self))]
    pub fn find_exact_shortest_path<'a>(&'a self, start: &'a str, end: &str) -> WalkTrace {
        let mut visited: HashSet<&str> = HashSet::new();
        let mut path = vec![start.to_string()];
        let mut steps = Vec::new();
        let mut current = start;

        let outcome = loop {
            if current == end {
                break WalkOutcome::Reached;
            }

            visited.insert(current);
            let candidates = self.edges(current);

            let selected = candidates
                .iter()
                .filter(|edge| !visited.contains(edge.destination()))
                .min_by(|a, b| a.distance().total_cmp(&b.distance()));

            let Some(edge) = selected else {
                debug!(at = current, "greedy_walk_dead_end");
                steps.push(WalkStep {
                    from: current.to_string(),
                    candidates: candidates.to_vec(),
                    selected: None,
                    path: path.clone(),
                });
                break WalkOutcome::DeadEnd {
                    at: current.to_string(),
                };
            };

            debug!(
                from = current,
                to = edge.destination(),
                distance = edge.distance(),
                "greedy_walk_step"
            );
            path.push(edge.destination().to_string());
            steps.push(WalkStep {
                from: current.to_string(),
                candidates: candidates.to_vec(),
                selected: Some(edge.clone()),
                path: path.clone(),
            });
            current = edge.destination();
        };

        WalkTrace {
            start: start.to_string(),
            end: end.to_string(),
            steps,
            path,
            outcome,
        }
    }
}
