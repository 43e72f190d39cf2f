//! Cost, time and distance totals along caller-supplied paths

use tracing::debug;

use crate::error::{Result, RouteError};
use crate::graph::network::Graph;
use crate::graph::types::{PathDetails, PathTotals};

impl Graph {
    /// Sum the weights along a single path.
    ///
    /// Each step uses the first edge (in insertion order) whose destination
    /// matches the next node, not the cheapest one. A step with no matching
    /// edge fails with [`RouteError::InvalidPathSegment`].
    pub fn path_details<S: AsRef<str>>(&self, index: usize, path: &[S]) -> Result<PathDetails> {
        let mut totals = PathTotals::ZERO;

        for pair in path.windows(2) {
            let (current, next) = (pair[0].as_ref(), pair[1].as_ref());
            let edge = self
                .edges(current)
                .iter()
                .find(|edge| edge.destination() == next)
                .ok_or_else(|| RouteError::invalid_segment(current, next))?;
            totals = totals + edge;
        }

        debug!(
            index,
            hops = path.len().saturating_sub(1),
            cost = totals.cost,
            time = totals.time,
            distance = totals.distance,
            "path_details"
        );

        Ok(PathDetails {
            index,
            nodes: path.iter().map(|n| n.as_ref().to_string()).collect(),
            totals,
        })
    }

    /// Aggregate every path in order; the first invalid segment aborts the
    /// whole call, so no details are returned for any path.
    #[tracing::instrument(skip(self, paths), fields(paths = paths.len()))]
    pub fn calculate_path_details<S: AsRef<str>>(
        &self,
        paths: &[Vec<S>],
    ) -> Result<Vec<PathDetails>> {
        paths
            .iter()
            .enumerate()
            .map(|(i, path)| self.path_details(i + 1, path.as_slice()))
            .collect()
    }
}
