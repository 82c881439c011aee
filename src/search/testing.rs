//! Deterministic fixture metric for exercising the search components.

use rustc_hash::FxHashMap;

use crate::score::ScoreMetric;
use crate::search::errors::SearchError;

/// A metric whose per-arc gains are fixed up front.
///
/// A node's score is the sum of the configured gains of its current parent
/// arcs (unlisted arcs count `-1.0`), so the gain of adding `tail -> head`
/// is always exactly the configured value, independent of the rest of the
/// parent set. That makes selection outcomes predictable in tests.
pub(crate) struct TableMetric {
    n: usize,
    gains: FxHashMap<(usize, usize), f64>,
}

impl TableMetric {
    pub(crate) fn new(n: usize, gains: &[((usize, usize), f64)]) -> Self {
        Self {
            n,
            gains: gains.iter().copied().collect(),
        }
    }
}

impl ScoreMetric for TableMetric {
    fn node_score(&self, node: usize, parents: &[usize]) -> Result<f64, SearchError> {
        if node >= self.n {
            return Err(SearchError::Score(format!("node {} out of range", node)));
        }
        if parents.iter().any(|&p| p >= self.n) {
            return Err(SearchError::Score(format!("parent out of range for node {}", node)));
        }
        Ok(parents
            .iter()
            .map(|&tail| self.gains.get(&(tail, node)).copied().unwrap_or(-1.0))
            .sum())
    }
}
