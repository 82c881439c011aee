//! Local score metrics for candidate parent sets.
//!
//! A structure search never scores a whole network directly; it asks a
//! [`ScoreMetric`] for one node's score under a candidate parent set and
//! sums over nodes. The metric must be deterministic for a fixed dataset
//! and parent set — the search's replayability depends on it.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::data::DataSet;
use crate::search::errors::SearchError;

/// A decomposable structure score.
///
/// Higher is better. Scores are typically negative (log-likelihood based),
/// which the search relies on only through the reciprocal of the absolute
/// total.
///
/// Metrics are read-only during a search and must be shareable across
/// threads (`Sync`): the arc-cache fill scores heads in parallel when the
/// `rayon` feature is enabled.
pub trait ScoreMetric: Sync {
    /// Local score of `node` under the given parent set.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Score`] for malformed queries (out-of-range or
    /// duplicated indices). Such failures abort the search.
    fn node_score(&self, node: usize, parents: &[usize]) -> Result<f64, SearchError>;

    /// Local score of `node` under `parents` extended with `extra`.
    fn score_with_extra_parent(
        &self,
        node: usize,
        parents: &[usize],
        extra: usize,
    ) -> Result<f64, SearchError> {
        let mut extended: Vec<usize> = Vec::with_capacity(parents.len() + 1);
        extended.extend_from_slice(parents);
        extended.push(extra);
        self.node_score(node, &extended)
    }
}

/// Observed parent configuration, used as a contingency-table key.
type ParentConfig = SmallVec<[u8; 8]>;

/// Log-likelihood score with an MDL complexity penalty.
///
/// For node `X` with parent set `Pa`, the score is
///
/// ```text
/// LL(X | Pa) - 0.5 * ln(N) * (card(X) - 1) * prod(card(P) for P in Pa)
/// ```
///
/// where `LL` is the multinomial maximum-likelihood log score over the
/// observed parent configurations. Contingency counts are kept sparse,
/// keyed by the observed configuration, so large nominal parent-state
/// spaces cost only as much as the configurations that actually occur.
#[derive(Debug, Clone)]
pub struct MdlScore<'a> {
    data: &'a DataSet,
}

impl<'a> MdlScore<'a> {
    /// Creates a metric over `data`.
    pub fn new(data: &'a DataSet) -> Self {
        Self { data }
    }

    fn check_query(&self, node: usize, parents: &[usize]) -> Result<(), SearchError> {
        let n = self.data.num_vars();
        if node >= n {
            return Err(SearchError::Score(format!("node {} out of range ({} variables)", node, n)));
        }
        for (i, &p) in parents.iter().enumerate() {
            if p >= n {
                return Err(SearchError::Score(format!(
                    "parent {} of node {} out of range ({} variables)",
                    p, node, n
                )));
            }
            if p == node {
                return Err(SearchError::Score(format!("node {} listed as its own parent", node)));
            }
            if parents[..i].contains(&p) {
                return Err(SearchError::Score(format!(
                    "parent {} of node {} listed twice",
                    p, node
                )));
            }
        }
        Ok(())
    }
}

impl ScoreMetric for MdlScore<'_> {
    fn node_score(&self, node: usize, parents: &[usize]) -> Result<f64, SearchError> {
        self.check_query(node, parents)?;

        let card = self.data.cardinality(node);
        let rows = self.data.num_rows();

        // Sparse contingency table: parent configuration -> per-state counts.
        let mut counts: FxHashMap<ParentConfig, Vec<u64>> = FxHashMap::default();
        for row in 0..rows {
            let config: ParentConfig = parents.iter().map(|&p| self.data.value(row, p)).collect();
            let cell = counts.entry(config).or_insert_with(|| vec![0u64; card]);
            cell[self.data.value(row, node) as usize] += 1;
        }

        let mut log_likelihood = 0.0;
        for cell in counts.values() {
            let config_total: u64 = cell.iter().sum();
            let config_total = config_total as f64;
            for &count in cell {
                if count > 0 {
                    let count = count as f64;
                    log_likelihood += count * (count / config_total).ln();
                }
            }
        }

        let parent_states: f64 = parents
            .iter()
            .map(|&p| self.data.cardinality(p) as f64)
            .product();
        let free_params = (card as f64 - 1.0) * parent_states;
        let penalty = 0.5 * (rows as f64).ln() * free_params;

        Ok(log_likelihood - penalty)
    }
}
