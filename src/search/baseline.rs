//! Greedy baseline construction.
//!
//! The colony needs a reasonable structure before the first iteration: its
//! total score sets the pheromone scale and it becomes the starting
//! incumbent. [`GreedyBaseline`] provides it with a K2-style pass: nodes
//! are visited in natural order and each node greedily accepts the best
//! strictly-improving parent from among its predecessors until none is
//! left or the parent bound is hit. Restricting candidates to predecessors
//! in the visit order keeps the result trivially acyclic.

use crate::model::Network;
use crate::score::ScoreMetric;
use crate::search::errors::SearchError;

/// Greedy parent-addition seeding pass.
#[derive(Debug, Default)]
pub struct GreedyBaseline;

impl GreedyBaseline {
    /// Builds a baseline structure into `structure`, which is reset first.
    ///
    /// Deterministic: candidate scans run in index order and only strict
    /// improvements are accepted, so equal gains keep the earlier parent.
    ///
    /// # Errors
    ///
    /// Propagates scoring failures.
    pub fn build_structure<S: ScoreMetric>(
        &self,
        structure: &mut Network,
        scorer: &S,
    ) -> Result<(), SearchError> {
        structure.clear();
        let n = structure.num_nodes();
        for head in 0..n {
            loop {
                let base = scorer.node_score(head, structure.parents(head))?;
                let mut best: Option<(usize, f64)> = None;
                for tail in 0..head {
                    if !structure.legal_to_add(tail, head) {
                        continue;
                    }
                    let gain =
                        scorer.score_with_extra_parent(head, structure.parents(head), tail)? - base;
                    if gain > 0.0 && best.map_or(true, |(_, g)| gain > g) {
                        best = Some((tail, gain));
                    }
                }
                match best {
                    Some((tail, _)) => structure.add_parent(head, tail),
                    None => break,
                }
            }
        }
        Ok(())
    }
}
