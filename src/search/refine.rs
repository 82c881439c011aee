//! Hill-climbing refinement of a constructed structure.
//!
//! Applied in place on a fixed cadence to ant-built structures before they
//! are scored. Each pass evaluates every arc addition, deletion, and
//! (optionally) reversal, applies the single best strictly-improving move,
//! and repeats until the structure is a local optimum. Move scans run in
//! head-major, tail-minor index order, so equal gains resolve
//! deterministically.

use crate::model::Network;
use crate::score::ScoreMetric;
use crate::search::errors::SearchError;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Move {
    Add { tail: usize, head: usize },
    Delete { tail: usize, head: usize },
    Reverse { tail: usize, head: usize },
}

/// Bounded local search over arc additions, deletions, and reversals.
#[derive(Debug)]
pub struct HillClimber {
    use_arc_reversal: bool,
}

impl HillClimber {
    /// Creates a hill climber; `use_arc_reversal` enables the reversal move.
    pub fn new(use_arc_reversal: bool) -> Self {
        Self { use_arc_reversal }
    }

    /// Refines `structure` in place until no move strictly improves the
    /// total score.
    ///
    /// # Errors
    ///
    /// Propagates scoring failures; the structure is left in its state as
    /// of the last fully applied move.
    pub fn build_structure<S: ScoreMetric>(
        &self,
        structure: &mut Network,
        scorer: &S,
    ) -> Result<(), SearchError> {
        loop {
            match self.best_move(structure, scorer)? {
                Some((mv, _gain)) => apply(structure, mv),
                None => return Ok(()),
            }
        }
    }

    /// Scans every legal move and returns the one with the best strictly
    /// positive total-score gain, if any.
    fn best_move<S: ScoreMetric>(
        &self,
        structure: &mut Network,
        scorer: &S,
    ) -> Result<Option<(Move, f64)>, SearchError> {
        let n = structure.num_nodes();
        let mut best: Option<(Move, f64)> = None;
        let consider = |mv: Move, gain: f64, best: &mut Option<(Move, f64)>| {
            if gain > 0.0 && best.map_or(true, |(_, g)| gain > g) {
                *best = Some((mv, gain));
            }
        };

        for head in 0..n {
            let base = scorer.node_score(head, structure.parents(head))?;
            for tail in 0..n {
                if tail == head {
                    continue;
                }
                if structure.legal_to_add(tail, head) {
                    let gain =
                        scorer.score_with_extra_parent(head, structure.parents(head), tail)? - base;
                    consider(Move::Add { tail, head }, gain, &mut best);
                }
                if structure.has_arc(tail, head) {
                    let without = drop_parent(structure.parents(head), tail);
                    let delete_gain = scorer.node_score(head, &without)? - base;
                    consider(Move::Delete { tail, head }, delete_gain, &mut best);

                    if self.use_arc_reversal && reversal_is_legal(structure, tail, head) {
                        let add_gain = scorer
                            .score_with_extra_parent(tail, structure.parents(tail), head)?
                            - scorer.node_score(tail, structure.parents(tail))?;
                        consider(Move::Reverse { tail, head }, delete_gain + add_gain, &mut best);
                    }
                }
            }
        }
        Ok(best)
    }
}

/// Whether replacing `tail -> head` with `head -> tail` keeps the
/// structure legal. Checked by briefly removing the arc; the removal is
/// always restored before returning.
fn reversal_is_legal(structure: &mut Network, tail: usize, head: usize) -> bool {
    structure.remove_parent(head, tail);
    let legal = structure.legal_to_add(head, tail);
    structure.add_parent(head, tail);
    legal
}

fn drop_parent(parents: &[usize], tail: usize) -> Vec<usize> {
    parents.iter().copied().filter(|&p| p != tail).collect()
}

fn apply(structure: &mut Network, mv: Move) {
    match mv {
        Move::Add { tail, head } => structure.add_parent(head, tail),
        Move::Delete { tail, head } => structure.remove_parent(head, tail),
        Move::Reverse { tail, head } => structure.reverse_arc(tail, head),
    }
}
