//! Per-construction cache of arc score gains and attractiveness.
//!
//! One [`ArcCache`] lives for exactly one ant construction. It holds, for
//! every ordered node pair, the score gain of adding that arc against the
//! structure as it stood when last computed, and the pheromone-weighted
//! attractiveness used by proportional selection. Two running aggregates
//! (count and sum of currently eligible arcs) drive the construction loop's
//! termination and the roulette draw.
//!
//! Sentinels: a gain of negative infinity marks a pair that is no longer a
//! candidate for this construction (committed, or conservatively ruled out
//! by the cycle-safety invalidation) and is never recomputed. An
//! attractiveness of `-1.0` marks a currently ineligible pair; eligibility
//! can only shrink as the structure grows.

#[cfg(feature = "rayon")]
use rayon::prelude::*;

use crate::model::Network;
use crate::score::ScoreMetric;
use crate::search::errors::SearchError;
use crate::search::pheromone::PheromoneField;

/// Attractiveness sentinel for pairs that are not eligible candidates.
const INELIGIBLE: f64 = -1.0;

/// Dense cache of score gains and selection weights over ordered node pairs.
#[derive(Debug, Clone)]
pub struct ArcCache {
    n: usize,
    /// Score gain of adding `tail -> head`, `NEG_INFINITY` once ruled out.
    delta: Vec<f64>,
    /// `pheromone^alpha * delta^beta` where `delta > 0`, else `-1.0`.
    attractiveness: Vec<f64>,
    eligible_count: usize,
    eligible_sum: f64,
}

/// Computes the selection weight for one arc.
///
/// A non-positive gain never enters the exponentiation: raising a negative
/// base to a fractional exponent is undefined, so such pairs are ineligible
/// by policy and carry the sentinel instead.
#[inline]
fn weight(pheromone: f64, alpha: f64, delta: f64, beta: f64) -> f64 {
    if delta > 0.0 {
        pheromone.powf(alpha) * delta.powf(beta)
    } else {
        INELIGIBLE
    }
}

/// Score gains for all arcs into `head` against its current parent set.
///
/// Returns a tail-indexed column; the diagonal entry is the sentinel.
fn head_gains<S: ScoreMetric>(
    head: usize,
    structure: &Network,
    scorer: &S,
) -> Result<Vec<f64>, SearchError> {
    let n = structure.num_nodes();
    let parents = structure.parents(head);
    let base = scorer.node_score(head, parents)?;
    let mut column = vec![f64::NEG_INFINITY; n];
    for (tail, cell) in column.iter_mut().enumerate() {
        if tail != head {
            *cell = scorer.score_with_extra_parent(head, parents, tail)? - base;
        }
    }
    Ok(column)
}

impl ArcCache {
    /// Creates an empty cache over `n` nodes; every pair starts ruled out
    /// until [`ArcCache::initialize`] fills it.
    pub fn new(n: usize) -> Self {
        Self {
            n,
            delta: vec![f64::NEG_INFINITY; n * n],
            attractiveness: vec![INELIGIBLE; n * n],
            eligible_count: 0,
            eligible_sum: 0.0,
        }
    }

    /// Number of currently eligible arcs.
    pub fn eligible_count(&self) -> usize {
        self.eligible_count
    }

    /// Sum of attractiveness over currently eligible arcs.
    pub fn eligible_sum(&self) -> f64 {
        self.eligible_sum
    }

    /// Cached score gain of `tail -> head`.
    #[inline]
    pub fn delta(&self, tail: usize, head: usize) -> f64 {
        self.delta[tail * self.n + head]
    }

    /// Cached attractiveness of `tail -> head`; `-1.0` when ineligible.
    #[inline]
    pub fn attractiveness(&self, tail: usize, head: usize) -> f64 {
        self.attractiveness[tail * self.n + head]
    }

    /// Fills the cache against the structure's current parent sets and the
    /// live pheromone field, then performs the initial eligibility rescan.
    ///
    /// Gains for distinct heads are independent, so the fill parallelizes
    /// over heads when the `rayon` feature is enabled; results are written
    /// back in head order either way, keeping the fill deterministic.
    ///
    /// # Errors
    ///
    /// Propagates the first scoring failure; the construction cannot
    /// proceed on a partially filled cache.
    pub fn initialize<S: ScoreMetric>(
        &mut self,
        structure: &Network,
        scorer: &S,
        pheromone: &PheromoneField,
        alpha: f64,
        beta: f64,
    ) -> Result<(), SearchError> {
        let n = self.n;

        #[cfg(feature = "rayon")]
        let columns = (0..n)
            .into_par_iter()
            .map(|head| head_gains(head, structure, scorer))
            .collect::<Result<Vec<_>, SearchError>>()?;

        #[cfg(not(feature = "rayon"))]
        let columns = {
            let mut columns = Vec::with_capacity(n);
            for head in 0..n {
                columns.push(head_gains(head, structure, scorer)?);
            }
            columns
        };

        for (head, column) in columns.iter().enumerate() {
            for (tail, &delta) in column.iter().enumerate() {
                self.delta[tail * n + head] = delta;
                self.attractiveness[tail * n + head] =
                    weight(pheromone.get(tail, head), alpha, delta, beta);
            }
        }

        self.rescan_eligibility(structure);
        Ok(())
    }

    /// Permanently rules out `tail -> head` for this construction.
    pub fn invalidate(&mut self, tail: usize, head: usize) {
        self.delta[tail * self.n + head] = f64::NEG_INFINITY;
        self.attractiveness[tail * self.n + head] = INELIGIBLE;
    }

    /// Recomputes gains and weights for every arc into `head` that has not
    /// been ruled out, against `head`'s new parent set.
    ///
    /// Must be called after `head`'s parent set changes: its base score
    /// moved, so every cached incoming gain is stale.
    pub fn refresh<S: ScoreMetric>(
        &mut self,
        head: usize,
        structure: &Network,
        scorer: &S,
        pheromone: &PheromoneField,
        alpha: f64,
        beta: f64,
    ) -> Result<(), SearchError> {
        let n = self.n;
        let parents = structure.parents(head);
        let base = scorer.node_score(head, parents)?;
        for tail in 0..n {
            if self.delta[tail * n + head] != f64::NEG_INFINITY {
                let delta = scorer.score_with_extra_parent(head, parents, tail)? - base;
                self.delta[tail * n + head] = delta;
                self.attractiveness[tail * n + head] =
                    weight(pheromone.get(tail, head), alpha, delta, beta);
            }
        }
        Ok(())
    }

    /// Full rescan of which arcs are eligible, rebuilding the aggregates.
    ///
    /// An arc is eligible iff its gain is strictly positive and the
    /// structure still reports it legal to add. Legality itself changes as
    /// the structure grows (parent bounds fill up, cycle risk spreads), so
    /// this is a complete O(n^2) pass rather than an incremental one.
    pub fn rescan_eligibility(&mut self, structure: &Network) {
        let n = self.n;
        let mut sum = 0.0;
        let mut count = 0;
        for head in 0..n {
            for tail in 0..n {
                let idx = tail * n + head;
                if self.delta[idx] <= 0.0 || !structure.legal_to_add(tail, head) {
                    self.attractiveness[idx] = INELIGIBLE;
                } else {
                    sum += self.attractiveness[idx];
                    count += 1;
                }
            }
        }
        self.eligible_sum = sum;
        self.eligible_count = count;
    }
}
