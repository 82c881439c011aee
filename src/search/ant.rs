//! Single-ant DAG construction.
//!
//! An [`Ant`] builds one candidate structure per call by committing arcs one
//! at a time until no eligible arc remains. Each draw either exploits (takes
//! the best-weighted legal arc) or explores (roulette selection over
//! eligible arcs), governed by the `q0` threshold. After each commit the ant
//! conservatively rules out every arc that could close a cycle through the
//! new edge, refreshes the head's cached gains, and applies the local
//! pheromone update to the arc it used.
//!
//! The ant owns the run's single random stream: it is seeded once and
//! advanced across all constructions of the run, never re-seeded per call,
//! so a fixed seed replays the entire colony bit for bit.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::model::Network;
use crate::score::ScoreMetric;
use crate::search::cache::ArcCache;
use crate::search::config::ColonyConfig;
use crate::search::errors::SearchError;
use crate::search::pheromone::PheromoneField;

/// One DAG-construction worker.
#[derive(Debug)]
pub struct Ant {
    n: usize,
    alpha: f64,
    beta: f64,
    q0: f64,
    local_decay: f64,
    pheromone0: f64,
    rng: StdRng,
    /// Arcs committed during the most recent construction, row-major.
    arcs: Vec<bool>,
}

impl Ant {
    /// Creates an ant over `n` nodes with the run's selection parameters.
    pub fn new(n: usize, config: &ColonyConfig, pheromone0: f64) -> Self {
        Self {
            n,
            alpha: config.alpha,
            beta: config.beta,
            q0: config.q0,
            local_decay: config.local_decay,
            pheromone0,
            rng: StdRng::seed_from_u64(config.seed),
            arcs: vec![false; n * n],
        }
    }

    /// Adjacency mask of the most recent construction (row-major `n * n`).
    pub fn arcs(&self) -> &[bool] {
        &self.arcs
    }

    /// Builds one complete structure into `structure`, which is reset first.
    ///
    /// Terminates when no eligible arc remains, either because the cache's
    /// aggregate says so or because a selection pass comes up empty at the
    /// numerical boundary of the roulette draw. Exhaustion is the normal
    /// end of a construction, not an error.
    ///
    /// # Errors
    ///
    /// Propagates scoring failures, which abort the whole search.
    pub fn construct<S: ScoreMetric>(
        &mut self,
        structure: &mut Network,
        scorer: &S,
        pheromone: &mut PheromoneField,
    ) -> Result<(), SearchError> {
        let n = self.n;
        if structure.num_nodes() != n {
            return Err(SearchError::Internal(format!(
                "structure has {} nodes, ant was built for {}",
                structure.num_nodes(),
                n
            )));
        }

        structure.clear();
        self.arcs.iter_mut().for_each(|cell| *cell = false);

        let mut cache = ArcCache::new(n);
        cache.initialize(structure, scorer, pheromone, self.alpha, self.beta)?;

        while cache.eligible_count() > 0 {
            let Some((tail, head)) = self.select_arc(structure, &cache, pheromone) else {
                break;
            };

            structure.add_parent(head, tail);
            cache.invalidate(tail, head);
            self.arcs[tail * n + head] = true;

            self.invalidate_cycle_closures(tail, head, structure, &mut cache);
            cache.refresh(head, structure, scorer, pheromone, self.alpha, self.beta)?;
            cache.rescan_eligibility(structure);

            pheromone.local_update(tail, head, self.local_decay, self.pheromone0);
        }
        Ok(())
    }

    /// Picks the next arc, exploiting with probability `q0` and exploring
    /// otherwise. Returns `None` when no candidate survives the scan.
    fn select_arc(
        &mut self,
        structure: &Network,
        cache: &ArcCache,
        pheromone: &PheromoneField,
    ) -> Option<(usize, usize)> {
        if self.rng.gen::<f64>() < self.q0 {
            self.find_best_arc(structure, cache, pheromone)
        } else {
            let r = self.rng.gen::<f64>() * cache.eligible_sum();
            roulette_select(structure, cache, r)
        }
    }

    /// Greedy selection: the legal arc with strictly positive gain that
    /// maximizes `pheromone * gain^beta`. Ties keep the first pair found in
    /// head-major, tail-minor order (strict comparison).
    fn find_best_arc(
        &self,
        structure: &Network,
        cache: &ArcCache,
        pheromone: &PheromoneField,
    ) -> Option<(usize, usize)> {
        let mut best = None;
        let mut best_value = -1.0;
        for head in 0..self.n {
            for tail in 0..self.n {
                if cache.delta(tail, head) > 0.0 && structure.legal_to_add(tail, head) {
                    let value = pheromone.get(tail, head) * cache.delta(tail, head).powf(self.beta);
                    if best.is_none() || value > best_value {
                        best = Some((tail, head));
                        best_value = value;
                    }
                }
            }
        }
        best
    }

    /// Rules out every pair that would close a cycle through the arc just
    /// committed: any arc from an ancestor of `tail` to a descendant of
    /// `head`. Ancestry follows the structure's parent sets; descent
    /// follows the arcs committed so far in this construction. The
    /// over-approximation is safe because the structure only grows during
    /// one construction.
    fn invalidate_cycle_closures(
        &self,
        tail: usize,
        head: usize,
        structure: &Network,
        cache: &mut ArcCache,
    ) {
        let ancestors = ancestors_of(structure, tail);
        let descendants = descendants_of(&self.arcs, self.n, head);
        for &a in &ancestors {
            for &d in &descendants {
                cache.invalidate(a, d);
            }
        }
    }
}

/// `start` plus every node reachable from it by following parent edges.
fn ancestors_of(structure: &Network, start: usize) -> Vec<usize> {
    let mut visited = vec![false; structure.num_nodes()];
    let mut found = Vec::new();
    let mut queue = VecDeque::new();
    visited[start] = true;
    found.push(start);
    queue.push_back(start);
    while let Some(node) = queue.pop_front() {
        for &parent in structure.parents(node) {
            if !visited[parent] {
                visited[parent] = true;
                found.push(parent);
                queue.push_back(parent);
            }
        }
    }
    found
}

/// `start` plus every node reachable from it by following committed arcs.
fn descendants_of(arcs: &[bool], n: usize, start: usize) -> Vec<usize> {
    let mut visited = vec![false; n];
    let mut found = Vec::new();
    let mut queue = VecDeque::new();
    visited[start] = true;
    found.push(start);
    queue.push_back(start);
    while let Some(node) = queue.pop_front() {
        for child in 0..n {
            if arcs[node * n + child] && !visited[child] {
                visited[child] = true;
                found.push(child);
                queue.push_back(child);
            }
        }
    }
    found
}

/// Proportional selection: walks eligible pairs in head-major, tail-minor
/// order, accumulating attractiveness until the cumulative sum reaches `r`.
///
/// Exhausting the scan without a pick is possible only at the numerical
/// boundary (`r` landing beyond the recomputed sum); the caller treats it
/// as construction complete.
fn roulette_select(structure: &Network, cache: &ArcCache, r: f64) -> Option<(usize, usize)> {
    let n = structure.num_nodes();
    let mut cumulative = 0.0;
    for head in 0..n {
        for tail in 0..n {
            let value = cache.attractiveness(tail, head);
            if value > 0.0 && structure.legal_to_add(tail, head) {
                cumulative += value;
                if r <= cumulative {
                    return Some((tail, head));
                }
            }
        }
    }
    None
}
