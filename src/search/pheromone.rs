//! Shared pheromone intensities over ordered node pairs.
//!
//! One [`PheromoneField`] lives for a whole search run. Every ant reads it
//! while scoring candidate arcs, writes it through the local update after
//! each committed arc, and the colony writes it once per iteration through
//! the global update. Both updates are convex combinations with a strictly
//! positive target, so intensities never reach zero.

/// Dense matrix of per-arc pheromone intensities.
#[derive(Debug, Clone)]
pub struct PheromoneField {
    n: usize,
    values: Vec<f64>,
}

impl PheromoneField {
    /// Creates a field over `n` nodes with every entry set to `pheromone0`.
    pub fn new(n: usize, pheromone0: f64) -> Self {
        Self { n, values: vec![pheromone0; n * n] }
    }

    /// Number of nodes the field spans.
    pub fn num_nodes(&self) -> usize {
        self.n
    }

    /// Intensity of the arc `tail -> head`.
    #[inline]
    pub fn get(&self, tail: usize, head: usize) -> f64 {
        self.values[tail * self.n + head]
    }

    /// Local update on one just-committed arc:
    /// `tau <- (1 - decay) * tau + decay * pheromone0`.
    ///
    /// Pulls the used arc back toward its initial level, discouraging other
    /// ants in the same iteration from piling onto the identical arc.
    pub fn local_update(&mut self, tail: usize, head: usize, decay: f64, pheromone0: f64) {
        let cell = &mut self.values[tail * self.n + head];
        *cell = (1.0 - decay) * *cell + decay * pheromone0;
    }

    /// Global update over the arcs of one constructed structure:
    /// `tau <- (1 - evaporation) * tau + evaporation * reinforcement`
    /// for every `(tail, head)` marked in `arcs` (row-major `n * n` mask).
    /// Arcs absent from the mask are left untouched.
    pub fn global_update(&mut self, arcs: &[bool], evaporation: f64, reinforcement: f64) {
        debug_assert_eq!(arcs.len(), self.values.len());
        for (cell, &used) in self.values.iter_mut().zip(arcs) {
            if used {
                *cell = (1.0 - evaporation) * *cell + evaporation * reinforcement;
            }
        }
    }
}
