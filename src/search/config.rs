//! Hyperparameter surface for the colony search.

use crate::search::errors::SearchError;

/// Hyperparameters of an ant colony structure search.
///
/// The defaults reproduce the reference tuning: a strongly exploitative
/// selection rule (`q0 = 0.8`), score gain weighted quadratically against
/// pheromone, and symmetric local/global decay.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColonyConfig {
    /// Pheromone exponent in the attractiveness product.
    pub alpha: f64,
    /// Score-gain exponent in the attractiveness product.
    pub beta: f64,
    /// Probability of exploitation (greedy best-arc selection) per draw.
    pub q0: f64,
    /// Local pheromone decay applied to each committed arc.
    pub local_decay: f64,
    /// Global pheromone evaporation applied once per iteration.
    pub evaporation: f64,
    /// Number of colony iterations.
    pub iterations: usize,
    /// Number of ant constructions per iteration.
    pub ants: usize,
    /// Seed for the single random stream shared by all constructions.
    pub seed: u64,
    /// Upper bound on any node's parent-set size.
    pub max_parents: usize,
    /// Local-search refinement runs on iterations divisible by this cadence.
    pub refine_every: usize,
}

impl Default for ColonyConfig {
    fn default() -> Self {
        Self {
            alpha: 1.0,
            beta: 2.0,
            q0: 0.8,
            local_decay: 0.4,
            evaporation: 0.4,
            iterations: 100,
            ants: 10,
            seed: 1,
            max_parents: usize::MAX,
            refine_every: 10,
        }
    }
}

impl ColonyConfig {
    /// Checks every hyperparameter before a run starts.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Config`] on the first violated constraint:
    /// exponents must be finite and non-negative, probabilities and decay
    /// coefficients must lie in [0, 1], and all counts must be non-zero.
    pub fn validate(&self) -> Result<(), SearchError> {
        if !self.alpha.is_finite() || self.alpha < 0.0 {
            return Err(SearchError::Config(format!("alpha must be finite and >= 0, got {}", self.alpha)));
        }
        if !self.beta.is_finite() || self.beta < 0.0 {
            return Err(SearchError::Config(format!("beta must be finite and >= 0, got {}", self.beta)));
        }
        if !(0.0..=1.0).contains(&self.q0) {
            return Err(SearchError::Config(format!("q0 must lie in [0, 1], got {}", self.q0)));
        }
        if !(0.0..=1.0).contains(&self.local_decay) {
            return Err(SearchError::Config(format!(
                "local_decay must lie in [0, 1], got {}",
                self.local_decay
            )));
        }
        if !(0.0..=1.0).contains(&self.evaporation) {
            return Err(SearchError::Config(format!(
                "evaporation must lie in [0, 1], got {}",
                self.evaporation
            )));
        }
        if self.iterations == 0 {
            return Err(SearchError::Config("iterations must be at least 1".into()));
        }
        if self.ants == 0 {
            return Err(SearchError::Config("ants must be at least 1".into()));
        }
        if self.max_parents == 0 {
            return Err(SearchError::Config("max_parents must be at least 1".into()));
        }
        if self.refine_every == 0 {
            return Err(SearchError::Config("refine_every must be at least 1".into()));
        }
        Ok(())
    }
}
