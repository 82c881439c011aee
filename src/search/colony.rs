//! The outer colony controller.
//!
//! Seeds the pheromone scale from a greedy baseline, then runs
//! `iterations x ants` sequential constructions against one shared
//! pheromone field, refining on a fixed cadence, tracking the incumbent,
//! and applying the per-iteration global pheromone update. Constructions
//! are sequential by design: they share one random stream and the global
//! update reads the arcs of the iteration's last ant.

use tracing::{debug, info};

use crate::model::Network;
use crate::score::ScoreMetric;
use crate::search::ant::Ant;
use crate::search::baseline::GreedyBaseline;
use crate::search::config::ColonyConfig;
use crate::search::errors::SearchError;
use crate::search::pheromone::PheromoneField;
use crate::search::refine::HillClimber;

/// Ant colony optimization over Bayesian network structures.
#[derive(Debug)]
pub struct AntColony {
    config: ColonyConfig,
}

/// Sum of per-node local scores for a whole structure.
fn total_score<S: ScoreMetric>(structure: &Network, scorer: &S) -> Result<f64, SearchError> {
    let mut total = 0.0;
    for node in 0..structure.num_nodes() {
        total += scorer.node_score(node, structure.parents(node))?;
    }
    Ok(total)
}

impl AntColony {
    /// Creates a colony, validating the configuration up front.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Config`] for out-of-range hyperparameters.
    pub fn new(config: ColonyConfig) -> Result<Self, SearchError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The configuration this colony runs with.
    pub fn config(&self) -> &ColonyConfig {
        &self.config
    }

    /// Runs the full search and writes the best structure found into
    /// `network`. Returns the best total score.
    ///
    /// `network` is only written on success, and only once, at the very
    /// end: all construction work happens on scratch copies, so a failed
    /// run leaves the caller's network exactly as it was.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Config`] for an empty network,
    /// [`SearchError::Numerical`] when the baseline total score is zero or
    /// non-finite (the pheromone scale is its reciprocal), and propagates
    /// any scoring failure.
    pub fn search<S: ScoreMetric>(
        &self,
        network: &mut Network,
        scorer: &S,
    ) -> Result<f64, SearchError> {
        let n = network.num_nodes();
        if n == 0 {
            return Err(SearchError::Config("network has no nodes".into()));
        }
        let cfg = &self.config;
        info!(nodes = n, iterations = cfg.iterations, ants = cfg.ants, "structure search started");

        // Baseline seed: sets the pheromone scale and the starting incumbent.
        let mut scratch = Network::new(n, cfg.max_parents);
        GreedyBaseline.build_structure(&mut scratch, scorer)?;
        let baseline_score = total_score(&scratch, scorer)?;
        if baseline_score == 0.0 || !baseline_score.is_finite() {
            return Err(SearchError::Numerical(format!(
                "baseline total score {} cannot seed the pheromone scale",
                baseline_score
            )));
        }
        let pheromone0 = baseline_score.abs().recip();
        debug!(baseline_score, pheromone0, "baseline structure seeded");

        let mut pheromone = PheromoneField::new(n, pheromone0);

        let mut best = Network::new(n, cfg.max_parents);
        best.copy_from(&scratch);
        let mut best_score = baseline_score;

        let mut ant = Ant::new(n, cfg, pheromone0);
        let climber = HillClimber::new(true);

        for iteration in 0..cfg.iterations {
            for _ in 0..cfg.ants {
                ant.construct(&mut scratch, scorer, &mut pheromone)?;
                if iteration % cfg.refine_every == 0 {
                    climber.build_structure(&mut scratch, scorer)?;
                }
                let score = total_score(&scratch, scorer)?;
                if score >= best_score {
                    best_score = score;
                    best.copy_from(&scratch);
                }
            }

            // Reinforce the arcs of the iteration's last construction with
            // the reciprocal of the incumbent score.
            let reinforcement = best_score.abs().recip();
            pheromone.global_update(ant.arcs(), cfg.evaporation, reinforcement);
            debug!(iteration, best_score, "iteration complete");
        }

        network.copy_from(&best);
        info!(best_score, arcs = network.num_arcs(), "structure search finished");
        Ok(best_score)
    }
}
