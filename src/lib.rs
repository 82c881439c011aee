//! # Formic - Ant Colony Structure Search for Bayesian Networks
//!
//! Formic learns the arc structure (a directed acyclic graph) of a Bayesian
//! network over a fixed set of discrete variables by running an ant colony
//! optimization metaheuristic: a population of simulated ants incrementally
//! constructs candidate DAGs guided by a shared pheromone field and a
//! per-construction cache of local score gains, periodically refined by a
//! hill-climbing pass, with the best-scoring structure retained across
//! iterations.
//!
//! ## Architecture
//!
//! The crate is organized into several modules:
//!
//! - **data**: Discrete dataset representation
//! - **model**: DAG structure store (parent sets, legality, snapshots)
//! - **score**: Local score metrics (trait plus a log-likelihood/MDL metric)
//! - **search**: The colony engine (pheromone field, arc cache, ants,
//!   baseline seeding, refinement, outer controller)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use formic::{learn_structure, ColonyConfig, DataSet};
//!
//! let data = DataSet::new(vec![2, 2, 3], &rows)?;
//! let config = ColonyConfig { iterations: 50, seed: 7, ..Default::default() };
//! let (network, score) = learn_structure(&data, config)?;
//! for node in 0..network.num_nodes() {
//!     println!("{} <- {:?}", node, network.parents(node));
//! }
//! ```

#![forbid(unsafe_code)]

pub mod data;
pub mod model;
pub mod score;
pub mod search;

// Re-export commonly used types
pub use data::DataSet;
pub use model::snapshot::StructureSnapshot;
pub use model::Network;
pub use score::{MdlScore, ScoreMetric};
pub use search::colony::AntColony;
pub use search::config::ColonyConfig;
pub use search::errors::SearchError;

/// Learns a network structure from `data` with the default MDL metric.
///
/// Convenience wrapper over [`AntColony`]: builds a fresh network sized to
/// the dataset, runs the full search, and returns the learned structure
/// together with its total score.
///
/// # Arguments
///
/// * `data` - The discrete dataset to learn from
/// * `config` - Search hyperparameters (validated before any work starts)
///
/// # Errors
///
/// Returns [`SearchError::Config`] for invalid hyperparameters and
/// propagates dataset, scoring, and numerical failures from the run.
pub fn learn_structure(
    data: &DataSet,
    config: ColonyConfig,
) -> Result<(Network, f64), SearchError> {
    let scorer = MdlScore::new(data);
    let mut network = Network::new(data.num_vars(), config.max_parents);
    let colony = AntColony::new(config)?;
    let score = colony.search(&mut network, &scorer)?;
    Ok((network, score))
}
