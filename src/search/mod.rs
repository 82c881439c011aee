//! The ant colony structure-search engine.
//!
//! This module provides:
//! - **errors**: Error types for configuration and search failures
//! - **config**: Hyperparameter surface with up-front validation
//! - **pheromone**: Shared per-arc pheromone field with local/global updates
//! - **cache**: Per-construction cache of score gains and selection weights
//! - **ant**: Single-ant DAG construction
//! - **baseline**: Greedy seeding pass (pheromone scale, starting incumbent)
//! - **refine**: Hill-climbing refinement with arc reversal
//! - **colony**: The outer iteration controller

pub mod errors;
pub mod config;
pub mod pheromone;
pub mod cache;
pub mod ant;
pub mod baseline;
pub mod refine;
pub mod colony;

#[cfg(test)]
pub(crate) mod testing;
