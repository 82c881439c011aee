//! Error types for structure search.

use thiserror::Error;

/// Errors that can occur while configuring or running a structure search.
///
/// This enum is marked `#[non_exhaustive]` to allow adding new error variants
/// in the future without breaking changes.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum SearchError {
    /// Invalid hyperparameter configuration.
    ///
    /// Raised before any search work starts, e.g. for a selection
    /// probability outside [0, 1] or a zero iteration count.
    #[error("configuration error: {0}")]
    Config(String),

    /// Malformed dataset.
    ///
    /// Raised when constructing a dataset from rows that do not match the
    /// declared variables, such as a value outside its variable's domain.
    #[error("data error: {0}")]
    Data(String),

    /// Score computation failure.
    ///
    /// Raised by a score metric for malformed queries (node or parent index
    /// out of range, duplicated parents). A scoring failure aborts the whole
    /// search; a partially built structure is never returned.
    #[error("score error: {0}")]
    Score(String),

    /// Numerical stability error.
    ///
    /// Raised for values the search cannot proceed from, such as a baseline
    /// score of zero (the pheromone scale is its reciprocal) or a non-finite
    /// total score.
    #[error("numerical error: {0}")]
    Numerical(String),

    /// Internal invariant violation.
    ///
    /// This should be used only for programmer errors, not user errors.
    #[error("internal error: {0}")]
    Internal(String),
}
