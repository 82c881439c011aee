//! Discrete dataset representation.
//!
//! A [`DataSet`] holds complete observations of a fixed set of discrete
//! variables. Values are stored flat in row-major order; each variable has a
//! declared cardinality and every stored value is validated against it at
//! construction time, so scoring code can index counts without bounds
//! checks on the data itself.

use crate::search::errors::SearchError;

/// Maximum cardinality a variable may declare.
///
/// Values are stored as `u8`, so a variable domain cannot exceed 256 states.
pub const MAX_CARDINALITY: usize = 256;

/// A complete-data table of discrete observations.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DataSet {
    /// Domain size of each variable, indexed by variable.
    cardinalities: Vec<usize>,
    /// Row-major values: `values[row * num_vars + var]`.
    values: Vec<u8>,
    num_rows: usize,
}

impl DataSet {
    /// Creates a dataset from per-variable cardinalities and observation rows.
    ///
    /// # Arguments
    ///
    /// * `cardinalities` - Domain size of each variable, in variable order
    /// * `rows` - Observations; every row must have one value per variable
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Data`] if there are no variables, no rows, a
    /// cardinality is zero or exceeds [`MAX_CARDINALITY`], a row has the
    /// wrong width, or a value falls outside its variable's domain.
    pub fn new(cardinalities: Vec<usize>, rows: &[Vec<u8>]) -> Result<Self, SearchError> {
        if cardinalities.is_empty() {
            return Err(SearchError::Data("dataset has no variables".into()));
        }
        for (var, &card) in cardinalities.iter().enumerate() {
            if card == 0 || card > MAX_CARDINALITY {
                return Err(SearchError::Data(format!(
                    "variable {} has invalid cardinality {}",
                    var, card
                )));
            }
        }
        if rows.is_empty() {
            return Err(SearchError::Data("dataset has no rows".into()));
        }

        let num_vars = cardinalities.len();
        let mut values = Vec::with_capacity(rows.len() * num_vars);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != num_vars {
                return Err(SearchError::Data(format!(
                    "row {} has {} values, expected {}",
                    i,
                    row.len(),
                    num_vars
                )));
            }
            for (var, &value) in row.iter().enumerate() {
                if (value as usize) >= cardinalities[var] {
                    return Err(SearchError::Data(format!(
                        "row {}: value {} out of range for variable {} (cardinality {})",
                        i, value, var, cardinalities[var]
                    )));
                }
            }
            values.extend_from_slice(row);
        }

        Ok(Self {
            cardinalities,
            values,
            num_rows: rows.len(),
        })
    }

    /// Number of variables.
    pub fn num_vars(&self) -> usize {
        self.cardinalities.len()
    }

    /// Number of observation rows.
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// Domain size of a variable.
    pub fn cardinality(&self, var: usize) -> usize {
        self.cardinalities[var]
    }

    /// Observed value of `var` in `row`.
    #[inline]
    pub fn value(&self, row: usize, var: usize) -> u8 {
        self.values[row * self.cardinalities.len() + var]
    }
}
