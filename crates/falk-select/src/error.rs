//! Error types for the select crate.

use thiserror::Error;

/// Errors produced while building distributions and selection reports.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SelectError {
    /// Number of variables must be at least 1.
    #[error("number of variables must be at least 1")]
    NoVariables,

    /// Number of variables exceeds the enumeration limit.
    #[error("{n_vars} variables exceeds the enumeration limit of {max}")]
    TooManyVariables {
        /// Requested number of variables.
        n_vars: usize,
        /// Largest supported number of variables.
        max: usize,
    },

    /// Probability vector has the wrong number of entries for n variables.
    #[error("distribution over {n_vars} variables needs {expected} entries, got {actual}")]
    LengthMismatch {
        /// Number of decision variables.
        n_vars: usize,
        /// Expected entry count (2^n_vars).
        expected: usize,
        /// Entry count actually supplied.
        actual: usize,
    },

    /// A probability entry is negative or NaN.
    #[error("probability at index {index} is invalid: {value}")]
    InvalidProbability {
        /// Offending basis-state index.
        index: u64,
        /// The rejected value.
        value: f64,
    },

    /// Probabilities do not sum to 1 within tolerance.
    #[error("probabilities sum to {total}, expected 1 within tolerance")]
    NotNormalized {
        /// Observed total mass.
        total: f64,
    },

    /// Basis-state index outside [0, 2^n_vars).
    #[error("index {index} out of range for {n_vars} variables (max {max})")]
    IndexOutOfRange {
        /// Offending index.
        index: u64,
        /// Number of decision variables.
        n_vars: usize,
        /// Largest valid index (2^n_vars - 1).
        max: u64,
    },
}

/// Result type for selection-report operations.
pub type SelectResult<T> = Result<T, SelectError>;
