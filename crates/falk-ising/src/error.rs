//! Error types for the ising crate.

use thiserror::Error;

use falk_select::SelectError;

/// Errors produced by problem construction, oracles, and sampling.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IsingError {
    /// Covariance matrix shape does not match the number of assets.
    #[error("covariance must be {n_assets}x{n_assets}, got {rows}x{cols}")]
    CovarianceShape {
        /// Number of assets implied by the returns vector.
        n_assets: usize,
        /// Covariance row count.
        rows: usize,
        /// Covariance column count.
        cols: usize,
    },

    /// Budget cannot exceed the number of assets.
    #[error("budget {budget} exceeds the {n_assets} available assets")]
    BudgetExceedsAssets {
        /// Requested budget.
        budget: usize,
        /// Number of assets.
        n_assets: usize,
    },

    /// A model parameter is NaN or infinite.
    #[error("parameter {name} must be finite, got {value}")]
    NonFiniteParameter {
        /// Parameter name.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// A good-state bit pattern has the wrong length.
    #[error("pattern \"{pattern}\" has length {actual}, expected {n_vars}")]
    PatternLength {
        /// The offending pattern.
        pattern: String,
        /// Pattern length actually supplied.
        actual: usize,
        /// Number of decision variables.
        n_vars: usize,
    },

    /// A good-state bit pattern contains a symbol other than 0 or 1.
    #[error("pattern \"{pattern}\" contains invalid symbol '{symbol}'")]
    PatternSymbol {
        /// The offending pattern.
        pattern: String,
        /// The rejected character.
        symbol: char,
    },

    /// An oracle with no marked states cannot drive a search.
    #[error("oracle marks no states")]
    NoMarkedStates,

    /// Oracle and distribution disagree on the number of variables.
    #[error("oracle is over {oracle_vars} variables, distribution over {dist_vars}")]
    VariableMismatch {
        /// Oracle variable count.
        oracle_vars: usize,
        /// Distribution variable count.
        dist_vars: usize,
    },

    /// shots must be ≥ 1.
    #[error("shots must be at least 1")]
    ZeroShots,

    /// Error from the underlying selection layer.
    #[error(transparent)]
    Select(#[from] SelectError),
}

/// Result type for ising-layer operations.
pub type IsingResult<T> = Result<T, IsingError>;
