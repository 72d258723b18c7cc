//! Probability distributions over fixed-length bit-vectors.
//!
//! A [`Distribution`] holds one probability per basis state, indexed
//! `0..2^n`.  All invariants (length, non-negativity, no NaN,
//! normalization) are checked at construction, so downstream reporting
//! never re-validates.

use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::bitvec::{BitVector, check_n_vars};
use crate::error::{SelectError, SelectResult};

/// Tolerance for the Σp = 1 normalization check.
pub const NORMALIZATION_TOLERANCE: f64 = 1e-6;

/// A validated probability mass function over all 2^n bit-vectors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Distribution {
    n_vars: usize,
    probs: Vec<f64>,
}

impl Distribution {
    /// Build from an explicit probability vector over `n_vars` variables.
    ///
    /// `probs[j]` is the probability of the bit-vector decoded from index
    /// `j`.  Fails if the length is not exactly `2^n_vars`, any entry is
    /// negative or NaN, or the entries do not sum to 1 within
    /// [`NORMALIZATION_TOLERANCE`].
    pub fn from_probabilities(n_vars: usize, probs: Vec<f64>) -> SelectResult<Self> {
        check_n_vars(n_vars)?;
        let expected = 1usize << n_vars;
        if probs.len() != expected {
            return Err(SelectError::LengthMismatch {
                n_vars,
                expected,
                actual: probs.len(),
            });
        }
        for (j, &p) in probs.iter().enumerate() {
            if p.is_nan() || p < 0.0 {
                return Err(SelectError::InvalidProbability {
                    index: j as u64,
                    value: p,
                });
            }
        }
        let total: f64 = probs.iter().sum();
        if (total - 1.0).abs() > NORMALIZATION_TOLERANCE {
            return Err(SelectError::NotNormalized { total });
        }
        debug!(n_vars, entries = probs.len(), "distribution validated");
        Ok(Self { n_vars, probs })
    }

    /// Build from a complex amplitude vector (an eigenstate), taking
    /// `|a_j|²` as the probability of index `j`.
    ///
    /// The amplitude vector must be normalized; the derived probabilities
    /// go through the same validation as [`Self::from_probabilities`].
    pub fn from_amplitudes(n_vars: usize, amplitudes: &[Complex64]) -> SelectResult<Self> {
        check_n_vars(n_vars)?;
        let expected = 1usize << n_vars;
        if amplitudes.len() != expected {
            return Err(SelectError::LengthMismatch {
                n_vars,
                expected,
                actual: amplitudes.len(),
            });
        }
        let probs = amplitudes.iter().map(|a| a.norm_sqr()).collect();
        Self::from_probabilities(n_vars, probs)
    }

    /// The uniform distribution: every bit-vector at probability `2^-n`.
    pub fn uniform(n_vars: usize) -> SelectResult<Self> {
        check_n_vars(n_vars)?;
        let len = 1usize << n_vars;
        Ok(Self {
            n_vars,
            probs: vec![1.0 / len as f64; len],
        })
    }

    /// All probability mass on the single basis state `index`.
    pub fn point_mass(n_vars: usize, index: u64) -> SelectResult<Self> {
        check_n_vars(n_vars)?;
        let len = 1usize << n_vars;
        if index >= len as u64 {
            return Err(SelectError::IndexOutOfRange {
                index,
                n_vars,
                max: len as u64 - 1,
            });
        }
        let mut probs = vec![0.0; len];
        probs[index as usize] = 1.0;
        Ok(Self { n_vars, probs })
    }

    /// Number of decision variables n.
    pub fn n_vars(&self) -> usize {
        self.n_vars
    }

    /// Number of basis states, 2^n.
    pub fn len(&self) -> usize {
        self.probs.len()
    }

    /// Always false; a distribution has at least two entries.
    pub fn is_empty(&self) -> bool {
        self.probs.is_empty()
    }

    /// Probability of basis state `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of range; the range is fixed at
    /// construction, so this is a caller bug rather than a data error.
    pub fn prob(&self, index: u64) -> f64 {
        self.probs[index as usize]
    }

    /// All probabilities, in basis-state index order.
    pub fn probabilities(&self) -> &[f64] {
        &self.probs
    }

    /// Iterate `(index, probability)` pairs in index order.
    pub fn iter(&self) -> impl Iterator<Item = (u64, f64)> + '_ {
        self.probs.iter().enumerate().map(|(j, &p)| (j as u64, p))
    }

    /// Total probability mass on bit-vectors accepted by `pred`.
    pub fn mass_where(&self, mut pred: impl FnMut(&BitVector) -> bool) -> f64 {
        self.iter()
            .filter(|&(j, _)| pred(&BitVector::from_index_unchecked(j, self.n_vars)))
            .map(|(_, p)| p)
            .sum()
    }
}
