//! Good-state oracles for amplitude-amplification bookkeeping.
//!
//! Search front-ends accept the set of "good" states in several shapes:
//! literal bit patterns, basis-state indices, an amplitude vector, or an
//! arbitrary predicate.  [`GoodState`] is the closed set of those shapes;
//! [`Oracle::new`] resolves whichever one it is given into a single
//! canonical membership table, once, at construction.  Every later query
//! goes through that table, so the four shapes are indistinguishable
//! after resolution.
//!
//! The oracle also answers the closed-form Grover questions: how many
//! iterations to run and what success probability to expect.  Those are
//! arithmetic on the marked-state count, not circuit execution.

use std::f64::consts::PI;
use std::fmt;

use num_complex::Complex64;
use tracing::debug;

use falk_select::{BitVector, Distribution};

use crate::error::{IsingError, IsingResult};

/// Amplitudes with |a|² below this are treated as unmarked.
pub const AMPLITUDE_EPSILON: f64 = 1e-12;

/// The accepted shapes of a good-state description.
pub enum GoodState {
    /// Literal bit patterns, variable 0 first, e.g. `"0110"`.
    Bitstrings(Vec<String>),
    /// Basis-state indices.
    Indices(Vec<u64>),
    /// A state vector; states with non-negligible amplitude are good.
    Amplitudes(Vec<Complex64>),
    /// An arbitrary membership predicate.
    Predicate(Box<dyn Fn(&BitVector) -> bool + Send + Sync>),
}

impl fmt::Debug for GoodState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bitstrings(p) => f.debug_tuple("Bitstrings").field(p).finish(),
            Self::Indices(ix) => f.debug_tuple("Indices").field(ix).finish(),
            Self::Amplitudes(a) => f.debug_tuple("Amplitudes").field(&a.len()).finish(),
            Self::Predicate(_) => f.debug_tuple("Predicate").finish(),
        }
    }
}

/// A resolved good-state membership oracle over n variables.
#[derive(Debug, Clone)]
pub struct Oracle {
    n_vars: usize,
    marked: Vec<bool>,
    n_marked: usize,
}

impl Oracle {
    /// Resolve a [`GoodState`] description into a membership table.
    ///
    /// Validation depends on the shape: patterns must have length
    /// `n_vars` and contain only `0`/`1`; indices must be in range;
    /// amplitude vectors must have exactly 2^n entries.  Predicates are
    /// evaluated once per basis state here and never again.
    pub fn new(spec: GoodState, n_vars: usize) -> IsingResult<Self> {
        // Range checking of n_vars itself rides on the decode below.
        let size = {
            BitVector::from_index(0, n_vars)?;
            1usize << n_vars
        };
        let mut marked = vec![false; size];
        match spec {
            GoodState::Bitstrings(patterns) => {
                for pattern in patterns {
                    marked[pattern_to_index(&pattern, n_vars)? as usize] = true;
                }
            }
            GoodState::Indices(indices) => {
                for index in indices {
                    if index >= size as u64 {
                        return Err(IsingError::Select(
                            falk_select::SelectError::IndexOutOfRange {
                                index,
                                n_vars,
                                max: size as u64 - 1,
                            },
                        ));
                    }
                    marked[index as usize] = true;
                }
            }
            GoodState::Amplitudes(amplitudes) => {
                if amplitudes.len() != size {
                    return Err(IsingError::Select(
                        falk_select::SelectError::LengthMismatch {
                            n_vars,
                            expected: size,
                            actual: amplitudes.len(),
                        },
                    ));
                }
                for (j, a) in amplitudes.iter().enumerate() {
                    marked[j] = a.norm_sqr() > AMPLITUDE_EPSILON;
                }
            }
            GoodState::Predicate(pred) => {
                for (j, slot) in marked.iter_mut().enumerate() {
                    *slot = pred(&BitVector::from_index(j as u64, n_vars)?);
                }
            }
        }
        let n_marked = marked.iter().filter(|&&m| m).count();
        debug!(n_vars, n_marked, "resolved good-state oracle");
        Ok(Self {
            n_vars,
            marked,
            n_marked,
        })
    }

    /// Number of decision variables n.
    pub fn n_vars(&self) -> usize {
        self.n_vars
    }

    /// Number of marked (good) basis states M.
    pub fn n_marked(&self) -> usize {
        self.n_marked
    }

    /// Membership of a selection.
    ///
    /// # Panics
    /// Panics if the selection length differs from the variable count.
    pub fn is_good(&self, bv: &BitVector) -> bool {
        assert_eq!(
            bv.len(),
            self.n_vars,
            "selection length must match variable count"
        );
        self.marked[bv.to_index() as usize]
    }

    /// Total probability mass a distribution places on good states.
    pub fn good_mass(&self, dist: &Distribution) -> IsingResult<f64> {
        if dist.n_vars() != self.n_vars {
            return Err(IsingError::VariableMismatch {
                oracle_vars: self.n_vars,
                dist_vars: dist.n_vars(),
            });
        }
        Ok(dist
            .iter()
            .filter(|&(j, _)| self.marked[j as usize])
            .map(|(_, p)| p)
            .sum())
    }

    /// Optimal Grover iteration count ⌊(π/4)·√(N/M)⌋, at least 1.
    ///
    /// Fails if no state is marked; returns 1 when half or more of the
    /// space is marked (a single iteration already overshoots).
    pub fn optimal_iterations(&self) -> IsingResult<usize> {
        if self.n_marked == 0 {
            return Err(IsingError::NoMarkedStates);
        }
        let ratio = self.marked.len() as f64 / self.n_marked as f64;
        let k = (PI / 4.0 * ratio.sqrt()).floor() as usize;
        Ok(k.max(1))
    }

    /// Success probability sin²((2k+1)·θ) after `iterations` Grover
    /// rounds, with θ = asin(√(M/N)).
    pub fn success_probability(&self, iterations: usize) -> f64 {
        let theta = (self.n_marked as f64 / self.marked.len() as f64)
            .sqrt()
            .asin();
        ((2 * iterations + 1) as f64 * theta).sin().powi(2)
    }
}

fn pattern_to_index(pattern: &str, n_vars: usize) -> IsingResult<u64> {
    if pattern.chars().count() != n_vars {
        return Err(IsingError::PatternLength {
            pattern: pattern.to_string(),
            actual: pattern.chars().count(),
            n_vars,
        });
    }
    let mut index = 0u64;
    for (i, symbol) in pattern.chars().enumerate() {
        match symbol {
            '0' => {}
            '1' => index |= 1 << i,
            _ => {
                return Err(IsingError::PatternSymbol {
                    pattern: pattern.to_string(),
                    symbol,
                });
            }
        }
    }
    Ok(index)
}
