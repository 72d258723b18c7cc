//! Exact ground-state search by exhaustive enumeration.
//!
//! The Ising encodings here are diagonal, so the classical reference
//! solver is a scan over all 2^n basis states.  The result carries a
//! point-mass distribution over the winning state so it feeds the same
//! reporting path as any sampled or simulated solver output.

use serde::{Deserialize, Serialize};
use tracing::debug;

use falk_select::{BitVector, Distribution};

use crate::error::IsingResult;
use crate::portfolio::Portfolio;

/// The minimum-cost selection found by exhaustive search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroundState {
    /// The winning selection.
    pub bitvec: BitVector,
    /// Its objective value.
    pub energy: f64,
    /// Point mass on the winning state, for the reporting path.
    pub distribution: Distribution,
}

/// Minimise an arbitrary scoring function over all 2^n bit-vectors.
///
/// Ties at the minimum go to the lowest basis-state index.  NaN scores
/// never win; a scoring function that returns NaN everywhere leaves the
/// all-zero selection as the answer.
pub fn minimize(n_vars: usize, mut score_fn: impl FnMut(&BitVector) -> f64) -> IsingResult<GroundState> {
    // Validates n_vars and seeds the scan with index 0.
    let mut best = BitVector::from_index(0, n_vars)?;
    let mut best_energy = score_fn(&best);
    let mut best_index = 0u64;

    for index in 1..(1u64 << n_vars) {
        let bv = BitVector::from_index(index, n_vars)?;
        let energy = score_fn(&bv);
        if energy < best_energy || (best_energy.is_nan() && !energy.is_nan()) {
            best = bv;
            best_energy = energy;
            best_index = index;
        }
    }

    debug!(n_vars, best_index, best_energy, "exhaustive ground-state scan done");
    Ok(GroundState {
        bitvec: best,
        energy: best_energy,
        distribution: Distribution::point_mass(n_vars, best_index)?,
    })
}

/// Exact ground state of a portfolio instance.
pub fn solve_exact(portfolio: &Portfolio) -> IsingResult<GroundState> {
    minimize(portfolio.n_assets(), portfolio.score_fn())
}
