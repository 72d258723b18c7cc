//! Ising encoding of the portfolio objective.
//!
//! The penalized cost is a QUBO over x ∈ {0,1}ⁿ.  Substituting
//! xᵢ = (1 − zᵢ)/2 with spins zᵢ ∈ {−1, +1} gives the diagonal Ising
//! Hamiltonian
//!
//!   E(z) = offset + Σᵢ hᵢ·zᵢ + Σ_{i<j} Jᵢⱼ·zᵢzⱼ
//!
//! whose energy on the spin image of any bit-vector equals the original
//! cost exactly.  A downstream circuit layer reads `h` as Z coefficients
//! and `J` as ZZ couplings; this crate only owns the arithmetic.

use serde::{Deserialize, Serialize};
use tracing::debug;

use falk_select::BitVector;

use crate::portfolio::Portfolio;

/// A diagonal Ising model: offset + Σ hᵢzᵢ + Σ Jᵢⱼzᵢzⱼ.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IsingModel {
    n_vars: usize,
    /// Single-spin (Z) coefficients, one per variable.
    h: Vec<f64>,
    /// Coupling (ZZ) coefficients, sparse, i < j.
    j: Vec<(usize, usize, f64)>,
    /// Constant energy shift.
    offset: f64,
}

impl IsingModel {
    /// Encode a portfolio instance.
    ///
    /// The encoding is exact: [`Self::energy`] of any selection equals
    /// [`Portfolio::cost`] of the same selection.
    pub fn from_portfolio(p: &Portfolio) -> Self {
        let n = p.n_assets();
        let q = p.risk_factor();
        let lambda = p.penalty();
        let b = p.budget() as f64;

        // QUBO coefficients: cost(x) = const + Σ aᵢxᵢ + Σ_{i<j} bᵢⱼxᵢxⱼ
        let mut linear = vec![0.0; n];
        let mut quad = vec![vec![0.0; n]; n];
        let mut offset = lambda * b * b;
        for i in 0..n {
            // diagonal covariance and x² = x
            linear[i] += q * p.covariance()[(i, i)] - p.returns()[i] + lambda * (1.0 - 2.0 * b);
            for j in (i + 1)..n {
                quad[i][j] += q * (p.covariance()[(i, j)] + p.covariance()[(j, i)]) + 2.0 * lambda;
            }
        }

        // Spin substitution xᵢ = (1 − zᵢ)/2.
        let mut h = vec![0.0; n];
        let mut couplings = Vec::new();
        for i in 0..n {
            offset += linear[i] / 2.0;
            h[i] -= linear[i] / 2.0;
            for j in (i + 1)..n {
                let b_ij = quad[i][j];
                if b_ij == 0.0 {
                    continue;
                }
                offset += b_ij / 4.0;
                h[i] -= b_ij / 4.0;
                h[j] -= b_ij / 4.0;
                couplings.push((i, j, b_ij / 4.0));
            }
        }

        debug!(
            n_vars = n,
            couplings = couplings.len(),
            offset,
            "encoded portfolio as Ising model"
        );
        Self {
            n_vars: n,
            h,
            j: couplings,
            offset,
        }
    }

    /// Number of spin variables.
    pub fn n_vars(&self) -> usize {
        self.n_vars
    }

    /// Single-spin coefficients hᵢ.
    pub fn linear(&self) -> &[f64] {
        &self.h
    }

    /// Coupling coefficients (i, j, Jᵢⱼ) with i < j.
    pub fn couplings(&self) -> &[(usize, usize, f64)] {
        &self.j
    }

    /// Constant energy shift.
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Energy of a selection under the spin image zᵢ = 1 − 2xᵢ.
    ///
    /// # Panics
    /// Panics if the selection length differs from the variable count.
    pub fn energy(&self, bv: &BitVector) -> f64 {
        assert_eq!(
            bv.len(),
            self.n_vars,
            "selection length must match variable count"
        );
        let z = |i: usize| if bv.get(i) { -1.0 } else { 1.0 };
        let single: f64 = self.h.iter().enumerate().map(|(i, hi)| hi * z(i)).sum();
        let pair: f64 = self.j.iter().map(|&(i, j, jij)| jij * z(i) * z(j)).sum();
        self.offset + single + pair
    }
}
