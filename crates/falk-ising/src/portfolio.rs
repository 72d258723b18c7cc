//! Mean-variance portfolio-selection instances.
//!
//! A portfolio instance asks for a subset of n assets that maximises
//! expected return while minimising covariance risk, subject to a budget
//! of exactly B picks.  The budget enters as a quadratic penalty so the
//! whole objective is a single scoring function over bit-vectors:
//!
//!   cost(x) = q·xᵀΣx − μᵀx + λ·(Σᵢ xᵢ − B)²
//!
//! Lower is better.  This cost is the canonical `ScoreFunction` handed to
//! the selection reporter, and the input to the Ising encoding.

use ndarray::{Array1, Array2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::debug;

use falk_select::{BitVector, MAX_VARS, SelectError};

use crate::error::{IsingError, IsingResult};

/// A penalized mean-variance portfolio-selection instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Portfolio {
    returns: Array1<f64>,
    covariance: Array2<f64>,
    risk_factor: f64,
    budget: usize,
    penalty: f64,
}

impl Portfolio {
    /// Create an instance from explicit market data.
    ///
    /// # Arguments
    /// * `returns`     — expected return μᵢ per asset
    /// * `covariance`  — n×n return covariance Σ
    /// * `risk_factor` — risk appetite q (0 = return only)
    /// * `budget`      — number of assets to pick, ≤ n
    /// * `penalty`     — weight λ of the budget-violation penalty
    pub fn new(
        returns: Array1<f64>,
        covariance: Array2<f64>,
        risk_factor: f64,
        budget: usize,
        penalty: f64,
    ) -> IsingResult<Self> {
        let n_assets = returns.len();
        if n_assets == 0 {
            return Err(SelectError::NoVariables.into());
        }
        if n_assets > MAX_VARS {
            return Err(SelectError::TooManyVariables {
                n_vars: n_assets,
                max: MAX_VARS,
            }
            .into());
        }
        let (rows, cols) = covariance.dim();
        if rows != n_assets || cols != n_assets {
            return Err(IsingError::CovarianceShape {
                n_assets,
                rows,
                cols,
            });
        }
        if budget > n_assets {
            return Err(IsingError::BudgetExceedsAssets { budget, n_assets });
        }
        for (name, value) in [("risk_factor", risk_factor), ("penalty", penalty)] {
            if !value.is_finite() {
                return Err(IsingError::NonFiniteParameter { name, value });
            }
        }
        for &value in returns.iter().chain(covariance.iter()) {
            if !value.is_finite() {
                return Err(IsingError::NonFiniteParameter {
                    name: "market data",
                    value,
                });
            }
        }
        Ok(Self {
            returns,
            covariance,
            risk_factor,
            budget,
            penalty,
        })
    }

    /// Generate a random instance with a fixed seed.
    ///
    /// Returns are drawn uniformly from [-0.05, 0.15]; the covariance is
    /// built from per-asset volatilities in [0.05, 0.20] and pairwise
    /// correlations in [-0.25, 0.25], so it is symmetric by construction.
    pub fn random(n_assets: usize, budget: usize, seed: u64) -> IsingResult<Self> {
        let mut rng = StdRng::seed_from_u64(seed);
        let returns = Array1::from_shape_fn(n_assets, |_| rng.gen_range(-0.05..0.15));
        let vols: Vec<f64> = (0..n_assets).map(|_| rng.gen_range(0.05..0.20)).collect();
        let mut covariance = Array2::zeros((n_assets, n_assets));
        for i in 0..n_assets {
            covariance[(i, i)] = vols[i] * vols[i];
            for j in (i + 1)..n_assets {
                let rho: f64 = rng.gen_range(-0.25..0.25);
                let cov = rho * vols[i] * vols[j];
                covariance[(i, j)] = cov;
                covariance[(j, i)] = cov;
            }
        }
        debug!(n_assets, budget, seed, "generated random portfolio instance");
        // Penalty large enough to dominate the return scale of the data.
        Self::new(returns, covariance, 0.5, budget, 1.0)
    }

    /// Number of assets n.
    pub fn n_assets(&self) -> usize {
        self.returns.len()
    }

    /// Expected returns μ.
    pub fn returns(&self) -> &Array1<f64> {
        &self.returns
    }

    /// Return covariance Σ.
    pub fn covariance(&self) -> &Array2<f64> {
        &self.covariance
    }

    /// Risk appetite q.
    pub fn risk_factor(&self) -> f64 {
        self.risk_factor
    }

    /// Target number of picks B.
    pub fn budget(&self) -> usize {
        self.budget
    }

    /// Budget-violation penalty weight λ.
    pub fn penalty(&self) -> f64 {
        self.penalty
    }

    /// Penalized mean-variance cost of one selection.  Lower is better.
    ///
    /// # Panics
    /// Panics if the selection length differs from the asset count.
    pub fn cost(&self, bv: &BitVector) -> f64 {
        assert_eq!(
            bv.len(),
            self.n_assets(),
            "selection length must match asset count"
        );
        let mut risk = 0.0;
        let mut ret = 0.0;
        for i in 0..self.n_assets() {
            if !bv.get(i) {
                continue;
            }
            ret += self.returns[i];
            for j in 0..self.n_assets() {
                if bv.get(j) {
                    risk += self.covariance[(i, j)];
                }
            }
        }
        let shortfall = bv.count_ones() as f64 - self.budget as f64;
        self.risk_factor * risk - ret + self.penalty * shortfall * shortfall
    }

    /// The cost as a borrowing closure, in the shape the reporter expects.
    pub fn score_fn(&self) -> impl Fn(&BitVector) -> f64 + '_ {
        move |bv| self.cost(bv)
    }
}
