//! Seeded measurement-style sampling.
//!
//! Backend configuration is an explicit value passed into each call, not
//! process-wide state: two runs with the same [`RunConfig`] over the same
//! distribution produce identical counts.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::debug;

use falk_select::Distribution;

use crate::error::{IsingError, IsingResult};

/// Per-run sampling configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Number of measurement shots.
    pub shots: usize,
    /// RNG seed; `None` draws one from the OS.
    pub seed: Option<u64>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            shots: 1024,
            seed: None,
        }
    }
}

impl RunConfig {
    /// Config with an explicit seed.
    pub fn seeded(shots: usize, seed: u64) -> Self {
        Self {
            shots,
            seed: Some(seed),
        }
    }
}

/// Measurement counts per basis state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counts {
    n_vars: usize,
    shots: usize,
    counts: Vec<u64>,
}

impl Counts {
    /// Number of decision variables n.
    pub fn n_vars(&self) -> usize {
        self.n_vars
    }

    /// Total number of shots taken.
    pub fn shots(&self) -> usize {
        self.shots
    }

    /// Count for basis state `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of range; the range is fixed at
    /// construction, so this is a caller bug rather than a data error.
    pub fn count(&self, index: u64) -> u64 {
        self.counts[index as usize]
    }

    /// All counts, in basis-state index order.
    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    /// Empirical distribution: count / shots per basis state.
    pub fn to_distribution(&self) -> IsingResult<Distribution> {
        let probs = self
            .counts
            .iter()
            .map(|&c| c as f64 / self.shots as f64)
            .collect();
        Ok(Distribution::from_probabilities(self.n_vars, probs)?)
    }
}

/// Draw `config.shots` measurement samples from a distribution.
///
/// Inverse-CDF sampling; deterministic when the config carries a seed.
pub fn sample(dist: &Distribution, config: &RunConfig) -> IsingResult<Counts> {
    if config.shots == 0 {
        return Err(IsingError::ZeroShots);
    }
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut counts = vec![0u64; dist.len()];
    for _ in 0..config.shots {
        let draw: f64 = rng.r#gen();
        let mut acc = 0.0;
        let mut hit = dist.len() as u64 - 1;
        for (index, p) in dist.iter() {
            acc += p;
            if draw < acc {
                hit = index;
                break;
            }
        }
        counts[hit as usize] += 1;
    }

    debug!(
        shots = config.shots,
        seed = ?config.seed,
        "sampled measurement counts"
    );
    Ok(Counts {
        n_vars: dist.n_vars(),
        shots: config.shots,
        counts,
    })
}
