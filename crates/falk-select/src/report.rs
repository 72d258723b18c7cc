//! Ranked selection reports.
//!
//! Turns a [`Distribution`] plus a scoring function into an ordered report
//! of `(bit-vector, score, probability)` entries, most probable first.
//! Equal probabilities fall back to ascending basis-state index, so the
//! ordering is total and two runs over the same input agree entry for
//! entry.  Floating-point ties are common in practice — a symmetric
//! objective leaves many basis states at identical probability — which is
//! why the fallback is part of the contract, not an implementation detail.
//!
//! # Example
//!
//! ```rust
//! use falk_select::{Distribution, Report};
//!
//! let dist = Distribution::from_probabilities(2, vec![0.1, 0.2, 0.3, 0.4]).unwrap();
//! let report = Report::build(&dist, |bv| bv.count_ones() as f64);
//! assert_eq!(report.entries()[0].index, 3);
//! assert_eq!(report.best().to_index(), 3);
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::bitvec::BitVector;
use crate::distribution::Distribution;

/// One row of a selection report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportEntry {
    /// Basis-state index this row was decoded from.
    pub index: u64,
    /// The candidate selection.
    pub bitvec: BitVector,
    /// Objective value of the selection.
    pub score: f64,
    /// Probability assigned by the distribution.
    pub probability: f64,
}

/// A complete ranked enumeration of all 2^n candidate selections.
///
/// Ordered by strictly decreasing probability; ties broken by ascending
/// basis-state index.  Every bit-vector of the distribution's length
/// appears exactly once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    n_vars: usize,
    entries: Vec<ReportEntry>,
}

impl Report {
    /// Enumerate, score, and rank every basis state of `dist`.
    ///
    /// Pure: the same distribution and scoring function always produce the
    /// same report.  The scoring function is called exactly once per basis
    /// state, in index order.
    pub fn build(dist: &Distribution, mut score_fn: impl FnMut(&BitVector) -> f64) -> Self {
        let n_vars = dist.n_vars();
        let mut entries: Vec<ReportEntry> = dist
            .iter()
            .map(|(index, probability)| {
                let bitvec = BitVector::from_index_unchecked(index, n_vars);
                let score = score_fn(&bitvec);
                ReportEntry {
                    index,
                    bitvec,
                    score,
                    probability,
                }
            })
            .collect();

        // total_cmp keeps the sort total even though probabilities are f64;
        // NaN is excluded at Distribution construction.
        entries.sort_by(|a, b| {
            b.probability
                .total_cmp(&a.probability)
                .then_with(|| a.index.cmp(&b.index))
        });

        debug!(n_vars, entries = entries.len(), "selection report built");
        Self { n_vars, entries }
    }

    /// Number of decision variables n.
    pub fn n_vars(&self) -> usize {
        self.n_vars
    }

    /// All entries, most probable first.
    pub fn entries(&self) -> &[ReportEntry] {
        &self.entries
    }

    /// Number of entries, always 2^n.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; a report covers at least two basis states.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The most probable selection (ties: lowest index).
    pub fn best(&self) -> &BitVector {
        &self.entries[0].bitvec
    }

    /// The `k` most probable entries (all of them when `k` exceeds 2^n).
    pub fn top(&self, k: usize) -> &[ReportEntry] {
        &self.entries[..k.min(self.entries.len())]
    }
}

/// The single most probable bit-vector of `dist` (ties: lowest index).
///
/// Agrees with `Report::build(dist, ..).best()` without paying for the
/// full enumeration sort.
pub fn optimal_selection(dist: &Distribution) -> BitVector {
    let mut best_index = 0u64;
    let mut best_prob = f64::NEG_INFINITY;
    for (index, prob) in dist.iter() {
        if prob > best_prob {
            best_prob = prob;
            best_index = index;
        }
    }
    BitVector::from_index_unchecked(best_index, dist.n_vars())
}
