//! `falk-select` — ranked selection reporting over bit-vector distributions.
//!
//! A quantum or classical solver for a binary selection problem ends with a
//! probability distribution over all 2^n candidate bit-vectors.  This crate
//! turns that raw distribution into a deterministic, fully ordered report:
//!
//! - [`BitVector`] — one candidate selection, little-endian indexed
//! - [`Distribution`] — a validated probability mass function over 2^n states
//! - [`Report`] — all candidates scored and ranked, most probable first
//! - [`optimal_selection`] — just the winner, without the full sort
//!
//! The reporter is a pure transform: no I/O, no shared state, same output
//! for the same input.  Display and plotting belong to the caller.
//!
//! # Quick start
//!
//! ```rust
//! use falk_select::{Distribution, Report, optimal_selection};
//!
//! let dist = Distribution::from_probabilities(2, vec![0.1, 0.2, 0.3, 0.4])?;
//! let report = Report::build(&dist, |bv| -(bv.count_ones() as f64));
//!
//! assert_eq!(report.len(), 4);
//! assert_eq!(optimal_selection(&dist), *report.best());
//! # Ok::<(), falk_select::SelectError>(())
//! ```

pub mod bitvec;
pub mod distribution;
pub mod error;
pub mod report;

pub use bitvec::{BitVector, MAX_VARS};
pub use distribution::{Distribution, NORMALIZATION_TOLERANCE};
pub use error::{SelectError, SelectResult};
pub use report::{Report, ReportEntry, optimal_selection};
