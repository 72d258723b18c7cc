//! `falk-ising` — portfolio-selection problems as diagonal Ising models.
//!
//! The problem layer above `falk-select`:
//!
//! - [`Portfolio`] — penalized mean-variance instances, the canonical
//!   scoring function for selection reports
//! - [`IsingModel`] — exact spin encoding of that cost (Z and ZZ
//!   coefficients plus offset) for circuit back-ends
//! - [`exact`] — classical ground-state search by enumeration
//! - [`Oracle`] — polymorphic good-state input resolved once into a
//!   membership table, with closed-form Grover iteration arithmetic
//! - [`run`] — seeded measurement sampling under an explicit [`RunConfig`]
//!
//! # Quick start
//!
//! ```rust
//! use falk_ising::{Portfolio, exact::solve_exact};
//! use falk_select::Report;
//!
//! let p = Portfolio::random(4, 2, 42)?;
//! let ground = solve_exact(&p)?;
//! let report = Report::build(&ground.distribution, p.score_fn());
//! assert_eq!(report.best(), &ground.bitvec);
//! # Ok::<(), falk_ising::IsingError>(())
//! ```

pub mod error;
pub mod exact;
pub mod ising;
pub mod oracle;
pub mod portfolio;
pub mod run;

pub use error::{IsingError, IsingResult};
pub use exact::GroundState;
pub use ising::IsingModel;
pub use oracle::{GoodState, Oracle};
pub use portfolio::Portfolio;
pub use run::{Counts, RunConfig, sample};
