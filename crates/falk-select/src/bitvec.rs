//! Fixed-length binary decision vectors.
//!
//! A [`BitVector`] is one candidate selection: bit *i* decides variable
//! (asset) *i*.  Basis-state indices map to bit-vectors little-endian,
//! bit 0 being the least significant bit of the index.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{SelectError, SelectResult};

/// Largest supported number of decision variables.
///
/// Reports enumerate all 2^n basis states, so n is capped where the
/// enumeration still fits comfortably in memory.
pub const MAX_VARS: usize = 26;

/// An ordered, fixed-length sequence of binary decision values.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BitVector {
    bits: Vec<bool>,
}

impl BitVector {
    /// Decode a basis-state index into its n-bit little-endian bit-vector.
    ///
    /// Bit *i* of the result is bit *i* of `index`.  Fails if `index` is
    /// outside `[0, 2^n_vars)` or `n_vars` is outside `[1, MAX_VARS]`.
    pub fn from_index(index: u64, n_vars: usize) -> SelectResult<Self> {
        check_n_vars(n_vars)?;
        let max = (1u64 << n_vars) - 1;
        if index > max {
            return Err(SelectError::IndexOutOfRange {
                index,
                n_vars,
                max,
            });
        }
        Ok(Self::from_index_unchecked(index, n_vars))
    }

    /// Decode without range checks.  Callers guarantee `index < 2^n_vars`.
    pub(crate) fn from_index_unchecked(index: u64, n_vars: usize) -> Self {
        Self {
            bits: (0..n_vars).map(|i| (index >> i) & 1 == 1).collect(),
        }
    }

    /// Build directly from decision values, one per variable.
    pub fn from_bits(bits: impl IntoIterator<Item = bool>) -> SelectResult<Self> {
        let bits: Vec<bool> = bits.into_iter().collect();
        check_n_vars(bits.len())?;
        Ok(Self { bits })
    }

    /// The all-zero selection of length `n_vars`.
    pub fn zeros(n_vars: usize) -> SelectResult<Self> {
        Self::from_index(0, n_vars)
    }

    /// Reconstruct the basis-state index: Σ bit[i]·2^i.
    pub fn to_index(&self) -> u64 {
        self.bits
            .iter()
            .enumerate()
            .filter(|&(_, &b)| b)
            .map(|(i, _)| 1u64 << i)
            .sum()
    }

    /// Decision value of variable `i`.
    pub fn get(&self, i: usize) -> bool {
        self.bits[i]
    }

    /// All decision values, in variable order.
    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    /// Number of decision variables.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// False for every constructible vector (n ≥ 1 is enforced).
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Number of selected variables (Hamming weight).
    pub fn count_ones(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }

    /// Indices of the selected variables, ascending.
    pub fn selected(&self) -> Vec<usize> {
        self.bits
            .iter()
            .enumerate()
            .filter(|&(_, &b)| b)
            .map(|(i, _)| i)
            .collect()
    }
}

/// Renders variable 0 first, e.g. `1011` selects variables 0, 2 and 3.
impl fmt::Display for BitVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.bits {
            write!(f, "{}", u8::from(b))?;
        }
        Ok(())
    }
}

pub(crate) fn check_n_vars(n_vars: usize) -> SelectResult<()> {
    if n_vars == 0 {
        return Err(SelectError::NoVariables);
    }
    if n_vars > MAX_VARS {
        return Err(SelectError::TooManyVariables {
            n_vars,
            max: MAX_VARS,
        });
    }
    Ok(())
}
