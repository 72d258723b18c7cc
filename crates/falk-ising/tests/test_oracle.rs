//! Tests for good-state oracle resolution and Grover arithmetic.

use num_complex::Complex64;

use falk_ising::{GoodState, IsingError, Oracle};
use falk_select::{BitVector, Distribution};

fn marked_indices(oracle: &Oracle) -> Vec<u64> {
    (0..(1u64 << oracle.n_vars()))
        .filter(|&j| oracle.is_good(&BitVector::from_index(j, oracle.n_vars()).unwrap()))
        .collect()
}

// ---------------------------------------------------------------------------
// Resolution: all four shapes land on the same table
// ---------------------------------------------------------------------------

#[test]
fn four_shapes_resolve_identically() {
    let n = 3;
    // good states: indices 3 (110) and 5 (101), patterns variable-0 first
    let by_pattern = Oracle::new(
        GoodState::Bitstrings(vec!["110".into(), "101".into()]),
        n,
    )
    .unwrap();
    let by_index = Oracle::new(GoodState::Indices(vec![3, 5]), n).unwrap();

    let mut amps = vec![Complex64::new(0.0, 0.0); 8];
    amps[3] = Complex64::new(std::f64::consts::FRAC_1_SQRT_2, 0.0);
    amps[5] = Complex64::new(0.0, -std::f64::consts::FRAC_1_SQRT_2);
    let by_amplitude = Oracle::new(GoodState::Amplitudes(amps), n).unwrap();

    let by_predicate = Oracle::new(
        GoodState::Predicate(Box::new(|bv: &BitVector| {
            let j = bv.to_index();
            j == 3 || j == 5
        })),
        n,
    )
    .unwrap();

    let expected = vec![3u64, 5];
    for oracle in [&by_pattern, &by_index, &by_amplitude, &by_predicate] {
        assert_eq!(oracle.n_marked(), 2);
        assert_eq!(marked_indices(oracle), expected);
    }
}

#[test]
fn pattern_length_checked() {
    let err = Oracle::new(GoodState::Bitstrings(vec!["01".into()]), 3).unwrap_err();
    assert!(matches!(err, IsingError::PatternLength { .. }));
}

#[test]
fn pattern_symbols_checked() {
    let err = Oracle::new(GoodState::Bitstrings(vec!["0x1".into()]), 3).unwrap_err();
    assert!(matches!(err, IsingError::PatternSymbol { symbol: 'x', .. }));
}

#[test]
fn index_range_checked() {
    let err = Oracle::new(GoodState::Indices(vec![8]), 3).unwrap_err();
    assert!(matches!(err, IsingError::Select(_)));
}

#[test]
fn amplitude_length_checked() {
    let err = Oracle::new(GoodState::Amplitudes(vec![Complex64::new(1.0, 0.0); 7]), 3).unwrap_err();
    assert!(matches!(err, IsingError::Select(_)));
}

// ---------------------------------------------------------------------------
// Mass and Grover arithmetic
// ---------------------------------------------------------------------------

#[test]
fn good_mass_sums_marked_states() {
    let oracle = Oracle::new(GoodState::Indices(vec![1, 3]), 2).unwrap();
    let dist = Distribution::from_probabilities(2, vec![0.1, 0.2, 0.3, 0.4]).unwrap();
    assert!((oracle.good_mass(&dist).unwrap() - 0.6).abs() < 1e-12);
}

#[test]
fn good_mass_requires_matching_width() {
    let oracle = Oracle::new(GoodState::Indices(vec![1]), 2).unwrap();
    let dist = Distribution::uniform(3).unwrap();
    assert!(matches!(
        oracle.good_mass(&dist),
        Err(IsingError::VariableMismatch { oracle_vars: 2, dist_vars: 3 })
    ));
}

#[test]
fn optimal_iterations_single_mark() {
    // N = 16, M = 1: ⌊π/4·4⌋ = 3
    let oracle = Oracle::new(GoodState::Indices(vec![7]), 4).unwrap();
    assert_eq!(oracle.optimal_iterations().unwrap(), 3);
}

#[test]
fn optimal_iterations_never_zero() {
    // M = N/2: floor(π/4·√2) = 1
    let oracle = Oracle::new(GoodState::Indices(vec![0, 1]), 2).unwrap();
    assert_eq!(oracle.optimal_iterations().unwrap(), 1);
}

#[test]
fn no_marked_states_is_an_error() {
    let oracle = Oracle::new(GoodState::Indices(vec![]), 3).unwrap();
    assert!(matches!(
        oracle.optimal_iterations(),
        Err(IsingError::NoMarkedStates)
    ));
}

#[test]
fn success_probability_high_at_optimum() {
    let oracle = Oracle::new(GoodState::Indices(vec![7]), 4).unwrap();
    let k = oracle.optimal_iterations().unwrap();
    assert!(oracle.success_probability(k) > 0.9);
    // zero iterations leave the uniform success rate M/N
    assert!((oracle.success_probability(0) - 1.0 / 16.0).abs() < 1e-12);
}
