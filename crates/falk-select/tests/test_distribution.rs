//! Tests for distribution validation and constructors.

use num_complex::Complex64;

use falk_select::{Distribution, SelectError};

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

#[test]
fn wrong_length_rejected() {
    // 15 entries cannot cover 4 variables (needs 16)
    let err = Distribution::from_probabilities(4, vec![1.0 / 15.0; 15]).unwrap_err();
    assert!(matches!(
        err,
        SelectError::LengthMismatch { n_vars: 4, expected: 16, actual: 15 }
    ));
}

#[test]
fn negative_probability_rejected() {
    let err = Distribution::from_probabilities(1, vec![1.2, -0.2]).unwrap_err();
    assert!(matches!(err, SelectError::InvalidProbability { index: 1, .. }));
}

#[test]
fn nan_probability_rejected() {
    let err = Distribution::from_probabilities(1, vec![f64::NAN, 1.0]).unwrap_err();
    assert!(matches!(err, SelectError::InvalidProbability { index: 0, .. }));
}

#[test]
fn unnormalized_rejected() {
    let err = Distribution::from_probabilities(1, vec![0.4, 0.4]).unwrap_err();
    assert!(matches!(err, SelectError::NotNormalized { .. }));
}

#[test]
fn near_normalized_accepted() {
    // within the 1e-6 tolerance
    let dist = Distribution::from_probabilities(1, vec![0.5, 0.5 + 1e-9]).unwrap();
    assert_eq!(dist.len(), 2);
}

// ---------------------------------------------------------------------------
// Constructors
// ---------------------------------------------------------------------------

#[test]
fn uniform_has_equal_mass() {
    let dist = Distribution::uniform(4).unwrap();
    assert_eq!(dist.n_vars(), 4);
    assert_eq!(dist.len(), 16);
    for (_, p) in dist.iter() {
        assert!((p - 0.0625).abs() < 1e-12);
    }
}

#[test]
fn point_mass_concentrates() {
    let dist = Distribution::point_mass(3, 5).unwrap();
    assert!((dist.prob(5) - 1.0).abs() < 1e-12);
    assert_eq!(dist.iter().filter(|&(_, p)| p > 0.0).count(), 1);
}

#[test]
fn point_mass_index_checked() {
    assert!(matches!(
        Distribution::point_mass(2, 4),
        Err(SelectError::IndexOutOfRange { .. })
    ));
}

#[test]
fn amplitudes_squared_to_probabilities() {
    // |+⟩ on one qubit: amplitudes 1/sqrt(2) each
    let a = Complex64::new(std::f64::consts::FRAC_1_SQRT_2, 0.0);
    let dist = Distribution::from_amplitudes(1, &[a, a]).unwrap();
    assert!((dist.prob(0) - 0.5).abs() < 1e-12);
    assert!((dist.prob(1) - 0.5).abs() < 1e-12);
}

#[test]
fn complex_phase_does_not_change_mass() {
    let a = Complex64::new(0.0, std::f64::consts::FRAC_1_SQRT_2);
    let b = Complex64::new(-std::f64::consts::FRAC_1_SQRT_2, 0.0);
    let dist = Distribution::from_amplitudes(1, &[a, b]).unwrap();
    assert!((dist.prob(0) - 0.5).abs() < 1e-12);
    assert!((dist.prob(1) - 0.5).abs() < 1e-12);
}

#[test]
fn unnormalized_amplitudes_rejected() {
    let a = Complex64::new(1.0, 0.0);
    assert!(matches!(
        Distribution::from_amplitudes(1, &[a, a]),
        Err(SelectError::NotNormalized { .. })
    ));
}

// ---------------------------------------------------------------------------
// Mass queries
// ---------------------------------------------------------------------------

#[test]
fn mass_where_sums_matching_states() {
    let dist = Distribution::from_probabilities(2, vec![0.1, 0.2, 0.3, 0.4]).unwrap();
    // states with bit 0 set: indices 1 and 3
    let mass = dist.mass_where(|bv| bv.get(0));
    assert!((mass - 0.6).abs() < 1e-12);
}
