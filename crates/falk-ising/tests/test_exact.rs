//! Tests for the exhaustive ground-state solver.

use ndarray::array;

use falk_ising::exact::{minimize, solve_exact};
use falk_ising::Portfolio;
use falk_select::{Report, optimal_selection};

#[test]
fn minimize_finds_global_minimum() {
    // score = distance from index 5
    let ground = minimize(3, |bv| (bv.to_index() as f64 - 5.0).abs()).unwrap();
    assert_eq!(ground.bitvec.to_index(), 5);
    assert_eq!(ground.energy, 0.0);
}

#[test]
fn minimize_tie_takes_lowest_index() {
    // even indices all score 0
    let ground = minimize(3, |bv| f64::from(u8::from(bv.get(0)))).unwrap();
    assert_eq!(ground.bitvec.to_index(), 0);
}

#[test]
fn all_nan_scores_leave_all_zero_selection() {
    let ground = minimize(3, |_| f64::NAN).unwrap();
    assert_eq!(ground.bitvec.to_index(), 0);
    assert!(ground.energy.is_nan());
    assert!((ground.distribution.prob(0) - 1.0).abs() < 1e-12);
}

#[test]
fn nan_scores_never_beat_finite_ones() {
    // only index 5 scores finite
    let ground = minimize(3, |bv| {
        if bv.to_index() == 5 { 1.0 } else { f64::NAN }
    })
    .unwrap();
    assert_eq!(ground.bitvec.to_index(), 5);
    assert_eq!(ground.energy, 1.0);
}

#[test]
fn ground_distribution_is_point_mass() {
    let ground = minimize(2, |bv| -(bv.to_index() as f64)).unwrap();
    assert_eq!(ground.bitvec.to_index(), 3);
    assert!((ground.distribution.prob(3) - 1.0).abs() < 1e-12);
    assert_eq!(optimal_selection(&ground.distribution), ground.bitvec);
}

#[test]
fn exact_solution_beats_every_other_selection() {
    let p = Portfolio::random(5, 2, 11).unwrap();
    let ground = solve_exact(&p).unwrap();
    for j in 0..32 {
        let bv = falk_select::BitVector::from_index(j, 5).unwrap();
        assert!(ground.energy <= p.cost(&bv) + 1e-12);
    }
    assert!((p.cost(&ground.bitvec) - ground.energy).abs() < 1e-12);
}

#[test]
fn exact_result_feeds_the_reporting_path() {
    let p = Portfolio::new(
        array![0.1, 0.2],
        array![[0.04, 0.01], [0.01, 0.09]],
        0.5,
        1,
        2.0,
    )
    .unwrap();
    let ground = solve_exact(&p).unwrap();
    // asset 1 alone is optimal (cost -0.155)
    assert_eq!(ground.bitvec.to_index(), 2);

    let report = Report::build(&ground.distribution, p.score_fn());
    assert_eq!(report.len(), 4);
    assert_eq!(report.best(), &ground.bitvec);
    assert!((report.entries()[0].score - ground.energy).abs() < 1e-12);
}
