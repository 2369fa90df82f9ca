//! Algebraic laws every reduction, factorisation and solution must obey,
//! checked on fixed scenarios and on seeded random integer matrices.

use approx::assert_abs_diff_eq;
use math_audio_elimination::{
    EliminationError, RowOperation, SolutionStatus, apply_all, inverse, lu, row_echelon, rref,
    solve,
};
use ndarray::{Array1, Array2, array};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const EPS: f64 = 1e-8;

fn random_integer_matrix(rng: &mut StdRng, rows: usize, cols: usize) -> Array2<f64> {
    Array2::from_shape_fn((rows, cols), |_| rng.random_range(-5..=5) as f64)
}

/// Matrix whose last row is a combination of the others.
fn random_rank_deficient(rng: &mut StdRng, rows: usize, cols: usize) -> Array2<f64> {
    let mut m = random_integer_matrix(rng, rows, cols);
    let a = rng.random_range(-3..=3) as f64;
    let b = rng.random_range(-3..=3) as f64;
    for j in 0..cols {
        m[[rows - 1, j]] = a * m[[0, j]] + b * m[[1, j]];
    }
    m
}

fn sample_matrices() -> Vec<Array2<f64>> {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut out = vec![
        array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 10.0]],
        array![[1.0, 2.0, 3.0], [2.0, 4.0, 6.0]],
        array![[0.0, 0.0], [0.0, 0.0]],
        array![[0.0, 2.0, 1.0], [0.0, 1.0, 4.0], [0.0, 3.0, 5.0], [0.0, 0.0, 1.0]],
    ];
    for _ in 0..20 {
        let rows = rng.random_range(2..=6);
        let cols = rng.random_range(1..=6);
        out.push(random_integer_matrix(&mut rng, rows, cols));
        out.push(random_rank_deficient(&mut rng, rows.max(3), cols));
    }
    out
}

fn square_samples() -> Vec<Array2<f64>> {
    let mut rng = StdRng::seed_from_u64(7);
    let mut out = vec![
        array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 10.0]],
        array![[1.0, 2.0], [2.0, 4.0]],
        array![[0.0, 1.0], [1.0, 0.0]],
    ];
    for n in 2..=6 {
        out.push(random_integer_matrix(&mut rng, n, n));
        out.push(random_rank_deficient(&mut rng, n.max(3), n.max(3)));
    }
    out
}

#[test]
fn replay_law_holds_for_ref_and_rref() {
    for m in sample_matrices() {
        for red in [row_echelon(&m), rref(&m)] {
            let replayed = apply_all(red.steps(), red.original()).unwrap();
            assert_abs_diff_eq!(&replayed, red.reduced(), epsilon = EPS);
            assert_abs_diff_eq!(&red.replay().unwrap(), red.reduced(), epsilon = EPS);
        }
    }
}

#[test]
fn rank_nullity_law() {
    for m in sample_matrices() {
        for red in [row_echelon(&m), rref(&m)] {
            assert_eq!(red.rank() + red.nullity(), m.ncols());
        }
        assert_eq!(row_echelon(&m).rank(), rref(&m).rank());
    }
}

#[test]
fn pivots_are_strictly_increasing() {
    for m in sample_matrices() {
        let red = rref(&m);
        for pair in red.pivots().windows(2) {
            assert!(pair[0].0 < pair[1].0);
            assert!(pair[0].1 < pair[1].1);
        }
        for (i, &(row, _)) in red.pivots().iter().enumerate() {
            assert_eq!(row, i);
        }
    }
}

#[test]
fn rref_has_unit_pivots_and_clean_columns() {
    for m in sample_matrices() {
        let red = rref(&m);
        let r = red.reduced();
        for &(row, col) in red.pivots() {
            assert_abs_diff_eq!(r[[row, col]], 1.0, epsilon = EPS);
            for other in 0..r.nrows() {
                if other != row {
                    assert_abs_diff_eq!(r[[other, col]], 0.0, epsilon = EPS);
                }
            }
        }
    }
}

#[test]
fn rref_is_idempotent() {
    for m in sample_matrices() {
        let first = rref(&m);
        let second = rref(first.reduced());
        assert!(
            second.steps().is_empty(),
            "RREF of an RREF emitted {} steps",
            second.steps().len()
        );
        assert_abs_diff_eq!(second.reduced(), first.reduced(), epsilon = EPS);
    }
}

#[test]
fn factorization_law() {
    for a in square_samples() {
        let dec = lu(&a).unwrap();
        let n = a.nrows();

        assert_abs_diff_eq!(
            dec.permutation().dot(dec.original()),
            dec.lower().dot(dec.upper()),
            epsilon = EPS
        );
        for i in 0..n {
            assert_eq!(dec.lower()[[i, i]], 1.0);
            for j in 0..n {
                if j > i {
                    assert_eq!(dec.lower()[[i, j]], 0.0);
                }
                if j < i {
                    assert_abs_diff_eq!(dec.upper()[[i, j]], 0.0, epsilon = EPS);
                }
            }
        }
        // each row and column of P holds exactly one 1
        assert_eq!(dec.permutation().sum(), n as f64);
        for row in dec.permutation().rows() {
            assert_eq!(row.sum(), 1.0);
        }
    }
}

#[test]
fn lu_scenario_records_swap() {
    let a = array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 10.0]];
    let dec = lu(&a).unwrap();
    assert!(dec.steps().contains(&RowOperation::Swap { a: 0, b: 2 }));
    assert_abs_diff_eq!(
        dec.permutation().dot(&a),
        dec.lower().dot(dec.upper()),
        epsilon = 1e-12
    );
}

#[test]
fn solve_consistency_and_exhaustive_classification() {
    let mut rng = StdRng::seed_from_u64(99);
    for a in sample_matrices() {
        let b = Array1::from_shape_fn(a.nrows(), |_| rng.random_range(-5..=5) as f64);
        let sol = solve(&a, &b).unwrap();

        match sol.status() {
            SolutionStatus::Unique => {
                let x = sol.solution().expect("unique implies a solution");
                assert_abs_diff_eq!(a.dot(x), b, epsilon = EPS);
                assert_eq!(sol.rank(), a.ncols());
            }
            SolutionStatus::Infinite => {
                assert!(sol.solution().is_none());
                assert!(sol.rank() < a.ncols());
                let x = sol.particular_solution().unwrap();
                assert_abs_diff_eq!(a.dot(&x), b, epsilon = EPS);
            }
            SolutionStatus::Inconsistent => {
                assert!(sol.solution().is_none());
                let last = a.ncols();
                assert!(sol.reduction().pivots().iter().any(|&(_, c)| c == last));
            }
        }
    }
}

#[test]
fn solve_scenarios() {
    let sol = solve(&array![[2.0, 1.0], [5.0, 3.0]], &array![1.0, 2.0]).unwrap();
    assert_eq!(sol.status(), SolutionStatus::Unique);
    assert_abs_diff_eq!(sol.solution().unwrap(), &array![1.0, -1.0], epsilon = 1e-10);

    let sol = solve(&array![[1.0, 2.0], [2.0, 4.0]], &array![1.0, 3.0]).unwrap();
    assert_eq!(sol.status(), SolutionStatus::Inconsistent);
    assert!(sol.solution().is_none());

    let sol = solve(&array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]], &array![7.0, 8.0]).unwrap();
    assert_eq!(sol.status(), SolutionStatus::Infinite);
    assert!(sol.solution().is_none());
}

#[test]
fn rref_scenario_rank_one() {
    let red = rref(&array![[1.0, 2.0, 3.0], [2.0, 4.0, 6.0]]);
    assert_eq!(red.rank(), 1);
    assert_eq!(red.nullity(), 2);
    assert_eq!(red.pivots().to_vec(), vec![(0, 0)]);
}

#[test]
fn row_add_inverse_scenario() {
    let op = RowOperation::add_multiple(1, 0, -3.0).unwrap();
    assert_eq!(op.inverse(), RowOperation::add_multiple(1, 0, 3.0).unwrap());

    for m in sample_matrices().into_iter().filter(|m| m.nrows() >= 2) {
        let back = op.inverse().apply(&op.apply(&m).unwrap()).unwrap();
        assert_abs_diff_eq!(back, m, epsilon = 1e-12);
    }
}

#[test]
fn inverse_round_trip_or_singular() {
    for a in square_samples() {
        match inverse(&a) {
            Ok(inv) => {
                let n = a.nrows();
                assert_abs_diff_eq!(a.dot(&inv), Array2::<f64>::eye(n), epsilon = EPS);
                assert!(rref(&a).rank() == n);
            }
            Err(err) => {
                assert!(matches!(err, EliminationError::SingularMatrix { .. }));
                assert!(lu(&a).unwrap().is_singular());
            }
        }
    }
}

#[test]
fn inputs_are_never_mutated() {
    let a = array![[0.0, 2.0], [3.0, 1.0]];
    let b = array![1.0, 1.0];
    let snapshot = (a.clone(), b.clone());

    let _ = rref(&a);
    let _ = row_echelon(&a);
    let _ = lu(&a).unwrap();
    let _ = solve(&a, &b).unwrap();
    let _ = inverse(&a).unwrap();

    assert_eq!((a, b), snapshot);
}
