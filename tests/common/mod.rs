//! Common test utilities
#![allow(dead_code)]

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use semimat::matrix::{BooleanMatrix, DoubleMatrix, Matrix};

/// Deterministic generator for reproducible random matrices
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Random `rows x cols` double matrix with entries in `[-10, 10)`
pub fn random_double(rng: &mut StdRng, rows: usize, cols: usize) -> DoubleMatrix {
    Matrix::from_fn(rows, cols, |_, _| rng.random_range(-10.0..10.0)).unwrap()
}

/// Random `rows x cols` integer matrix with small entries
pub fn random_int(rng: &mut StdRng, rows: usize, cols: usize) -> Matrix<i64> {
    Matrix::from_fn(rows, cols, |_, _| rng.random_range(-5..5)).unwrap()
}

/// Random square boolean matrix
#[cfg(feature = "random")]
pub fn random_bool(rng: &mut StdRng, n: usize) -> BooleanMatrix {
    BooleanMatrix::random_with(n, rng).unwrap()
}

/// Assert two f64 slices are close within tolerance
///
/// Uses the formula: |a - b| <= atol + rtol * |b|
pub fn assert_allclose_f64(a: &[f64], b: &[f64], rtol: f64, atol: f64, msg: &str) {
    assert_eq!(a.len(), b.len(), "{}: length mismatch", msg);
    for (i, (x, y)) in a.iter().zip(b.iter()).enumerate() {
        if x.is_infinite() || y.is_infinite() {
            assert_eq!(x, y, "{}: element {} differs: {} vs {}", msg, i, x, y);
            continue;
        }
        let diff = (x - y).abs();
        let tol = atol + rtol * y.abs();
        assert!(
            diff <= tol,
            "{}: element {} differs: {} vs {} (diff={}, tol={})",
            msg,
            i,
            x,
            y,
            diff,
            tol
        );
    }
}
