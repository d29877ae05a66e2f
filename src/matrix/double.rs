//! Double-precision matrices over the real field

use super::Matrix;
use crate::algebra::BOOLEAN_ALGEBRA;
use crate::error::Result;
use std::ops::{Add, Mul, Sub};
use tracing::debug;

impl Matrix<f64> {
    /// Smallest element
    pub fn min(&self) -> f64 {
        self.data.iter().copied().fold(f64::INFINITY, f64::min)
    }

    /// Largest element
    pub fn max(&self) -> f64 {
        self.data.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    /// Arithmetic mean of all elements
    pub fn mean(&self) -> f64 {
        self.data.iter().sum::<f64>() / self.data.len() as f64
    }

    /// Rescale to `[0, 1]`: `(e - min) / (max - min)`.
    ///
    /// A constant matrix (`max == min`) has no spread to rescale and maps to
    /// all zeros.
    pub fn min_max_norm(&self) -> Matrix<f64> {
        let (min, max) = (self.min(), self.max());
        let range = max - min;
        if range == 0.0 {
            debug!(value = min, "min-max normalizing a constant matrix");
            return self.map_with(self.algebra, |_| 0.0);
        }
        self.map_with(self.algebra, |&e| (e - min) / range)
    }

    /// Center on the mean and scale by the spread: `(e - mean) / (max - min)`.
    ///
    /// A constant matrix maps to all zeros.
    pub fn mean_norm(&self) -> Matrix<f64> {
        let (min, max, mean) = (self.min(), self.max(), self.mean());
        let range = max - min;
        if range == 0.0 {
            debug!(value = min, "mean normalizing a constant matrix");
            return self.map_with(self.algebra, |_| 0.0);
        }
        self.map_with(self.algebra, |&e| (e - mean) / range)
    }

    /// Threshold at the midpoint of the global min and max: `e > (min + max) / 2`
    pub fn to_bool_matrix(&self) -> Matrix<bool> {
        let threshold = (self.min() + self.max()) / 2.0;
        self.to_bool_matrix_with(threshold, |e, t| e > t)
    }

    /// Convert with an explicit threshold and predicate `(element, threshold)`
    pub fn to_bool_matrix_with<F>(&self, threshold: f64, predicate: F) -> Matrix<bool>
    where
        F: Fn(f64, f64) -> bool,
    {
        self.map_with(BOOLEAN_ALGEBRA, |&e| predicate(e, threshold))
    }

    /// Same shape and every pair of elements within `tol`
    pub fn approx_eq(&self, other: &Matrix<f64>, tol: f64) -> bool {
        self.shape() == other.shape()
            && self
                .data
                .iter()
                .zip(other.data.iter())
                .all(|(a, b)| (a - b).abs() <= tol)
    }
}

impl Matrix<bool> {
    /// Widen to doubles: `true → 1.0`, `false → 0.0`
    pub fn to_double(&self) -> Matrix<f64> {
        self.map(|&b| if b { 1.0 } else { 0.0 })
    }
}

impl From<&Matrix<bool>> for Matrix<f64> {
    fn from(m: &Matrix<bool>) -> Self {
        m.to_double()
    }
}

macro_rules! impl_mixed_op {
    ($trait:ident, $method:ident) => {
        impl $trait<&Matrix<bool>> for &Matrix<f64> {
            type Output = Result<Matrix<f64>>;

            fn $method(self, rhs: &Matrix<bool>) -> Self::Output {
                Matrix::$method(self, &rhs.to_double())
            }
        }

        impl $trait<&Matrix<f64>> for &Matrix<bool> {
            type Output = Result<Matrix<f64>>;

            fn $method(self, rhs: &Matrix<f64>) -> Self::Output {
                Matrix::$method(&self.to_double(), rhs)
            }
        }
    };
}

impl_mixed_op!(Add, add);
impl_mixed_op!(Sub, sub);

impl Mul<&Matrix<bool>> for &Matrix<f64> {
    type Output = Result<Matrix<f64>>;

    fn mul(self, rhs: &Matrix<bool>) -> Self::Output {
        self.matmul(&rhs.to_double())
    }
}

impl Mul<&Matrix<f64>> for &Matrix<bool> {
    type Output = Result<Matrix<f64>>;

    fn mul(self, rhs: &Matrix<f64>) -> Self::Output {
        self.to_double().matmul(rhs)
    }
}
