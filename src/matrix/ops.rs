//! Algebra-driven matrix operations
//!
//! [`Matrix::join`] is the single combinator behind `+`, `-`, and `*`: it
//! evaluates a caller-supplied function at every index pair of the output
//! and collects the results row-major. The arithmetic operations differ only
//! in their shape precondition and in the per-cell function.
//!
//! Binary operations compute with the **left** operand's algebra.

use super::views::all_pairs;
use super::Matrix;
use crate::algebra::{Algebra, HasAlgebra};
use crate::error::{Error, Result};
use std::ops::{Add, Mul, Sub};

impl<T: Clone> Matrix<T> {
    /// Combine `self` with `that` over every `(i, j)` of a
    /// `self.num_rows() x that.num_cols()` output.
    ///
    /// `op` receives this matrix's algebra and the output coordinates.
    pub fn join<U, F>(&self, that: &Matrix<U>, op: F) -> Result<Matrix<T>>
    where
        F: FnMut(&Algebra<T>, usize, usize) -> Result<T>,
    {
        self.join_over(that, all_pairs(self.num_rows, that.num_cols), op)
    }

    /// [`join`](Self::join) over an explicit sequence of index pairs.
    ///
    /// Each value is stored at the `(i, j)` its pair names, so the pairs may
    /// come in any order but must cover every cell of the
    /// `self.num_rows() x that.num_cols()` output exactly once. Pairs outside
    /// the output fail with [`Error::IndexOutOfBounds`], a repeated pair with
    /// [`Error::Construction`], and a sequence that leaves cells unvisited
    /// with [`Error::InvalidShape`].
    pub fn join_over<U, I, F>(&self, that: &Matrix<U>, idxs: I, mut op: F) -> Result<Matrix<T>>
    where
        I: IntoIterator<Item = (usize, usize)>,
        F: FnMut(&Algebra<T>, usize, usize) -> Result<T>,
    {
        let (rows, cols) = (self.num_rows, that.num_cols);
        let mut cells: Vec<Option<T>> = std::iter::repeat_with(|| None)
            .take(rows * cols)
            .collect();
        let mut filled = 0;
        for (i, j) in idxs {
            if i >= rows {
                return Err(Error::IndexOutOfBounds {
                    index: i,
                    size: rows,
                });
            }
            if j >= cols {
                return Err(Error::IndexOutOfBounds {
                    index: j,
                    size: cols,
                });
            }
            let cell = &mut cells[i * cols + j];
            if cell.is_some() {
                return Err(Error::Construction {
                    reason: format!("index pair ({i}, {j}) produced twice"),
                });
            }
            *cell = Some(op(&self.algebra, i, j)?);
            filled += 1;
        }
        let data = cells
            .into_iter()
            .collect::<Option<Vec<T>>>()
            .ok_or(Error::InvalidShape {
                rows,
                cols,
                len: filled,
            })?;
        Matrix::with_algebra(rows, cols, data, self.algebra.clone())
    }

    fn check_same_shape<U>(&self, op: &'static str, that: &Matrix<U>) -> Result<()> {
        if self.shape() != that.shape() {
            return Err(Error::dimension_mismatch(op, self.shape(), that.shape()));
        }
        Ok(())
    }

    /// Elementwise `plus`; shapes must be identical
    pub fn add(&self, that: &Matrix<T>) -> Result<Matrix<T>> {
        self.check_same_shape("add", that)?;
        let ring = self.algebra.require_ring("add")?;
        let cols = self.num_cols;
        self.join(that, |_, i, j| {
            let k = i * cols + j;
            Ok(ring.plus(self.data[k].clone(), that.data[k].clone()))
        })
    }

    /// Elementwise `minus`; requires a field
    pub fn sub(&self, that: &Matrix<T>) -> Result<Matrix<T>> {
        self.check_same_shape("sub", that)?;
        let field = self.algebra.require_field("sub")?;
        let cols = self.num_cols;
        self.join(that, |_, i, j| {
            let k = i * cols + j;
            Ok(field.minus(self.data[k].clone(), that.data[k].clone()))
        })
    }

    /// Matrix product: `C[i, j] = dot(row i of self, column j of that)`
    ///
    /// Requires `self.num_cols() == that.num_rows()`; the result is
    /// `self.num_rows() x that.num_cols()`.
    pub fn matmul(&self, that: &Matrix<T>) -> Result<Matrix<T>> {
        if self.num_cols != that.num_rows {
            return Err(Error::dimension_mismatch(
                "matmul",
                self.shape(),
                that.shape(),
            ));
        }
        let ring = self.algebra.require_ring("matmul")?;
        let (rows, cols) = (self.rows(), that.cols());
        self.join(that, |_, i, j| ring.dot(&rows[i], &cols[j]))
    }

    /// `k`-fold product of a square matrix with itself; `pow(0)` is the
    /// identity
    pub fn pow(&self, k: u32) -> Result<Matrix<T>> {
        if !self.is_square() {
            return Err(Error::dimension_mismatch("pow", self.shape(), self.shape()));
        }
        if k == 0 {
            return Matrix::identity_with(self.num_rows, self.algebra.clone());
        }
        let mut acc = self.clone();
        for _ in 1..k {
            acc = acc.matmul(self)?;
        }
        Ok(acc)
    }

    /// Multiply every element on the left: `s ⊗ e`
    pub fn scale_left(&self, s: T) -> Result<Matrix<T>> {
        let ring = self.algebra.require_ring("scale")?;
        Ok(self.map_with(self.algebra.clone(), |e| ring.times(s.clone(), e.clone())))
    }

    /// Multiply every element on the right: `e ⊗ s`
    pub fn scale_right(&self, s: T) -> Result<Matrix<T>> {
        let ring = self.algebra.require_ring("scale")?;
        Ok(self.map_with(self.algebra.clone(), |e| ring.times(e.clone(), s.clone())))
    }
}

impl<T> Matrix<T> {
    /// Apply `f` to every element, keeping the shape; the result computes
    /// with `algebra`
    pub fn map_with<U, F>(&self, algebra: impl Into<Algebra<U>>, f: F) -> Matrix<U>
    where
        F: FnMut(&T) -> U,
    {
        Matrix::from_parts(
            self.num_rows,
            self.num_cols,
            self.data.iter().map(f).collect(),
            algebra.into(),
        )
    }

    /// Apply `f` to every element; the result uses `U`'s default algebra
    pub fn map<U, F>(&self, f: F) -> Matrix<U>
    where
        U: HasAlgebra,
        F: FnMut(&T) -> U,
    {
        self.map_with(U::algebra(), f)
    }
}

impl<T: Clone> Add<&Matrix<T>> for &Matrix<T> {
    type Output = Result<Matrix<T>>;

    fn add(self, rhs: &Matrix<T>) -> Self::Output {
        Matrix::add(self, rhs)
    }
}

impl<T: Clone> Sub<&Matrix<T>> for &Matrix<T> {
    type Output = Result<Matrix<T>>;

    fn sub(self, rhs: &Matrix<T>) -> Self::Output {
        Matrix::sub(self, rhs)
    }
}

impl<T: Clone> Mul<&Matrix<T>> for &Matrix<T> {
    type Output = Result<Matrix<T>>;

    fn mul(self, rhs: &Matrix<T>) -> Self::Output {
        self.matmul(rhs)
    }
}

macro_rules! impl_scalar_mul {
    ($($t:ty),*) => {
        $(
            impl Mul<$t> for &Matrix<$t> {
                type Output = Result<Matrix<$t>>;

                fn mul(self, rhs: $t) -> Self::Output {
                    self.scale_right(rhs)
                }
            }

            impl Mul<&Matrix<$t>> for $t {
                type Output = Result<Matrix<$t>>;

                fn mul(self, rhs: &Matrix<$t>) -> Self::Output {
                    rhs.scale_left(self)
                }
            }
        )*
    };
}

impl_scalar_mul!(f64, bool, i64);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algebra::{BOOLEAN_ALGEBRA, GF2_FIELD, MINPLUS_ALGEBRA};

    #[test]
    fn test_add() {
        let a = Matrix::<i64>::from_rows([[1, 2, 3], [4, 5, 6]]).unwrap();
        let b = Matrix::<i64>::from_rows([[10, 20, 30], [40, 50, 60]]).unwrap();
        let c = (&a + &b).unwrap();
        assert_eq!(c.data(), &[11, 22, 33, 44, 55, 66]);
    }

    #[test]
    fn test_add_shape_mismatch() {
        let a = Matrix::<i64>::zeros(2, 3).unwrap();
        let b = Matrix::<i64>::zeros(3, 2).unwrap();
        assert_eq!(
            (&a + &b).unwrap_err(),
            Error::dimension_mismatch("add", (2, 3), (3, 2))
        );
    }

    #[test]
    fn test_matmul_rectangular() {
        let a = Matrix::<i64>::from_rows([[1, 2, 3], [4, 5, 6]]).unwrap();
        let b = Matrix::<i64>::from_rows([[1], [0], [2]]).unwrap();
        let c = (&a * &b).unwrap();
        assert_eq!(c.shape(), (2, 1));
        assert_eq!(c.data(), &[7, 16]);
    }

    #[test]
    fn test_matmul_mismatch_reports_all_dimensions() {
        let a = Matrix::<i64>::zeros(2, 3).unwrap();
        let b = Matrix::<i64>::zeros(2, 3).unwrap();
        let err = (&a * &b).unwrap_err();
        assert_eq!(err.to_string(), "Dimension mismatch in matmul: (2x3) vs (2x3)");
    }

    #[test]
    fn test_sub_needs_field() {
        let a = Matrix::<f64>::ones_with(2, 2, MINPLUS_ALGEBRA).unwrap();
        assert!(matches!(
            (&a - &a).unwrap_err(),
            Error::UnsupportedOperation { op: "sub", .. }
        ));
        let b = Matrix::<f64>::from_rows([[3.0, 2.0]]).unwrap();
        let c = Matrix::<f64>::from_rows([[1.0, 5.0]]).unwrap();
        assert_eq!((&b - &c).unwrap().data(), &[2.0, -3.0]);
    }

    #[test]
    fn test_gf2_matmul() {
        let a = Matrix::with_algebra(2, 2, vec![1u8, 1, 0, 1], GF2_FIELD).unwrap();
        // [[1,1],[0,1]]^2 = [[1,0],[0,1]] over GF(2)
        assert_eq!((&a * &a).unwrap().data(), &[1, 0, 0, 1]);
    }

    #[test]
    fn test_pow() {
        let a = Matrix::<i64>::from_rows([[1, 1], [1, 0]]).unwrap();
        assert_eq!(a.pow(0).unwrap(), Matrix::<i64>::identity(2).unwrap());
        assert_eq!(a.pow(1).unwrap(), a);
        // Fibonacci
        assert_eq!(a.pow(10).unwrap().data(), &[89, 55, 55, 34]);
        let r = Matrix::<i64>::zeros(2, 3).unwrap();
        assert!(r.pow(2).is_err());
    }

    #[test]
    fn test_join_over_places_values_by_coordinate() {
        let a = Matrix::<i64>::from_rows([[1, 2], [3, 4]]).unwrap();
        let pairs: Vec<_> = a.idxs().iter().rev().copied().collect();
        let c = a
            .join_over(&a, pairs, |_, i, j| Ok(*a.get(i, j)?))
            .unwrap();
        assert_eq!(c, a);
    }

    #[test]
    fn test_join_over_rejects_bad_sequences() {
        let a = Matrix::<i64>::from_rows([[1, 2], [3, 4]]).unwrap();
        let short = a.join_over(&a, [(0, 0)], |_, _, _| Ok(0));
        assert!(matches!(short, Err(Error::InvalidShape { len: 1, .. })));
        let repeated = a.join_over(&a, [(0, 0); 4], |_, _, _| Ok(1));
        assert!(matches!(repeated, Err(Error::Construction { .. })));
        let outside = a.join_over(&a, [(0, 0), (0, 1), (1, 0), (2, 2)], |_, _, _| Ok(0));
        assert!(matches!(outside, Err(Error::IndexOutOfBounds { index: 2, .. })));
    }

    #[test]
    fn test_map_changes_element_type() {
        let a = Matrix::<i64>::from_rows([[1, -2], [3, -4]]).unwrap();
        let positive: Matrix<bool> = a.map(|&e| e > 0);
        assert_eq!(positive.data(), &[true, false, true, false]);
        assert_eq!(positive.algebra().name(), "boolean");
        let tagged = a.map_with(BOOLEAN_ALGEBRA, |&e| e % 2 == 0);
        assert_eq!(tagged.data(), &[false, true, false, true]);
    }

    #[test]
    fn test_scalar_multiply() {
        let a = Matrix::<f64>::from_rows([[1.0, 2.0], [3.0, 4.0]]).unwrap();
        assert_eq!((2.0 * &a).unwrap().data(), &[2.0, 4.0, 6.0, 8.0]);
        assert_eq!((&a * 0.5).unwrap().data(), &[0.5, 1.0, 1.5, 2.0]);
        let b = Matrix::<bool>::from_rows([[true, false]]).unwrap();
        assert_eq!((false * &b).unwrap().data(), &[false, false]);
    }
}
