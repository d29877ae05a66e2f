//! Derived views: rows, columns, transpose, index pairs
//!
//! Each view is a pure function of the shape and data. It is computed on
//! first access and stored in a [`OnceLock`], so concurrent readers of the
//! same matrix either see the finished value or block until it is filled.

use super::Matrix;
use crate::error::{Error, Result};
use std::sync::OnceLock;

/// Per-matrix memo cells. Never shared between matrices.
pub(crate) struct ViewCache<T> {
    rows: OnceLock<Vec<Vec<T>>>,
    cols: OnceLock<Vec<Vec<T>>>,
    transpose: OnceLock<Box<Matrix<T>>>,
    idxs: OnceLock<Vec<(usize, usize)>>,
}

impl<T> Default for ViewCache<T> {
    fn default() -> Self {
        Self {
            rows: OnceLock::new(),
            cols: OnceLock::new(),
            transpose: OnceLock::new(),
            idxs: OnceLock::new(),
        }
    }
}

/// Every `(row, col)` pair of a `rows x cols` grid in row-major order
pub fn all_pairs(rows: usize, cols: usize) -> impl Iterator<Item = (usize, usize)> {
    (0..rows).flat_map(move |r| (0..cols).map(move |c| (r, c)))
}

impl<T> Matrix<T> {
    /// All `num_rows * num_cols` index pairs, row-major
    pub fn idxs(&self) -> &[(usize, usize)] {
        self.views
            .idxs
            .get_or_init(|| all_pairs(self.num_rows, self.num_cols).collect())
    }
}

impl<T: Clone> Matrix<T> {
    /// Row vectors, `rows()[r][c] == get(r, c)`
    pub fn rows(&self) -> &[Vec<T>] {
        self.views
            .rows
            .get_or_init(|| self.data.chunks(self.num_cols).map(<[T]>::to_vec).collect())
    }

    /// Column vectors, `cols()[c][r] == get(r, c)`
    pub fn cols(&self) -> &[Vec<T>] {
        self.views.cols.get_or_init(|| {
            (0..self.num_cols)
                .map(|c| {
                    self.data
                        .iter()
                        .skip(c)
                        .step_by(self.num_cols)
                        .cloned()
                        .collect()
                })
                .collect()
        })
    }

    /// Column `col` as a slice of length `num_rows`
    pub fn col(&self, col: usize) -> Result<&[T]> {
        self.cols()
            .get(col)
            .map(Vec::as_slice)
            .ok_or(Error::IndexOutOfBounds {
                index: col,
                size: self.num_cols,
            })
    }

    /// Transposed matrix over the same algebra
    pub fn transpose(&self) -> &Matrix<T> {
        self.views.transpose.get_or_init(|| {
            Box::new(Matrix::from_parts(
                self.num_cols,
                self.num_rows,
                self.cols().concat(),
                self.algebra.clone(),
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Matrix<i64> {
        Matrix::from_rows([[1, 2, 3], [4, 5, 6]]).unwrap()
    }

    #[test]
    fn test_rows_and_cols() {
        let m = sample();
        assert_eq!(m.rows(), &[vec![1, 2, 3], vec![4, 5, 6]]);
        assert_eq!(m.cols(), &[vec![1, 4], vec![2, 5], vec![3, 6]]);
        assert_eq!(m.col(2).unwrap(), &[3, 6]);
        assert!(m.col(3).is_err());
    }

    #[test]
    fn test_transpose() {
        let m = sample();
        let t = m.transpose();
        assert_eq!(t.shape(), (3, 2));
        assert_eq!(t.data(), &[1, 4, 2, 5, 3, 6]);
        assert_eq!(t.transpose(), &m);
    }

    #[test]
    fn test_views_are_cached() {
        let m = sample();
        let first = m.rows().as_ptr();
        let second = m.rows().as_ptr();
        assert_eq!(first, second);
        assert!(std::ptr::eq(m.transpose(), m.transpose()));
    }

    #[test]
    fn test_idxs() {
        let m = sample();
        assert_eq!(m.idxs().len(), 6);
        assert_eq!(m.idxs()[0], (0, 0));
        assert_eq!(m.idxs()[4], (1, 1));
    }

    #[test]
    fn test_clone_starts_with_fresh_views() {
        let m = sample();
        let _ = m.transpose();
        let c = m.clone();
        assert_eq!(c.transpose(), m.transpose());
        assert!(!std::ptr::eq(c.transpose(), m.transpose()));
    }

    #[test]
    fn test_concurrent_readers_agree() {
        let m = Matrix::<i64>::from_fn(16, 16, |r, c| (r * 16 + c) as i64).unwrap();
        let cols: Vec<Vec<i64>> = std::thread::scope(|s| {
            let handles: Vec<_> = (0..4).map(|_| s.spawn(|| m.cols()[7].clone())).collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });
        assert!(cols.iter().all(|c| c == &m.cols()[7]));
    }
}
