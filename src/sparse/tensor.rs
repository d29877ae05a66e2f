//! Coordinate-keyed sparse tensor

use crate::algebra::Algebra;
use crate::error::{Error, Result};
use crate::matrix::Matrix;
use smallvec::SmallVec;
use std::collections::BTreeMap;

/// Stack allocation threshold for coordinates
pub(crate) const STACK_DIMS: usize = 4;

/// A coordinate in a sparse tensor
pub type Coord = SmallVec<[usize; STACK_DIMS]>;

/// Sparse tensor of fixed rank: a sorted map from coordinates to values.
///
/// Unset coordinates have no value; what they mean (zero, absent edge, ...)
/// is decided when converting, e.g. by [`SparseTensor::to_matrix`].
#[derive(Clone, Debug, PartialEq)]
pub struct SparseTensor<T> {
    rank: usize,
    entries: BTreeMap<Coord, T>,
}

impl<T> SparseTensor<T> {
    /// Create an empty tensor of the given rank
    pub fn new(rank: usize) -> Self {
        Self {
            rank,
            entries: BTreeMap::new(),
        }
    }

    /// Number of indices per coordinate
    pub fn rank(&self) -> usize {
        self.rank
    }

    /// Number of stored values
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    fn check_rank(&self, ix: &[usize]) -> Result<()> {
        if ix.len() != self.rank {
            return Err(Error::dimension_mismatch(
                "sparse index",
                (1, self.rank),
                (1, ix.len()),
            ));
        }
        Ok(())
    }

    /// Value stored at `ix`, if any
    pub fn get(&self, ix: &[usize]) -> Result<Option<&T>> {
        self.check_rank(ix)?;
        Ok(self.entries.get(ix))
    }

    /// Store `value` at `ix`, returning the previous value
    pub fn set(&mut self, ix: &[usize], value: T) -> Result<Option<T>> {
        self.check_rank(ix)?;
        Ok(self.entries.insert(Coord::from_slice(ix), value))
    }

    /// Remove the value at `ix`, returning it
    pub fn remove(&mut self, ix: &[usize]) -> Result<Option<T>> {
        self.check_rank(ix)?;
        Ok(self.entries.remove(ix))
    }

    /// Stored entries in coordinate order
    pub fn iter(&self) -> impl Iterator<Item = (&[usize], &T)> {
        self.entries.iter().map(|(k, v)| (k.as_slice(), v))
    }
}

impl<T: Clone> SparseTensor<T> {
    /// Densify a rank-2 tensor into a `rows x cols` matrix, filling unset
    /// cells with the algebra's `nil`
    pub fn to_matrix(
        &self,
        rows: usize,
        cols: usize,
        algebra: impl Into<Algebra<T>>,
    ) -> Result<Matrix<T>> {
        if self.rank != 2 {
            return Err(Error::dimension_mismatch(
                "to_matrix",
                (1, 2),
                (1, self.rank),
            ));
        }
        let algebra = algebra.into();
        let len = rows
            .checked_mul(cols)
            .ok_or(Error::InvalidShape { rows, cols, len: self.nnz() })?;
        let nil = algebra.require_ring("to_matrix")?.nil();
        let mut data = vec![nil; len];
        for (ix, value) in &self.entries {
            let (r, c) = (ix[0], ix[1]);
            if r >= rows {
                return Err(Error::IndexOutOfBounds {
                    index: r,
                    size: rows,
                });
            }
            if c >= cols {
                return Err(Error::IndexOutOfBounds {
                    index: c,
                    size: cols,
                });
            }
            data[r * cols + c] = value.clone();
        }
        Matrix::with_algebra(rows, cols, data, algebra)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algebra::MINPLUS_ALGEBRA;

    #[test]
    fn test_set_get_remove() {
        let mut t = SparseTensor::new(3);
        assert_eq!(t.set(&[0, 1, 2], 5).unwrap(), None);
        assert_eq!(t.set(&[0, 1, 2], 6).unwrap(), Some(5));
        assert_eq!(t.get(&[0, 1, 2]).unwrap(), Some(&6));
        assert_eq!(t.get(&[1, 1, 1]).unwrap(), None);
        assert_eq!(t.nnz(), 1);
        assert_eq!(t.remove(&[0, 1, 2]).unwrap(), Some(6));
        assert_eq!(t.nnz(), 0);
    }

    #[test]
    fn test_wrong_rank_is_rejected() {
        let mut t = SparseTensor::new(2);
        assert!(t.set(&[0], 1.0).unwrap_err().is_dimension_error());
        assert!(t.get(&[0, 0, 0]).is_err());
    }

    #[test]
    fn test_to_matrix_fills_with_nil() {
        let mut t = SparseTensor::new(2);
        t.set(&[0, 1], 4.0).unwrap();
        t.set(&[1, 0], 2.0).unwrap();
        let m = t.to_matrix(2, 2, MINPLUS_ALGEBRA).unwrap();
        assert_eq!(m.data(), &[f64::INFINITY, 4.0, 2.0, f64::INFINITY]);
        assert!(t.to_matrix(1, 2, MINPLUS_ALGEBRA).is_err());
    }

    #[test]
    fn test_to_matrix_rejects_overflowing_shape() {
        let t = SparseTensor::<f64>::new(2);
        assert!(matches!(
            t.to_matrix(usize::MAX, usize::MAX, MINPLUS_ALGEBRA),
            Err(Error::InvalidShape { len: 0, .. })
        ));
    }

    #[test]
    fn test_iter_is_sorted() {
        let mut t = SparseTensor::new(2);
        t.set(&[1, 0], 'b').unwrap();
        t.set(&[0, 3], 'a').unwrap();
        let keys: Vec<Vec<usize>> = t.iter().map(|(k, _)| k.to_vec()).collect();
        assert_eq!(keys, vec![vec![0, 3], vec![1, 0]]);
    }
}
