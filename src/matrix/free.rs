//! Free matrices: rectangular containers without operators

use super::Matrix;
use crate::algebra::Algebra;
use crate::error::Result;

impl<T> Matrix<T> {
    /// Container matrix with no algebra. Views and `map` work; arithmetic
    /// fails with [`Error::UnsupportedOperation`](crate::error::Error::UnsupportedOperation)
    /// when attempted.
    pub fn free(rows: usize, cols: usize, data: Vec<T>) -> Result<Self> {
        Self::with_algebra(rows, cols, data, Algebra::Free)
    }

    /// Generator constructor for a free matrix
    pub fn free_from_fn<F>(rows: usize, cols: usize, f: F) -> Result<Self>
    where
        F: FnMut(usize, usize) -> T,
    {
        Self::from_fn_with_algebra(rows, cols, Algebra::Free, f)
    }

    /// Elementwise map into another free matrix
    pub fn map_free<U, F>(&self, f: F) -> Matrix<U>
    where
        F: FnMut(&T) -> U,
    {
        self.map_with(Algebra::Free, f)
    }
}
