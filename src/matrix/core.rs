//! Core Matrix type

use super::views::ViewCache;
use crate::algebra::{Algebra, HasAlgebra};
use crate::error::{Error, Result};
use std::fmt;

/// Dense, immutable, row-major matrix over an [`Algebra`].
///
/// A `Matrix` consists of:
/// - **Shape**: `num_rows` and `num_cols`, both non-zero
/// - **Data**: `num_rows * num_cols` elements; `(r, c)` lives at
///   `data[r * num_cols + c]`
/// - **Algebra**: the operators used by `+`, `*`, and friends
///
/// Every operation returns a new matrix. Derived views (rows, columns,
/// transpose, index pairs) are computed on first access and cached for the
/// lifetime of the value; see [`Matrix::rows`].
///
/// # Example
///
/// ```
/// use semimat::matrix::DoubleMatrix;
///
/// let a = DoubleMatrix::from_rows([[1.0, 2.0], [3.0, 4.0]])?;
/// let b = DoubleMatrix::from_rows([[5.0, 6.0], [7.0, 8.0]])?;
/// let c = (&a * &b)?;
/// assert_eq!(c, DoubleMatrix::from_rows([[19.0, 22.0], [43.0, 50.0]])?);
/// # Ok::<(), semimat::error::Error>(())
/// ```
pub struct Matrix<T> {
    pub(super) num_rows: usize,
    pub(super) num_cols: usize,
    pub(super) data: Vec<T>,
    pub(super) algebra: Algebra<T>,
    pub(super) views: ViewCache<T>,
}

impl<T> Matrix<T> {
    /// Create a matrix from its shape, row-major data, and algebra
    ///
    /// Fails with [`Error::InvalidShape`] if either dimension is zero or
    /// `data.len() != rows * cols`.
    pub fn with_algebra(
        rows: usize,
        cols: usize,
        data: Vec<T>,
        algebra: impl Into<Algebra<T>>,
    ) -> Result<Self> {
        if rows == 0 || cols == 0 || rows.checked_mul(cols) != Some(data.len()) {
            return Err(Error::InvalidShape {
                rows,
                cols,
                len: data.len(),
            });
        }
        Ok(Self::from_parts(rows, cols, data, algebra.into()))
    }

    /// Create a matrix by calling `f(row, col)` for every cell in row-major
    /// order
    pub fn from_fn_with_algebra<F>(
        rows: usize,
        cols: usize,
        algebra: impl Into<Algebra<T>>,
        mut f: F,
    ) -> Result<Self>
    where
        F: FnMut(usize, usize) -> T,
    {
        if rows == 0 || cols == 0 {
            return Err(Error::InvalidShape { rows, cols, len: 0 });
        }
        let data = (0..rows)
            .flat_map(|r| (0..cols).map(move |c| (r, c)))
            .map(|(r, c)| f(r, c))
            .collect();
        Self::with_algebra(rows, cols, data, algebra)
    }

    /// Create a square matrix from flat data, inferring the side length
    ///
    /// Fails with [`Error::NotSquare`] unless `data.len()` is a positive
    /// perfect square.
    pub fn square_with_algebra(data: Vec<T>, algebra: impl Into<Algebra<T>>) -> Result<Self> {
        let side = data.len().isqrt();
        if side == 0 || side * side != data.len() {
            return Err(Error::NotSquare {
                len: data.len(),
                side,
            });
        }
        Self::with_algebra(side, side, data, algebra)
    }

    /// Create a matrix from nested rows
    ///
    /// Ragged input fails with [`Error::DimensionMismatch`] naming the first
    /// row and the offending one.
    pub fn from_rows_with_algebra<R, I>(rows: R, algebra: impl Into<Algebra<T>>) -> Result<Self>
    where
        R: IntoIterator<Item = I>,
        I: IntoIterator<Item = T>,
    {
        let mut data = Vec::new();
        let mut num_rows = 0;
        let mut num_cols = 0;
        for row in rows {
            let before = data.len();
            data.extend(row);
            let width = data.len() - before;
            if num_rows == 0 {
                num_cols = width;
            } else if width != num_cols {
                return Err(Error::dimension_mismatch(
                    "from_rows",
                    (1, num_cols),
                    (1, width),
                ));
            }
            num_rows += 1;
        }
        Self::with_algebra(num_rows, num_cols, data, algebra)
    }

    pub(super) fn from_parts(
        num_rows: usize,
        num_cols: usize,
        data: Vec<T>,
        algebra: Algebra<T>,
    ) -> Self {
        debug_assert_eq!(data.len(), num_rows * num_cols);
        Self {
            num_rows,
            num_cols,
            data,
            algebra,
            views: ViewCache::default(),
        }
    }

    /// Number of rows
    #[inline]
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// Number of columns
    #[inline]
    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    /// Shape as (rows, cols)
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.num_rows, self.num_cols)
    }

    /// Whether the matrix has as many rows as columns
    pub fn is_square(&self) -> bool {
        self.num_rows == self.num_cols
    }

    /// Row-major element storage
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Consume the matrix, returning its row-major storage
    pub fn into_data(self) -> Vec<T> {
        self.data
    }

    /// The algebra this matrix computes with
    pub fn algebra(&self) -> &Algebra<T> {
        &self.algebra
    }

    /// Re-tag the same data with another algebra
    pub fn into_algebra(self, algebra: impl Into<Algebra<T>>) -> Self {
        Self::from_parts(self.num_rows, self.num_cols, self.data, algebra.into())
    }

    /// Element at `(row, col)`
    pub fn get(&self, row: usize, col: usize) -> Result<&T> {
        if row >= self.num_rows {
            return Err(Error::IndexOutOfBounds {
                index: row,
                size: self.num_rows,
            });
        }
        if col >= self.num_cols {
            return Err(Error::IndexOutOfBounds {
                index: col,
                size: self.num_cols,
            });
        }
        Ok(&self.data[row * self.num_cols + col])
    }

    /// Row `row` as a slice of length `num_cols`
    pub fn row(&self, row: usize) -> Result<&[T]> {
        if row >= self.num_rows {
            return Err(Error::IndexOutOfBounds {
                index: row,
                size: self.num_rows,
            });
        }
        let start = row * self.num_cols;
        Ok(&self.data[start..start + self.num_cols])
    }
}

impl<T: HasAlgebra> Matrix<T> {
    /// Create a matrix over the element type's default algebra
    pub fn new(rows: usize, cols: usize, data: Vec<T>) -> Result<Self> {
        Self::with_algebra(rows, cols, data, T::algebra())
    }

    /// Generator constructor over the default algebra
    pub fn from_fn<F>(rows: usize, cols: usize, f: F) -> Result<Self>
    where
        F: FnMut(usize, usize) -> T,
    {
        Self::from_fn_with_algebra(rows, cols, T::algebra(), f)
    }

    /// Square-inferring constructor over the default algebra
    pub fn square(data: Vec<T>) -> Result<Self> {
        Self::square_with_algebra(data, T::algebra())
    }

    /// Nested-rows constructor over the default algebra
    pub fn from_rows<R, I>(rows: R) -> Result<Self>
    where
        R: IntoIterator<Item = I>,
        I: IntoIterator<Item = T>,
    {
        Self::from_rows_with_algebra(rows, T::algebra())
    }
}

impl<T: Clone> Matrix<T> {
    /// Matrix filled with the algebra's `nil`
    pub fn zeros_with(rows: usize, cols: usize, algebra: impl Into<Algebra<T>>) -> Result<Self> {
        let algebra = algebra.into();
        let nil = algebra.require_ring("zeros")?.nil();
        Self::from_fn_with_algebra(rows, cols, algebra, |_, _| nil.clone())
    }

    /// Matrix filled with the algebra's `one`
    pub fn ones_with(rows: usize, cols: usize, algebra: impl Into<Algebra<T>>) -> Result<Self> {
        let algebra = algebra.into();
        let one = algebra.require_ring("ones")?.one();
        Self::from_fn_with_algebra(rows, cols, algebra, |_, _| one.clone())
    }

    /// Square matrix with `one` on the diagonal and `nil` elsewhere
    pub fn identity_with(n: usize, algebra: impl Into<Algebra<T>>) -> Result<Self> {
        let algebra = algebra.into();
        let ring = algebra.require_ring("identity")?;
        let (nil, one) = (ring.nil(), ring.one());
        Self::from_fn_with_algebra(n, n, algebra, |r, c| {
            if r == c { one.clone() } else { nil.clone() }
        })
    }
}

impl<T: Clone + HasAlgebra> Matrix<T> {
    /// All-`nil` matrix over the default algebra
    pub fn zeros(rows: usize, cols: usize) -> Result<Self> {
        Self::zeros_with(rows, cols, T::algebra())
    }

    /// All-`one` matrix over the default algebra
    pub fn ones(rows: usize, cols: usize) -> Result<Self> {
        Self::ones_with(rows, cols, T::algebra())
    }

    /// Identity matrix over the default algebra
    pub fn identity(n: usize) -> Result<Self> {
        Self::identity_with(n, T::algebra())
    }
}

impl<T: Clone> Clone for Matrix<T> {
    // Caches are not carried over
    fn clone(&self) -> Self {
        Self::from_parts(
            self.num_rows,
            self.num_cols,
            self.data.clone(),
            self.algebra.clone(),
        )
    }
}

/// Structural equality: shape and data. The algebra is not compared.
impl<T: PartialEq> PartialEq for Matrix<T> {
    fn eq(&self, other: &Self) -> bool {
        self.num_rows == other.num_rows && self.num_cols == other.num_cols && self.data == other.data
    }
}

impl<T: Eq> Eq for Matrix<T> {}

impl<T: fmt::Debug> fmt::Debug for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Matrix")
            .field("shape", &self.shape())
            .field("algebra", &self.algebra.name())
            .field("data", &self.data)
            .finish()
    }
}

/// Space-separated cells, one row per line
impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.data.chunks(self.num_cols).enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for (c, cell) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", cell)?;
            }
        }
        Ok(())
    }
}
