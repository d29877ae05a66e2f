//! Error types for semimat

use thiserror::Error;

/// Result type alias using semimat's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in matrix and algebra operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Operand shapes are incompatible for a binary operation
    #[error(
        "Dimension mismatch in {op}: ({}x{}) vs ({}x{})",
        .lhs.0,
        .lhs.1,
        .rhs.0,
        .rhs.1
    )]
    DimensionMismatch {
        /// The operation name
        op: &'static str,
        /// Left-hand side shape as (rows, cols)
        lhs: (usize, usize),
        /// Right-hand side shape as (rows, cols)
        rhs: (usize, usize),
    },

    /// Element count does not fit the requested shape
    #[error("Cannot build a {rows}x{cols} matrix from {len} elements")]
    InvalidShape {
        /// Requested number of rows
        rows: usize,
        /// Requested number of columns
        cols: usize,
        /// Number of elements supplied
        len: usize,
    },

    /// Flat input whose length is not a positive perfect square
    #[error("Cannot infer a square matrix from {len} elements (nearest side {side})")]
    NotSquare {
        /// Number of elements supplied
        len: usize,
        /// Inferred side length, `floor(sqrt(len))`
        side: usize,
    },

    /// Index out of bounds
    #[error("Index {index} out of bounds for dimension of size {size}")]
    IndexOutOfBounds {
        /// The invalid index
        index: usize,
        /// Size of the dimension
        size: usize,
    },

    /// Operation not supported by the algebra in use
    #[error("Unsupported operation '{op}' over {algebra}: {reason}")]
    UnsupportedOperation {
        /// The operation name
        op: &'static str,
        /// Name of the algebra
        algebra: &'static str,
        /// Why the operation is unavailable
        reason: &'static str,
    },

    /// Malformed constructor input
    #[error("Construction error: {reason}")]
    Construction {
        /// Description of the malformed input
        reason: String,
    },

    /// Iteration cap reached before two iterates agreed
    #[error("No fixpoint reached after {iterations} iterations")]
    NoConvergence {
        /// Number of iterations performed
        iterations: usize,
    },
}

impl Error {
    /// Create a dimension mismatch error
    pub fn dimension_mismatch(op: &'static str, lhs: (usize, usize), rhs: (usize, usize)) -> Self {
        Self::DimensionMismatch { op, lhs, rhs }
    }

    /// Create an unsupported operation error
    pub fn unsupported(op: &'static str, algebra: &'static str, reason: &'static str) -> Self {
        Self::UnsupportedOperation {
            op,
            algebra,
            reason,
        }
    }

    /// Whether this error belongs to the shape-violation family
    pub fn is_dimension_error(&self) -> bool {
        matches!(
            self,
            Self::DimensionMismatch { .. } | Self::InvalidShape { .. } | Self::NotSquare { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_mismatch_reports_both_shapes() {
        let err = Error::dimension_mismatch("matmul", (2, 3), (4, 5));
        let msg = err.to_string();
        assert_eq!(msg, "Dimension mismatch in matmul: (2x3) vs (4x5)");
        assert!(err.is_dimension_error());
    }

    #[test]
    fn test_not_square_reports_inferred_side() {
        let err = Error::NotSquare { len: 5, side: 2 };
        assert_eq!(
            err.to_string(),
            "Cannot infer a square matrix from 5 elements (nearest side 2)"
        );
    }

    #[test]
    fn test_not_square_is_dimension_error() {
        assert!(Error::NotSquare { len: 5, side: 2 }.is_dimension_error());
        assert!(!Error::IndexOutOfBounds { index: 3, size: 2 }.is_dimension_error());
    }
}
