//! # semimat
//!
//! **Dense matrices over pluggable semirings and fields.**
//!
//! semimat provides one generic [`Matrix<T>`](matrix::Matrix) whose
//! arithmetic is driven by an attached algebra. Swapping the algebra swaps
//! the meaning of `+` and `*`: ordinary linear algebra over doubles,
//! reachability over (OR, AND), shortest paths over (min, +).
//!
//! ## Features
//!
//! - **Algebras**: [`Ring`](algebra::Ring) and [`Field`](algebra::Field)
//!   records plus named instances (Boolean, XOR, integer, double, min-plus,
//!   max-plus, GF(2))
//! - **Matrices**: dimension-checked add, subtract, multiply, power, scalar
//!   multiply, elementwise map, and the general `join` combinator
//! - **Cached views**: rows, columns, transpose, index pairs; computed once
//!   per matrix, safe to share across threads
//! - **Specializations**: boolean bit-string parsing and transitive closure,
//!   double normalization and thresholding, free (operator-less) containers
//! - **Fixpoints**: iterate a transform until it stabilizes
//!
//! ## Quick Start
//!
//! ```
//! use semimat::prelude::*;
//!
//! // Shortest paths using at most two edges
//! let inf = f64::INFINITY;
//! let w = Matrix::from_rows_with_algebra(
//!     [[0.0, 1.0, inf], [inf, 0.0, 2.0], [inf, inf, 0.0]],
//!     MINPLUS_ALGEBRA,
//! )?;
//! let d = (&w * &w)?;
//! assert_eq!(*d.get(0, 2)?, 3.0);
//! # Ok::<(), semimat::error::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `random` (default): random boolean matrices via `rand`

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod algebra;
pub mod error;
pub mod matrix;
pub mod sparse;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::algebra::{
        Algebra, BOOLEAN_ALGEBRA, DOUBLE_FIELD, Field, GF2_FIELD, HasAlgebra, INTEGER_FIELD,
        MAXPLUS_ALGEBRA, MINPLUS_ALGEBRA, Ring, XOR_ALGEBRA,
    };
    pub use crate::error::{Error, Result};
    pub use crate::matrix::{BooleanMatrix, DoubleMatrix, FixpointOptions, Matrix};
    pub use crate::sparse::SparseTensor;
}
