//! Dense matrices over pluggable algebras
//!
//! One generic [`Matrix<T>`] type covers every flavor; the element type and
//! the attached [`Algebra`](crate::algebra::Algebra) decide what arithmetic
//! means:
//!
//! - [`BooleanMatrix`]: `Matrix<bool>` over (OR, AND). Bit-string parsing,
//!   sparse entries, random construction, transitive closure.
//! - [`DoubleMatrix`]: `Matrix<f64>` over the real field. Normalization,
//!   thresholding, mixed arithmetic with boolean matrices.
//! - Free matrices ([`Matrix::free`]): any `T`, no operators.
//!
//! Reinterpreting the same data under another structure is a matter of
//! passing a different algebra, e.g. `MINPLUS_ALGEBRA` for shortest paths.

mod boolean;
mod core;
mod double;
mod fixpoint;
mod free;
mod ops;
mod views;

pub use self::core::Matrix;
pub use fixpoint::FixpointOptions;
pub use views::all_pairs;

/// Matrix over the Boolean (OR, AND) semiring
pub type BooleanMatrix = Matrix<bool>;

/// Matrix over the double-precision real field
pub type DoubleMatrix = Matrix<f64>;
