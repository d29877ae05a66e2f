//! Algebraic structures that drive matrix arithmetic.
//!
//! - [`Ring`]: `nil`, `one`, `plus`, `times` (semirings included)
//! - [`Field`]: a ring plus `minus` and `div`
//! - [`Algebra`]: what a [`Matrix`](crate::matrix::Matrix) carries; either a
//!   ring, a field, or the [`Algebra::Free`] placeholder
//! - [`HasAlgebra`]: maps an element type to its default algebra
//!
//! Structures are records of plain function pointers, so the named instances
//! in [`instances`] are `const` values shared by the whole process.

mod field;
pub mod instances;
mod ring;

pub use field::Field;
pub use instances::{
    BOOLEAN_ALGEBRA, DOUBLE_FIELD, GF2_FIELD, INTEGER_FIELD, MAXPLUS_ALGEBRA, MINPLUS_ALGEBRA,
    XOR_ALGEBRA,
};
pub use ring::Ring;

use crate::error::{Error, Result};

/// The algebra attached to a matrix.
///
/// `Free` is a placeholder for matrices used purely as containers: building
/// and reading them works, any arithmetic fails with
/// [`Error::UnsupportedOperation`] at the point of use.
#[derive(Clone, Copy, Debug)]
pub enum Algebra<T> {
    /// No operators available
    Free,
    /// Ring or semiring
    Ring(Ring<T>),
    /// Field
    Field(Field<T>),
}

impl<T> Algebra<T> {
    /// Name of the algebra ("free" for the placeholder)
    pub fn name(&self) -> &'static str {
        match self {
            Algebra::Free => "free",
            Algebra::Ring(ring) => ring.name(),
            Algebra::Field(field) => field.name(),
        }
    }

    /// Whether this is the failing placeholder
    pub fn is_free(&self) -> bool {
        matches!(self, Algebra::Free)
    }

    /// The ring operators, or an error naming `op` for the placeholder
    pub fn require_ring(&self, op: &'static str) -> Result<&Ring<T>> {
        match self {
            Algebra::Free => Err(Error::unsupported(
                op,
                "free",
                "matrix was built without an algebra",
            )),
            Algebra::Ring(ring) => Ok(ring),
            Algebra::Field(field) => Ok(field.ring()),
        }
    }

    /// The field operators, or an error naming `op` when only a ring (or
    /// nothing) is available
    pub fn require_field(&self, op: &'static str) -> Result<&Field<T>> {
        match self {
            Algebra::Field(field) => Ok(field),
            Algebra::Ring(ring) => Err(Error::unsupported(
                op,
                ring.name(),
                "operation requires a field",
            )),
            Algebra::Free => Err(Error::unsupported(
                op,
                "free",
                "matrix was built without an algebra",
            )),
        }
    }
}

impl<T> Default for Algebra<T> {
    fn default() -> Self {
        Algebra::Free
    }
}

impl<T> From<Ring<T>> for Algebra<T> {
    fn from(ring: Ring<T>) -> Self {
        Algebra::Ring(ring)
    }
}

impl<T> From<Field<T>> for Algebra<T> {
    fn from(field: Field<T>) -> Self {
        Algebra::Field(field)
    }
}

/// Maps an element type to the algebra its matrices use by default.
///
/// ```
/// use semimat::algebra::HasAlgebra;
///
/// assert_eq!(<f64 as HasAlgebra>::algebra().name(), "double");
/// assert_eq!(<bool as HasAlgebra>::algebra().name(), "boolean");
/// ```
pub trait HasAlgebra: Sized {
    /// The default algebra for this element type
    fn algebra() -> Algebra<Self>;
}

impl HasAlgebra for bool {
    fn algebra() -> Algebra<Self> {
        Algebra::Ring(BOOLEAN_ALGEBRA)
    }
}

impl HasAlgebra for f64 {
    fn algebra() -> Algebra<Self> {
        Algebra::Field(DOUBLE_FIELD)
    }
}

impl HasAlgebra for i64 {
    fn algebra() -> Algebra<Self> {
        Algebra::Field(INTEGER_FIELD)
    }
}
