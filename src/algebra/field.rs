//! Field: a ring with subtraction and division

use super::Ring;
use crate::error::Result;
use std::fmt;

/// A ring extended with `minus` and a fallible `div`.
///
/// `div` returns a `Result` because some fields built here have no total
/// division: the integer "field" refuses every division, GF(2) refuses
/// division by zero.
#[derive(Clone, Copy)]
pub struct Field<T> {
    ring: Ring<T>,
    minus: fn(T, T) -> T,
    div: fn(T, T) -> Result<T>,
}

impl<T> Field<T> {
    /// Create a field from an underlying ring plus subtraction and division
    pub const fn new(ring: Ring<T>, minus: fn(T, T) -> T, div: fn(T, T) -> Result<T>) -> Self {
        Self { ring, minus, div }
    }

    /// The underlying ring
    pub fn ring(&self) -> &Ring<T> {
        &self.ring
    }

    /// Field name
    pub fn name(&self) -> &'static str {
        self.ring.name()
    }

    /// Apply subtraction
    #[inline]
    pub fn minus(&self, a: T, b: T) -> T {
        (self.minus)(a, b)
    }

    /// Apply division
    #[inline]
    pub fn div(&self, a: T, b: T) -> Result<T> {
        (self.div)(a, b)
    }
}

impl<T> fmt::Debug for Field<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field").field("name", &self.name()).finish()
    }
}
