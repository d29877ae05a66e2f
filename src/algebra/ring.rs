//! Ring: additive and multiplicative operators with their identities

use crate::error::{Error, Result};
use std::fmt;

/// A ring-like structure over `T`: `(T, plus, times, nil, one)`.
///
/// Semirings (no subtraction) are represented by the same type; only
/// [`Field`](super::Field) adds `minus` and `div`.
///
/// # Laws
///
/// Callers constructing a ring are responsible for:
/// - `plus` and `times` being associative
/// - `nil` being the identity of `plus`, `one` the identity of `times`
///
/// None of these are checked. Matrix identities such as `A * I == A` only
/// hold when they are.
#[derive(Clone, Copy)]
pub struct Ring<T> {
    name: &'static str,
    nil: T,
    one: T,
    plus: fn(T, T) -> T,
    times: fn(T, T) -> T,
}

impl<T> Ring<T> {
    /// Create a new ring from its identities and operators
    pub const fn new(
        name: &'static str,
        nil: T,
        one: T,
        plus: fn(T, T) -> T,
        times: fn(T, T) -> T,
    ) -> Self {
        Self {
            name,
            nil,
            one,
            plus,
            times,
        }
    }

    /// Ring name, used in diagnostics
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Apply the addition operator
    #[inline]
    pub fn plus(&self, a: T, b: T) -> T {
        (self.plus)(a, b)
    }

    /// Apply the multiplication operator
    #[inline]
    pub fn times(&self, a: T, b: T) -> T {
        (self.times)(a, b)
    }
}

impl<T: Clone> Ring<T> {
    /// Additive identity
    #[inline]
    pub fn nil(&self) -> T {
        self.nil.clone()
    }

    /// Multiplicative identity
    #[inline]
    pub fn one(&self) -> T {
        self.one.clone()
    }

    /// Fold `values` with `plus`, starting from `nil`
    pub fn sum<I>(&self, values: I) -> T
    where
        I: IntoIterator<Item = T>,
    {
        values.into_iter().fold(self.nil(), |acc, v| self.plus(acc, v))
    }

    /// Inner product of two equal-length sequences.
    ///
    /// Pairwise products are reduced with `plus` starting from the first
    /// product, so `nil` never enters the reduction. Empty or unequal-length
    /// operands fail with [`Error::DimensionMismatch`].
    pub fn dot(&self, a: &[T], b: &[T]) -> Result<T> {
        if a.len() != b.len() {
            return Err(Error::dimension_mismatch("dot", (1, a.len()), (b.len(), 1)));
        }
        a.iter()
            .zip(b.iter())
            .map(|(x, y)| self.times(x.clone(), y.clone()))
            .reduce(|acc, p| self.plus(acc, p))
            .ok_or(Error::dimension_mismatch("dot", (1, 0), (0, 1)))
    }
}

impl<T> fmt::Debug for Ring<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ring").field("name", &self.name).finish()
    }
}

impl<T> fmt::Display for Ring<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
