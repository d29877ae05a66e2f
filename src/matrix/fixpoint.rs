//! Fixpoint iteration over matrix transforms

use super::Matrix;
use crate::error::{Error, Result};
use tracing::{debug, trace, warn};

/// Options for [`Matrix::seek_fixpoint_with`]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FixpointOptions {
    /// Stop with [`Error::NoConvergence`] after this many applications.
    /// `None` iterates until convergence.
    pub max_iterations: Option<usize>,
}

impl FixpointOptions {
    /// Unbounded iteration
    pub fn new() -> Self {
        Self::default()
    }

    /// Cap the number of transform applications
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = Some(max_iterations);
        self
    }
}

impl<T: Clone + PartialEq> Matrix<T> {
    /// Apply `op` starting from `self` until two consecutive iterates are
    /// structurally equal, and return that fixpoint.
    ///
    /// There is no iteration bound: if `op` never converges from this
    /// starting point the call does not return. Use
    /// [`seek_fixpoint_with`](Self::seek_fixpoint_with) to cap it.
    ///
    /// ```
    /// use semimat::matrix::BooleanMatrix;
    ///
    /// let a: BooleanMatrix = "010 001 000".parse()?;
    /// let closure = a.seek_fixpoint(|m| m + &(m * m)?)?;
    /// assert!(*closure.get(0, 2)?);
    /// # Ok::<(), semimat::error::Error>(())
    /// ```
    pub fn seek_fixpoint<F>(&self, op: F) -> Result<Matrix<T>>
    where
        F: FnMut(&Matrix<T>) -> Result<Matrix<T>>,
    {
        self.seek_fixpoint_with(FixpointOptions::default(), op)
    }

    /// [`seek_fixpoint`](Self::seek_fixpoint) with an optional iteration cap
    pub fn seek_fixpoint_with<F>(&self, options: FixpointOptions, mut op: F) -> Result<Matrix<T>>
    where
        F: FnMut(&Matrix<T>) -> Result<Matrix<T>>,
    {
        let mut current = self.clone();
        let mut iterations = 0usize;
        loop {
            if options.max_iterations.is_some_and(|max| iterations >= max) {
                warn!(iterations, "fixpoint iteration cap reached");
                return Err(Error::NoConvergence { iterations });
            }
            let next = op(&current)?;
            iterations += 1;
            if next == current {
                debug!(iterations, shape = ?next.shape(), "fixpoint reached");
                return Ok(next);
            }
            trace!(iterations, "fixpoint step changed the matrix");
            current = next;
        }
    }
}
