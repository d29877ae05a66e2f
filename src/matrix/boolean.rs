//! Boolean matrices over the (OR, AND) semiring

use super::{BooleanMatrix, Matrix};
use crate::algebra::BOOLEAN_ALGEBRA;
use crate::error::{Error, Result};
use std::collections::BTreeSet;
use std::str::FromStr;

impl Matrix<bool> {
    /// Parse a compact two-symbol picture such as `"10\n01"`.
    ///
    /// Whitespace is ignored and the shape is inferred as square. With two
    /// distinct symbols the lexicographically larger one is `true`. A lone
    /// symbol is `true` only when it is `'1'`, so constant matrices written
    /// by [`to_bit_string`](Self::to_bit_string) parse back unchanged. A
    /// third symbol fails with [`Error::Construction`].
    pub fn from_bit_string(s: &str) -> Result<Self> {
        let symbols: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        let distinct: BTreeSet<char> = symbols.iter().copied().collect();
        if distinct.len() > 2 {
            return Err(Error::Construction {
                reason: format!(
                    "expected at most two distinct symbols, found {}: {:?}",
                    distinct.len(),
                    distinct
                ),
            });
        }
        let truthy = match (distinct.first(), distinct.last()) {
            (Some(lo), Some(hi)) if lo != hi => Some(*hi),
            (Some(&'1'), _) => Some('1'),
            _ => None,
        };
        let data = symbols.iter().map(|&c| Some(c) == truthy).collect();
        Self::square_with_algebra(data, BOOLEAN_ALGEBRA)
    }

    /// Build a `rows x cols` matrix from `((row, col), value)` entries;
    /// cells not mentioned are `false`
    pub fn from_entries<I>(rows: usize, cols: usize, entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = ((usize, usize), bool)>,
    {
        let len = rows
            .checked_mul(cols)
            .ok_or(Error::InvalidShape { rows, cols, len: 0 })?;
        let mut data = vec![false; len];
        for ((r, c), value) in entries {
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
            data[r * cols + c] = value;
        }
        Self::with_algebra(rows, cols, data, BOOLEAN_ALGEBRA)
    }

    /// Uniformly random `n x n` matrix from the thread-local generator
    #[cfg(feature = "random")]
    pub fn random(n: usize) -> Result<Self> {
        Self::random_with(n, &mut rand::rng())
    }

    /// Uniformly random `n x n` matrix from a caller-supplied generator
    #[cfg(feature = "random")]
    pub fn random_with<R: rand::Rng + ?Sized>(n: usize, rng: &mut R) -> Result<Self> {
        Self::from_fn_with_algebra(n, n, BOOLEAN_ALGEBRA, |_, _| rng.random::<bool>())
    }

    /// Rows of `1`/`0`, newline separated. Parses back with
    /// [`from_bit_string`](Self::from_bit_string) when square.
    pub fn to_bit_string(&self) -> String {
        self.data
            .chunks(self.num_cols)
            .map(|row| row.iter().map(|&b| if b { '1' } else { '0' }).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Number of `true` cells
    pub fn count_ones(&self) -> usize {
        self.data.iter().filter(|&&b| b).count()
    }

    /// Reachability closure: `A ← A + A·A` until stable
    pub fn transitive_closure(&self) -> Result<Self> {
        if !self.is_square() {
            return Err(Error::dimension_mismatch(
                "transitive_closure",
                self.shape(),
                self.shape(),
            ));
        }
        self.seek_fixpoint(|m| m.add(&m.matmul(m)?))
    }
}

impl FromStr for BooleanMatrix {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_bit_string(s)
    }
}
