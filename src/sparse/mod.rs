//! Sparse tensor support
//!
//! A minimal coordinate-map container. It stores only the entries that were
//! set and converts rank-2 tensors to dense [`Matrix`](crate::matrix::Matrix)
//! values; there are no sparse kernels.

mod tensor;

pub use tensor::{Coord, SparseTensor};
