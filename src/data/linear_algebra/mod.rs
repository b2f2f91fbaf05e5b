//! # Linear algebra primitives
//!
//! Sparse and dense vectors, and sparse matrices, over an exact ordered field.

pub mod matrix;
pub mod vector;

/// An index with the value stored at that index.
pub type SparseTuple<F> = (usize, F);
