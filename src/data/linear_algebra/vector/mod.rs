//! # Vector types for linear programs
//!
//! Sparse and dense vectors. The sparse vector is used for everything that is keyed by a variable
//! index, the dense vector for values that exist for every row of a basis.
pub use dense::Dense as DenseVector;
pub use sparse::Sparse as SparseVector;

mod dense;
mod sparse;
