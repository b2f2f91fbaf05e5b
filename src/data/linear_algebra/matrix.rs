//! # Sparse matrices
//!
//! A sparse matrix is stored as a collection of sparse "major" vectors, each with an index. In a
//! row major matrix these are the rows, keyed by the row index. In a column major matrix they are
//! the columns, keyed by the column index. Only nonzero vectors are stored.
use std::marker::PhantomData;
use std::slice::Iter;

use num_traits::Zero;
use relp_num::NonZero;

use crate::data::linear_algebra::vector::SparseVector;

/// Whether the major vectors of a matrix are its rows or its columns.
pub trait Order: Copy {}

/// The major vectors are rows.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct RowMajor;
impl Order for RowMajor {}

/// The major vectors are columns.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct ColumnMajor;
impl Order for ColumnMajor {}

/// Sparse matrix keyed by the index of its major vectors.
///
/// Neither dimension is fixed; like `SparseVector`, a major index that is not stored represents a
/// vector that is zero everywhere.
#[derive(Eq, PartialEq, Clone, Debug)]
pub struct Sparse<F, O> {
    major: Vec<(usize, SparseVector<F>)>,

    phantom_order: PhantomData<O>,
}

impl<F, O: Order> Default for Sparse<F, O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F, O: Order> Sparse<F, O> {
    /// Create a matrix with only zero values.
    #[must_use]
    pub fn new() -> Self {
        Self {
            major: Vec::new(),

            phantom_order: PhantomData,
        }
    }

    /// Create a matrix from major vectors in any order.
    ///
    /// Empty vectors are dropped, each major index should appear at most once.
    #[must_use]
    pub fn from_major(mut major: Vec<(usize, SparseVector<F>)>) -> Self {
        major.retain(|(_, vector)| !vector.is_empty());
        major.sort_unstable_by_key(|&(i, _)| i);
        debug_assert!(major.windows(2).all(|w| w[0].0 < w[1].0), "Indices should be unique");

        Self {
            major,

            phantom_order: PhantomData,
        }
    }

    fn get_data_index(&self, i: usize) -> Result<usize, usize> {
        self.major.binary_search_by_key(&i, |&(index, _)| index)
    }

    /// The major vector at index `i`, if it is not zero.
    pub fn major(&self, i: usize) -> Option<&SparseVector<F>> {
        self.get_data_index(i).ok().map(|data_index| &self.major[data_index].1)
    }

    /// Replace the major vector at index `i`.
    pub fn insert_major(&mut self, i: usize, vector: SparseVector<F>) {
        match (self.get_data_index(i), vector.is_empty()) {
            (Ok(data_index), false) => self.major[data_index].1 = vector,
            (Ok(data_index), true) => {
                self.major.remove(data_index);
            },
            (Err(data_index), false) => self.major.insert(data_index, (i, vector)),
            (Err(_), true) => {},
        }
    }

    /// Remove the values at minor index `j` from all major vectors.
    pub fn remove_minor(&mut self, j: usize) {
        for (_, vector) in &mut self.major {
            vector.remove(j);
        }
        self.major.retain(|(_, vector)| !vector.is_empty());
    }

    /// The value at major index `i` and minor index `j`, or `None` if it is zero.
    pub fn get(&self, i: usize, j: usize) -> Option<&F> {
        self.major(i).and_then(|vector| vector.get(j))
    }

    /// Iterate over the nonzero major vectors in increasing index order.
    pub fn iter(&self) -> Iter<'_, (usize, SparseVector<F>)> {
        self.major.iter()
    }

    /// Number of nonzero values.
    pub fn size(&self) -> usize {
        self.major.iter().map(|(_, vector)| vector.size()).sum()
    }
}

impl<F: NonZero, O: Order> Sparse<F, O> {
    /// Set the value at major index `i` and minor index `j`.
    pub fn set(&mut self, i: usize, j: usize, value: F) {
        match self.get_data_index(i) {
            Ok(data_index) => {
                self.major[data_index].1.set(j, value);
                if self.major[data_index].1.is_empty() {
                    self.major.remove(data_index);
                }
            },
            Err(data_index) => if value.is_not_zero() {
                let mut vector = SparseVector::new();
                vector.set(j, value);
                self.major.insert(data_index, (i, vector));
            },
        }
    }
}

impl<F: NonZero + Zero + Clone, O: Order> Sparse<F, O> {
    /// The value at major index `i` and minor index `j`, where absent values read as zero.
    pub fn value(&self, i: usize, j: usize) -> F {
        self.get(i, j).cloned().unwrap_or_else(F::zero)
    }

    /// A copy of the major vector at index `i`, which is empty if the vector is zero.
    pub fn major_or_zero(&self, i: usize) -> SparseVector<F> {
        self.major(i).cloned().unwrap_or_default()
    }
}

impl<F, O: Order> IntoIterator for Sparse<F, O> {
    type Item = (usize, SparseVector<F>);
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.major.into_iter()
    }
}

impl<F> Sparse<F, RowMajor> {
    /// Row `i`, if it is not zero.
    pub fn row(&self, i: usize) -> Option<&SparseVector<F>> {
        self.major(i)
    }
}

impl<F> Sparse<F, ColumnMajor> {
    /// Column `j`, if it is not zero.
    pub fn column(&self, j: usize) -> Option<&SparseVector<F>> {
        self.major(j)
    }
}
