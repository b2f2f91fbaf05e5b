//! # Dense vector
//!
//! Wrapping a `Vec` such that it can interact with sparse vectors.
use std::iter::FromIterator;
use std::ops::Index;
use std::slice::Iter;

use relp_num::{OrderedField, OrderedFieldRef};

use crate::data::linear_algebra::vector::SparseVector;

/// Uses a `Vec` as underlying data a structure. Length is fixed at creation.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Dense<F> {
    data: Vec<F>,
}

impl<F> Dense<F> {
    /// Wrap values.
    #[must_use]
    pub fn new(data: Vec<F>) -> Self {
        Self { data }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the vector has no elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Iterate over the values in order.
    pub fn iter(&self) -> Iter<'_, F> {
        self.data.iter()
    }
}

impl<F> Dense<F>
where
    F: OrderedField,
    for<'r> &'r F: OrderedFieldRef<F>,
{
    /// Compute the inner product with a sparse vector.
    ///
    /// All indices of the sparse vector should be smaller than the length of this vector.
    pub fn sparse_inner_product(&self, other: &SparseVector<F>) -> F {
        let mut total = F::zero();
        for (i, value) in other.iter() {
            debug_assert!(*i < self.len());

            total += &self.data[*i] * value;
        }

        total
    }
}

impl<F> Index<usize> for Dense<F> {
    type Output = F;

    fn index(&self, index: usize) -> &Self::Output {
        debug_assert!(index < self.len());

        &self.data[index]
    }
}

impl<F> FromIterator<F> for Dense<F> {
    fn from_iter<I: IntoIterator<Item=F>>(iter: I) -> Self {
        Self { data: iter.into_iter().collect() }
    }
}
