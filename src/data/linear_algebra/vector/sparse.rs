//! # Sparse vector
//!
//! Wrapping a `Vec<(usize, _)>`, sorted by index.
use std::mem;
use std::cmp::Ordering;
use std::iter::FromIterator;
use std::ops::Deref;
use std::slice::Iter;
use std::vec::IntoIter;

use num_traits::Zero;
use relp_num::{NonZero, OrderedField, OrderedFieldRef};

use crate::data::linear_algebra::SparseTuple;

/// A sparse vector using a `Vec` with (index, value) combinations as back-end.
///
/// The vector has no fixed length: it represents a value for every `usize` index. Only nonzero
/// values are stored. A missing index is never read through an implicit default; use `get` to
/// distinguish a stored value from an absent one, or `value` to explicitly read an absent index
/// as zero.
#[derive(Eq, PartialEq, Clone, Debug)]
pub struct Sparse<F> {
    data: Vec<SparseTuple<F>>,
}

impl<F> Default for Sparse<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F> Sparse<F> {
    /// Create a vector that is zero everywhere.
    #[must_use]
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    fn get_data_index(&self, i: usize) -> Result<usize, usize> {
        self.data.binary_search_by_key(&i, |&(index, _)| index)
    }

    /// The value stored at index `i`, or `None` if that value is zero.
    pub fn get(&self, i: usize) -> Option<&F> {
        self.get_data_index(i).ok().map(|data_index| &self.data[data_index].1)
    }

    /// Remove the value at index `i`, setting it to zero.
    ///
    /// # Return value
    ///
    /// The value that was stored, if any.
    pub fn remove(&mut self, i: usize) -> Option<F> {
        self.get_data_index(i).ok().map(|data_index| self.data.remove(data_index).1)
    }

    /// Iterate over the nonzero values in increasing index order.
    pub fn iter(&self) -> Iter<'_, SparseTuple<F>> {
        self.data.iter()
    }

    /// Indices of the nonzero values, increasing.
    pub fn indices(&self) -> impl Iterator<Item=usize> + '_ {
        self.data.iter().map(|&(i, _)| i)
    }

    /// Number of values stored, that is, the number of nonzero values.
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Whether this vector is zero everywhere.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl<F: NonZero> Sparse<F> {
    /// Create a vector from (index, value) tuples in any order.
    ///
    /// Zero values are dropped.
    ///
    /// # Arguments
    ///
    /// * `tuples`: Values with their index. Each index should appear at most once.
    #[must_use]
    pub fn from_tuples(mut tuples: Vec<SparseTuple<F>>) -> Self {
        tuples.retain(|(_, value)| value.is_not_zero());
        tuples.sort_unstable_by_key(|&(i, _)| i);
        debug_assert!(tuples.windows(2).all(|w| w[0].0 < w[1].0), "Indices should be unique");

        Self { data: tuples }
    }

    /// Set the value at index `i` to `value`.
    ///
    /// A zero value removes the index.
    pub fn set(&mut self, i: usize, value: F) {
        match (self.get_data_index(i), value.is_not_zero()) {
            (Ok(data_index), true) => self.data[data_index].1 = value,
            (Ok(data_index), false) => {
                self.data.remove(data_index);
            },
            (Err(data_index), true) => self.data.insert(data_index, (i, value)),
            (Err(_), false) => {},
        }
    }
}

impl<F: NonZero + Zero + Clone> Sparse<F> {
    /// The value at index `i`, where an index that is not stored reads as zero.
    pub fn value(&self, i: usize) -> F {
        self.get(i).cloned().unwrap_or_else(F::zero)
    }
}

impl<F> Sparse<F>
where
    F: OrderedField,
    for<'r> &'r F: OrderedFieldRef<F>,
{
    /// Add a value to the value at index `i`.
    pub fn shift_value(&mut self, i: usize, value: &F) {
        match self.get_data_index(i) {
            Ok(data_index) => {
                self.data[data_index].1 += value;
                if self.data[data_index].1.is_zero() {
                    self.data.remove(data_index);
                }
            },
            Err(data_index) => if value.is_not_zero() {
                self.data.insert(data_index, (i, value.clone()));
            },
        }
    }

    /// Add the multiple of another vector to this vector.
    ///
    /// # Arguments
    ///
    /// * `multiple`: Constant that all elements of the `other` vector are multiplied with.
    /// * `other`: Vector to add a multiple of to this vector.
    pub fn add_multiple_of(&mut self, multiple: &F, other: &Self) {
        if multiple.is_zero() {
            return;
        }

        let old_data = mem::take(&mut self.data);
        let mut new_tuples = Vec::with_capacity(old_data.len() + other.data.len());

        let mut j = 0;
        for (i, value) in old_data {
            while j < other.data.len() && other.data[j].0 < i {
                new_tuples.push((other.data[j].0, multiple * &other.data[j].1));
                j += 1;
            }

            if j < other.data.len() && other.data[j].0 == i {
                let new_value = value + multiple * &other.data[j].1;
                if new_value.is_not_zero() {
                    new_tuples.push((i, new_value));
                }
                j += 1;
            } else {
                new_tuples.push((i, value));
            }
        }
        for (index, value) in &other.data[j..] {
            new_tuples.push((*index, multiple * value));
        }

        self.data = new_tuples;
    }

    /// Divide every value by a nonzero constant.
    pub fn element_wise_divide(&mut self, value: &F) {
        debug_assert!(value.is_not_zero());

        for (_, element) in &mut self.data {
            *element = &*element / value;
        }
    }

    /// Inner product with another sparse vector.
    pub fn inner_product(&self, other: &Self) -> F {
        let mut total = F::zero();

        let (mut i, mut j) = (0, 0);
        while i < self.data.len() && j < other.data.len() {
            match self.data[i].0.cmp(&other.data[j].0) {
                Ordering::Less => i += 1,
                Ordering::Greater => j += 1,
                Ordering::Equal => {
                    total += &self.data[i].1 * &other.data[j].1;
                    i += 1;
                    j += 1;
                },
            }
        }

        total
    }
}

impl<F: NonZero> FromIterator<SparseTuple<F>> for Sparse<F> {
    fn from_iter<I: IntoIterator<Item=SparseTuple<F>>>(iter: I) -> Self {
        Self::from_tuples(iter.into_iter().collect())
    }
}

impl<F> IntoIterator for Sparse<F> {
    type Item = SparseTuple<F>;
    type IntoIter = IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, F> IntoIterator for &'a Sparse<F> {
    type Item = &'a SparseTuple<F>;
    type IntoIter = Iter<'a, SparseTuple<F>>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<F> Deref for Sparse<F> {
    type Target = [SparseTuple<F>];

    fn deref(&self) -> &Self::Target {
        self.data.deref()
    }
}
