//! # Basis inverse rows
//!
//! Explicit row-major representation of the basis inverse B^-1. The inverse of a sparse matrix is
//! not generally sparse, so this is not a scalable representation, but it is exact and makes every
//! quantity of the revised method a handful of inner products.
use relp_num::{OrderedField, OrderedFieldRef};

use crate::data::linear_algebra::vector::SparseVector;

/// Explicit row-major sparse representation of the basis inverse.
///
/// Row `r` belongs to the basic variable at position `r` of the basis. Columns given to and
/// returned from the methods are keyed by constraint row.
#[derive(Eq, PartialEq, Clone, Debug)]
pub struct BasisInverseRows<F> {
    rows: Vec<SparseVector<F>>,
}

impl<F> BasisInverseRows<F>
where
    F: OrderedField,
    for<'r> &'r F: OrderedFieldRef<F>,
{
    /// The inverse of the identity matrix of size `m`.
    #[must_use]
    pub fn identity(m: usize) -> Self {
        Self {
            rows: (0..m).map(|i| SparseVector::from_tuples(vec![(i, F::one())])).collect(),
        }
    }

    /// Invert a basis matrix by bringing its columns into an identity basis one by one.
    ///
    /// # Arguments
    ///
    /// * `columns`: The columns of the basis matrix, in order. Row indices should be smaller than
    /// the number of columns.
    ///
    /// # Return value
    ///
    /// `None` if the matrix is singular.
    pub fn invert(columns: &[&SparseVector<F>]) -> Option<Self> {
        let m = columns.len();
        let mut inverse = Self::identity(m);

        // Row of the work inverse that each column was pivoted into
        let mut pivot_rows = Vec::with_capacity(m);
        let mut taken = vec![false; m];
        for column in columns {
            debug_assert!(column.indices().all(|i| i < m));

            let relative = inverse.left_multiply(column);
            let row = relative.indices().find(|&i| !taken[i])?;
            inverse.change_basis(row, &relative);
            taken[row] = true;
            pivot_rows.push(row);
        }

        let mut rows = inverse.rows.into_iter().map(Some).collect::<Vec<_>>();
        let rows = pivot_rows.into_iter()
            .map(|i| rows[i].take())
            .collect::<Option<Vec<_>>>()?;

        Some(Self { rows })
    }

    /// Normalize the pivot row.
    ///
    /// That is, the pivot value will be set to `1`.
    ///
    /// # Arguments
    ///
    /// * `pivot_row_index`: Index of the pivot row.
    /// * `column`: Column relative to the current basis to be entered into that basis.
    fn normalize_pivot_row(&mut self, pivot_row_index: usize, column: &SparseVector<F>) {
        let pivot_value = column.get(pivot_row_index)
            .expect("Pivot value can't be zero.");

        self.rows[pivot_row_index].element_wise_divide(pivot_value);
    }

    /// Row reduce the other basis inverse rows with the pivot row.
    ///
    /// # Note
    ///
    /// This method requires a normalized pivot row.
    fn row_reduce(&mut self, pivot_row_index: usize, column: &SparseVector<F>) {
        debug_assert!(pivot_row_index < self.m());

        let (rows_left, rows_right) = self.rows.split_at_mut(pivot_row_index);
        let Some((pivot_row, rows_right)) = rows_right.split_first_mut() else {
            return;
        };

        for (edit_row_index, column_value) in column.iter() {
            if *edit_row_index < pivot_row_index {
                rows_left[*edit_row_index].add_multiple_of(&-column_value, pivot_row);
            } else if *edit_row_index > pivot_row_index {
                rows_right[*edit_row_index - (pivot_row_index + 1)]
                    .add_multiple_of(&-column_value, pivot_row);
            }
        }
    }

    /// Replace the basic variable of a row by a variable with the given column.
    ///
    /// # Arguments
    ///
    /// * `pivot_row_index`: Position in the basis of the leaving variable.
    /// * `column`: Column of the entering variable relative to the current basis, that is, already
    /// multiplied by this inverse.
    ///
    /// # Panics
    ///
    /// When the column has no value at `pivot_row_index`.
    pub fn change_basis(&mut self, pivot_row_index: usize, column: &SparseVector<F>) {
        debug_assert!(pivot_row_index < self.m());

        // The order of these calls matters: the first of the two normalizes the pivot row
        self.normalize_pivot_row(pivot_row_index, column);
        self.row_reduce(pivot_row_index, column);
    }

    /// Multiply a column by this inverse.
    pub fn left_multiply(&self, column: &SparseVector<F>) -> SparseVector<F> {
        self.rows.iter()
            .map(|row| row.inner_product(column))
            .enumerate()
            .filter(|(_, value)| value.is_not_zero())
            .collect()
    }

    /// Row `r` of the inverse.
    pub fn row(&self, r: usize) -> &SparseVector<F> {
        &self.rows[r]
    }

    /// Number of rows and columns.
    pub fn m(&self) -> usize {
        self.rows.len()
    }
}
