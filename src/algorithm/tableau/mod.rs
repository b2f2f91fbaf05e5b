//! # Dictionaries
//!
//! The tableau formulation of the simplex method works on a linear program in slack form. Every
//! basic variable is expressed in terms of the nonbasic variables:
//!
//! ```text
//! x_i = b_i - sum_j A[i][j] x_j    for i in B
//! z   = v   + sum_j c[j]    x_j
//! ```
//!
//! Such a snapshot is called a dictionary. A pivot exchanges one basic and one nonbasic variable
//! and rewrites the entire dictionary. The method is described in chapter 29 of Introduction to
//! Algorithms by Cormen, Leiserson, Rivest and Stein.
use std::fmt;

use itertools::Itertools;
use relp_num::{OrderedField, OrderedFieldRef};

use crate::algorithm::Options;
use crate::algorithm::Failure;
use crate::algorithm::strategy::pivot_rule::PivotRule;
use crate::data::linear_algebra::matrix::{RowMajor, Sparse as SparseMatrix};
use crate::data::linear_algebra::vector::SparseVector;
use crate::data::linear_program::slack_form::VariableMap;

pub use phase_one::initialize;
pub use phase_two::solve;

pub mod phase_one;
pub mod phase_two;

#[cfg(test)]
mod test;

/// Index of the artificial variable that only exists during the first phase.
pub const ARTIFICIAL: usize = 0;

/// A linear program in slack form, one snapshot of the tableau method.
///
/// The tuple `(N, B, A, b, c, v)`. The row of `A` and the value of `b` are keyed by basic
/// variables, the columns of `A` and the values of `c` are keyed by nonbasic variables. Values that
/// are not stored are zero.
///
/// A dictionary is never partially updated: a pivot creates a new, consistent dictionary.
#[derive(Eq, PartialEq, Clone, Debug)]
pub struct Dictionary<F> {
    /// `N`, in the order in which the variables were introduced, updated in place by pivots.
    non_basis: Vec<usize>,
    /// `B`, one variable per constraint row.
    basis: Vec<usize>,
    /// `A`, with one row per basic variable.
    constraints: SparseMatrix<F, RowMajor>,
    /// `b`, the value of every basic variable when all nonbasic variables are zero.
    rhs: SparseVector<F>,
    /// `c`, the objective coefficient of every nonbasic variable.
    cost: SparseVector<F>,
    /// `v`, the objective value when all nonbasic variables are zero.
    objective_value: F,
}

impl<F> Dictionary<F> {
    /// Nonbasic variables.
    pub fn non_basis(&self) -> &[usize] {
        &self.non_basis
    }

    /// Basic variables.
    pub fn basis(&self) -> &[usize] {
        &self.basis
    }

    /// Coefficient matrix `A`.
    pub fn constraints(&self) -> &SparseMatrix<F, RowMajor> {
        &self.constraints
    }

    /// Values of the basic variables.
    pub fn rhs(&self) -> &SparseVector<F> {
        &self.rhs
    }

    /// Objective coefficients of the nonbasic variables.
    pub fn cost(&self) -> &SparseVector<F> {
        &self.cost
    }

    /// The objective value at the basic solution.
    pub fn objective_value(&self) -> &F {
        &self.objective_value
    }

    /// Whether variable `i` is basic.
    pub fn is_basic(&self, i: usize) -> bool {
        self.basis.contains(&i)
    }

    /// Whether variable `j` is nonbasic.
    pub fn is_non_basic(&self, j: usize) -> bool {
        self.non_basis.contains(&j)
    }

    /// The values of the basic variables and the objective value.
    pub fn into_solution(self) -> (SparseVector<F>, F) {
        (self.rhs, self.objective_value)
    }

    /// Render this dictionary with variable names, one row per line.
    pub fn display<'a>(&'a self, variables: &'a VariableMap) -> DictionaryDisplay<'a, F> {
        DictionaryDisplay { dictionary: self, variables }
    }
}

impl<F> Dictionary<F>
where
    F: OrderedField,
    for<'r> &'r F: OrderedFieldRef<F>,
{
    /// Create a new dictionary.
    ///
    /// # Arguments
    ///
    /// * `non_basis`: Nonbasic variables, disjoint from `basis`.
    /// * `basis`: Basic variables, one for each constraint row.
    /// * `constraints`: Rows of `A`, each keyed by a basic variable.
    /// * `rhs`: Values of the basic variables.
    /// * `cost`: Objective coefficients of the nonbasic variables.
    /// * `objective_value`: Constant of the objective function.
    #[must_use]
    pub fn new(
        non_basis: Vec<usize>,
        basis: Vec<usize>,
        constraints: SparseMatrix<F, RowMajor>,
        rhs: SparseVector<F>,
        cost: SparseVector<F>,
        objective_value: F,
    ) -> Self {
        debug_assert!(non_basis.iter().all(|j| !basis.contains(j)));
        debug_assert!(basis.iter().all_unique() && non_basis.iter().all_unique());
        debug_assert!(constraints.iter().all(|(i, row)| {
            basis.contains(i) && row.indices().all(|j| non_basis.contains(&j))
        }));
        debug_assert!(rhs.indices().all(|i| basis.contains(&i)));
        debug_assert!(cost.indices().all(|j| non_basis.contains(&j)));

        Self { non_basis, basis, constraints, rhs, cost, objective_value }
    }

    /// Pivot around a leaving and an entering variable.
    ///
    /// The entering variable takes the row of the leaving variable, which becomes nonbasic. All
    /// other rows and the objective are rewritten by substituting the new row for the entering
    /// variable.
    ///
    /// # Arguments
    ///
    /// * `leaving`: Basic variable to become nonbasic.
    /// * `entering`: Nonbasic variable to become basic.
    ///
    /// # Return value
    ///
    /// The new dictionary. The order of the basic and nonbasic variables is kept: the entering
    /// variable takes the position of the leaving variable in `B` and vice versa in `N`.
    ///
    /// # Panics
    ///
    /// When `A[leaving][entering]` is zero. Selection rules never choose such a pair.
    #[must_use]
    pub fn pivot(&self, leaving: usize, entering: usize) -> Self {
        debug_assert!(self.is_basic(leaving));
        debug_assert!(self.is_non_basic(entering));

        let pivot_value = self.constraints.get(leaving, entering)
            .expect("Pivot value can't be zero.");

        // Row of the entering variable
        let mut entering_row = self.constraints.major_or_zero(leaving)
            .iter()
            .filter(|&&(j, _)| j != entering)
            .map(|(j, value)| (*j, value / pivot_value))
            .collect::<SparseVector<_>>();
        entering_row.set(leaving, F::one() / pivot_value);
        let entering_rhs = &self.rhs.value(leaving) / pivot_value;

        // Remaining rows
        let mut constraints = SparseMatrix::new();
        let mut rhs = SparseVector::new();
        for &i in self.basis.iter().filter(|&&i| i != leaving) {
            let mut row = self.constraints.major_or_zero(i);
            let mut value = self.rhs.value(i);
            if let Some(factor) = row.remove(entering) {
                value -= &factor * &entering_rhs;
                row.add_multiple_of(&-factor, &entering_row);
            }
            constraints.insert_major(i, row);
            rhs.set(i, value);
        }

        // Objective function
        let mut cost = self.cost.clone();
        let mut objective_value = self.objective_value.clone();
        if let Some(factor) = cost.remove(entering) {
            objective_value += &factor * &entering_rhs;
            cost.add_multiple_of(&-factor, &entering_row);
        }

        constraints.insert_major(entering, entering_row);
        rhs.set(entering, entering_rhs);

        let mut non_basis = self.non_basis.clone();
        let mut basis = self.basis.clone();
        for j in &mut non_basis {
            if *j == entering {
                *j = leaving;
            }
        }
        for i in &mut basis {
            if *i == leaving {
                *i = entering;
            }
        }

        Self { non_basis, basis, constraints, rhs, cost, objective_value }
    }

    /// Select the variable that leaves the basis when `entering` enters it.
    ///
    /// This is the basic variable that limits the increase of the entering variable the most: the
    /// minimum of `b[i] / A[i][entering]` over rows with a positive coefficient. Ties are broken by
    /// choosing the smallest variable index.
    ///
    /// # Return value
    ///
    /// `None` if no row limits the entering variable, that is, the problem is unbounded.
    pub fn select_leaving(&self, entering: usize) -> Option<usize> {
        debug_assert!(self.is_non_basic(entering));

        let mut leaving: Option<(usize, F)> = None;
        for &i in &self.basis {
            if let Some(coefficient) = self.constraints.get(i, entering) {
                if coefficient.is_positive() {
                    let ratio = &self.rhs.value(i) / coefficient;
                    let is_better = match &leaving {
                        None => true,
                        Some((current, current_ratio)) => {
                            ratio < *current_ratio || (ratio == *current_ratio && i < *current)
                        },
                    };
                    if is_better {
                        leaving = Some((i, ratio));
                    }
                }
            }
        }

        leaving.map(|(i, _)| i)
    }

    /// The basic variable with the most negative value.
    ///
    /// Ties are broken by choosing the smallest variable index.
    ///
    /// # Return value
    ///
    /// `None` if the basic solution is feasible.
    pub fn most_infeasible_row(&self) -> Option<usize> {
        let mut smallest: Option<(usize, &F)> = None;
        for (i, value) in self.rhs.iter() {
            if value.is_negative() && smallest.map_or(true, |(_, current)| value < current) {
                smallest = Some((*i, value));
            }
        }

        smallest.map(|(i, _)| i)
    }

    /// Whether all basic variables are nonnegative.
    pub fn is_feasible(&self) -> bool {
        self.rhs.iter().all(|(_, value)| !value.is_negative())
    }

    /// Whether no nonbasic variable has a positive objective coefficient.
    pub fn is_optimal(&self) -> bool {
        self.cost.iter().all(|(j, value)| !value.is_positive() || !self.is_non_basic(*j))
    }

    /// Replace the objective function.
    pub(crate) fn with_objective(self, cost: SparseVector<F>, objective_value: F) -> Self {
        debug_assert!(cost.indices().all(|j| self.is_non_basic(j)));

        Self { cost, objective_value, ..self }
    }

    /// Add the artificial variable to `N`, with coefficient `-1` in every row.
    pub(crate) fn with_artificial(self) -> Self {
        debug_assert!(!self.is_non_basic(ARTIFICIAL) && !self.is_basic(ARTIFICIAL));

        let Self { mut non_basis, basis, mut constraints, rhs, cost, objective_value } = self;
        non_basis.push(ARTIFICIAL);
        for &i in &basis {
            constraints.set(i, ARTIFICIAL, -F::one());
        }

        Self { non_basis, basis, constraints, rhs, cost, objective_value }
    }

    /// Remove the artificial variable from `N` and from every row.
    pub(crate) fn without_artificial(self) -> Self {
        debug_assert!(!self.is_basic(ARTIFICIAL));

        let Self { mut non_basis, basis, mut constraints, rhs, mut cost, objective_value } = self;
        non_basis.retain(|&j| j != ARTIFICIAL);
        constraints.remove_minor(ARTIFICIAL);
        cost.remove(ARTIFICIAL);

        Self { non_basis, basis, constraints, rhs, cost, objective_value }
    }

    /// Drop the row of a basic variable that has no nonzero coefficients.
    pub(crate) fn without_empty_row(self, i: usize) -> Self {
        debug_assert!(self.constraints.row(i).is_none());

        let Self { non_basis, mut basis, constraints, mut rhs, cost, objective_value } = self;
        basis.retain(|&k| k != i);
        rhs.remove(i);

        Self { non_basis, basis, constraints, rhs, cost, objective_value }
    }
}

/// Solve a linear program in slack form.
///
/// First finds a feasible dictionary, then optimizes it.
///
/// # Arguments
///
/// * `variables`: Names of the variables, used for logging.
/// * `dictionary`: Initial dictionary, as created from the slack form. It doesn't need to be
/// feasible.
/// * `options`: Limits for the computation.
///
/// # Return value
///
/// The values of the basic variables and the optimal objective value, or the reason that there is
/// no finite optimum.
pub fn simplex<PR, F>(
    variables: &VariableMap,
    dictionary: Dictionary<F>,
    options: &Options,
) -> Result<(SparseVector<F>, F), Failure>
where
    PR: PivotRule,
    F: OrderedField,
    for<'r> &'r F: OrderedFieldRef<F>,
{
    let dictionary = initialize::<PR, _>(variables, dictionary, options)?;
    let dictionary = solve::<PR, _>(variables, dictionary, options)?;

    Ok(dictionary.into_solution())
}

/// Displays a dictionary using the names of the variables.
///
/// The objective row comes first, followed by the constraint rows sorted by variable index.
/// Nonbasic variables appear sorted by index in every row, including those with a zero
/// coefficient.
pub struct DictionaryDisplay<'a, F> {
    dictionary: &'a Dictionary<F>,
    variables: &'a VariableMap,
}

impl<F> fmt::Display for DictionaryDisplay<'_, F>
where
    F: OrderedField,
    for<'r> &'r F: OrderedFieldRef<F>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dictionary = self.dictionary;
        let non_basis = dictionary.non_basis.iter().copied().sorted().collect::<Vec<_>>();
        let width = dictionary.non_basis.iter().chain(&dictionary.basis)
            .map(|&i| self.variables.name(i).len())
            .chain([self.variables.objective_name().len()])
            .max()
            .unwrap_or(0);

        write!(f, "{:<width$} = {}", self.variables.objective_name(), dictionary.objective_value, width = width)?;
        for &j in &non_basis {
            write!(f, " + {} {}", dictionary.cost.value(j), self.variables.name(j))?;
        }
        writeln!(f)?;

        for i in dictionary.basis.iter().copied().sorted() {
            write!(f, "{:<width$} = {}", self.variables.name(i), dictionary.rhs.value(i), width = width)?;
            for &j in &non_basis {
                write!(f, " - {} {}", dictionary.constraints.value(i, j), self.variables.name(j))?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
