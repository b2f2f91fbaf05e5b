//! # Revised simplex method
//!
//! The constraint matrix `A` of a problem in equality form `min c^T x, Ax = b, x >= 0` is never
//! rewritten. Instead, the method keeps the partition of the variables into basic and nonbasic
//! variables together with the inverse of the basis matrix, and derives everything else from
//! those:
//!
//! ```text
//! x_B = B^-1 b
//! y^T = c_B^T B^-1
//! z_j = c_j - y^T a_j    for j in N
//! ```
//!
//! The primal method needs `x_B >= 0` and works towards `z >= 0`, the dual method needs `z >= 0`
//! and works towards `x_B >= 0`. The two-phase method combines them when neither holds.
//!
//! Variables are identified by labels. The smallest label wins every tie, which makes the method
//! pivot like the tableau method when both start from the same dictionary.
use log::debug;
use relp_num::{OrderedField, OrderedFieldRef};

use crate::algorithm::{Failure, Options};
use crate::algorithm::revised::basis_inverse::BasisInverseRows;
use crate::algorithm::tableau::Dictionary;
use crate::data::linear_algebra::matrix::{ColumnMajor, Sparse as SparseMatrix};
use crate::data::linear_algebra::vector::{DenseVector, SparseVector};
use crate::data::linear_program::error::InputError;

pub use dual::dual;
pub use primal::primal;

pub mod basis_inverse;
pub mod dual;
pub mod primal;


/// A minimization problem in equality form, `min c^T x + constant, Ax = b, x >= 0`.
///
/// Only the columns of `A` are stored, keyed by the label of their variable. The rows are
/// numbered from zero.
#[derive(Eq, PartialEq, Clone, Debug)]
pub struct RevisedProblem<F> {
    constraints: SparseMatrix<F, ColumnMajor>,
    /// All variable labels, sorted.
    labels: Vec<usize>,
    rhs: DenseVector<F>,
    cost: SparseVector<F>,
    constant: F,
}

impl<F> RevisedProblem<F> {
    /// Number of constraint rows.
    pub fn nr_rows(&self) -> usize {
        self.rhs.len()
    }

    /// Labels of all variables, sorted.
    pub fn labels(&self) -> &[usize] {
        &self.labels
    }

    /// Cost of every variable, keyed by label.
    pub fn cost(&self) -> &SparseVector<F> {
        &self.cost
    }

    /// Column of the variable with the given label, if it is not zero.
    pub fn column(&self, label: usize) -> Option<&SparseVector<F>> {
        self.constraints.column(label)
    }
}

impl<F> RevisedProblem<F>
where
    F: OrderedField,
    for<'r> &'r F: OrderedFieldRef<F>,
{
    /// Create a problem from a dense matrix.
    ///
    /// Variables are labeled by the position of their column.
    ///
    /// # Arguments
    ///
    /// * `rows`: Rows of `A`, each as long as `cost`.
    /// * `rhs`: The values `b`, one for each row.
    /// * `cost`: The values `c`, one for each column.
    ///
    /// # Errors
    ///
    /// If the dimensions don't match.
    pub fn new(rows: Vec<Vec<F>>, rhs: Vec<F>, cost: Vec<F>) -> Result<Self, InputError> {
        let n = cost.len();
        if rows.len() != rhs.len() {
            return Err(InputError::new(format!(
                "{} rows but {} right-hand side values", rows.len(), rhs.len(),
            )));
        }
        if let Some((i, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != n) {
            return Err(InputError::new(format!(
                "row {} has {} values but there are {} costs", i, row.len(), n,
            )));
        }

        let mut columns = vec![Vec::new(); n];
        for (i, row) in rows.into_iter().enumerate() {
            for (j, value) in row.into_iter().enumerate() {
                columns[j].push((i, value));
            }
        }
        let constraints = SparseMatrix::from_major(
            columns.into_iter().map(SparseVector::from_tuples).enumerate().collect(),
        );

        Ok(Self {
            constraints,
            labels: (0..n).collect(),
            rhs: DenseVector::new(rhs),
            cost: cost.into_iter().enumerate().collect(),
            constant: F::zero(),
        })
    }

    /// Restate a dictionary in equality form.
    ///
    /// Each row `x_i = b_i - sum_j A[i][j] x_j` becomes `x_i + sum_j A[i][j] x_j = b_i`, such that
    /// the basic variables of the dictionary form an identity basis. Maximization of the dictionary
    /// objective becomes minimization of its negation. Labels are the variable indices of the
    /// dictionary.
    ///
    /// # Return value
    ///
    /// The problem, and a state with the basis of the dictionary.
    pub fn from_dictionary(dictionary: &Dictionary<F>) -> (Self, RevisedState<F>) {
        let basis = dictionary.basis().to_vec();
        let non_basis = dictionary.non_basis().to_vec();

        let mut constraints = SparseMatrix::new();
        for (r, &i) in basis.iter().enumerate() {
            constraints.set(i, r, F::one());
            if let Some(row) = dictionary.constraints().row(i) {
                for (j, value) in row.iter() {
                    constraints.set(*j, r, value.clone());
                }
            }
        }

        let rhs = basis.iter().map(|&i| dictionary.rhs().value(i)).collect();
        let cost = dictionary.cost().iter().map(|(j, value)| (*j, -value)).collect();
        let mut labels = basis.iter().chain(&non_basis).copied().collect::<Vec<_>>();
        labels.sort_unstable();

        let problem = Self {
            constraints,
            labels,
            rhs,
            cost,
            constant: -dictionary.objective_value(),
        };
        let state = RevisedState {
            non_basis,
            basis_inverse: BasisInverseRows::identity(basis.len()),
            basis,
        };

        (problem, state)
    }
}

/// The part of the revised method that changes with every pivot.
///
/// A state belongs to a single problem, and is passed from phase to phase.
#[derive(Eq, PartialEq, Clone, Debug)]
pub struct RevisedState<F> {
    non_basis: Vec<usize>,
    /// Label of the basic variable of each row of the basis inverse.
    basis: Vec<usize>,
    basis_inverse: BasisInverseRows<F>,
}

impl<F> RevisedState<F> {
    /// Labels of the basic variables, in the order of the rows of the basis inverse.
    pub fn basis(&self) -> &[usize] {
        &self.basis
    }

    /// Labels of the nonbasic variables.
    pub fn non_basis(&self) -> &[usize] {
        &self.non_basis
    }
}

impl<F> RevisedState<F>
where
    F: OrderedField,
    for<'r> &'r F: OrderedFieldRef<F>,
{
    /// Create a state by inverting a basis.
    ///
    /// # Arguments
    ///
    /// * `problem`: Problem that the basis is for.
    /// * `basis`: Labels of the basic variables, one for every row.
    ///
    /// # Errors
    ///
    /// If the labels are not valid, or if their columns don't form an invertible matrix.
    pub fn new(problem: &RevisedProblem<F>, basis: Vec<usize>) -> Result<Self, InputError> {
        if basis.len() != problem.nr_rows() {
            return Err(InputError::new(format!(
                "basis has {} variables but there are {} rows", basis.len(), problem.nr_rows(),
            )));
        }
        if let Some(label) = basis.iter().find(|label| problem.labels.binary_search(label).is_err()) {
            return Err(InputError::new(format!("unknown variable label {}", label)));
        }

        let empty = SparseVector::new();
        let columns = basis.iter()
            .map(|&label| problem.column(label).unwrap_or(&empty))
            .collect::<Vec<_>>();
        let basis_inverse = BasisInverseRows::invert(&columns)
            .ok_or_else(|| InputError::new("basis matrix is singular"))?;

        let non_basis = problem.labels.iter()
            .copied()
            .filter(|label| !basis.contains(label))
            .collect();

        Ok(Self { non_basis, basis, basis_inverse })
    }

    /// Values of the basic variables, `B^-1 b`, in the order of the basis.
    pub fn basic_values(&self, problem: &RevisedProblem<F>) -> DenseVector<F> {
        (0..self.basis.len())
            .map(|r| problem.rhs.sparse_inner_product(self.basis_inverse.row(r)))
            .collect()
    }

    /// Dual values `y^T = c_B^T B^-1` for the given costs, keyed by row.
    pub fn duals(&self, cost: &SparseVector<F>) -> SparseVector<F> {
        let mut duals = SparseVector::new();
        for (r, &label) in self.basis.iter().enumerate() {
            if let Some(value) = cost.get(label) {
                duals.add_multiple_of(value, self.basis_inverse.row(r));
            }
        }

        duals
    }

    /// Reduced cost `c_j - y^T a_j` of a variable.
    pub fn reduced_cost(
        &self,
        problem: &RevisedProblem<F>,
        cost: &SparseVector<F>,
        duals: &SparseVector<F>,
        label: usize,
    ) -> F {
        let price = problem.column(label).map_or_else(F::zero, |column| column.inner_product(duals));
        cost.value(label) - price
    }

    /// Column of a variable relative to the current basis, `B^-1 a_j`, keyed by position in the
    /// basis.
    pub fn relative_column(&self, problem: &RevisedProblem<F>, label: usize) -> SparseVector<F> {
        problem.column(label)
            .map(|column| self.basis_inverse.left_multiply(column))
            .unwrap_or_default()
    }

    /// Value of a variable in row `r` of `B^-1 A`.
    pub(crate) fn relative_value(&self, problem: &RevisedProblem<F>, r: usize, label: usize) -> F {
        problem.column(label)
            .map_or_else(F::zero, |column| self.basis_inverse.row(r).inner_product(column))
    }

    /// Whether all basic variables are nonnegative.
    pub fn is_primal_feasible(&self, problem: &RevisedProblem<F>) -> bool {
        self.basic_values(problem).iter().all(|value| !value.is_negative())
    }

    /// Whether all reduced costs are nonnegative for the given costs.
    pub fn is_dual_feasible(&self, problem: &RevisedProblem<F>, cost: &SparseVector<F>) -> bool {
        let duals = self.duals(cost);
        self.non_basis.iter()
            .all(|&label| !self.reduced_cost(problem, cost, &duals, label).is_negative())
    }

    /// Values of the basic variables keyed by label. Nonbasic variables are zero.
    pub fn solution(&self, problem: &RevisedProblem<F>) -> SparseVector<F> {
        self.basis.iter().copied()
            .zip(self.basic_values(problem).iter().cloned())
            .collect()
    }

    /// Value of the objective function at the basic solution, `c_B^T x_B` plus the constant.
    pub fn primal_objective(&self, problem: &RevisedProblem<F>) -> F {
        let mut total = problem.constant.clone();
        for (label, value) in self.basis.iter().zip(self.basic_values(problem).iter()) {
            if let Some(cost) = problem.cost.get(*label) {
                total += cost * value;
            }
        }

        total
    }

    /// Value of the dual objective function, `y^T b` plus the constant.
    ///
    /// Equal to the primal objective value at every basis. At an optimal basis, `y` is dual
    /// feasible and this value certifies optimality.
    pub fn dual_objective(&self, problem: &RevisedProblem<F>) -> F {
        problem.rhs.sparse_inner_product(&self.duals(&problem.cost)) + &problem.constant
    }

    /// Replace the basic variable at position `r` by a nonbasic variable.
    ///
    /// # Arguments
    ///
    /// * `r`: Position of the leaving variable in the basis.
    /// * `entering`: Label of the entering variable.
    /// * `column`: Column of the entering variable relative to the current basis.
    pub(crate) fn pivot(&mut self, r: usize, entering: usize, column: &SparseVector<F>) {
        debug_assert!(self.non_basis.contains(&entering));

        self.basis_inverse.change_basis(r, column);
        let leaving = self.basis[r];
        self.basis[r] = entering;
        for label in &mut self.non_basis {
            if *label == entering {
                *label = leaving;
            }
        }
    }
}

/// Solve a problem from any basis.
///
/// If the basis is primal feasible, the primal method solves the problem. If it is dual feasible
/// instead, the dual method does. If it is neither, the dual method first finds a primal feasible
/// basis for the auxiliary costs that are one for every nonbasic variable and zero for every basic
/// variable, after which the primal method optimizes the actual costs.
///
/// # Errors
///
/// `Failure::Unbounded` if the objective is unbounded from below, `Failure::Infeasible` if there
/// is no primal feasible solution (the dual method found an unbounded dual), and
/// `Failure::IterationLimit` if the pivot limit was reached in one of the phases.
///
/// # Cycling
///
/// Every path except the first one runs the dual method, which can cycle on degenerate problems;
/// see `dual`. Set `Options::iteration_limit` to guarantee that this function returns.
pub fn two_phase<F>(
    problem: &RevisedProblem<F>,
    state: RevisedState<F>,
    options: &Options,
) -> Result<RevisedState<F>, Failure>
where
    F: OrderedField,
    for<'r> &'r F: OrderedFieldRef<F>,
{
    if state.is_primal_feasible(problem) {
        return primal(problem, state, problem.cost(), options);
    }

    if state.is_dual_feasible(problem, problem.cost()) {
        return dual(problem, state, problem.cost(), options).map_err(dual_to_primal);
    }

    let auxiliary_cost = state.non_basis.iter()
        .map(|&label| (label, F::one()))
        .collect::<SparseVector<_>>();
    debug!("basis is neither primal nor dual feasible, solving with auxiliary costs");
    let state = dual(problem, state, &auxiliary_cost, options).map_err(dual_to_primal)?;

    debug!("found a primal feasible basis");
    primal(problem, state, problem.cost(), options)
}

/// An unbounded dual means an infeasible primal.
fn dual_to_primal(failure: Failure) -> Failure {
    match failure {
        Failure::Unbounded => Failure::Infeasible,
        other => other,
    }
}

/// Solve a dictionary with the revised method.
///
/// # Return value
///
/// The values of the basic variables keyed by variable index, and the optimal (maximal) objective
/// value, like `tableau::simplex`.
pub fn simplex<F>(
    dictionary: &Dictionary<F>,
    options: &Options,
) -> Result<(SparseVector<F>, F), Failure>
where
    F: OrderedField,
    for<'r> &'r F: OrderedFieldRef<F>,
{
    let (problem, state) = RevisedProblem::from_dictionary(dictionary);
    let state = two_phase(&problem, state, options)?;

    Ok((state.solution(&problem), -state.primal_objective(&problem)))
}
