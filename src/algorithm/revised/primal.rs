//! # Primal revised simplex
//!
//! Starting from a primal feasible basis, pivot until no reduced cost is negative.
use log::debug;
use relp_num::{OrderedField, OrderedFieldRef};

use crate::algorithm::{Failure, IterationCounter, Options};
use crate::algorithm::revised::{RevisedProblem, RevisedState};
use crate::data::linear_algebra::vector::SparseVector;

/// Minimize the given costs over a problem, starting from a primal feasible basis.
///
/// The entering variable is the nonbasic variable with the smallest label that has a negative
/// reduced cost. The leaving variable is found with the minimum ratio test on the column of the
/// entering variable, ties broken by the smallest label.
///
/// # Arguments
///
/// * `problem`: Constraints of the problem.
/// * `state`: Basis for which all basic variables are nonnegative.
/// * `cost`: Costs to minimize, keyed by label. These need not be the costs of the problem.
/// * `options`: Limits for the computation.
///
/// # Return value
///
/// An optimal basis for the costs.
///
/// # Errors
///
/// `Failure::Unbounded` if the entering column has no positive value, and
/// `Failure::IterationLimit` if the pivot limit was reached.
pub fn primal<F>(
    problem: &RevisedProblem<F>,
    mut state: RevisedState<F>,
    cost: &SparseVector<F>,
    options: &Options,
) -> Result<RevisedState<F>, Failure>
where
    F: OrderedField,
    for<'r> &'r F: OrderedFieldRef<F>,
{
    debug_assert!(state.is_primal_feasible(problem));

    let mut iterations = IterationCounter::new(options);
    loop {
        let duals = state.duals(cost);
        let entering = state.non_basis().iter().copied()
            .filter(|&label| state.reduced_cost(problem, cost, &duals, label).is_negative())
            .min();
        let Some(entering) = entering else {
            debug!("primal optimal after {} pivots", iterations.iterations());
            break Ok(state);
        };

        let column = state.relative_column(problem, entering);
        let values = state.basic_values(problem);
        let mut leaving: Option<(usize, F)> = None;
        for (r, direction) in column.iter() {
            if direction.is_positive() {
                let ratio = &values[*r] / direction;
                let is_better = match &leaving {
                    None => true,
                    Some((current, current_ratio)) => {
                        ratio < *current_ratio
                            || (ratio == *current_ratio && state.basis()[*r] < state.basis()[*current])
                    },
                };
                if is_better {
                    leaving = Some((*r, ratio));
                }
            }
        }
        let Some((r, _)) = leaving else {
            debug!("{} can increase without bound", entering);
            break Err(Failure::Unbounded);
        };

        iterations.next()?;
        debug!("primal pivot: {} leaves, {} enters", state.basis()[r], entering);
        state.pivot(r, entering, &column);
    }
}
