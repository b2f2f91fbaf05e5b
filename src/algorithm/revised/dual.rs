//! # Dual revised simplex
//!
//! Starting from a dual feasible basis, pivot until no basic variable is negative.
use log::debug;
use relp_num::{OrderedField, OrderedFieldRef};

use crate::algorithm::{Failure, IterationCounter, Options};
use crate::algorithm::revised::{RevisedProblem, RevisedState};
use crate::data::linear_algebra::vector::SparseVector;

/// Minimize the given costs over a problem, starting from a dual feasible basis.
///
/// The leaving variable is the most negative basic variable, ties broken by the smallest label.
/// The entering variable is the nonbasic variable with a negative value in the row of the leaving
/// variable that minimizes the ratio of its reduced cost and the magnitude of that value. Again,
/// ties are broken by the smallest label. This keeps all reduced costs nonnegative.
///
/// # Arguments
///
/// * `problem`: Constraints of the problem.
/// * `state`: Basis for which all reduced costs are nonnegative.
/// * `cost`: Costs to minimize, keyed by label. These need not be the costs of the problem.
/// * `options`: Limits for the computation.
///
/// # Return value
///
/// A basis that is both primal and dual feasible, and hence optimal for the costs.
///
/// # Errors
///
/// `Failure::Unbounded` if the dual problem is unbounded, meaning that the primal problem is
/// infeasible. `Failure::IterationLimit` if the pivot limit was reached.
///
/// # Cycling
///
/// Choosing the most negative row is not a smallest-index rule, so degenerate problems can make
/// this method cycle. `Options::iteration_limit` bounds the number of pivots.
pub fn dual<F>(
    problem: &RevisedProblem<F>,
    mut state: RevisedState<F>,
    cost: &SparseVector<F>,
    options: &Options,
) -> Result<RevisedState<F>, Failure>
where
    F: OrderedField,
    for<'r> &'r F: OrderedFieldRef<F>,
{
    debug_assert!(state.is_dual_feasible(problem, cost));

    let mut iterations = IterationCounter::new(options);
    loop {
        let values = state.basic_values(problem);
        let mut leaving: Option<usize> = None;
        for (r, value) in values.iter().enumerate() {
            if value.is_negative() {
                let is_better = leaving.map_or(true, |current| {
                    value < &values[current]
                        || (value == &values[current] && state.basis()[r] < state.basis()[current])
                });
                if is_better {
                    leaving = Some(r);
                }
            }
        }
        let Some(r) = leaving else {
            debug!("dual optimal after {} pivots", iterations.iterations());
            break Ok(state);
        };

        let duals = state.duals(cost);
        let mut entering: Option<(usize, F)> = None;
        for &label in state.non_basis() {
            let value = state.relative_value(problem, r, label);
            if value.is_negative() {
                let ratio = state.reduced_cost(problem, cost, &duals, label) / -value;
                let is_better = match &entering {
                    None => true,
                    Some((current, current_ratio)) => {
                        ratio < *current_ratio || (ratio == *current_ratio && label < *current)
                    },
                };
                if is_better {
                    entering = Some((label, ratio));
                }
            }
        }
        let Some((entering, _)) = entering else {
            debug!("row of {} can't be made nonnegative", state.basis()[r]);
            break Err(Failure::Unbounded);
        };

        iterations.next()?;
        debug!("dual pivot: {} leaves, {} enters", state.basis()[r], entering);
        let column = state.relative_column(problem, entering);
        state.pivot(r, entering, &column);
    }
}
