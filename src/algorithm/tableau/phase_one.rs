//! # Phase one
//!
//! Finding a feasible dictionary. When the slack form has a negative right-hand side, an
//! artificial variable `x_0` is subtracted from every row and the auxiliary problem of maximizing
//! `-x_0` is solved. The original problem is feasible if and only if that maximum is zero.
use log::{debug, trace};
use relp_num::{OrderedField, OrderedFieldRef};

use crate::algorithm::{Failure, Options};
use crate::algorithm::strategy::pivot_rule::PivotRule;
use crate::algorithm::tableau::{ARTIFICIAL, Dictionary, solve};
use crate::data::linear_algebra::vector::SparseVector;
use crate::data::linear_program::slack_form::VariableMap;

/// Bring a dictionary into a feasible state.
///
/// A dictionary that is already feasible is returned unchanged.
///
/// # Arguments
///
/// * `variables`: Names of the variables, used for logging.
/// * `dictionary`: Dictionary as created from the slack form.
/// * `options`: Limits for the computation, applied to the auxiliary problem.
///
/// # Return value
///
/// A dictionary with the same solutions and objective function, in which all basic variables are
/// nonnegative. The artificial variable does not appear in it.
///
/// # Errors
///
/// `Failure::Infeasible` if the problem has no feasible solution, and `Failure::IterationLimit` if
/// the pivot limit was reached while solving the auxiliary problem.
pub fn initialize<PR, F>(
    variables: &VariableMap,
    dictionary: Dictionary<F>,
    options: &Options,
) -> Result<Dictionary<F>, Failure>
where
    PR: PivotRule,
    F: OrderedField,
    for<'r> &'r F: OrderedFieldRef<F>,
{
    let Some(leaving) = dictionary.most_infeasible_row() else {
        return Ok(dictionary);
    };

    let original_cost = dictionary.cost().clone();
    let original_objective_value = dictionary.objective_value().clone();

    // Entering the artificial variable at the most negative row makes all rows nonnegative
    let auxiliary = dictionary
        .with_artificial()
        .with_objective(SparseVector::from_tuples(vec![(ARTIFICIAL, -F::one())]), F::zero())
        .pivot(leaving, ARTIFICIAL);
    debug!("basic solution is infeasible, solving the auxiliary problem");
    trace!("\n{}", auxiliary.display(variables));

    let auxiliary = solve::<PR, _>(variables, auxiliary, options)?;
    if auxiliary.rhs().get(ARTIFICIAL).is_some_and(|value| value.is_positive()) {
        debug!("auxiliary problem has optimal value {}", auxiliary.objective_value());
        return Err(Failure::Infeasible);
    }

    let auxiliary = if auxiliary.is_basic(ARTIFICIAL) {
        evict_artificial(variables, auxiliary)
    } else {
        auxiliary
    };

    let feasible = auxiliary.without_artificial();
    let (cost, objective_value) = restore_objective(&feasible, &original_cost, original_objective_value);
    let dictionary = feasible.with_objective(cost, objective_value);
    debug!("found a feasible dictionary");
    trace!("\n{}", dictionary.display(variables));

    Ok(dictionary)
}

/// Move the artificial variable, which has value zero, out of the basis.
///
/// Any nonbasic variable with a nonzero coefficient in the artificial row can take its place in a
/// degenerate pivot. If there is none, the row is redundant and it is removed.
///
/// With the smallest-index leaving rule, `solve` never leaves the artificial variable basic: once
/// its row is a minimizer of the ratio test, index `0` wins the tie. Other leaving rules can.
fn evict_artificial<F>(variables: &VariableMap, dictionary: Dictionary<F>) -> Dictionary<F>
where
    F: OrderedField,
    for<'r> &'r F: OrderedFieldRef<F>,
{
    debug_assert!(dictionary.rhs().get(ARTIFICIAL).is_none());

    let entering = dictionary.non_basis().iter().copied()
        .find(|&j| dictionary.constraints().get(ARTIFICIAL, j).is_some());

    match entering {
        Some(entering) => {
            debug!("degenerate pivot around {} and {}", variables.name(ARTIFICIAL), variables.name(entering));
            dictionary.pivot(ARTIFICIAL, entering)
        },
        None => {
            debug!("row of {} is redundant", variables.name(ARTIFICIAL));
            dictionary.without_empty_row(ARTIFICIAL)
        },
    }
}

/// Express the original objective function in terms of the current nonbasic variables.
///
/// Basic variables that had a cost are substituted by their row.
fn restore_objective<F>(
    dictionary: &Dictionary<F>,
    original_cost: &SparseVector<F>,
    original_objective_value: F,
) -> (SparseVector<F>, F)
where
    F: OrderedField,
    for<'r> &'r F: OrderedFieldRef<F>,
{
    let mut cost = SparseVector::new();
    let mut objective_value = original_objective_value;

    for (i, value) in original_cost.iter() {
        if dictionary.is_non_basic(*i) {
            cost.shift_value(*i, value);
        } else if dictionary.is_basic(*i) {
            objective_value += value * &dictionary.rhs().value(*i);
            if let Some(row) = dictionary.constraints().row(*i) {
                cost.add_multiple_of(&-value, row);
            }
        }
    }

    (cost, objective_value)
}

#[cfg(test)]
mod test {
    use relp_num::{RationalBig, RB};

    use crate::algorithm::tableau::Dictionary;
    use crate::algorithm::tableau::phase_one::evict_artificial;
    use crate::data::linear_algebra::matrix::Sparse;
    use crate::data::linear_algebra::vector::SparseVector;
    use crate::data::linear_program::elements::{Constraint, ConstraintType, Objective, Term};
    use crate::data::linear_program::slack_form::{SlackForm, VariableMap};

    /// Names for `x_0`, `x`, `y` and two auxiliary variables.
    fn variables() -> VariableMap {
        let constraints = vec![
            Constraint::new(vec![Term::new(RB!(1), "x")], ConstraintType::Less, RB!(1)),
            Constraint::new(vec![Term::new(RB!(1), "y")], ConstraintType::Less, RB!(1)),
        ];
        let objective = Objective::maximize(RB!(0), vec![Term::new(RB!(1), "x")]);

        SlackForm::<RationalBig>::new(&constraints, &objective).variables
    }

    #[test]
    fn degenerate_pivot() {
        let auxiliary = Dictionary::new(
            vec![1, 3, 4],
            vec![0, 2],
            Sparse::from_major(vec![
                (0, SparseVector::from_tuples(vec![(3, RB!(1)), (4, RB!(-1))])),
                (2, SparseVector::from_tuples(vec![(1, RB!(1)), (3, RB!(1))])),
            ]),
            SparseVector::from_tuples(vec![(2, RB!(2))]),
            SparseVector::new(),
            RB!(0),
        );

        let result = evict_artificial(&variables(), auxiliary);
        let expected = Dictionary::new(
            vec![1, 0, 4],
            vec![3, 2],
            Sparse::from_major(vec![
                (2, SparseVector::from_tuples(vec![(0, RB!(-1)), (1, RB!(1)), (4, RB!(1))])),
                (3, SparseVector::from_tuples(vec![(0, RB!(1)), (4, RB!(-1))])),
            ]),
            SparseVector::from_tuples(vec![(2, RB!(2))]),
            SparseVector::new(),
            RB!(0),
        );
        assert_eq!(result, expected);
        assert!(!result.is_basic(0));
    }

    #[test]
    fn redundant_row() {
        let auxiliary = Dictionary::new(
            vec![1, 3],
            vec![0, 2],
            Sparse::from_major(vec![
                (2, SparseVector::from_tuples(vec![(1, RB!(1)), (3, RB!(1))])),
            ]),
            SparseVector::from_tuples(vec![(2, RB!(2))]),
            SparseVector::new(),
            RB!(0),
        );

        let result = evict_artificial(&variables(), auxiliary);
        let expected = Dictionary::new(
            vec![1, 3],
            vec![2],
            Sparse::from_major(vec![
                (2, SparseVector::from_tuples(vec![(1, RB!(1)), (3, RB!(1))])),
            ]),
            SparseVector::from_tuples(vec![(2, RB!(2))]),
            SparseVector::new(),
            RB!(0),
        );
        assert_eq!(result, expected);
        assert_eq!(result.without_artificial().basis(), &[2]);
    }
}
