//! # Representation of optimal solutions
//!
//! Once a linear program is solved, the values of the basic variables are translated back to the
//! names used in the program. Variables that are nonbasic at the optimum have value zero.
use relp_num::{OrderedField, OrderedFieldRef};

use crate::data::linear_algebra::vector::SparseVector;
use crate::data::linear_program::slack_form::VariableMap;

/// An optimal solution of a linear program, in terms of the variables of that program.
#[derive(Eq, PartialEq, Clone, Debug)]
pub struct Solution<F> {
    /// Value of the objective function for this solution, including its constant.
    objective_value: F,
    /// (variable name, solution value) tuples for all variables, in order of first appearance.
    solution_values: Vec<(String, F)>,
}

impl<F> Solution<F> {
    /// Create a new `Solution` instance.
    pub fn new(objective_value: F, solution_values: Vec<(String, F)>) -> Self {
        Self { objective_value, solution_values }
    }

    /// Value of the objective function.
    pub fn objective_value(&self) -> &F {
        &self.objective_value
    }

    /// Values of all variables of the program.
    pub fn values(&self) -> &[(String, F)] {
        &self.solution_values
    }

    /// Value of a single variable, if it appears in the program.
    pub fn value(&self, name: &str) -> Option<&F> {
        self.solution_values.iter()
            .find(|(variable, _)| variable == name)
            .map(|(_, value)| value)
    }
}

impl<F> Solution<F>
where
    F: OrderedField,
    for<'r> &'r F: OrderedFieldRef<F>,
{
    /// Collect the values of the program variables from the values of the basic variables.
    ///
    /// # Arguments
    ///
    /// * `variables`: Names of the variables.
    /// * `basic_values`: Value of each basic variable, keyed by variable index. Auxiliary
    /// variables are ignored.
    /// * `objective_value`: Optimal value of the objective function.
    pub fn from_basic_values(
        variables: &VariableMap,
        basic_values: &SparseVector<F>,
        objective_value: F,
    ) -> Self {
        let solution_values = variables.structural()
            .map(|(index, name)| (name.to_string(), basic_values.value(index)))
            .collect();

        Self::new(objective_value, solution_values)
    }
}

#[cfg(test)]
mod test {
    use relp_num::RB;

    use crate::data::linear_algebra::vector::SparseVector;
    use crate::data::linear_program::elements::{Constraint, ConstraintType, Objective, Term};
    use crate::data::linear_program::slack_form::SlackForm;
    use crate::data::linear_program::solution::Solution;

    #[test]
    fn from_basic_values() {
        let constraints = vec![
            Constraint::new(vec![Term::new(RB!(1), "a"), Term::new(RB!(1), "b")], ConstraintType::Less, RB!(1)),
        ];
        let objective = Objective::maximize(RB!(0), vec![Term::new(RB!(1), "a")]);
        let SlackForm { variables, .. } = SlackForm::new(&constraints, &objective);

        // The auxiliary variable of the row is basic with value 5 and doesn't show up
        let values = SparseVector::from_tuples(vec![(2, RB!(1, 2)), (3, RB!(5))]);
        let solution = Solution::from_basic_values(&variables, &values, RB!(3));

        assert_eq!(solution.objective_value(), &RB!(3));
        assert_eq!(solution.values(), &[("a".to_string(), RB!(0)), ("b".to_string(), RB!(1, 2))]);
        assert_eq!(solution.value("b"), Some(&RB!(1, 2)));
        assert_eq!(solution.value("y_1"), None);
    }
}
