//! # Representing linear programs
//!
//! A linear program is a set of constraints over named, nonnegative variables together with an
//! objective function to maximize. Before it can be solved, it is brought into slack form.
use relp_num::{OrderedField, OrderedFieldRef};

use crate::algorithm::{Failure, Options, revised, tableau};
use crate::algorithm::strategy::pivot_rule::FirstProfitable;
use crate::data::linear_program::elements::{Constraint, Objective};
use crate::data::linear_program::slack_form::SlackForm;
use crate::data::linear_program::solution::Solution;

pub mod elements;
pub mod error;
pub mod slack_form;
pub mod solution;

/// A linear program over nonnegative variables.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Program<F> {
    /// Constraints, in the order in which they were given.
    pub constraints: Vec<Constraint<F>>,
    /// Objective function, in maximization form.
    pub objective: Objective<F>,
}

impl<F> Program<F>
where
    F: OrderedField,
    for<'r> &'r F: OrderedFieldRef<F>,
{
    /// Create a new linear program.
    #[must_use]
    pub fn new(constraints: Vec<Constraint<F>>, objective: Objective<F>) -> Self {
        Self { constraints, objective }
    }

    /// Convert to slack form.
    #[must_use]
    pub fn slack_form(&self) -> SlackForm<F> {
        SlackForm::new(&self.constraints, &self.objective)
    }

    /// Solve with the tableau method.
    ///
    /// # Errors
    ///
    /// When the program is infeasible or unbounded, or when the iteration limit was reached.
    pub fn solve(&self, options: &Options) -> Result<Solution<F>, Failure> {
        let SlackForm { variables, dictionary } = self.slack_form();
        let (values, objective_value) = tableau::simplex::<FirstProfitable, _>(
            &variables, dictionary, options,
        )?;

        Ok(Solution::from_basic_values(&variables, &values, objective_value))
    }

    /// Solve with the revised method, starting from the same dictionary as `solve`.
    ///
    /// # Errors
    ///
    /// When the program is infeasible or unbounded, or when the iteration limit was reached.
    pub fn solve_revised(&self, options: &Options) -> Result<Solution<F>, Failure> {
        let SlackForm { variables, dictionary } = self.slack_form();
        let (values, objective_value) = revised::simplex(&dictionary, options)?;

        Ok(Solution::from_basic_values(&variables, &values, objective_value))
    }
}
