//! # Solving the same programs with both methods
//!
//! The tableau and revised methods share nothing but the slack form. Their optimal values should
//! agree exactly, and so should the solutions of programs with a unique optimum.
use dictionary_simplex::algorithm::{Failure, Options};
use dictionary_simplex::data::linear_program::elements::{Constraint, ConstraintType, Objective, Term};
use dictionary_simplex::data::linear_program::Program;
use dictionary_simplex::data::linear_program::solution::Solution;
use relp_num::{RationalBig, RB};

/// # Problems and their expected outcomes
#[allow(missing_docs)]
mod test;

type T = RationalBig;

/// Solve with both methods, and check that they agree.
fn solve_both(program: &Program<T>) -> Result<Solution<T>, Failure> {
    let tableau = program.solve(&Options::default());
    let revised = program.solve_revised(&Options::default());
    match (&tableau, &revised) {
        (Ok(left), Ok(right)) => assert_eq!(left.objective_value(), right.objective_value()),
        _ => assert_eq!(tableau, revised),
    }

    tableau
}

/// Shorthand for a constraint with integer coefficients.
fn constraint(terms: &[(i32, &str)], constraint_type: ConstraintType, rhs: i32) -> Constraint<T> {
    Constraint::new(terms_of(terms), constraint_type, RB!(rhs))
}

fn terms_of(terms: &[(i32, &str)]) -> Vec<Term<T>> {
    terms.iter()
        .map(|&(coefficient, variable)| Term::new(RB!(coefficient), variable))
        .collect()
}

fn maximize(terms: &[(i32, &str)]) -> Objective<T> {
    Objective::maximize(RB!(0), terms_of(terms))
}

fn minimize(terms: &[(i32, &str)]) -> Objective<T> {
    Objective::minimize(RB!(0), terms_of(terms))
}
