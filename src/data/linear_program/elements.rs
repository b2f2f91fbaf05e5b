//! # Building blocks to describe linear programs.
use std::fmt;
use std::ops::Neg;
use std::str::FromStr;

use crate::data::linear_program::error::InputError;

/// A `Constraint` is a type of (in)equality.
#[allow(missing_docs)]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ConstraintType {
    Equal,
    Greater,
    Less,
}

impl ConstraintType {
    /// The symbol used for this relation in the textual format.
    pub fn symbol(self) -> &'static str {
        match self {
            ConstraintType::Equal => "=",
            ConstraintType::Greater => ">=",
            ConstraintType::Less => "<=",
        }
    }
}

impl fmt::Display for ConstraintType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for ConstraintType {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "=" => Ok(ConstraintType::Equal),
            ">=" => Ok(ConstraintType::Greater),
            "<=" => Ok(ConstraintType::Less),
            other => Err(InputError::new(format!("Unknown relation \"{}\"", other))),
        }
    }
}

/// Direction of optimization.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Maximize,
    Minimize,
}

/// A coefficient together with the name of the variable it multiplies.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Term<F> {
    #[allow(missing_docs)]
    pub coefficient: F,
    #[allow(missing_docs)]
    pub variable: String,
}

impl<F> Term<F> {
    /// Create a new term.
    pub fn new(coefficient: F, variable: impl Into<String>) -> Self {
        Self { coefficient, variable: variable.into() }
    }
}

impl<F: Neg<Output=F>> Neg for Term<F> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self { coefficient: -self.coefficient, variable: self.variable }
    }
}

/// A single linear constraint `terms (<=|>=|=) rhs`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Constraint<F> {
    /// Left-hand side, in the order in which the variables were written.
    pub terms: Vec<Term<F>>,
    #[allow(missing_docs)]
    pub constraint_type: ConstraintType,
    /// Right-hand side constant.
    pub rhs: F,
}

impl<F> Constraint<F> {
    /// Create a new constraint.
    pub fn new(terms: Vec<Term<F>>, constraint_type: ConstraintType, rhs: F) -> Self {
        Self { terms, constraint_type, rhs }
    }
}

/// A linear objective function `constant + terms`, to be maximized.
///
/// Objectives that should be minimized are normalized to a maximization at construction.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Objective<F> {
    #[allow(missing_docs)]
    pub constant: F,
    #[allow(missing_docs)]
    pub terms: Vec<Term<F>>,
}

impl<F: Neg<Output=F>> Objective<F> {
    /// Create an objective for the given optimization direction.
    ///
    /// A minimization is negated entirely, such that maximizing the result is equivalent.
    pub fn new(direction: Direction, constant: F, terms: Vec<Term<F>>) -> Self {
        match direction {
            Direction::Maximize => Self { constant, terms },
            Direction::Minimize => Self {
                constant: -constant,
                terms: terms.into_iter().map(Neg::neg).collect(),
            },
        }
    }

    /// Objective to be maximized.
    pub fn maximize(constant: F, terms: Vec<Term<F>>) -> Self {
        Self::new(Direction::Maximize, constant, terms)
    }

    /// Objective to be minimized, stored as the maximization of its negation.
    pub fn minimize(constant: F, terms: Vec<Term<F>>) -> Self {
        Self::new(Direction::Minimize, constant, terms)
    }
}
