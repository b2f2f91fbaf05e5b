//! # Slack form
//!
//! Conversion of a linear program with named, nonnegative variables into a dictionary. Every
//! constraint row gets its own auxiliary variable, which is basic in the initial dictionary:
//!
//! * `lhs <= rhs` becomes the row `y = rhs - lhs`,
//! * `lhs >= rhs` becomes the row `y = -rhs + lhs`,
//! * `lhs = rhs` becomes both of the above, with two auxiliary variables.
use std::collections::HashMap;

use log::debug;
use relp_num::{OrderedField, OrderedFieldRef};

use crate::algorithm::tableau::{ARTIFICIAL, Dictionary};
use crate::data::linear_algebra::matrix::Sparse as SparseMatrix;
use crate::data::linear_algebra::vector::SparseVector;
use crate::data::linear_program::elements::{Constraint, ConstraintType, Objective};

/// Name of the objective function, unless a variable already has this name.
pub const OBJECTIVE_NAME: &str = "z";

/// Association between variable names and variable indices.
///
/// Built once together with the slack form and read-only afterwards. Index `0` is the artificial
/// variable, followed by the variables of the program in order of first appearance, followed by
/// one auxiliary variable per constraint row. The objective function has a name but no index.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VariableMap {
    names: Vec<String>,
    indices: HashMap<String, usize>,
    objective_name: String,
    nr_structural: usize,
}

impl VariableMap {
    /// Name of the variable with the given index.
    ///
    /// # Panics
    ///
    /// If there is no variable with that index.
    pub fn name(&self, index: usize) -> &str {
        &self.names[index]
    }

    /// Index of the variable with the given name.
    pub fn index(&self, name: &str) -> Option<usize> {
        self.indices.get(name).copied()
    }

    /// Name of the objective function.
    pub fn objective_name(&self) -> &str {
        &self.objective_name
    }

    /// Number of variables, including the artificial variable.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether there are no variables, which is never the case.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Number of variables appearing in the program.
    pub fn nr_structural(&self) -> usize {
        self.nr_structural
    }

    /// Indices and names of the variables appearing in the program.
    pub fn structural(&self) -> impl Iterator<Item=(usize, &str)> {
        (1..=self.nr_structural).map(move |i| (i, self.names[i].as_str()))
    }
}

/// A linear program in slack form, together with the names of its variables.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SlackForm<F> {
    #[allow(missing_docs)]
    pub variables: VariableMap,
    /// Initial dictionary, with the variables of the program nonbasic and the auxiliary variables
    /// basic. It is not necessarily feasible.
    pub dictionary: Dictionary<F>,
}

impl<F> SlackForm<F>
where
    F: OrderedField,
    for<'r> &'r F: OrderedFieldRef<F>,
{
    /// Convert a linear program into slack form.
    ///
    /// Repeated terms of the same variable within a constraint or the objective are added together.
    ///
    /// # Arguments
    ///
    /// * `constraints`: Constraints, possibly none.
    /// * `objective`: Function to maximize.
    #[must_use]
    pub fn new(constraints: &[Constraint<F>], objective: &Objective<F>) -> Self {
        let mut names = Vec::new();
        let mut indices = HashMap::new();

        // Variables of the program in order of first appearance, starting at index 1
        let mut structural = Vec::new();
        for term in constraints.iter().flat_map(|constraint| &constraint.terms).chain(&objective.terms) {
            if !indices.contains_key(&term.variable) {
                structural.push(term.variable.clone());
                indices.insert(term.variable.clone(), structural.len());
            }
        }
        let nr_structural = structural.len();

        let mut counter = 0;
        let artificial = fresh_name(&mut counter, &indices);
        indices.insert(artificial.clone(), ARTIFICIAL);
        names.push(artificial);
        names.extend(structural);

        let mut basis = Vec::new();
        let mut rows = SparseMatrix::new();
        let mut rhs = SparseVector::new();
        for constraint in constraints {
            let multipliers = match constraint.constraint_type {
                ConstraintType::Less => vec![F::one()],
                ConstraintType::Greater => vec![-F::one()],
                ConstraintType::Equal => vec![F::one(), -F::one()],
            };

            for multiplier in multipliers {
                let name = fresh_name(&mut counter, &indices);
                let index = names.len();
                indices.insert(name.clone(), index);
                names.push(name);
                basis.push(index);

                let mut row = SparseVector::new();
                for term in &constraint.terms {
                    row.shift_value(indices[&term.variable], &(&multiplier * &term.coefficient));
                }
                rows.insert_major(index, row);
                rhs.set(index, &multiplier * &constraint.rhs);
            }
        }

        let mut cost = SparseVector::new();
        for term in &objective.terms {
            cost.shift_value(indices[&term.variable], &term.coefficient);
        }

        let objective_name = if indices.contains_key(OBJECTIVE_NAME) {
            fresh_name(&mut counter, &indices)
        } else {
            OBJECTIVE_NAME.to_string()
        };

        debug!("slack form has {} variables and {} rows", nr_structural, basis.len());

        Self {
            variables: VariableMap { names, indices, objective_name, nr_structural },
            dictionary: Dictionary::new(
                (1..=nr_structural).collect(),
                basis,
                rows,
                rhs,
                cost,
                objective.constant.clone(),
            ),
        }
    }
}

/// The first name `y_<k>` with `k` at least `counter` that is not taken.
fn fresh_name(counter: &mut usize, taken: &HashMap<String, usize>) -> String {
    loop {
        let name = format!("y_{}", counter);
        *counter += 1;
        if !taken.contains_key(&name) {
            break name;
        }
    }
}
