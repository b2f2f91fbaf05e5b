//! # An exact linear program solver
//!
//! Linear programs over nonnegative variables are brought into slack form and solved with the
//! simplex method, using exact rational arithmetic throughout. Two formulations are provided: the
//! tableau method, which rewrites a dictionary with every pivot and finds an initial feasible
//! dictionary with an artificial variable, and the revised method, which maintains the inverse of
//! the basis matrix and combines the primal and dual methods.
//!
//! The methods are described in Introduction to Algorithms by Cormen, Leiserson, Rivest and Stein
//! and in Linear Programming by Vašek Chvátal.
#![warn(missing_docs)]

pub mod algorithm;
pub mod data;

#[cfg(test)]
mod tests;
