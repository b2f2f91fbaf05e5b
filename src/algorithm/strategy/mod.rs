//! # Strategies
//!
//! Decisions the simplex method leaves open, isolated such that they can be chosen by the caller.
pub mod pivot_rule;
