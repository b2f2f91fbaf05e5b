//! # Errors in the description of a linear program
//!
//! These errors describe input that can not be turned into a problem that the algorithms accept.
//! They are not used for problems that are infeasible or unbounded.
use std::error::Error;
use std::fmt;

/// An `InputError` is created when a linear program is inconsistently described.
///
/// For example, a relation symbol might not be known, or the dimensions of a matrix and a vector
/// might not match.
#[derive(Debug, Eq, PartialEq)]
pub struct InputError {
    description: String,
}

impl InputError {
    /// Wrap a text in an `InputError`.
    ///
    /// # Arguments
    ///
    /// * `description`: A human-readable text meant for the end user.
    pub fn new(description: impl Into<String>) -> Self {
        Self { description: description.into() }
    }
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "InputError: {}", self.description)
    }
}

impl Error for InputError {}
