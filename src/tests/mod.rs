//! # Tests that follow a linear program through the whole crate.
//!
//! Convention for function names:
//!
//! * `fn program()`
//! * `fn slack_form()`
//! * `fn optimal_dictionary()`
//! * `fn solution()`
