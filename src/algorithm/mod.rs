//! # Algorithms
//!
//! Two formulations of the simplex method are provided. The `tableau` module rewrites a dictionary
//! in slack form with every pivot, the `revised` module keeps the original constraint matrix and
//! maintains the inverse of the basis matrix instead. Both use exact arithmetic and the same
//! smallest-index selection rules, such that they agree on the optimal value of a problem.
use std::error::Error;
use std::fmt;

pub mod revised;
pub mod strategy;
pub mod tableau;

/// A linear program that has no finite optimum.
///
/// These outcomes are terminal: they are a property of the problem (or of the iteration limit that
/// was set), and retrying the same computation yields the same result.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Failure {
    /// There is an improving direction without a blocking constraint.
    Unbounded,
    /// The auxiliary problem of the first phase has a positive optimal value.
    Infeasible,
    /// The limit set through `Options::iteration_limit` was reached before termination.
    IterationLimit {
        /// Number of pivots done in the phase that was interrupted.
        iterations: usize,
    },
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Failure::Unbounded => f.write_str("problem is unbounded"),
            Failure::Infeasible => f.write_str("problem is infeasible"),
            Failure::IterationLimit { iterations } => {
                write!(f, "iteration limit reached after {} pivots", iterations)
            },
        }
    }
}

impl Error for Failure {}

/// Settings shared by all algorithms.
///
/// The default settings impose no limits.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Options {
    /// Maximum number of pivots per phase.
    ///
    /// Only the smallest-index selection rules of the tableau method and of the primal revised
    /// method are guaranteed not to cycle, and even then the number of pivots can be exponential in
    /// the size of the problem. `LargestCoefficient` and the dual revised method can cycle on
    /// degenerate problems, in which case a solve without a limit doesn't return.
    pub iteration_limit: Option<usize>,
}

impl Options {
    /// Options with a limit on the number of pivots per phase.
    #[must_use]
    pub fn with_iteration_limit(limit: usize) -> Self {
        Self { iteration_limit: Some(limit) }
    }
}

/// Counts pivots against the optional limit.
#[derive(Debug)]
pub(crate) struct IterationCounter {
    iterations: usize,
    limit: Option<usize>,
}

impl IterationCounter {
    pub(crate) fn new(options: &Options) -> Self {
        Self { iterations: 0, limit: options.iteration_limit }
    }

    /// Register a pivot that is about to happen.
    pub(crate) fn next(&mut self) -> Result<(), Failure> {
        match self.limit {
            Some(limit) if self.iterations >= limit => {
                Err(Failure::IterationLimit { iterations: self.iterations })
            },
            _ => {
                self.iterations += 1;
                Ok(())
            },
        }
    }

    pub(crate) fn iterations(&self) -> usize {
        self.iterations
    }
}
