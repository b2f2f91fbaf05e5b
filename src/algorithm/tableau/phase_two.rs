//! # Phase two
//!
//! Optimizing a dictionary that is already feasible.
use log::{debug, trace};
use relp_num::{OrderedField, OrderedFieldRef};

use crate::algorithm::{Failure, IterationCounter, Options};
use crate::algorithm::strategy::pivot_rule::PivotRule;
use crate::algorithm::tableau::Dictionary;
use crate::data::linear_program::slack_form::VariableMap;

/// Increases the objective value of a feasible dictionary until it is maximal.
///
/// Every iteration, the pivot rule selects an entering variable with a positive objective
/// coefficient. The leaving variable is the basic variable that limits its increase the most, see
/// `Dictionary::select_leaving`.
///
/// # Arguments
///
/// * `variables`: Names of the variables, used for logging.
/// * `dictionary`: Dictionary with a nonnegative `b`.
/// * `options`: Limits for the computation.
///
/// # Return value
///
/// The optimal dictionary, in which no nonbasic variable has a positive objective coefficient.
///
/// # Errors
///
/// `Failure::Unbounded` if an entering variable can be increased without bound, and
/// `Failure::IterationLimit` if the pivot limit was reached.
pub fn solve<PR, F>(
    variables: &VariableMap,
    dictionary: Dictionary<F>,
    options: &Options,
) -> Result<Dictionary<F>, Failure>
where
    PR: PivotRule,
    F: OrderedField,
    for<'r> &'r F: OrderedFieldRef<F>,
{
    debug_assert!(dictionary.is_feasible());

    let mut rule = PR::new();
    let mut iterations = IterationCounter::new(options);
    let mut dictionary = dictionary;
    loop {
        let Some(entering) = rule.select_entering(&dictionary) else {
            debug!(
                "optimal after {} pivots with value {}",
                iterations.iterations(), dictionary.objective_value(),
            );
            break Ok(dictionary);
        };
        let Some(leaving) = dictionary.select_leaving(entering) else {
            debug!("{} can increase without bound", variables.name(entering));
            break Err(Failure::Unbounded);
        };

        iterations.next()?;
        dictionary = dictionary.pivot(leaving, entering);
        debug!("after pivoting around {} and {}", variables.name(leaving), variables.name(entering));
        trace!("\n{}", dictionary.display(variables));
    }
}
