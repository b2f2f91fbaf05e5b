//! # Pivot rules
//!
//! Strategies for choosing the variable that enters the basis in the tableau method.
//!
//! Once the entering variable has been selected, the leaving variable is found with the minimum
//! ratio test, ties broken by the smallest index. That decision is made independent of the
//! strategy.
use relp_num::{OrderedField, OrderedFieldRef};

use crate::algorithm::tableau::Dictionary;

/// Deciding how to pivot.
///
/// During the simplex method, one needs to decide how to move from dictionary to dictionary. The
/// pivot rule describes that behavior.
pub trait PivotRule {
    /// Create a new instance.
    fn new() -> Self;

    /// Select a nonbasic variable with a positive objective coefficient.
    ///
    /// # Return value
    ///
    /// `None` if there is no such variable, that is, the dictionary is optimal.
    fn select_entering<F>(&mut self, dictionary: &Dictionary<F>) -> Option<usize>
    where
        F: OrderedField,
        for<'r> &'r F: OrderedFieldRef<F>,
    ;
}

/// Pivot on the nonbasic variable with the smallest index that has a positive cost.
///
/// Together with the smallest index tie break of the ratio test, this selects the same pivots on
/// every run, and it determines which optimal vertex is reported when there are several.
pub struct FirstProfitable;
impl PivotRule for FirstProfitable {
    fn new() -> Self {
        Self
    }

    fn select_entering<F>(&mut self, dictionary: &Dictionary<F>) -> Option<usize>
    where
        F: OrderedField,
        for<'r> &'r F: OrderedFieldRef<F>,
    {
        // The cost vector is sorted by index
        dictionary.cost().iter()
            .filter(|(j, cost)| cost.is_positive() && dictionary.is_non_basic(*j))
            .map(|&(j, _)| j)
            .next()
    }
}

/// Dantzig's rule: pivot on the variable with the largest cost.
///
/// Ties are broken by the smallest index.
///
/// # Cycling
///
/// On degenerate problems this rule can revisit the same sequence of bases forever, Beale's example
/// being the classic case. Set `Options::iteration_limit` when using it, or use `FirstProfitable`.
pub struct LargestCoefficient;
impl PivotRule for LargestCoefficient {
    fn new() -> Self {
        Self
    }

    fn select_entering<F>(&mut self, dictionary: &Dictionary<F>) -> Option<usize>
    where
        F: OrderedField,
        for<'r> &'r F: OrderedFieldRef<F>,
    {
        let mut largest: Option<(usize, &F)> = None;
        for (j, cost) in dictionary.cost().iter() {
            if cost.is_positive()
                && dictionary.is_non_basic(*j)
                && largest.map_or(true, |(_, existing)| cost > existing) {
                largest = Some((*j, cost));
            }
        }

        largest.map(|(j, _)| j)
    }
}
