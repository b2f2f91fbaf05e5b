use relp_num::{RationalBig, RB, Signed};

use crate::algorithm::{Failure, Options};
use crate::algorithm::strategy::pivot_rule::{FirstProfitable, LargestCoefficient, PivotRule};
use crate::algorithm::tableau::{Dictionary, initialize, simplex, solve};
use crate::data::linear_algebra::matrix::Sparse;
use crate::data::linear_algebra::vector::SparseVector;
use crate::data::linear_program::elements::{Constraint, ConstraintType, Objective, Term};
use crate::data::linear_program::slack_form::SlackForm;

/// `max 3x + 2y` s.t. `x + y <= 4`, `x + 3y <= 6`.
fn two_rows() -> SlackForm<RationalBig> {
    let constraints = vec![
        Constraint::new(vec![Term::new(RB!(1), "x"), Term::new(RB!(1), "y")], ConstraintType::Less, RB!(4)),
        Constraint::new(vec![Term::new(RB!(1), "x"), Term::new(RB!(3), "y")], ConstraintType::Less, RB!(6)),
    ];
    let objective = Objective::maximize(RB!(0), vec![Term::new(RB!(3), "x"), Term::new(RB!(2), "y")]);

    SlackForm::new(&constraints, &objective)
}

/// `max x + y` s.t. `x - y = 3`, `x + y >= 5`, `x <= 6`.
fn needs_phase_one() -> SlackForm<RationalBig> {
    let constraints = vec![
        Constraint::new(vec![Term::new(RB!(1), "x"), Term::new(RB!(-1), "y")], ConstraintType::Equal, RB!(3)),
        Constraint::new(vec![Term::new(RB!(1), "x"), Term::new(RB!(1), "y")], ConstraintType::Greater, RB!(5)),
        Constraint::new(vec![Term::new(RB!(1), "x")], ConstraintType::Less, RB!(6)),
    ];
    let objective = Objective::maximize(RB!(0), vec![Term::new(RB!(1), "x"), Term::new(RB!(1), "y")]);

    SlackForm::new(&constraints, &objective)
}

/// Whether the basic solution of `current` satisfies the rows and objective of `original`.
fn satisfies(original: &Dictionary<RationalBig>, current: &Dictionary<RationalBig>) -> bool {
    let value = |j: usize| current.rhs().value(j);

    let rows = original.basis().iter().all(|&i| {
        let mut total = value(i);
        if let Some(row) = original.constraints().row(i) {
            for (j, coefficient) in row.iter() {
                total += coefficient * &value(*j);
            }
        }
        total == original.rhs().value(i)
    });

    let mut objective = original.objective_value().clone();
    for (j, coefficient) in original.cost().iter() {
        objective += coefficient * &value(*j);
    }

    rows && &objective == current.objective_value()
}

#[test]
fn pivot() {
    let SlackForm { dictionary, .. } = two_rows();
    let pivoted = dictionary.pivot(3, 1);

    let expected = Dictionary::new(
        vec![3, 2],
        vec![1, 4],
        Sparse::from_major(vec![
            (1, SparseVector::from_tuples(vec![(2, RB!(1)), (3, RB!(1))])),
            (4, SparseVector::from_tuples(vec![(2, RB!(2)), (3, RB!(-1))])),
        ]),
        SparseVector::from_tuples(vec![(1, RB!(4)), (4, RB!(2))]),
        SparseVector::from_tuples(vec![(2, RB!(-1)), (3, RB!(-3))]),
        RB!(12),
    );
    assert_eq!(pivoted, expected);
    assert!(pivoted.is_optimal());
}

#[test]
fn pivot_round_trip() {
    let SlackForm { dictionary, .. } = two_rows();
    assert_eq!(dictionary.pivot(3, 1).pivot(1, 3), dictionary);
    assert_eq!(dictionary.pivot(4, 2).pivot(2, 4), dictionary);

    let SlackForm { dictionary, .. } = needs_phase_one();
    let there = dictionary.pivot(5, 2);
    assert_eq!(there.pivot(2, 5), dictionary);
}

#[test]
fn pivots_keep_solutions() {
    let SlackForm { dictionary: original, .. } = two_rows();

    let mut dictionary = original.clone();
    let mut rule = LargestCoefficient::new();
    while let Some(entering) = rule.select_entering(&dictionary) {
        let leaving = dictionary.select_leaving(entering).unwrap();
        dictionary = dictionary.pivot(leaving, entering);
        assert!(satisfies(&original, &dictionary));
        assert!(dictionary.is_feasible());
    }
    assert_eq!(dictionary.objective_value(), &RB!(12));
}

#[test]
fn initialize_keeps_solutions() {
    let SlackForm { variables, dictionary: original } = needs_phase_one();
    assert!(!original.is_feasible());

    let feasible = initialize::<FirstProfitable, _>(&variables, original.clone(), &Options::default()).unwrap();
    assert!(feasible.is_feasible());
    assert!(!feasible.is_basic(0) && !feasible.is_non_basic(0));
    assert!(satisfies(&original, &feasible));
}

#[test]
fn initialize_feasible_is_identity() {
    let SlackForm { variables, dictionary } = two_rows();
    assert!(dictionary.is_feasible());

    let result = initialize::<FirstProfitable, _>(&variables, dictionary.clone(), &Options::default());
    assert_eq!(result, Ok(dictionary));
}

#[test]
fn solve_is_optimal() {
    let SlackForm { variables, dictionary } = needs_phase_one();
    let dictionary = initialize::<FirstProfitable, _>(&variables, dictionary, &Options::default()).unwrap();
    let dictionary = solve::<FirstProfitable, _>(&variables, dictionary, &Options::default()).unwrap();

    assert!(dictionary.is_optimal());
    assert!(dictionary.cost().iter().all(|(_, value)| !value.is_positive()));
    assert_eq!(dictionary.objective_value(), &RB!(9));
    assert_eq!(dictionary.rhs().value(1), RB!(6));
    assert_eq!(dictionary.rhs().value(2), RB!(3));
}

#[test]
fn rules_agree_on_value() {
    let SlackForm { variables, dictionary } = needs_phase_one();
    let first = simplex::<FirstProfitable, _>(&variables, dictionary.clone(), &Options::default());
    let largest = simplex::<LargestCoefficient, _>(&variables, dictionary, &Options::default());

    assert_eq!(first.map(|(_, value)| value), Ok(RB!(9)));
    assert_eq!(largest.map(|(_, value)| value), Ok(RB!(9)));
}

#[test]
fn select_leaving() {
    let SlackForm { dictionary, .. } = two_rows();
    // Ratios 4 / 1 and 6 / 3
    assert_eq!(dictionary.select_leaving(1), Some(3));
    assert_eq!(dictionary.select_leaving(2), Some(4));
    assert_eq!(dictionary.most_infeasible_row(), None);

    let SlackForm { dictionary, .. } = needs_phase_one();
    // Rows are x - y <= 3, -x + y <= -3, -x - y <= -5, x <= 6
    assert_eq!(dictionary.most_infeasible_row(), Some(5));
}

#[test]
fn iteration_limit() {
    let SlackForm { variables, dictionary } = two_rows();
    let result = simplex::<FirstProfitable, _>(&variables, dictionary, &Options::with_iteration_limit(0));

    assert_eq!(result, Err(Failure::IterationLimit { iterations: 0 }));
}

/// Beale's example: `max 3/4 x4 - 20 x5 + 1/2 x6 - 6 x7` with every basic solution but the last
/// one degenerate.
fn beale() -> SlackForm<RationalBig> {
    let constraints = vec![
        Constraint::new(
            vec![Term::new(RB!(1, 4), "x4"), Term::new(RB!(-8), "x5"), Term::new(RB!(-1), "x6"), Term::new(RB!(9), "x7")],
            ConstraintType::Less,
            RB!(0),
        ),
        Constraint::new(
            vec![Term::new(RB!(1, 2), "x4"), Term::new(RB!(-12), "x5"), Term::new(RB!(-1, 2), "x6"), Term::new(RB!(3), "x7")],
            ConstraintType::Less,
            RB!(0),
        ),
        Constraint::new(vec![Term::new(RB!(1), "x6")], ConstraintType::Less, RB!(1)),
    ];
    let objective = Objective::maximize(
        RB!(0),
        vec![Term::new(RB!(3, 4), "x4"), Term::new(RB!(-20), "x5"), Term::new(RB!(1, 2), "x6"), Term::new(RB!(-6), "x7")],
    );

    SlackForm::new(&constraints, &objective)
}

#[test]
fn largest_coefficient_cycles() {
    let SlackForm { variables, dictionary } = beale();

    let result = simplex::<FirstProfitable, _>(&variables, dictionary.clone(), &Options::default());
    assert_eq!(result.map(|(_, value)| value), Ok(RB!(5, 4)));

    let options = Options::with_iteration_limit(100);
    let result = simplex::<LargestCoefficient, _>(&variables, dictionary, &options);
    assert_eq!(result, Err(Failure::IterationLimit { iterations: 100 }));
}

#[test]
fn display() {
    let SlackForm { variables, dictionary } = two_rows();
    let text = dictionary.display(&variables).to_string();
    let lines = text.lines().collect::<Vec<_>>();

    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("z   = "));
    assert!(lines[0].contains(" x + ") && lines[0].ends_with(" y"));
    assert!(lines[1].starts_with("y_1 = "));
    assert!(lines[2].starts_with("y_2 = "));
    assert!(lines[2].contains(" x - ") && lines[2].ends_with(" y"));
}
