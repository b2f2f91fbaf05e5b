use dictionary_simplex::algorithm::Failure;
use dictionary_simplex::data::linear_program::elements::ConstraintType::{Equal, Greater, Less};
use dictionary_simplex::data::linear_program::Program;
use relp_num::RB;

use super::{constraint, maximize, minimize, solve_both};

#[test]
fn three_by_three() {
    let program = Program::new(
        vec![
            constraint(&[(2, "a"), (3, "b"), (1, "c")], Less, 5),
            constraint(&[(4, "a"), (1, "b"), (2, "c")], Less, 11),
            constraint(&[(3, "a"), (4, "b"), (2, "c")], Less, 8),
        ],
        maximize(&[(5, "a"), (4, "b"), (3, "c")]),
    );

    let solution = solve_both(&program).unwrap();
    assert_eq!(solution.objective_value(), &RB!(13));
    assert_eq!(solution.value("a"), Some(&RB!(2)));
    assert_eq!(solution.value("b"), Some(&RB!(0)));
    assert_eq!(solution.value("c"), Some(&RB!(1)));
    assert_eq!(program.solve_revised(&Default::default()), Ok(solution));
}

#[test]
fn dual_feasible_start() {
    let program = Program::new(
        vec![
            constraint(&[(1, "p"), (-1, "q")], Greater, 1),
            constraint(&[(2, "p"), (-1, "q")], Greater, 3),
            constraint(&[(1, "q")], Greater, 5),
        ],
        minimize(&[(4, "p"), (3, "q")]),
    );

    let solution = solve_both(&program).unwrap();
    assert_eq!(solution.objective_value(), &RB!(-39));
    assert_eq!(solution.value("p"), Some(&RB!(6)));
    assert_eq!(solution.value("q"), Some(&RB!(5)));
}

#[test]
fn neither_feasible_start() {
    let program = Program::new(
        vec![
            constraint(&[(1, "p"), (1, "q"), (1, "r")], Greater, 2),
            constraint(&[(1, "p"), (-1, "q"), (1, "r")], Less, 1),
        ],
        minimize(&[(-2, "p"), (6, "q")]),
    );

    let solution = solve_both(&program).unwrap();
    assert_eq!(solution.objective_value(), &RB!(0));
    assert_eq!(solution.value("p"), Some(&RB!(3, 2)));
    assert_eq!(solution.value("q"), Some(&RB!(1, 2)));
    assert_eq!(solution.value("r"), Some(&RB!(0)));
    assert_eq!(program.solve_revised(&Default::default()), Ok(solution));
}

#[test]
fn unbounded() {
    let program = Program::new(
        vec![
            constraint(&[(-2, "p"), (3, "q")], Less, 5),
            constraint(&[(4, "q")], Less, 7),
            constraint(&[(-1, "q")], Less, 0),
        ],
        minimize(&[(-1, "p"), (1, "q")]),
    );

    assert_eq!(solve_both(&program), Err(Failure::Unbounded));
}

#[test]
fn dependent_equalities() {
    let program = Program::new(
        vec![
            constraint(&[(1, "x"), (1, "y")], Equal, 2),
            constraint(&[(2, "x"), (2, "y")], Equal, 4),
        ],
        maximize(&[(1, "x")]),
    );

    let solution = solve_both(&program).unwrap();
    assert_eq!(solution.objective_value(), &RB!(2));
    assert_eq!(solution.value("x"), Some(&RB!(2)));
    assert_eq!(solution.value("y"), Some(&RB!(0)));
}

#[test]
fn minimize_with_lower_bound() {
    let program = Program::new(
        vec![
            constraint(&[(1, "x"), (1, "y")], Greater, 3),
            constraint(&[(1, "x")], Less, 2),
        ],
        minimize(&[(1, "x"), (2, "y")]),
    );

    let solution = solve_both(&program).unwrap();
    assert_eq!(solution.objective_value(), &RB!(-4));
    assert_eq!(solution.value("x"), Some(&RB!(2)));
    assert_eq!(solution.value("y"), Some(&RB!(1)));
}

#[test]
fn infeasible() {
    let program = Program::new(
        vec![
            constraint(&[(1, "x"), (1, "y")], Less, 1),
            constraint(&[(1, "x"), (-1, "y")], Equal, 3),
        ],
        maximize(&[(1, "y")]),
    );

    assert_eq!(solve_both(&program), Err(Failure::Infeasible));
}

/// Beale's example, scaled to integers. Every pivot from the origin is degenerate at first.
#[test]
fn degenerate() {
    let program = Program::new(
        vec![
            constraint(&[(1, "x4"), (-32, "x5"), (-4, "x6"), (36, "x7")], Less, 0),
            constraint(&[(1, "x4"), (-24, "x5"), (-1, "x6"), (6, "x7")], Less, 0),
            constraint(&[(1, "x6")], Less, 1),
        ],
        maximize(&[(3, "x4"), (-80, "x5"), (2, "x6"), (-24, "x7")]),
    );

    let solution = solve_both(&program).unwrap();
    assert_eq!(solution.objective_value(), &RB!(5));
}

#[test]
fn no_constraints() {
    let bounded = Program::new(vec![], maximize(&[(-1, "x")]));
    assert_eq!(solve_both(&bounded).map(|solution| solution.objective_value().clone()), Ok(RB!(0)));

    let unbounded = Program::new(vec![], maximize(&[(1, "x")]));
    assert_eq!(solve_both(&unbounded), Err(Failure::Unbounded));
}
