//! Known hands with known waits, checked before any enumeration

use crate::algorithm::solver::Solver;
use crate::io::error::{Result, SolverError};
use crate::tiles::hand::Hand;

/// Regression hands paired with their exact expected block body
pub const REGRESSION_SET: [(&str, &str); 6] = [
    ("1112224588899", "(111)(222)(888)(99)[45]\n"),
    (
        "1122335556799",
        "(123)(123)(567)(99)[55]\n(123)(123)(555)(99)[67]\n(123)(123)(567)(55)[99]\n",
    ),
    (
        "1112223335559",
        "(111)(222)(333)(555)[9]\n(123)(123)(123)(555)[9]\n",
    ),
    (
        "1223344888999",
        "(234)(234)(888)(999)[1]\n(123)(888)(999)(44)[23]\n(123)(234)(888)(999)[4]\n",
    ),
    (
        "1112345678999",
        concat!(
            "(123)(456)(789)(99)[11]\n(111)(456)(789)(99)[23]\n(111)(345)(678)(999)[2]\n",
            "(345)(678)(999)(11)[12]\n(123)(678)(999)(11)[45]\n(111)(234)(789)(99)[56]\n",
            "(111)(234)(678)(999)[5]\n(123)(456)(999)(11)[78]\n(111)(234)(567)(99)[89]\n",
            "(111)(234)(567)(999)[8]\n(123)(456)(789)(11)[99]\n",
        ),
    ),
    (
        "1113333555666",
        "(333)(555)(666)(11)[13]\n(111)(333)(666)(55)[35]\n",
    ),
];

/// Solve one regression hand and compare against its expected body
///
/// # Errors
///
/// Returns `SelfCheckFailed` if the produced lines differ in content or
/// order, or `InvalidHand` if `hand` is not a waiting hand
pub fn check_case(solver: &mut Solver, hand: &str, expected: &str) -> Result<()> {
    let solution = solver.solve(&Hand::parse(hand)?);
    let actual: String = solution
        .lines()
        .iter()
        .map(|line| format!("{line}\n"))
        .collect();

    if actual == expected {
        Ok(())
    } else {
        Err(SolverError::SelfCheckFailed {
            hand: hand.to_string(),
            expected: expected.to_string(),
            actual,
        })
    }
}

/// Check every regression hand, calling `on_pass` after each success
///
/// # Errors
///
/// Returns the first mismatch as `SelfCheckFailed`
pub fn run_self_check(mut on_pass: impl FnMut(&str)) -> Result<usize> {
    let mut solver = Solver::new();
    for (hand, expected) in REGRESSION_SET {
        check_case(&mut solver, hand, expected)?;
        on_pass(hand);
    }
    Ok(REGRESSION_SET.len())
}
