//! First-class invariants for the bitwise board.
//!
//! Invariants are logical properties that must hold after every move.
//! They are checked in debug builds and can be tested independently.

mod balanced_turns;
mod disjoint_masks;
mod outcome_consistent;

pub use balanced_turns::BalancedTurnsInvariant;
pub use disjoint_masks::DisjointMasksInvariant;
pub use outcome_consistent::OutcomeConsistentInvariant;

use crate::board::BitwiseBoard;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Invariant violation: {description}")]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implementations are provided for 2- and 3-tuples.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn collect<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        collect::<S, I1>(state, &mut violations);
        collect::<S, I2>(state, &mut violations);
        collect::<S, I3>(state, &mut violations);
        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        collect::<S, I1>(state, &mut violations);
        collect::<S, I2>(state, &mut violations);
        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// All board invariants as a composable set.
pub type BoardInvariants = (
    DisjointMasksInvariant,
    BalancedTurnsInvariant,
    OutcomeConsistentInvariant,
);

/// Debug-only check run after every applied move.
///
/// On failure the panic message lists every violation followed by both
/// masks drawn as grids.
pub(crate) fn assert_invariants(board: &BitwiseBoard) {
    if !cfg!(debug_assertions) {
        return;
    }
    if let Err(violations) = BoardInvariants::check_all(board) {
        panic!("{}", violation_report(board, &violations));
    }
}

fn violation_report(board: &BitwiseBoard, violations: &[InvariantViolation]) -> String {
    let descriptions = violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ");
    format!(
        "Board invariants violated: {descriptions}\nX:\n{}\nO:\n{}",
        board.home_mask(),
        board.away_mask()
    )
}
