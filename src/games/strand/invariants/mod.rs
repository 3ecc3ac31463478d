//! First-class invariants for the strand game.
//!
//! Invariants are logical properties that must hold throughout game
//! execution. They are testable independently and serve as documentation
//! of system guarantees.

#[cfg(kani)]
mod verification;

use super::typestate::GameAwaitingSelection;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
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
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

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

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

pub mod blocked_diagonals;
pub mod monotonic_lattice;
pub mod path_ends;

pub use blocked_diagonals::BlockedDiagonalInvariant;
pub use monotonic_lattice::MonotonicLatticeInvariant;
pub use path_ends::PathEndsInvariant;

/// All strand invariants as a composable set.
pub type StrandInvariants = (
    MonotonicLatticeInvariant,
    BlockedDiagonalInvariant,
    PathEndsInvariant,
);

/// Asserts that all game invariants hold (panic on violation in debug
/// builds).
pub(crate) fn assert_invariants(game: &GameAwaitingSelection) {
    debug_assert!(
        MonotonicLatticeInvariant::holds(game),
        "Lattice monotonicity violated"
    );
    debug_assert!(
        BlockedDiagonalInvariant::holds(game),
        "Blocked-diagonal consistency violated"
    );
    debug_assert!(PathEndsInvariant::holds(game), "Path-end consistency violated");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::strand::types::{Coord, DEFAULT_GRID_SIZE};
    use crate::games::strand::typestate::{ExtendTransition, SelectTransition};

    fn played(moves: &[(Coord, Coord)]) -> GameAwaitingSelection {
        let mut game = GameAwaitingSelection::new(DEFAULT_GRID_SIZE);
        for &(start, end) in moves {
            let pending = match game.select(start) {
                SelectTransition::Selected(g) => g,
                SelectTransition::Rejected { .. } => panic!("selection {start} rejected"),
            };
            game = match pending.extend(end) {
                ExtendTransition::Extended { game, .. } => game,
                other => panic!("extension to {end} did not continue: {other:?}"),
            };
        }
        game
    }

    #[test]
    fn test_invariant_set_holds_for_fresh_game() {
        let game = GameAwaitingSelection::new(DEFAULT_GRID_SIZE);
        assert!(StrandInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let game = played(&[
            (Coord::new(0, 0), Coord::new(0, 3)),
            (Coord::new(0, 3), Coord::new(3, 3)),
            (Coord::new(0, 0), Coord::new(2, 2)),
        ]);
        assert!(StrandInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_two_invariants_as_set() {
        let game = GameAwaitingSelection::new(DEFAULT_GRID_SIZE);

        type TwoInvariants = (MonotonicLatticeInvariant, PathEndsInvariant);
        assert!(TwoInvariants::check_all(&game).is_ok());
    }
}
