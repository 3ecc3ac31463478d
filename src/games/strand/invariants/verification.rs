//! Formal verification of invariants using the Kani model checker.
//!
//! These proof harnesses verify properties for ALL possible inputs within
//! small bounds.

#[cfg(kani)]
mod proofs {
    use crate::games::strand::geometry::{is_octilinear, points_between};
    use crate::games::strand::invariants::{Invariant, MonotonicLatticeInvariant};
    use crate::games::strand::types::{Coord, Lattice};
    use crate::games::strand::typestate::{
        ExtendTransition, GameAwaitingSelection, SelectTransition,
    };

    fn any_coord(bound: i32) -> Coord {
        let x: i32 = kani::any();
        let y: i32 = kani::any();
        kani::assume(x >= 0 && x < bound && y >= 0 && y < bound);
        Coord::new(x, y)
    }

    /// Reversing `points_between(a, b)` yields `points_between(b, a)` for
    /// every octilinear pair on a small lattice.
    #[kani::proof]
    #[kani::unwind(6)]
    fn verify_points_between_reversal() {
        let a = any_coord(4);
        let b = any_coord(4);
        kani::assume(is_octilinear(a, b));

        let mut forward = points_between(a, b);
        forward.reverse();
        assert_eq!(forward, points_between(b, a));
    }

    /// A committed point never becomes available again.
    #[kani::proof]
    #[kani::unwind(6)]
    fn verify_commit_is_monotonic() {
        let mut lattice = Lattice::new(4);
        let a = any_coord(4);
        let b = any_coord(4);
        kani::assume(is_octilinear(a, b) && a != b);

        let points = points_between(a, b);
        lattice.commit_segment(&points, false);
        for point in points {
            assert!(!lattice.is_available(point));
        }
    }

    /// One accepted move leaves the game satisfying the monotonicity
    /// invariant.
    #[kani::proof]
    #[kani::unwind(8)]
    fn verify_first_move_invariant() {
        let game = GameAwaitingSelection::new(4);
        let start = any_coord(4);
        let end = any_coord(4);

        let pending = match game.select(start) {
            SelectTransition::Selected(pending) => pending,
            SelectTransition::Rejected { .. } => return,
        };
        if let ExtendTransition::Extended { game, .. } = pending.extend(end) {
            assert!(MonotonicLatticeInvariant::holds(&game));
        }
    }
}
