//! The strand game: two players jointly extend one octilinear path on a
//! fixed square lattice until neither end can continue.

mod action;
mod geometry;
mod invariants;
mod rules;
mod types;
mod typestate;
mod wrapper;

pub use action::{MoveError, Segment};
pub use geometry::{Compass, LineDirection, direction, is_diagonal, is_octilinear, points_between};
pub use invariants::{
    BlockedDiagonalInvariant, Invariant, InvariantSet, InvariantViolation,
    MonotonicLatticeInvariant, PathEndsInvariant, StrandInvariants,
};
pub use rules::{can_connect, has_no_moves, is_game_over, validate, validate_selection};
pub use types::{Coord, DEFAULT_GRID_SIZE, Lattice, PathEnds, Player, Point};
pub use typestate::{
    ExtendTransition, GameAwaitingExtension, GameAwaitingSelection, GameComplete, SelectTransition,
};
pub use wrapper::{AnyGame, NodeOutcome};
