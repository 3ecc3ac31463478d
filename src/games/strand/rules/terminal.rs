//! Terminal-state detection.
//!
//! The game ends when neither path end can reach any of its eight
//! lattice neighbors.

use super::super::geometry::{self, Compass};
use super::super::types::{Coord, Lattice, PathEnds};
use strum::IntoEnumIterator;
use tracing::instrument;

/// Whether a path end could legally draw a unit segment to `target`.
///
/// The target must be inside the lattice and unoccupied, and a diagonal
/// step must not cross an existing diagonal. A straight step is never
/// diagonal-blocked.
pub fn can_connect(lattice: &Lattice, path_end: Coord, target: Coord) -> bool {
    lattice.is_available(target)
        && !lattice.is_diagonal_blocked(path_end, geometry::direction(path_end, target))
}

/// Whether the path end has no legal continuation among its eight
/// neighbors.
#[instrument(skip(lattice))]
pub fn has_no_moves(lattice: &Lattice, path_end: Coord) -> bool {
    Compass::iter().all(|compass| {
        let (dx, dy) = compass.offset();
        !can_connect(lattice, path_end, path_end.offset(dx, dy))
    })
}

/// Whether the game is over: both current path ends have no moves.
///
/// A move remains possible as long as at least one end can still extend.
/// Before the first committed segment there are no path ends and the game
/// cannot be over.
#[instrument(skip(lattice, path_ends))]
pub fn is_game_over(lattice: &Lattice, path_ends: &PathEnds) -> bool {
    match path_ends.pair() {
        Some((a, b)) => has_no_moves(lattice, a) && has_no_moves(lattice, b),
        None => false,
    }
}
