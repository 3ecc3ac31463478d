//! Segment legality: the move validator.

use super::super::action::{MoveError, Segment};
use super::super::geometry::{self, points_between};
use super::super::types::{Coord, Lattice, PathEnds};
use tracing::instrument;

/// Judges a proposed segment from `start` to `end`.
///
/// Checks run in order and short-circuit:
/// 1. `end == start` is a zero-length segment.
/// 2. The line must be octilinear.
/// 3. A diagonal line must not cross an existing diagonal; every adjacent
///    pair along the line is probed in the line's direction.
/// 4. Every point except the first must be open. The first point is the
///    chosen path end and is already occupied on every move after the
///    first; out-of-lattice points count as not open.
///
/// On acceptance the returned [`Segment`] carries the full point sequence
/// and the diagonal flag for the caller to commit.
#[instrument(skip(lattice))]
pub fn validate(lattice: &Lattice, start: Coord, end: Coord) -> Result<Segment, MoveError> {
    if end == start {
        return Err(MoveError::EndEqualsStart);
    }
    if !geometry::is_octilinear(start, end) {
        return Err(MoveError::NotOctilinear);
    }

    let points = points_between(start, end);
    let diagonal = geometry::is_diagonal(start, end);

    if diagonal {
        let direction = geometry::direction(start, end);
        for pair in points.windows(2) {
            if lattice.is_diagonal_blocked(pair[0], direction) {
                return Err(MoveError::DiagonalCrossing);
            }
        }
    }

    for &point in &points[1..] {
        if !lattice.is_available(point) {
            return Err(MoveError::PathNotOpen);
        }
    }

    Ok(Segment::new(points, diagonal))
}

/// Judges a proposed start node.
///
/// Before the first committed segment any lattice point may start the
/// path; afterwards only the two current path ends are legal starts.
#[instrument(skip(lattice, path_ends))]
pub fn validate_selection(
    lattice: &Lattice,
    path_ends: &PathEnds,
    node: Coord,
) -> Result<(), MoveError> {
    if !lattice.contains(node) {
        return Err(MoveError::OutsideLattice);
    }
    if path_ends.is_empty() || path_ends.contains(node) {
        Ok(())
    } else {
        Err(MoveError::NotAPathEnd)
    }
}
