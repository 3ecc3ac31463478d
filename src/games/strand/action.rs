//! First-class move types for the strand game.
//!
//! A committed move is a domain event, not a side effect: the validator
//! produces a [`Segment`] that the state machine commits and records in
//! history, and every rejection is a [`MoveError`] value returned to the
//! caller.

use super::types::Coord;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One committed octilinear segment: the ordered lattice points from the
/// chosen path end to the new endpoint, inclusive, plus whether the line
/// is a 45° diagonal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Segment {
    points: Vec<Coord>,
    diagonal: bool,
}

impl Segment {
    /// Creates a segment from validated points. Only the move validator
    /// constructs segments, so `points` always holds at least two entries.
    pub(crate) fn new(points: Vec<Coord>, diagonal: bool) -> Self {
        Self { points, diagonal }
    }

    /// The ordered points of the segment, start first.
    pub fn points(&self) -> &[Coord] {
        &self.points
    }

    /// The path end the segment was drawn from.
    pub fn start(&self) -> Coord {
        self.points
            .first()
            .copied()
            .expect("segment holds at least two points")
    }

    /// The new path end the segment was drawn to.
    pub fn end(&self) -> Coord {
        self.points
            .last()
            .copied()
            .expect("segment holds at least two points")
    }

    /// Whether the segment runs at 45°.
    pub fn is_diagonal(&self) -> bool {
        self.diagonal
    }
}

impl std::fmt::Display for Segment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.start(), self.end())
    }
}

/// Reason a selection or extension was turned down.
///
/// Every rejection is an expected, recoverable outcome returned to the
/// caller; none of them end or corrupt the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema, derive_more::Display,
)]
pub enum MoveError {
    /// The selected start is not one of the two current path ends.
    #[display("must start on a current path end")]
    NotAPathEnd,

    /// The activated node lies outside the lattice.
    #[display("node is outside the lattice")]
    OutsideLattice,

    /// A zero-length segment was proposed.
    #[display("end equals start")]
    EndEqualsStart,

    /// The proposed line is neither axis-aligned nor at 45°.
    #[display("line is not octilinear")]
    NotOctilinear,

    /// The proposed diagonal would cross an existing diagonal segment.
    #[display("line crosses an existing diagonal")]
    DiagonalCrossing,

    /// A point on the proposed line is already occupied.
    #[display("path is not open")]
    PathNotOpen,
}

impl std::error::Error for MoveError {}
