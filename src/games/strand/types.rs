//! Core domain types for the strand game.

use super::geometry::LineDirection;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Side length of the standard lattice. The board size is an engine
/// constant, not a runtime setting.
pub const DEFAULT_GRID_SIZE: usize = 4;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Player {
    /// Player 1 (moves first).
    One,
    /// Player 2 (moves second).
    Two,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Returns the player number (1 or 2) for display by a host.
    pub fn number(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }
}

/// A lattice coordinate.
///
/// Coordinates are plain integer pairs with structural equality and
/// hashing. Screen orientation: x grows east, y grows south.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    JsonSchema,
    derive_more::From,
)]
pub struct Coord {
    /// Column, 0-based from the west edge.
    pub x: i32,
    /// Row, 0-based from the north edge.
    pub y: i32,
}

impl Coord {
    /// Creates a coordinate.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the coordinate displaced by the given offsets.
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// One lattice point.
///
/// A point is available until some committed segment passes through it;
/// availability never returns. `blocked_diagonals` records the diagonal
/// neighbors this point may no longer connect to because an existing
/// diagonal segment runs through the shared unit cell. Entries are only
/// ever added, and only when a diagonal segment is committed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    available: bool,
    blocked_diagonals: BTreeSet<Coord>,
}

impl Point {
    /// Creates a fresh, available point with no blocked diagonals.
    pub fn new() -> Self {
        Self {
            available: true,
            blocked_diagonals: BTreeSet::new(),
        }
    }

    /// Whether any segment has occupied this point.
    pub fn is_available(&self) -> bool {
        self.available
    }

    /// The diagonal neighbors this point may no longer pair with.
    pub fn blocked_diagonals(&self) -> &BTreeSet<Coord> {
        &self.blocked_diagonals
    }
}

impl Default for Point {
    fn default() -> Self {
        Self::new()
    }
}

/// The N×N lattice of points, stored row-major.
///
/// Created once at game start and mutated only by [`Lattice::commit_segment`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lattice {
    size: usize,
    points: Vec<Point>,
}

impl Lattice {
    /// Creates a lattice with every coordinate in [0, size) × [0, size)
    /// holding a fresh available point.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            points: vec![Point::new(); size * size],
        }
    }

    /// Side length of the lattice.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether the coordinate lies inside the lattice.
    pub fn contains(&self, coord: Coord) -> bool {
        self.index(coord).is_some()
    }

    /// Returns the point at the coordinate, if it is inside the lattice.
    pub fn get(&self, coord: Coord) -> Option<&Point> {
        self.index(coord).map(|i| &self.points[i])
    }

    /// Whether the coordinate is inside the lattice and unoccupied.
    ///
    /// Read-only: never mutates state.
    pub fn is_available(&self, coord: Coord) -> bool {
        self.get(coord).is_some_and(Point::is_available)
    }

    /// Marks every point of the segment unavailable.
    ///
    /// For a diagonal segment, each interior point also gains both of its
    /// line-neighbors in `blocked_diagonals`; the first point gains only
    /// its successor and the last only its predecessor, so a segment
    /// endpoint is shielded only on the side facing into the segment.
    pub fn commit_segment(&mut self, points: &[Coord], diagonal: bool) {
        for (i, &coord) in points.iter().enumerate() {
            let Some(idx) = self.index(coord) else {
                continue;
            };
            let point = &mut self.points[idx];
            point.available = false;
            if diagonal {
                if i > 0 {
                    point.blocked_diagonals.insert(points[i - 1]);
                }
                if i + 1 < points.len() {
                    point.blocked_diagonals.insert(points[i + 1]);
                }
            }
        }
    }

    /// Whether a unit diagonal step from `from` in `direction` would cross
    /// an already-drawn diagonal through the same unit cell.
    ///
    /// The probe point is the east/west neighbor of `from` along the
    /// direction's horizontal component; the step is blocked when that
    /// point's `blocked_diagonals` contains the north/south neighbor of
    /// `from` along the vertical component — the two cells on either side
    /// of the edge the crossing diagonal would share.
    ///
    /// [`LineDirection::Straight`] is never blocked. Read-only.
    pub fn is_diagonal_blocked(&self, from: Coord, direction: LineDirection) -> bool {
        let Some((dx, dy)) = direction.unit_offset() else {
            return false;
        };
        let probe = from.offset(dx, 0);
        let companion = from.offset(0, dy);
        self.get(probe)
            .is_some_and(|p| p.blocked_diagonals.contains(&companion))
    }

    fn index(&self, coord: Coord) -> Option<usize> {
        let size = self.size as i32;
        if coord.x < 0 || coord.y < 0 || coord.x >= size || coord.y >= size {
            return None;
        }
        Some(coord.y as usize * self.size + coord.x as usize)
    }
}

/// The two free ends of the single path both players extend.
///
/// Empty before the first committed segment; afterwards always exactly
/// two coordinates. Each commit replaces the end that matched the chosen
/// start with the new endpoint, so the path stays a simple polyline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PathEnds(Option<(Coord, Coord)>);

impl PathEnds {
    /// Creates the empty pair, as at game start.
    pub fn new() -> Self {
        Self(None)
    }

    /// True before the first committed segment.
    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    /// Whether the coordinate is one of the current path ends.
    pub fn contains(&self, coord: Coord) -> bool {
        matches!(self.0, Some((a, b)) if a == coord || b == coord)
    }

    /// The two ends, once the path exists.
    pub fn pair(&self) -> Option<(Coord, Coord)> {
        self.0
    }

    /// Records a committed segment: the first commit sets both ends, every
    /// later commit replaces the end matching `start` with `end`.
    pub(crate) fn advance(&mut self, start: Coord, end: Coord) {
        self.0 = match self.0 {
            None => Some((start, end)),
            Some((a, b)) if a == start => Some((end, b)),
            Some((a, b)) if b == start => Some((a, end)),
            other => other,
        };
    }
}
