//! Line geometry over lattice coordinates.
//!
//! Pure integer functions: no lattice state, no floating point. A line is
//! octilinear when it is axis-aligned or runs at 45°; only the 45° case
//! participates in diagonal-crossing bookkeeping.

use super::types::Coord;
use serde::{Deserialize, Serialize};

/// Compass direction of a line between two coordinates.
///
/// Only diagonal lines carry a compass direction; axis-aligned and
/// degenerate lines are [`LineDirection::Straight`], which by decision
/// never participates in diagonal blocking. Screen orientation: north is
/// decreasing y, east is increasing x.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineDirection {
    /// Toward +x, -y.
    NorthEast,
    /// Toward -x, -y.
    NorthWest,
    /// Toward +x, +y.
    SouthEast,
    /// Toward -x, +y.
    SouthWest,
    /// Axis-aligned or degenerate; not a diagonal.
    Straight,
}

impl LineDirection {
    /// The unit step for a diagonal direction, `None` for `Straight`.
    pub fn unit_offset(self) -> Option<(i32, i32)> {
        match self {
            LineDirection::NorthEast => Some((1, -1)),
            LineDirection::NorthWest => Some((-1, -1)),
            LineDirection::SouthEast => Some((1, 1)),
            LineDirection::SouthWest => Some((-1, 1)),
            LineDirection::Straight => None,
        }
    }
}

/// One of the eight lattice neighbors of a point.
///
/// Used to enumerate the 3×3 neighborhood when probing for remaining
/// moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter)]
pub enum Compass {
    /// (0, -1)
    North,
    /// (1, -1)
    NorthEast,
    /// (1, 0)
    East,
    /// (1, 1)
    SouthEast,
    /// (0, 1)
    South,
    /// (-1, 1)
    SouthWest,
    /// (-1, 0)
    West,
    /// (-1, -1)
    NorthWest,
}

impl Compass {
    /// The unit offset of this neighbor.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Compass::North => (0, -1),
            Compass::NorthEast => (1, -1),
            Compass::East => (1, 0),
            Compass::SouthEast => (1, 1),
            Compass::South => (0, 1),
            Compass::SouthWest => (-1, 1),
            Compass::West => (-1, 0),
            Compass::NorthWest => (-1, -1),
        }
    }
}

/// Compass direction of the line from `a` to `b`.
///
/// Compares the signs of the two axis differences; anything that is not a
/// strict diagonal (including `a == b`) is `Straight`.
pub fn direction(a: Coord, b: Coord) -> LineDirection {
    match ((b.x - a.x).signum(), (b.y - a.y).signum()) {
        (1, -1) => LineDirection::NorthEast,
        (-1, -1) => LineDirection::NorthWest,
        (1, 1) => LineDirection::SouthEast,
        (-1, 1) => LineDirection::SouthWest,
        _ => LineDirection::Straight,
    }
}

/// Whether the line from `a` to `b` is octilinear: axis-aligned or at 45°.
pub fn is_octilinear(a: Coord, b: Coord) -> bool {
    let dx = (b.x - a.x).abs();
    let dy = (b.y - a.y).abs();
    dx == 0 || dy == 0 || dx == dy
}

/// Whether the line from `a` to `b` is a strict 45° diagonal.
pub fn is_diagonal(a: Coord, b: Coord) -> bool {
    let dx = (b.x - a.x).abs();
    let dy = (b.y - a.y).abs();
    dx == dy && dx > 0
}

/// Every lattice point on the line from `a` to `b`, inclusive of both,
/// in order of unit steps from `a`.
///
/// Meaningful only for octilinear pairs; callers check
/// [`is_octilinear`] first. `points_between(a, a)` is `[a]`.
pub fn points_between(a: Coord, b: Coord) -> Vec<Coord> {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let steps = dx.abs().max(dy.abs());
    let (sx, sy) = (dx.signum(), dy.signum());
    (0..=steps)
        .map(|i| Coord::new(a.x + i * sx, a.y + i * sy))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_direction_diagonals() {
        let origin = Coord::new(1, 1);
        assert_eq!(direction(origin, Coord::new(3, 3)), LineDirection::SouthEast);
        assert_eq!(direction(origin, Coord::new(0, 2)), LineDirection::SouthWest);
        assert_eq!(direction(origin, Coord::new(2, 0)), LineDirection::NorthEast);
        assert_eq!(direction(origin, Coord::new(0, 0)), LineDirection::NorthWest);
    }

    #[test]
    fn test_direction_straight_lines() {
        let origin = Coord::new(1, 1);
        assert_eq!(direction(origin, Coord::new(3, 1)), LineDirection::Straight);
        assert_eq!(direction(origin, Coord::new(1, 3)), LineDirection::Straight);
        assert_eq!(direction(origin, origin), LineDirection::Straight);
    }

    #[test]
    fn test_octilinear() {
        let origin = Coord::new(0, 0);
        assert!(is_octilinear(origin, Coord::new(0, 3)));
        assert!(is_octilinear(origin, Coord::new(3, 0)));
        assert!(is_octilinear(origin, Coord::new(3, 3)));
        assert!(!is_octilinear(origin, Coord::new(1, 3)));
        assert!(!is_octilinear(origin, Coord::new(3, 2)));
    }

    #[test]
    fn test_diagonal_excludes_degenerate() {
        let origin = Coord::new(0, 0);
        assert!(is_diagonal(origin, Coord::new(2, 2)));
        assert!(!is_diagonal(origin, origin));
        assert!(!is_diagonal(origin, Coord::new(2, 0)));
    }

    #[test]
    fn test_points_between_vertical() {
        let points = points_between(Coord::new(0, 0), Coord::new(0, 3));
        assert_eq!(
            points,
            vec![
                Coord::new(0, 0),
                Coord::new(0, 1),
                Coord::new(0, 2),
                Coord::new(0, 3),
            ]
        );
    }

    #[test]
    fn test_points_between_diagonal_descending() {
        let points = points_between(Coord::new(3, 0), Coord::new(1, 2));
        assert_eq!(
            points,
            vec![Coord::new(3, 0), Coord::new(2, 1), Coord::new(1, 2)]
        );
    }

    #[test]
    fn test_points_between_reversal() {
        let a = Coord::new(0, 3);
        let b = Coord::new(3, 0);
        let mut forward = points_between(a, b);
        forward.reverse();
        assert_eq!(forward, points_between(b, a));
    }

    #[test]
    fn test_compass_offsets_cover_neighborhood() {
        let offsets: Vec<_> = Compass::iter().map(Compass::offset).collect();
        assert_eq!(offsets.len(), 8);
        for dx in -1..=1 {
            for dy in -1..=1 {
                if (dx, dy) != (0, 0) {
                    assert!(offsets.contains(&(dx, dy)));
                }
            }
        }
    }

    #[test]
    fn test_unit_offset_matches_direction() {
        for (x, y, expected) in [
            (2, 0, LineDirection::Straight),
            (2, -2, LineDirection::NorthEast),
        ] {
            assert_eq!(direction(Coord::new(0, 0), Coord::new(x, y)), expected);
        }
        assert_eq!(LineDirection::SouthWest.unit_offset(), Some((-1, 1)));
        assert_eq!(LineDirection::Straight.unit_offset(), None);
    }
}
