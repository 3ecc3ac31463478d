//! Grow-only blocked-diagonal invariant.

use super::super::types::Coord;
use super::super::typestate::GameAwaitingSelection;
use super::Invariant;

/// Invariant: blocked-diagonal entries are well-formed.
///
/// Entries only ever appear on points a committed diagonal segment runs
/// through, so every point with a non-empty set is unavailable, and
/// every entry names a diagonal neighbor of its point that is itself
/// unavailable.
pub struct BlockedDiagonalInvariant;

impl Invariant<GameAwaitingSelection> for BlockedDiagonalInvariant {
    fn holds(game: &GameAwaitingSelection) -> bool {
        let lattice = game.lattice();
        let size = lattice.size() as i32;

        for x in 0..size {
            for y in 0..size {
                let coord = Coord::new(x, y);
                let Some(point) = lattice.get(coord) else {
                    return false;
                };
                if point.blocked_diagonals().is_empty() {
                    continue;
                }
                if point.is_available() {
                    return false;
                }
                for &neighbor in point.blocked_diagonals() {
                    let diagonal_step = (neighbor.x - coord.x).abs() == 1
                        && (neighbor.y - coord.y).abs() == 1;
                    if !diagonal_step || lattice.is_available(neighbor) {
                        return false;
                    }
                }
            }
        }

        true
    }

    fn description() -> &'static str {
        "Blocked diagonals only shield occupied diagonal neighbors"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::strand::types::{Coord, DEFAULT_GRID_SIZE};
    use crate::games::strand::typestate::{ExtendTransition, SelectTransition};

    #[test]
    fn test_fresh_game_holds() {
        let game = GameAwaitingSelection::new(DEFAULT_GRID_SIZE);
        assert!(BlockedDiagonalInvariant::holds(&game));
    }

    #[test]
    fn test_holds_after_diagonal() {
        let game = GameAwaitingSelection::new(DEFAULT_GRID_SIZE);
        let pending = match game.select(Coord::new(0, 0)) {
            SelectTransition::Selected(g) => g,
            SelectTransition::Rejected { .. } => panic!("first selection is legal"),
        };
        match pending.extend(Coord::new(3, 3)) {
            ExtendTransition::Extended { game, .. } => {
                assert!(BlockedDiagonalInvariant::holds(&game));
            }
            other => panic!("diagonal on a fresh lattice is legal: {other:?}"),
        }
    }

    #[test]
    fn test_stray_block_violates() {
        let game = GameAwaitingSelection::new(DEFAULT_GRID_SIZE);
        let pending = match game.select(Coord::new(0, 0)) {
            SelectTransition::Selected(g) => g,
            SelectTransition::Rejected { .. } => panic!("first selection is legal"),
        };
        if let ExtendTransition::Extended { mut game, .. } = pending.extend(Coord::new(0, 1)) {
            // Malformed commit: flagged diagonal but the points are not
            // diagonal neighbors, so the blocked entries are stray.
            game.lattice
                .commit_segment(&[Coord::new(0, 3), Coord::new(2, 2)], true);
            assert!(!BlockedDiagonalInvariant::holds(&game));
        } else {
            panic!("unit column on a fresh lattice is legal");
        }
    }
}
