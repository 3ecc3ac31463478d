//! Path-end consistency invariant.

use super::super::typestate::GameAwaitingSelection;
use super::super::types::PathEnds;
use super::Invariant;

/// Invariant: the path ends are the two free ends of the history.
///
/// Folding the committed segments — first segment sets both ends, each
/// later segment replaces the end matching its start — must reproduce
/// the game's current path ends, and both ends must be occupied points.
pub struct PathEndsInvariant;

impl Invariant<GameAwaitingSelection> for PathEndsInvariant {
    fn holds(game: &GameAwaitingSelection) -> bool {
        let mut reconstructed = PathEnds::new();
        for segment in game.history() {
            if !reconstructed.is_empty() && !reconstructed.contains(segment.start()) {
                return false;
            }
            reconstructed.advance(segment.start(), segment.end());
        }

        if reconstructed != *game.path_ends() {
            return false;
        }

        match game.path_ends().pair() {
            Some((a, b)) => {
                a != b && !game.lattice().is_available(a) && !game.lattice().is_available(b)
            }
            None => game.history().is_empty(),
        }
    }

    fn description() -> &'static str {
        "Path ends are the two free ends of the committed history"
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
        assert!(PathEndsInvariant::holds(&game));
    }

    #[test]
    fn test_holds_across_replacements() {
        let mut game = GameAwaitingSelection::new(DEFAULT_GRID_SIZE);
        for (start, end) in [
            (Coord::new(0, 0), Coord::new(0, 3)),
            (Coord::new(0, 3), Coord::new(3, 3)),
            (Coord::new(3, 3), Coord::new(3, 1)),
        ] {
            let pending = match game.select(start) {
                SelectTransition::Selected(g) => g,
                SelectTransition::Rejected { .. } => panic!("selection {start} rejected"),
            };
            game = match pending.extend(end) {
                ExtendTransition::Extended { game, .. } => game,
                other => panic!("extension to {end} did not continue: {other:?}"),
            };
            assert!(PathEndsInvariant::holds(&game));
        }
    }

    #[test]
    fn test_tampered_ends_violate() {
        let game = GameAwaitingSelection::new(DEFAULT_GRID_SIZE);
        let pending = match game.select(Coord::new(0, 0)) {
            SelectTransition::Selected(g) => g,
            SelectTransition::Rejected { .. } => panic!("first selection is legal"),
        };
        if let ExtendTransition::Extended { mut game, .. } = pending.extend(Coord::new(0, 3)) {
            game.path_ends.advance(Coord::new(0, 3), Coord::new(2, 2));
            assert!(!PathEndsInvariant::holds(&game));
        } else {
            panic!("column on a fresh lattice is legal");
        }
    }
}
