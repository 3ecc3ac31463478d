//! Monotonic occupancy invariant: points never become available again.

use super::super::typestate::GameAwaitingSelection;
use super::super::types::Lattice;
use super::Invariant;

/// Invariant: lattice occupancy is monotonic and explained by history.
///
/// Replaying the committed segments onto a fresh lattice must reproduce
/// the current lattice exactly, and every segment must have found its
/// line open at the time it was committed (first point excepted, since
/// the start of each later segment is an already-occupied path end).
pub struct MonotonicLatticeInvariant;

impl Invariant<GameAwaitingSelection> for MonotonicLatticeInvariant {
    fn holds(game: &GameAwaitingSelection) -> bool {
        let mut reconstructed = Lattice::new(game.lattice().size());

        for segment in game.history() {
            for &point in &segment.points()[1..] {
                if !reconstructed.is_available(point) {
                    return false;
                }
            }
            reconstructed.commit_segment(segment.points(), segment.is_diagonal());
        }

        reconstructed == *game.lattice()
    }

    fn description() -> &'static str {
        "Lattice occupancy is monotonic and reproducible from history"
    }
}
