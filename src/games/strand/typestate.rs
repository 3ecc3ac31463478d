//! Phase-specific typestate structs for the strand game.
//!
//! Each phase of the turn cycle is its own type, and transitions are
//! total: a rejected input returns the surviving state inside the
//! transition enum instead of consuming the game. A completed game
//! ALWAYS has a winner, not `Option<Player>`.

use super::action::{MoveError, Segment};
use super::invariants::assert_invariants;
use super::rules;
use super::types::{Coord, Lattice, PathEnds, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

// ─────────────────────────────────────────────────────────────
//  AwaitingSelection Phase
// ─────────────────────────────────────────────────────────────

/// Game between moves: no start node is pending.
///
/// This is the initial phase and the phase every extension attempt
/// returns to, accepted or not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameAwaitingSelection {
    pub(super) lattice: Lattice,
    pub(super) path_ends: PathEnds,
    pub(super) to_move: Player,
    pub(super) history: Vec<Segment>,
}

/// Result of selecting a start node.
#[derive(Debug, Clone)]
pub enum SelectTransition {
    /// The node is a legal start; the game now awaits the endpoint.
    Selected(GameAwaitingExtension),
    /// The node is not a legal start; the game is unchanged.
    Rejected {
        /// The surviving game.
        game: GameAwaitingSelection,
        /// Why the selection was turned down.
        reason: MoveError,
    },
}

impl GameAwaitingSelection {
    /// Creates a new game on a fresh lattice, player 1 to move.
    #[instrument]
    pub fn new(size: usize) -> Self {
        Self {
            lattice: Lattice::new(size),
            path_ends: PathEnds::new(),
            to_move: Player::One,
            history: Vec::new(),
        }
    }

    /// Proposes a start node for the current player's move.
    #[instrument(skip(self))]
    pub fn select(self, node: Coord) -> SelectTransition {
        match rules::validate_selection(&self.lattice, &self.path_ends, node) {
            Ok(()) => SelectTransition::Selected(GameAwaitingExtension {
                lattice: self.lattice,
                path_ends: self.path_ends,
                to_move: self.to_move,
                history: self.history,
                pending: node,
            }),
            Err(reason) => SelectTransition::Rejected { game: self, reason },
        }
    }

    /// The player whose move it is.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// The lattice.
    pub fn lattice(&self) -> &Lattice {
        &self.lattice
    }

    /// The current path ends.
    pub fn path_ends(&self) -> &PathEnds {
        &self.path_ends
    }

    /// Committed segments, oldest first.
    pub fn history(&self) -> &[Segment] {
        &self.history
    }
}

impl Default for GameAwaitingSelection {
    fn default() -> Self {
        Self::new(super::types::DEFAULT_GRID_SIZE)
    }
}

// ─────────────────────────────────────────────────────────────
//  AwaitingExtension Phase
// ─────────────────────────────────────────────────────────────

/// Game with a pending start node, awaiting the endpoint.
///
/// The pending selection exists only in this phase; there is no
/// `Option<Coord>` field anywhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameAwaitingExtension {
    pub(super) lattice: Lattice,
    pub(super) path_ends: PathEnds,
    pub(super) to_move: Player,
    pub(super) history: Vec<Segment>,
    pub(super) pending: Coord,
}

/// Result of proposing an endpoint for the pending start.
///
/// The pending selection is cleared on every branch, accepted or not.
#[derive(Debug, Clone)]
pub enum ExtendTransition {
    /// The segment was committed and the game continues.
    Extended {
        /// The game, back in the selection phase with the turn flipped.
        game: GameAwaitingSelection,
        /// The committed segment.
        segment: Segment,
    },
    /// The segment was committed and ended the game.
    Complete {
        /// The finished game.
        game: GameComplete,
        /// The committed final segment.
        segment: Segment,
    },
    /// The segment was rejected; the game returns to the selection phase.
    Rejected {
        /// The surviving game, pending selection cleared.
        game: GameAwaitingSelection,
        /// Why the extension was turned down.
        reason: MoveError,
    },
}

impl GameAwaitingExtension {
    /// Proposes `node` as the endpoint of the pending move.
    ///
    /// On acceptance the segment is committed to the lattice, the matching
    /// path end is replaced, the turn flips, and the terminal detector
    /// runs: if neither path end can extend, the game completes with the
    /// player who just moved as the winner.
    #[instrument(skip(self))]
    pub fn extend(self, node: Coord) -> ExtendTransition {
        let segment = match rules::validate(&self.lattice, self.pending, node) {
            Ok(segment) => segment,
            Err(reason) => {
                return ExtendTransition::Rejected {
                    game: self.abandon(),
                    reason,
                };
            }
        };

        let GameAwaitingExtension {
            mut lattice,
            mut path_ends,
            to_move,
            mut history,
            pending,
        } = self;

        lattice.commit_segment(segment.points(), segment.is_diagonal());
        path_ends.advance(pending, node);
        history.push(segment.clone());

        if rules::is_game_over(&lattice, &path_ends) {
            return ExtendTransition::Complete {
                game: GameComplete {
                    lattice,
                    path_ends,
                    winner: to_move,
                    history,
                },
                segment,
            };
        }

        let game = GameAwaitingSelection {
            lattice,
            path_ends,
            to_move: to_move.opponent(),
            history,
        };
        assert_invariants(&game);

        ExtendTransition::Extended { game, segment }
    }

    /// Drops the pending selection without committing anything.
    pub fn abandon(self) -> GameAwaitingSelection {
        GameAwaitingSelection {
            lattice: self.lattice,
            path_ends: self.path_ends,
            to_move: self.to_move,
            history: self.history,
        }
    }

    /// The pending start node.
    pub fn pending(&self) -> Coord {
        self.pending
    }

    /// The player whose move it is.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// The lattice.
    pub fn lattice(&self) -> &Lattice {
        &self.lattice
    }

    /// The current path ends.
    pub fn path_ends(&self) -> &PathEnds {
        &self.path_ends
    }

    /// Committed segments, oldest first.
    pub fn history(&self) -> &[Segment] {
        &self.history
    }
}

// ─────────────────────────────────────────────────────────────
//  Complete Phase
// ─────────────────────────────────────────────────────────────

/// Finished game.
///
/// The winner is ALWAYS present: the player who made the last accepted
/// move. This phase is absorbing; no transition leaves it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameComplete {
    pub(super) lattice: Lattice,
    pub(super) path_ends: PathEnds,
    pub(super) winner: Player,
    pub(super) history: Vec<Segment>,
}

impl GameComplete {
    /// The winner: the player who made the last accepted move.
    pub fn winner(&self) -> Player {
        self.winner
    }

    /// The lattice in its final state.
    pub fn lattice(&self) -> &Lattice {
        &self.lattice
    }

    /// The final path ends.
    pub fn path_ends(&self) -> &PathEnds {
        &self.path_ends
    }

    /// Committed segments, oldest first.
    pub fn history(&self) -> &[Segment] {
        &self.history
    }
}
