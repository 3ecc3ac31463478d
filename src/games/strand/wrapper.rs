//! Runtime wrapper over the typestate phases.
//!
//! Hosts drive the game through a single entry point that takes one
//! activated node per request, so the phase has to be dispatched at
//! runtime. [`AnyGame`] wraps the three phases and folds both halves of a
//! move — selection and extension — into [`AnyGame::activate`].

use super::action::{MoveError, Segment};
use super::types::{Coord, Lattice, PathEnds, Player};
use super::typestate::{
    ExtendTransition, GameAwaitingExtension, GameAwaitingSelection, GameComplete, SelectTransition,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Structured result of one activated node, for the host to render.
///
/// Every variant is an expected outcome; the engine never faults on a
/// bad request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum NodeOutcome {
    /// The node was recorded as the pending start of a move.
    SelectionAccepted {
        /// The recorded start node.
        node: Coord,
    },
    /// The node is not a legal start; nothing changed.
    SelectionRejected {
        /// Why the selection was turned down.
        reason: MoveError,
    },
    /// The pending move was committed and the game continues.
    ExtensionAccepted {
        /// The committed segment.
        segment: Segment,
    },
    /// The pending move was rejected; the pending selection is cleared.
    ExtensionRejected {
        /// Why the extension was turned down.
        reason: MoveError,
    },
    /// The pending move was committed and neither path end can extend.
    GameOver {
        /// The committed final segment.
        segment: Segment,
        /// The player who made the last accepted move.
        winner: Player,
    },
}

/// A strand game in any phase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnyGame {
    /// No start node is pending.
    AwaitingSelection(GameAwaitingSelection),
    /// A start node is pending; the next activation proposes the endpoint.
    AwaitingExtension(GameAwaitingExtension),
    /// The game is over; all further input is ignored.
    Complete(GameComplete),
}

impl AnyGame {
    /// Creates a new game on a fresh `size` × `size` lattice.
    #[instrument]
    pub fn new(size: usize) -> Self {
        info!(size, "Creating new strand game");
        AnyGame::AwaitingSelection(GameAwaitingSelection::new(size))
    }

    /// Processes one activated node and returns the next phase plus the
    /// outcome to report.
    ///
    /// A completed game absorbs input: the state is returned unchanged
    /// and no outcome is emitted.
    #[instrument(skip(self))]
    pub fn activate(self, node: Coord) -> (Self, Option<NodeOutcome>) {
        match self {
            AnyGame::AwaitingSelection(game) => match game.select(node) {
                SelectTransition::Selected(game) => {
                    debug!(%node, "Selection accepted");
                    (
                        AnyGame::AwaitingExtension(game),
                        Some(NodeOutcome::SelectionAccepted { node }),
                    )
                }
                SelectTransition::Rejected { game, reason } => {
                    debug!(%node, %reason, "Selection rejected");
                    (
                        AnyGame::AwaitingSelection(game),
                        Some(NodeOutcome::SelectionRejected { reason }),
                    )
                }
            },
            AnyGame::AwaitingExtension(game) => match game.extend(node) {
                ExtendTransition::Extended { game, segment } => {
                    debug!(%segment, "Extension accepted");
                    (
                        AnyGame::AwaitingSelection(game),
                        Some(NodeOutcome::ExtensionAccepted { segment }),
                    )
                }
                ExtendTransition::Complete { game, segment } => {
                    let winner = game.winner();
                    info!(%segment, ?winner, "Game over");
                    (
                        AnyGame::Complete(game),
                        Some(NodeOutcome::GameOver { segment, winner }),
                    )
                }
                ExtendTransition::Rejected { game, reason } => {
                    debug!(%node, %reason, "Extension rejected");
                    (
                        AnyGame::AwaitingSelection(game),
                        Some(NodeOutcome::ExtensionRejected { reason }),
                    )
                }
            },
            AnyGame::Complete(game) => (AnyGame::Complete(game), None),
        }
    }

    /// The player whose move it is, while the game is running.
    pub fn current_player(&self) -> Option<Player> {
        match self {
            AnyGame::AwaitingSelection(game) => Some(game.to_move()),
            AnyGame::AwaitingExtension(game) => Some(game.to_move()),
            AnyGame::Complete(_) => None,
        }
    }

    /// The winner, once the game is over.
    pub fn winner(&self) -> Option<Player> {
        match self {
            AnyGame::Complete(game) => Some(game.winner()),
            _ => None,
        }
    }

    /// True once the game has completed.
    pub fn is_complete(&self) -> bool {
        matches!(self, AnyGame::Complete(_))
    }

    /// The lattice for any phase.
    pub fn lattice(&self) -> &Lattice {
        match self {
            AnyGame::AwaitingSelection(game) => game.lattice(),
            AnyGame::AwaitingExtension(game) => game.lattice(),
            AnyGame::Complete(game) => game.lattice(),
        }
    }

    /// The path ends for any phase.
    pub fn path_ends(&self) -> &PathEnds {
        match self {
            AnyGame::AwaitingSelection(game) => game.path_ends(),
            AnyGame::AwaitingExtension(game) => game.path_ends(),
            AnyGame::Complete(game) => game.path_ends(),
        }
    }

    /// Committed segments for any phase, oldest first.
    pub fn history(&self) -> &[Segment] {
        match self {
            AnyGame::AwaitingSelection(game) => game.history(),
            AnyGame::AwaitingExtension(game) => game.history(),
            AnyGame::Complete(game) => game.history(),
        }
    }

    /// The pending start node, while one is recorded.
    pub fn pending(&self) -> Option<Coord> {
        match self {
            AnyGame::AwaitingExtension(game) => Some(game.pending()),
            _ => None,
        }
    }
}

impl Default for AnyGame {
    fn default() -> Self {
        Self::new(super::types::DEFAULT_GRID_SIZE)
    }
}
