//! Strand Games library - type-safe strand-drawing game engine
//!
//! Two players alternately extend one growing octilinear path on a fixed
//! square lattice; the game ends when neither path end has a legal
//! continuation. This crate is the rules engine plus a host-agnostic
//! protocol surface — rendering, transport and process lifecycle belong
//! to the embedding host.
//!
//! # Architecture
//!
//! - **Games**: type-safe game implementation (currently the strand game)
//!   with typestate phases and first-class invariants
//! - **Session**: single-owner game handles and isolated multi-game
//!   management
//! - **Host**: the JSON message envelope and a reference host that owns
//!   every UI string
//!
//! # Example
//!
//! ```
//! use strand_games::{AnyGame, Coord, NodeOutcome, DEFAULT_GRID_SIZE};
//!
//! let game = AnyGame::new(DEFAULT_GRID_SIZE);
//! let (game, outcome) = game.activate(Coord::new(0, 0));
//! assert!(matches!(
//!     outcome,
//!     Some(NodeOutcome::SelectionAccepted { .. })
//! ));
//! let (_game, outcome) = game.activate(Coord::new(0, 3));
//! assert!(matches!(
//!     outcome,
//!     Some(NodeOutcome::ExtensionAccepted { .. })
//! ));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod games;
mod host;
mod session;

// Crate-level exports - Host envelope
pub use host::{
    ASLEEP_FOOTER, GAME_OVER_HEADING, GameHost, HostRequest, HostResponse, INVALID_END_FOOTER,
    INVALID_START_FOOTER, NewLine, ResponseBody, ResponseMsg, awaiting_message, game_over_footer,
    player_heading,
};

// Crate-level exports - Session management
pub use session::{GameSession, SessionError, SessionId, SessionManager};

// Crate-level exports - Game types (strand)
pub use games::strand::{
    AnyGame, BlockedDiagonalInvariant, Compass, Coord, DEFAULT_GRID_SIZE, ExtendTransition,
    GameAwaitingExtension, GameAwaitingSelection, GameComplete, Invariant, InvariantSet,
    InvariantViolation, Lattice, LineDirection, MonotonicLatticeInvariant, MoveError, NodeOutcome,
    PathEnds, PathEndsInvariant, Player, Point, Segment, SelectTransition, StrandInvariants,
    can_connect, direction, has_no_moves, is_diagonal, is_game_over, is_octilinear, points_between,
    validate, validate_selection,
};
