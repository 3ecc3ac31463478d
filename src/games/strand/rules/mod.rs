//! Game rules for the strand game.
//!
//! Pure functions for judging proposed segments and for detecting the end
//! of the game. Rules are separated from lattice storage so the state
//! machine can compose them.

pub mod segment;
pub mod terminal;

pub use segment::{validate, validate_selection};
pub use terminal::{can_connect, has_no_moves, is_game_over};
