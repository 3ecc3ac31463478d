//! Game session management.
//!
//! The engine holds no process-wide state: every game lives in a
//! [`GameSession`] value owned by its caller, and [`SessionManager`]
//! isolates any number of concurrent games behind a single lock.

use crate::games::strand::{AnyGame, Coord, NodeOutcome, Player};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tracing::{debug, info, instrument, warn};

/// Unique identifier for a game session.
pub type SessionId = String;

/// Errors from session lookup and creation.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum SessionError {
    /// No session exists under the given ID.
    #[display("session not found")]
    NotFound,
    /// A session already exists under the given ID.
    #[display("session already exists")]
    AlreadyExists,
}

impl std::error::Error for SessionError {}

/// A single game behind a single-owner handle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSession {
    /// Session ID.
    pub id: SessionId,
    game: AnyGame,
}

impl GameSession {
    /// Creates a new session with a fresh game.
    #[instrument]
    pub fn new(id: SessionId, size: usize) -> Self {
        info!(session_id = %id, size, "Creating new game session");
        Self {
            id,
            game: AnyGame::new(size),
        }
    }

    /// The game in its current phase.
    pub fn game(&self) -> &AnyGame {
        &self.game
    }

    /// The player whose move it is, while the game is running.
    ///
    /// This is the structured datum a host formats into heading and
    /// idle text; the engine owns no UI strings.
    pub fn current_player(&self) -> Option<Player> {
        self.game.current_player()
    }

    /// Processes one activated node — the sole mutating entry point.
    ///
    /// Returns `None` once the game is complete: further input is
    /// ignored, not an error.
    #[instrument(skip(self), fields(session_id = %self.id))]
    pub fn node_activated(&mut self, node: Coord) -> Option<NodeOutcome> {
        let game = std::mem::take(&mut self.game);
        let (game, outcome) = game.activate(node);
        self.game = game;

        match &outcome {
            Some(outcome) => debug!(?outcome, "Node processed"),
            None => debug!("Game already complete, input ignored"),
        }
        outcome
    }
}

/// Manages all game sessions.
///
/// Each session's state is isolated; the only sharing is the map itself,
/// and every operation runs to completion under the lock.
#[derive(Debug, Clone, Default)]
pub struct SessionManager {
    sessions: Arc<Mutex<HashMap<SessionId, GameSession>>>,
}

impl SessionManager {
    /// Creates a new session manager.
    #[instrument]
    pub fn new() -> Self {
        info!("Creating session manager");
        Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Creates a new game session on a fresh lattice.
    #[instrument(skip(self))]
    pub fn create_session(&self, id: SessionId, size: usize) -> Result<SessionId, SessionError> {
        let mut sessions = self.sessions.lock().unwrap();

        if sessions.contains_key(&id) {
            warn!(session_id = %id, "Session already exists");
            return Err(SessionError::AlreadyExists);
        }

        let session = GameSession::new(id.clone(), size);
        sessions.insert(id.clone(), session);

        info!(session_id = %id, "Created new session");
        Ok(id)
    }

    /// Gets a snapshot of a session by ID.
    #[instrument(skip(self))]
    pub fn get_session(&self, id: &str) -> Option<GameSession> {
        let sessions = self.sessions.lock().unwrap();
        let session = sessions.get(id).cloned();

        if session.is_none() {
            debug!(session_id = id, "Session not found");
        }

        session
    }

    /// Atomically processes an activated node in a session.
    ///
    /// The whole transition runs while holding the lock, so concurrent
    /// requests to the same session serialize.
    #[instrument(skip(self))]
    pub fn node_activated(
        &self,
        id: &str,
        node: Coord,
    ) -> Result<Option<NodeOutcome>, SessionError> {
        let mut sessions = self.sessions.lock().unwrap();
        let session = sessions.get_mut(id).ok_or(SessionError::NotFound)?;
        Ok(session.node_activated(node))
    }

    /// The current player of a session, while its game is running.
    #[instrument(skip(self))]
    pub fn current_player(&self, id: &str) -> Result<Option<Player>, SessionError> {
        let sessions = self.sessions.lock().unwrap();
        let session = sessions.get(id).ok_or(SessionError::NotFound)?;
        Ok(session.current_player())
    }

    /// Lists all active session IDs.
    #[instrument(skip(self))]
    pub fn list_sessions(&self) -> Vec<SessionId> {
        let sessions = self.sessions.lock().unwrap();
        sessions.keys().cloned().collect()
    }
}
