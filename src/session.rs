//! Game session management.
//!
//! The store is a plain value owned by the caller rather than a
//! process-wide registry, so independent stores can run side by side in
//! tests. The core provides no locking; a caller sharing one store
//! across threads must serialize access itself.

use crate::error::SolverError;
use crate::games::tictactoe::{self, Evaluation, Game, MoveReport, Position};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use tracing::{debug, info, instrument, warn};

/// Unique identifier for a game session.
pub type SessionId = String;

/// A stateful wrapper around one game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    /// Session ID.
    id: SessionId,
    /// The game state.
    game: Game,
}

impl GameSession {
    /// Creates a new session with a fresh game.
    #[instrument]
    pub fn new(id: SessionId) -> Self {
        info!(session_id = %id, "Creating new game session");
        Self {
            id,
            game: Game::new(),
        }
    }

    /// Session identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The underlying game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Makes a move for the current player.
    ///
    /// # Errors
    ///
    /// Propagates the game's validation failures; the session is
    /// unchanged when the move is rejected.
    #[instrument(skip(self), fields(session_id = %self.id))]
    pub fn make_move(&mut self, position: Position) -> Result<MoveReport, SolverError> {
        let report = self.game.make_move(position).inspect_err(|error| {
            warn!(%position, %error, "Move rejected");
        })?;
        info!(%position, game_over = report.game_over, "Move accepted");
        Ok(report)
    }

    /// Runs the minimax search for the side to move.
    ///
    /// # Errors
    ///
    /// Fails with [`SolverError::IllegalStateTransition`] on a finished
    /// game.
    #[instrument(skip(self), fields(session_id = %self.id))]
    pub fn best_move(&self) -> Result<Evaluation, SolverError> {
        tictactoe::best_move(&self.game)
    }
}

/// Holds all live game sessions for one caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStore {
    sessions: HashMap<SessionId, GameSession>,
    /// Monotonic source for generated ids; never reused even after
    /// removals.
    next_id: u64,
}

impl SessionStore {
    /// Creates an empty store.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session under a freshly generated identifier and
    /// returns the identifier.
    #[instrument(skip(self))]
    pub fn create_session(&mut self) -> SessionId {
        let id = self.next_id.to_string();
        self.next_id += 1;
        self.sessions.insert(id.clone(), GameSession::new(id.clone()));
        info!(session_id = %id, "Created session");
        id
    }

    /// Creates a session under the given identifier, discarding any
    /// existing session with that identifier.
    #[instrument(skip(self))]
    pub fn new_session(&mut self, id: impl Into<SessionId> + std::fmt::Debug) -> &mut GameSession {
        let id = id.into();
        let session = GameSession::new(id.clone());
        match self.sessions.entry(id) {
            Entry::Occupied(mut occupied) => {
                debug!(session_id = %occupied.key(), "Replacing existing session");
                occupied.insert(session);
                occupied.into_mut()
            }
            Entry::Vacant(vacant) => vacant.insert(session),
        }
    }

    /// Gets a session by identifier.
    pub fn session(&self, id: &str) -> Option<&GameSession> {
        self.sessions.get(id)
    }

    /// Removes a session, returning it if it existed.
    #[instrument(skip(self))]
    pub fn remove_session(&mut self, id: &str) -> Option<GameSession> {
        self.sessions.remove(id)
    }

    /// Identifiers of all live sessions, in unspecified order.
    pub fn session_ids(&self) -> Vec<SessionId> {
        self.sessions.keys().cloned().collect()
    }

    /// Applies a move in the identified session, creating the session
    /// on first reference.
    ///
    /// # Errors
    ///
    /// Propagates the game's validation failures.
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, id: &str, position: Position) -> Result<MoveReport, SolverError> {
        self.open(id).make_move(position)
    }

    /// Runs the minimax search in the identified session, creating the
    /// session on first reference.
    ///
    /// # Errors
    ///
    /// Fails with [`SolverError::IllegalStateTransition`] on a finished
    /// game.
    #[instrument(skip(self))]
    pub fn best_move(&mut self, id: &str) -> Result<Evaluation, SolverError> {
        self.open(id).best_move()
    }

    /// Get-or-create lookup used by the session-scoped operations.
    fn open(&mut self, id: &str) -> &mut GameSession {
        self.sessions
            .entry(id.to_owned())
            .or_insert_with(|| GameSession::new(id.to_owned()))
    }
}
