//! Game state machine and rules for the 3x3 marking game.

use super::types::{Board, Mark, Position};
use crate::error::SolverError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Mark),
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// Whether the game has reached a terminal state.
    pub fn is_terminal(self) -> bool {
        self != GameStatus::InProgress
    }
}

/// Observable result of an accepted move.
///
/// Mirrors what a transport layer forwards to its clients: a board
/// snapshot plus either the winner or the next player to move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveReport {
    /// Board after the move.
    pub board: Board,
    /// Whether the game is over.
    pub game_over: bool,
    /// Winning mark, present only when the game ended in a win.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub winner: Option<Mark>,
    /// Next player to move, present only while the game continues.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_player: Option<Mark>,
}

/// Game engine: one board, alternating marks, win/draw detection.
///
/// X always moves first. Once the status is terminal no further moves
/// are accepted and the board never changes again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    current_player: Mark,
    status: GameStatus,
}

impl Game {
    /// Creates a new game with an empty board and X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Mark::X,
            status: GameStatus::InProgress,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark whose turn it is.
    pub fn current_player(&self) -> Mark {
        self.current_player
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Whether the game has ended.
    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// Places the current player's mark at the given position.
    ///
    /// On success the status is re-evaluated: a completed line ends the
    /// game with a winner, a full board ends it in a draw, otherwise the
    /// turn passes to the opponent.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::IllegalStateTransition`] if the game is
    /// already over or the square is occupied, and
    /// [`SolverError::InvalidInput`] if the position is out of range.
    /// A rejected move leaves the game unchanged.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn make_move(&mut self, pos: Position) -> Result<MoveReport, SolverError> {
        if self.status.is_terminal() {
            return Err(SolverError::illegal_state("game is already over"));
        }

        let mover = self.current_player;
        self.board.place(pos, mover)?;

        if self.board.has_won(mover) {
            self.status = GameStatus::Won(mover);
        } else if self.board.is_full() {
            self.status = GameStatus::Draw;
        } else {
            self.current_player = mover.opponent();
        }

        Ok(self.report())
    }

    /// Snapshot of the observable game state.
    pub fn report(&self) -> MoveReport {
        let winner = match self.status {
            GameStatus::Won(mark) => Some(mark),
            _ => None,
        };
        let next_player = match self.status {
            GameStatus::InProgress => Some(self.current_player),
            _ => None,
        };
        MoveReport {
            board: self.board.clone(),
            game_over: self.status.is_terminal(),
            winner,
            next_player,
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
