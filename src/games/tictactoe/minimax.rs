//! Exhaustive minimax search over the 3x3 game.
//!
//! The state space is small enough (at most 9! move orders) that full
//! depth-first search without pruning or memoization is the point: the
//! search demonstrates the algorithm, not a performance technique.

use super::rules::Game;
use super::types::{Board, Mark, Position, Square};
use crate::error::SolverError;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Terminal score for an X win. O wins score the negation, draws zero.
const X_WIN: i32 = 1;

/// Result of a best-move search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    /// The chosen position.
    pub position: Position,
    /// Game-theoretic value of the position from X's perspective
    /// (+1 X wins, -1 O wins, 0 draw), assuming optimal play by both
    /// sides.
    pub score: i32,
}

/// Finds the optimal move for whichever mark is to move.
///
/// Scores are always expressed from X's perspective, so X picks the
/// child with the maximum score and O the minimum. Ties are broken by
/// row-major enumeration order: the first candidate achieving the best
/// score wins, which makes the search fully deterministic.
///
/// Each candidate branch recurses on a value copy of the fixed-size
/// board, so the caller's game is untouched on every path.
///
/// # Errors
///
/// Returns [`SolverError::IllegalStateTransition`] if the game is
/// already over, or if no legal moves remain.
#[instrument(skip(game), fields(player = %game.current_player()))]
pub fn best_move(game: &Game) -> Result<Evaluation, SolverError> {
    if game.is_over() {
        return Err(SolverError::illegal_state(
            "cannot search for a move in a finished game",
        ));
    }

    let mover = game.current_player();
    let mut best: Option<Evaluation> = None;

    for position in game.board().empty_positions() {
        let mut child = game.board().clone();
        child.set(position, Square::Occupied(mover));
        let score = score(&child, mover.opponent());

        let improves = match best {
            None => true,
            Some(current) => match mover {
                Mark::X => score > current.score,
                Mark::O => score < current.score,
            },
        };
        if improves {
            best = Some(Evaluation { position, score });
        }
    }

    let best = best
        .ok_or_else(|| SolverError::illegal_state("no legal moves remain on a full board"))?;
    debug!(position = %best.position, score = best.score, "Minimax search complete");
    Ok(best)
}

/// Recursive minimax value of `board` with `to_move` next, from X's
/// perspective.
fn score(board: &Board, to_move: Mark) -> i32 {
    if board.has_won(Mark::X) {
        return X_WIN;
    }
    if board.has_won(Mark::O) {
        return -X_WIN;
    }
    if board.is_full() {
        return 0;
    }

    let mut best = match to_move {
        Mark::X => i32::MIN,
        Mark::O => i32::MAX,
    };
    for position in board.empty_positions() {
        let mut child = board.clone();
        child.set(position, Square::Occupied(to_move));
        let value = score(&child, to_move.opponent());
        best = match to_move {
            Mark::X => best.max(value),
            Mark::O => best.min(value),
        };
    }
    best
}
