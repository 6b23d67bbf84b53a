//! Solver Platform library - didactic search-algorithm engines
//!
//! This library collects three small, self-contained demonstrations of
//! classic search techniques, exposed as a core that a presentation or
//! transport layer calls with validated inputs:
//!
//! - **Cryptarithmetic**: exhaustive constraint search for
//!   letter-substitution arithmetic puzzles (`SEND + MORE = MONEY`)
//! - **Tic-tac-toe**: a 3x3 game state machine with an exhaustive
//!   minimax evaluator
//! - **Minimax tree plotting**: synthetic complete k-ary trees with
//!   max/min level alternation, for visualization frontends
//!
//! All operations are synchronous and return typed errors; the only
//! state in the crate lives in [`SessionStore`], a value the caller
//! owns.
//!
//! # Example
//!
//! ```
//! use solver_platform::{Position, SessionStore, solve_cryptarithmetic};
//!
//! # fn example() -> Result<(), solver_platform::SolverError> {
//! let solution = solve_cryptarithmetic("A + A = B")?;
//! assert_eq!(solution.value_of("B"), Some(2));
//!
//! let mut store = SessionStore::new();
//! let id = store.create_session();
//! let report = store.apply_move(&id, Position::new(1, 1))?;
//! assert!(!report.game_over);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod error;
mod games;
mod session;
mod solvers;

// Crate-level exports - errors
pub use error::SolverError;

// Crate-level exports - game types (tic-tac-toe)
pub use games::tictactoe::{
    BOARD_SIZE, Board, CELL_COUNT, Evaluation, Game, GameStatus, Mark, MoveReport, Position,
    Square, best_move,
};

// Crate-level exports - session management
pub use session::{GameSession, SessionId, SessionStore};

// Crate-level exports - solvers
pub use solvers::cryptarithmetic::{Puzzle, Solution, solve_cryptarithmetic};
pub use solvers::minimax_tree::{
    NodeRole, TreeEdge, TreeNode, TreePlot, generate_tree, generate_tree_seeded,
};
