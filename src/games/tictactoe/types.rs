//! Core domain types for the 3x3 marking game.

use crate::error::SolverError;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// Board dimension. The game is modeled on a fixed 3x3 grid.
pub const BOARD_SIZE: usize = 3;

/// Number of cells on the board.
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// A player's mark.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Mark {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a mark.
    Occupied(Mark),
}

/// A (row, column) coordinate on the board.
///
/// Construction is unchecked; bounds are validated wherever a position is
/// consumed, so out-of-range coordinates surface as typed errors rather
/// than panics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Row index (0-2 when in range).
    pub row: usize,
    /// Column index (0-2 when in range).
    pub col: usize,
}

impl Position {
    /// Creates a position from row and column indices.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Whether both coordinates fall inside the grid.
    pub fn in_bounds(self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }

    /// Row-major cell index. Only meaningful for in-bounds positions.
    pub(crate) fn index(self) -> usize {
        self.row * BOARD_SIZE + self.col
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// 3x3 game board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; CELL_COUNT],
}

/// The eight winning lines, as row-major cell indices.
const LINES: [[usize; 3]; 8] = [
    [0, 1, 2], [3, 4, 5], [6, 7, 8], // Rows
    [0, 3, 6], [1, 4, 7], [2, 5, 8], // Columns
    [0, 4, 8], [2, 4, 6],            // Diagonals
];

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; CELL_COUNT],
        }
    }

    /// Gets the square at the given position, or `None` if out of range.
    pub fn get(&self, pos: Position) -> Option<Square> {
        if !pos.in_bounds() {
            return None;
        }
        Some(self.squares[pos.index()])
    }

    /// Checks if the square at the given position is empty.
    ///
    /// Out-of-range positions are reported as not empty.
    pub fn is_empty_at(&self, pos: Position) -> bool {
        matches!(self.get(pos), Some(Square::Empty))
    }

    /// Places a mark at the given position.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::InvalidInput`] if the position is outside
    /// the grid, or [`SolverError::IllegalStateTransition`] if the square
    /// is already occupied. The board is unchanged on failure.
    pub fn place(&mut self, pos: Position, mark: Mark) -> Result<(), SolverError> {
        if !pos.in_bounds() {
            return Err(SolverError::invalid_input(format!(
                "position {pos} is outside the {BOARD_SIZE}x{BOARD_SIZE} grid"
            )));
        }
        if !self.is_empty_at(pos) {
            return Err(SolverError::illegal_state(format!(
                "square {pos} is already occupied"
            )));
        }
        self.squares[pos.index()] = Square::Occupied(mark);
        Ok(())
    }

    /// Sets a square without validation.
    ///
    /// Callers must pass an in-bounds position; the minimax search uses
    /// this on positions obtained from [`Board::empty_positions`].
    pub(crate) fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.index()] = square;
    }

    /// Checks whether the given mark occupies a complete row, column, or
    /// diagonal.
    ///
    /// Callable for a mark that owns no cells; that simply returns false.
    pub fn has_won(&self, mark: Mark) -> bool {
        LINES.iter().any(|line| {
            line.iter()
                .all(|&i| self.squares[i] == Square::Occupied(mark))
        })
    }

    /// Returns the winning mark, if any line is complete.
    pub fn winner(&self) -> Option<Mark> {
        Mark::iter().find(|&m| self.has_won(m))
    }

    /// Checks if no empty squares remain.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|&s| s != Square::Empty)
    }

    /// Empty positions in row-major order.
    pub fn empty_positions(&self) -> Vec<Position> {
        (0..CELL_COUNT)
            .filter(|&i| self.squares[i] == Square::Empty)
            .map(|i| Position::new(i / BOARD_SIZE, i % BOARD_SIZE))
            .collect()
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; CELL_COUNT] {
        &self.squares
    }

    /// Formats the board as a human-readable string.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let symbol = match self.squares[row * BOARD_SIZE + col] {
                    Square::Empty => ".".to_string(),
                    Square::Occupied(mark) => mark.to_string(),
                };
                result.push_str(&symbol);
                if col < BOARD_SIZE - 1 {
                    result.push('|');
                }
            }
            if row < BOARD_SIZE - 1 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
