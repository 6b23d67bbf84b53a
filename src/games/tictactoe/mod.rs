mod minimax;
mod rules;
mod types;

pub use minimax::{Evaluation, best_move};
pub use rules::{Game, GameStatus, MoveReport};
pub use types::{BOARD_SIZE, Board, CELL_COUNT, Mark, Position, Square};
