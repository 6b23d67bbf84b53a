//! Tests for the game state machine and win/draw rules.

use solver_platform::{Board, Game, GameStatus, Mark, Position, SolverError, Square};

fn play(game: &mut Game, moves: &[(usize, usize)]) {
    for &(row, col) in moves {
        game.make_move(Position::new(row, col)).expect("Valid move");
    }
}

#[test]
fn test_new_game_starts_empty_with_x_to_move() {
    let game = Game::new();
    assert_eq!(game.current_player(), Mark::X);
    assert_eq!(game.status(), GameStatus::InProgress);
    assert!(!game.is_over());
    assert!(game.board().squares().iter().all(|&s| s == Square::Empty));
}

#[test]
fn test_players_alternate_until_termination() {
    let mut game = Game::new();

    let report = game.make_move(Position::new(1, 1)).expect("Valid move");
    assert_eq!(report.next_player, Some(Mark::O));

    let report = game.make_move(Position::new(0, 0)).expect("Valid move");
    assert_eq!(report.next_player, Some(Mark::X));

    let report = game.make_move(Position::new(2, 2)).expect("Valid move");
    assert_eq!(report.next_player, Some(Mark::O));
}

#[test]
fn test_mark_counts_stay_balanced() {
    let mut game = Game::new();
    for (row, col) in [(0, 0), (1, 1), (0, 1), (1, 0), (2, 2), (1, 2)] {
        game.make_move(Position::new(row, col)).expect("Valid move");
        let xs = count(game.board(), Mark::X);
        let os = count(game.board(), Mark::O);
        assert!(xs == os || xs == os + 1, "X={xs} O={os}");
    }
}

fn count(board: &Board, mark: Mark) -> usize {
    board
        .squares()
        .iter()
        .filter(|&&s| s == Square::Occupied(mark))
        .count()
}

#[test]
fn test_win_detection_top_row() {
    let mut game = Game::new();
    play(&mut game, &[(0, 0), (1, 0), (0, 1), (1, 1)]);

    let report = game.make_move(Position::new(0, 2)).expect("Valid move");
    assert!(report.game_over);
    assert_eq!(report.winner, Some(Mark::X));
    assert_eq!(report.next_player, None);
    assert_eq!(game.status(), GameStatus::Won(Mark::X));
}

#[test]
fn test_win_detection_column_for_o() {
    let mut game = Game::new();
    // X plays edges, O takes the left column.
    play(&mut game, &[(0, 1), (0, 0), (1, 2), (1, 0), (2, 1)]);

    let report = game.make_move(Position::new(2, 0)).expect("Valid move");
    assert_eq!(report.winner, Some(Mark::O));
    assert_eq!(game.status(), GameStatus::Won(Mark::O));
}

#[test]
fn test_win_detection_diagonals() {
    let mut game = Game::new();
    play(&mut game, &[(0, 0), (0, 1), (1, 1), (0, 2)]);
    let report = game.make_move(Position::new(2, 2)).expect("Valid move");
    assert_eq!(report.winner, Some(Mark::X));

    let mut game = Game::new();
    play(&mut game, &[(0, 2), (0, 1), (1, 1), (0, 0)]);
    let report = game.make_move(Position::new(2, 0)).expect("Valid move");
    assert_eq!(report.winner, Some(Mark::X));
}

#[test]
fn test_draw_detection() {
    let mut game = Game::new();
    play(
        &mut game,
        &[
            (0, 0), // X
            (1, 1), // O
            (0, 2), // X
            (0, 1), // O
            (1, 0), // X
            (1, 2), // O
            (2, 1), // X
            (2, 0), // O
        ],
    );

    let report = game.make_move(Position::new(2, 2)).expect("Valid move");
    assert!(report.game_over);
    assert_eq!(report.winner, None);
    assert_eq!(report.next_player, None);
    assert_eq!(game.status(), GameStatus::Draw);
}

#[test]
fn test_occupied_square_rejected_without_mutation() {
    let mut game = Game::new();
    game.make_move(Position::new(1, 1)).expect("Valid move");

    let before = game.clone();
    let result = game.make_move(Position::new(1, 1));
    assert!(matches!(
        result,
        Err(SolverError::IllegalStateTransition { .. })
    ));
    assert_eq!(game, before);
    // The rejected move did not steal O's turn.
    assert_eq!(game.current_player(), Mark::O);
}

#[test]
fn test_out_of_range_rejected_without_mutation() {
    let mut game = Game::new();
    let before = game.clone();

    for position in [
        Position::new(3, 0),
        Position::new(0, 3),
        Position::new(9, 9),
    ] {
        let result = game.make_move(position);
        assert!(matches!(result, Err(SolverError::InvalidInput { .. })));
    }
    assert_eq!(game, before);
}

#[test]
fn test_move_after_game_over_rejected() {
    let mut game = Game::new();
    play(&mut game, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
    assert!(game.is_over());

    let before = game.clone();
    let result = game.make_move(Position::new(2, 2));
    assert!(matches!(
        result,
        Err(SolverError::IllegalStateTransition { .. })
    ));
    assert_eq!(game, before);
}

#[test]
fn test_has_won_is_false_for_absent_mark() {
    let mut game = Game::new();
    game.make_move(Position::new(0, 0)).expect("Valid move");
    // O owns no cells yet; the evaluator answers rather than failing.
    assert!(!game.board().has_won(Mark::O));
    assert_eq!(game.board().winner(), None);
}

#[test]
fn test_board_display() {
    let mut game = Game::new();
    play(&mut game, &[(0, 0), (1, 1)]);
    assert_eq!(game.board().display(), "X|.|.\n-+-+-\n.|O|.\n-+-+-\n.|.|.");
}
