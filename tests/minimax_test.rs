//! Tests for the exhaustive minimax evaluator.

use solver_platform::{Game, Mark, Position, SolverError, best_move};

fn play(game: &mut Game, moves: &[(usize, usize)]) {
    for &(row, col) in moves {
        game.make_move(Position::new(row, col)).expect("Valid move");
    }
}

#[test]
fn test_empty_board_is_a_draw_under_optimal_play() {
    let game = Game::new();
    let eval = best_move(&game).expect("Legal moves exist");

    assert_eq!(eval.score, 0);
    // Every opening scores 0, so the row-major tie-break picks the
    // first cell.
    assert_eq!(eval.position, Position::new(0, 0));
}

#[test]
fn test_maximizer_finds_forced_win() {
    let mut game = Game::new();
    // X holds (1,0) and (1,1); O holds (0,0) and (0,1). X to move.
    play(&mut game, &[(1, 0), (0, 0), (1, 1), (0, 1)]);
    assert_eq!(game.current_player(), Mark::X);

    let eval = best_move(&game).expect("Legal moves exist");
    assert_eq!(eval.score, 1);
    assert_eq!(eval.position, Position::new(0, 2));
}

#[test]
fn test_minimizer_avoids_the_losing_reply() {
    let mut game = Game::new();
    // Opposite corners for X against O's center: any corner reply by O
    // loses, any edge reply holds the draw.
    play(&mut game, &[(0, 0), (1, 1), (2, 2)]);
    assert_eq!(game.current_player(), Mark::O);

    let eval = best_move(&game).expect("Legal moves exist");
    assert_eq!(eval.score, 0);
    assert_eq!(eval.position, Position::new(0, 1));
}

#[test]
fn test_search_leaves_the_game_untouched() {
    let mut game = Game::new();
    play(&mut game, &[(1, 1), (0, 0)]);

    let before = game.clone();
    best_move(&game).expect("Legal moves exist");
    assert_eq!(game, before);
}

#[test]
fn test_search_is_deterministic() {
    let mut game = Game::new();
    play(&mut game, &[(1, 1), (0, 2)]);

    let first = best_move(&game).expect("Legal moves exist");
    let second = best_move(&game).expect("Legal moves exist");
    assert_eq!(first, second);
}

#[test]
fn test_finished_game_is_rejected() {
    let mut game = Game::new();
    play(&mut game, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
    assert!(game.is_over());

    let result = best_move(&game);
    assert!(matches!(
        result,
        Err(SolverError::IllegalStateTransition { .. })
    ));
}

#[test]
fn test_immediate_win_preferred_over_slow_win() {
    let mut game = Game::new();
    // X holds (0,0) and (0,1); completing the top row wins outright.
    play(&mut game, &[(0, 0), (1, 1), (0, 1), (2, 2)]);

    let eval = best_move(&game).expect("Legal moves exist");
    assert_eq!(eval.position, Position::new(0, 2));
    assert_eq!(eval.score, 1);
}
