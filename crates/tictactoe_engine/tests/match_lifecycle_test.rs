//! End-to-end tests for the match lifecycle.

use tictactoe_engine::invariants::{InvariantSet, MatchInvariants};
use tictactoe_engine::{Board, Cell, Mark, Match, MatchError, Outcome, Phase, WINNING_PATTERNS};

fn started(x: &str, o: &str) -> Match {
    let mut game = Match::new();
    game.start_game(x, o);
    game
}

#[test]
fn test_start_game_gives_x_an_empty_board() {
    let game = started("Player 1", "Player 2");

    let player = game.current_player().expect("game started");
    assert_eq!(*player.mark(), Mark::X);
    assert_eq!(player.name(), "Player 1");
    assert!(game.board().cells().iter().all(|c| *c == Cell::Empty));
    assert!(!game.is_game_over());
}

#[test]
fn test_row_win_scenario() {
    let mut game = started("Ada", "Grace");

    for index in [0, 3, 1, 4, 2] {
        assert!(game.play_round(index), "move {} refused", index);
    }

    assert_eq!(game.check_winner(), Some(Mark::X));
    assert!(!game.check_tie());
    assert!(game.is_game_over());
    assert_eq!(game.phase(), Phase::Over(Outcome::Winner(Mark::X)));
}

#[test]
fn test_tie_scenario() {
    let mut game = started("Ada", "Grace");

    let moves = [0, 1, 3, 4, 2, 5, 7, 6, 8];
    for (n, index) in moves.into_iter().enumerate() {
        assert!(game.play_round(index));
        if n < moves.len() - 1 {
            assert_eq!(game.check_winner(), None, "line completed early at move {}", n);
            assert!(!game.is_game_over());
        }
    }

    assert!(game.check_tie());
    assert_eq!(game.check_winner(), None);
    assert_eq!(game.phase(), Phase::Over(Outcome::Tie));
}

#[test]
fn test_last_cell_completing_a_line_is_a_win() {
    let mut game = started("Ada", "Grace");

    // Ends as X O X / O X X / O O X: the ninth move fills the board and
    // completes a line at the same time.
    for index in [0, 1, 2, 3, 4, 6, 5, 7] {
        assert!(game.play_round(index));
        assert!(!game.is_game_over());
    }
    assert!(game.play_round(8));

    assert!(game.board().cells().iter().all(|c| *c != Cell::Empty));
    assert_eq!(game.check_winner(), Some(Mark::X));
    assert!(!game.check_tie());
}

#[test]
fn test_each_pattern_can_be_won_in_play() {
    for pattern in WINNING_PATTERNS {
        let mut game = started("Ada", "Grace");
        let mut o_moves = (0..9).filter(|i| !pattern.contains(i));
        for (n, &x_index) in pattern.iter().enumerate() {
            assert!(game.play_round(x_index));
            if n < 2 {
                let o_index = o_moves.next().expect("spare cell");
                assert!(game.play_round(o_index));
            }
        }

        assert_eq!(game.check_winner(), Some(Mark::X), "pattern {:?}", pattern);
        assert!(game.is_game_over());
    }
}

#[test]
fn test_refused_moves_never_mutate() {
    let mut game = started("Ada", "Grace");
    assert!(game.play_round(4));

    for index in [4, 9, 100] {
        let board = game.board().clone();
        let turn = game.turn();
        assert!(!game.play_round(index));
        assert_eq!(game.board(), &board);
        assert_eq!(game.turn(), turn);
    }
}

#[test]
fn test_board_never_exceeds_moves_played() {
    let mut game = started("Ada", "Grace");
    let mut accepted = 0;

    for index in [4, 4, 0, 12, 8, 0, 2, 6, 3, 5, 1, 7] {
        if game.play_round(index) {
            accepted += 1;
        }
        let occupied = game.board().cells().iter().filter(|c| **c != Cell::Empty).count();
        assert!(occupied <= accepted);
        assert!(MatchInvariants::check_all(&game).is_ok());
    }
}

#[test]
fn test_turn_alternates_until_terminal_move() {
    let mut game = started("Ada", "Grace");

    for index in [0, 3, 1, 4] {
        let mover = *game.current_player().unwrap().mark();
        assert!(game.play_round(index));
        assert_eq!(*game.current_player().unwrap().mark(), mover.opponent());
    }

    let mover = game.current_player().unwrap().clone();
    assert!(game.play_round(2));
    assert!(game.is_game_over());
    assert_eq!(game.current_player().unwrap(), &mover);
}

#[test]
fn test_play_after_game_over() {
    let mut game = started("Ada", "Grace");
    for index in [0, 3, 1, 4, 2] {
        game.play_round(index);
    }

    let board = game.board().clone();
    let turn = game.turn();
    assert_eq!(game.try_play_round(5), Err(MatchError::GameOver));
    assert!(!game.play_round(5));
    assert_eq!(game.board(), &board);
    assert_eq!(game.turn(), turn);
}

#[test]
fn test_reset_then_start_game_clears_marks() {
    let mut game = started("Ada", "Grace");
    for index in [0, 3, 1] {
        game.play_round(index);
    }

    game.reset();
    game.start_game("Linus", "Ken");

    assert_eq!(game.board(), &Board::new());
    assert_eq!(game.current_player().unwrap().name(), "Linus");
    assert_eq!(game.players().unwrap()[1].name(), "Ken");
}

#[test]
fn test_soft_and_hard_reset() {
    let mut game = started("Ada", "Grace");
    for index in [0, 3, 1, 4, 2] {
        game.play_round(index);
    }

    game.reset();
    assert_eq!(game.phase(), Phase::InProgress);
    assert_eq!(game.current_player().unwrap().name(), "Ada");
    assert!(game.play_round(4));

    game.clear();
    assert_eq!(game.phase(), Phase::Idle);
    assert_eq!(game.current_player(), Err(MatchError::NotStarted));
    assert_eq!(game.try_play_round(0), Err(MatchError::NotStarted));
}

#[test]
fn test_with_board_keeps_dependency_explicit() {
    let mut game = Match::with_board(Board::new());
    assert_eq!(game.phase(), Phase::Idle);
    game.start_game("Ada", "Grace");
    assert!(game.play_round(0));
    assert_eq!(game.board().get(0), Some(Cell::Occupied(Mark::X)));
}

#[test]
fn test_one_move_completing_two_lines() {
    let mut game = started("Ada", "Grace");

    // X holds 1, 2, 3, 6; playing 0 finishes the top row and the left column.
    for index in [1, 4, 2, 5, 3, 7, 6, 8] {
        assert!(game.play_round(index));
        assert!(!game.is_game_over());
    }
    assert_eq!(game.try_play_round(0), Ok(Phase::Over(Outcome::Winner(Mark::X))));

    assert_eq!(game.check_winner(), Some(Mark::X));
    assert!(!game.check_tie());
    assert!(MatchInvariants::check_all(&game).is_ok());
}
