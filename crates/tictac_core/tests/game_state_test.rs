//! Tests for the game state lifecycle.

use tictac_core::{Cell, GameError, GameState, Mark, Outcome, Placement, Position, rules};

#[test]
fn test_new_game_scenario() {
    let mut game = GameState::replay(&[4, 0]).expect("legal moves");
    game.new_game();

    assert!(game.board().cells().iter().all(|c| *c == Cell::Empty));
    assert_eq!(game.current_player(), Mark::X);
    assert_eq!(game.outcome(), Outcome::InProgress);
}

#[test]
fn test_diagonal_win_scenario() {
    let game = GameState::replay(&[0, 1, 4, 2, 8]).expect("legal moves");
    assert_eq!(game.outcome(), Outcome::Wins(Mark::X));
    assert_eq!(game.outcome().winner(), Some(Mark::X));
}

#[test]
fn test_draw_scenario() {
    let game = GameState::replay(&[0, 1, 2, 3, 4, 6, 5, 8, 7]).expect("legal moves");
    assert_eq!(game.outcome(), Outcome::Draw);
    assert!(game.outcome().is_draw());
}

#[test]
fn test_occupied_cell_scenario() {
    let mut game = GameState::new();
    game.make_move(0).expect("legal move");

    let result = game.make_move(0).expect("occupied is not an error");
    assert!(!result.is_placed());
    assert_eq!(game.board().get(Position::TopLeft), Cell::Occupied(Mark::X));
    assert_eq!(game.current_player(), Mark::O);
    assert_eq!(game.history().len(), 1);
}

#[test]
fn test_invalid_index_scenario() {
    let mut game = GameState::new();
    let err = game.make_move(9).unwrap_err();
    assert_eq!(err, GameError::InvalidIndex { index: 9 });
    assert!(err.to_string().contains("out of range"));
    assert_eq!(game, GameState::new());
}

#[test]
fn test_replay_stops_at_first_error() {
    let err = GameState::replay(&[0, 1, 4, 2, 8, 5]).unwrap_err();
    assert_eq!(err, GameError::GameOver { outcome: Outcome::Wins(Mark::X) });
}

#[test]
fn test_moves_land_only_on_targets() {
    let mut game = GameState::new();
    let targets = [4, 0, 8, 2];
    for (n, &index) in targets.iter().enumerate() {
        let placement = game.make_move(index).expect("legal move");
        assert!(placement.is_placed());

        for (i, cell) in game.board().cells().iter().enumerate() {
            match targets[..=n].iter().position(|&t| t == i) {
                Some(k) => {
                    let mark = if k % 2 == 0 { Mark::X } else { Mark::O };
                    assert_eq!(*cell, Cell::Occupied(mark), "cell {}", i);
                }
                None => assert_eq!(*cell, Cell::Empty, "cell {}", i),
            }
        }
    }
}

#[test]
fn test_state_serializes_to_json() {
    let game = GameState::replay(&[4]).expect("legal move");
    let json = serde_json::to_value(&game).expect("serializable");
    assert_eq!(json["to_move"], "O");
    assert_eq!(json["outcome"], "InProgress");
    assert_eq!(json["board"]["cells"][4], serde_json::json!({ "Occupied": "X" }));

    let back: GameState = serde_json::from_value(json).expect("deserializable");
    assert_eq!(back, game);
}

#[test]
fn test_forged_outcome_is_rejected() {
    let mut json = serde_json::to_value(GameState::new()).expect("serializable");
    json["outcome"] = serde_json::json!("Draw");

    let err = serde_json::from_value::<GameState>(json).unwrap_err();
    assert!(err.to_string().contains("outcome"), "{}", err);
}

#[test]
fn test_board_edited_outside_history_is_rejected() {
    let game = GameState::replay(&[4]).expect("legal move");
    let mut json = serde_json::to_value(&game).expect("serializable");
    json["board"]["cells"][0] = serde_json::json!({ "Occupied": "O" });

    let err = serde_json::from_value::<GameState>(json).unwrap_err();
    assert!(err.to_string().contains("board"), "{}", err);
}

#[test]
fn test_history_with_wrong_mark_is_rejected() {
    let game = GameState::replay(&[4, 0]).expect("legal moves");
    let mut json = serde_json::to_value(&game).expect("serializable");
    json["history"][1]["mark"] = serde_json::json!("X");

    assert!(serde_json::from_value::<GameState>(json).is_err());
}

#[test]
fn test_history_past_the_end_is_rejected() {
    let game = GameState::replay(&[0, 1, 4, 2, 8]).expect("legal moves");
    let mut json = serde_json::to_value(&game).expect("serializable");
    json["history"]
        .as_array_mut()
        .expect("history is an array")
        .push(serde_json::json!({ "mark": "O", "position": "MiddleRight" }));

    let err = serde_json::from_value::<GameState>(json).unwrap_err();
    assert!(err.to_string().contains("already over"), "{}", err);
}

#[derive(Default)]
struct Tally {
    x_wins: usize,
    o_wins: usize,
    draws: usize,
}

/// Visits every reachable game, checking the move properties at each step.
fn explore(game: &GameState, tally: &mut Tally) {
    let counter = match game.outcome() {
        Outcome::Wins(Mark::X) => &mut tally.x_wins,
        Outcome::Wins(Mark::O) => &mut tally.o_wins,
        Outcome::Draw => &mut tally.draws,
        Outcome::InProgress => return explore_moves(game, tally),
    };
    *counter += 1;
}

fn explore_moves(game: &GameState, tally: &mut Tally) {
    for index in 0..9 {
        let mut next = game.clone();
        let mover = next.current_player();
        match next.make_move(index).expect("index in range, game undecided") {
            Placement::Placed(mov) => {
                assert_eq!(mov.mark, mover);
                assert_eq!(next.current_player(), mover.opponent());
            }
            Placement::Occupied(_) => {
                assert_eq!(next.board(), game.board());
                assert_eq!(next.current_player(), mover);
                continue;
            }
        }

        let board = next.board();
        match next.outcome() {
            Outcome::Wins(mark) => assert_eq!(rules::check_winner(board), Some(mark)),
            Outcome::Draw => {
                assert!(rules::is_full(board) && rules::check_winner(board).is_none())
            }
            Outcome::InProgress => {
                assert!(!rules::is_full(board) && rules::check_winner(board).is_none())
            }
        }

        if next.outcome().is_decided() {
            let latched = next.outcome();
            for index in 0..9 {
                assert!(matches!(next.make_move(index), Err(GameError::GameOver { .. })));
                assert_eq!(next.outcome(), latched);
            }
        }

        explore(&next, tally);
    }
}

#[test]
fn test_every_reachable_game() {
    let mut tally = Tally::default();
    explore(&GameState::new(), &mut tally);
    // Known totals over all 255,168 move sequences.
    assert_eq!(tally.x_wins, 131_184);
    assert_eq!(tally.o_wins, 77_904);
    assert_eq!(tally.draws, 46_080);
}
