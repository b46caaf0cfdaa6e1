//! Outcome/board agreement invariant.

use super::super::{GameState, Outcome, rules};
use super::Invariant;

/// Invariant: the recorded outcome is the one the rules derive from the board.
pub struct OutcomeConsistentInvariant;

impl Invariant<GameState> for OutcomeConsistentInvariant {
    fn holds(game: &GameState) -> bool {
        let board = game.board();
        match game.outcome() {
            Outcome::InProgress => {
                rules::check_winner(board).is_none() && !rules::is_full(board)
            }
            Outcome::Wins(mark) => rules::check_winner(board) == Some(mark),
            Outcome::Draw => rules::is_draw(board),
        }
    }

    fn description() -> &'static str {
        "Outcome agrees with the board"
    }
}
