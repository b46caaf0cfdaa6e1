//! Alternating turn invariant.

use super::super::{GameState, Mark};
use super::Invariant;

/// Invariant: marks alternate X, O, X, ... and the player to move follows
/// the last recorded mark.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(game: &GameState) -> bool {
        let mut expected = Mark::X;
        for mov in game.history() {
            if mov.mark != expected {
                return false;
            }
            expected = expected.opponent();
        }

        game.current_player() == expected
    }

    fn description() -> &'static str {
        "Players alternate turns starting with X"
    }
}
