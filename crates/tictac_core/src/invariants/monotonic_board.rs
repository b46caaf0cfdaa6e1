//! Monotonic board invariant: cells never change once set.

use super::super::{Board, Cell, GameState};
use super::Invariant;

/// Invariant: the board is exactly the history replayed onto an empty board.
///
/// Every recorded move must target a cell that was still empty, so a mark
/// once placed is never overwritten.
pub struct MonotonicBoardInvariant;

impl Invariant<GameState> for MonotonicBoardInvariant {
    fn holds(game: &GameState) -> bool {
        let mut reconstructed = Board::new();

        for mov in game.history() {
            if !reconstructed.is_empty(mov.position) {
                return false;
            }
            reconstructed.set(mov.position, Cell::Occupied(mov.mark));
        }

        reconstructed == *game.board()
    }

    fn description() -> &'static str {
        "Board cells are monotonic (never overwritten)"
    }
}
