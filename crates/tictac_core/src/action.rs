//! Moves, placement results and move errors.

use super::{Mark, Outcome, Position};
use serde::{Deserialize, Serialize};

/// A mark placed at a position.
///
/// Recorded in the game history for every successful placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The mark placed.
    pub mark: Mark,
    /// Where it was placed.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(mark: Mark, position: Position) -> Self {
        Self { mark, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.position.label())
    }
}

/// Effect of an accepted call to [`GameState::make_move`](super::GameState::make_move).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Placement {
    /// The mark was placed and the turn passed to the opponent.
    Placed(Move),
    /// The cell was already taken; nothing changed.
    Occupied(Position),
}

impl Placement {
    /// Returns true if the board changed.
    pub fn is_placed(&self) -> bool {
        matches!(self, Placement::Placed(_))
    }
}

/// Error returned when a move is rejected.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum GameError {
    /// The index does not name a cell.
    #[display("Cell index {} is out of range (must be 0-8)", index)]
    InvalidIndex {
        /// The rejected index.
        index: usize,
    },

    /// The outcome is already decided.
    #[display("Game is already over ({})", outcome)]
    GameOver {
        /// The latched outcome.
        outcome: Outcome,
    },

    /// A postcondition failed after a placement.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for GameError {}
