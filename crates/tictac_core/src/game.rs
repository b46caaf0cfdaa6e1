//! Authoritative game state.

use super::action::{GameError, Move, Placement};
#[cfg(debug_assertions)]
use super::invariants::{GameInvariants, InvariantSet};
use super::{Board, Cell, Mark, Outcome, Position, rules};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Board, player to move and latched outcome of one game.
///
/// `make_move` is the only mutator of game progress and `new_game` the only
/// way back to [`Outcome::InProgress`] once a game is decided.
///
/// Deserializing replays the recorded history on a fresh game and rejects the
/// input unless board, turn and outcome match the replay exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GameSnapshot")]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) to_move: Mark,
    pub(crate) outcome: Outcome,
    pub(crate) history: Vec<Move>,
}

impl GameState {
    /// Creates a game with an empty board and X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Mark::X,
            outcome: Outcome::InProgress,
            history: Vec::new(),
        }
    }

    /// Resets to an empty board, X to move, outcome in progress.
    #[instrument(skip(self), fields(moves = self.history.len(), outcome = %self.outcome))]
    pub fn new_game(&mut self) {
        *self = Self::new();
        info!("New game started");
    }

    /// Returns the player to move.
    pub fn current_player(&self) -> Mark {
        self.to_move
    }

    /// Returns the current outcome.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the successful placements, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Empty positions, or none once the game is decided.
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.outcome.is_decided() {
            Vec::new()
        } else {
            Position::valid_moves(&self.board)
        }
    }

    /// Places the current player's mark at `index` (0-8).
    ///
    /// An occupied cell is a no-op reported as [`Placement::Occupied`]: the
    /// board and turn stay as they are. The outcome is recomputed after every
    /// accepted attempt.
    ///
    /// # Errors
    ///
    /// - [`GameError::InvalidIndex`] if `index` is not 0-8.
    /// - [`GameError::GameOver`] if the outcome is already decided.
    /// - [`GameError::InvariantViolation`] if a postcondition fails (debug builds).
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn make_move(&mut self, index: usize) -> Result<Placement, GameError> {
        let position = Position::from_index(index).ok_or_else(|| {
            warn!(index, "Rejected move outside the board");
            GameError::InvalidIndex { index }
        })?;

        if self.outcome.is_decided() {
            warn!(%position, outcome = %self.outcome, "Rejected move after game end");
            return Err(GameError::GameOver {
                outcome: self.outcome,
            });
        }

        let placement = if self.board.is_empty(position) {
            let mov = Move::new(self.to_move, position);
            self.board.set(position, Cell::Occupied(mov.mark));
            self.history.push(mov);
            self.to_move = self.to_move.opponent();
            debug!(%mov, "Mark placed");
            Placement::Placed(mov)
        } else {
            debug!(%position, "Cell already occupied, ignoring move");
            Placement::Occupied(position)
        };

        self.outcome = self.calculate_winner();
        if self.outcome.is_decided() {
            info!(outcome = %self.outcome, "Game decided");
        }

        #[cfg(debug_assertions)]
        self.check_invariants()?;

        Ok(placement)
    }

    /// Plays `indices` in order on a fresh game.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by [`make_move`](Self::make_move).
    #[instrument]
    pub fn replay(indices: &[usize]) -> Result<Self, GameError> {
        let mut game = Self::new();
        for &index in indices {
            game.make_move(index)?;
        }
        Ok(game)
    }

    /// Derives the outcome from the board.
    ///
    /// A decided outcome is returned as is; it never reverts or changes winner.
    fn calculate_winner(&self) -> Outcome {
        if self.outcome.is_decided() {
            return self.outcome;
        }

        if let Some(mark) = rules::check_winner(&self.board) {
            Outcome::Wins(mark)
        } else if rules::is_full(&self.board) {
            Outcome::Draw
        } else {
            Outcome::InProgress
        }
    }

    #[cfg(debug_assertions)]
    fn check_invariants(&self) -> Result<(), GameError> {
        GameInvariants::check_all(self).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            GameError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

/// Untrusted serialized form of a [`GameState`].
#[derive(Debug, Deserialize)]
struct GameSnapshot {
    board: Board,
    to_move: Mark,
    outcome: Outcome,
    history: Vec<Move>,
}

impl TryFrom<GameSnapshot> for GameState {
    type Error = GameError;

    #[instrument(skip_all, fields(moves = snapshot.history.len()))]
    fn try_from(snapshot: GameSnapshot) -> Result<Self, Self::Error> {
        let indices: Vec<usize> = snapshot
            .history
            .iter()
            .map(|mov| mov.position.to_index())
            .collect();
        let game = Self::replay(&indices)?;

        let mismatches: Vec<&str> = [
            (game.history == snapshot.history, "history"),
            (game.board == snapshot.board, "board"),
            (game.to_move == snapshot.to_move, "to_move"),
            (game.outcome == snapshot.outcome, "outcome"),
        ]
        .into_iter()
        .filter(|(matches, _)| !matches)
        .map(|(_, field)| field)
        .collect();

        if mismatches.is_empty() {
            Ok(game)
        } else {
            warn!(?mismatches, "Rejected snapshot that disagrees with its history");
            Err(GameError::InvariantViolation(format!(
                "Snapshot disagrees with its replayed history: {}",
                mismatches.join(", ")
            )))
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
