//! Tic-tac-toe game state.
//!
//! [`GameState`] owns a 3x3 [`Board`], the [`Mark`] to move and a latched
//! [`Outcome`]. It is the only mutator of game progress:
//!
//! ```
//! use tictac_core::{GameState, Mark, Outcome};
//!
//! let mut game = GameState::new();
//! for index in [0, 1, 4, 2, 8] {
//!     game.make_move(index)?;
//! }
//! assert_eq!(game.outcome(), Outcome::Wins(Mark::X));
//! # Ok::<(), tictac_core::GameError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod game;
pub mod invariants;
mod outcome;
mod position;
pub mod rules;
mod types;

pub use action::{GameError, Move, Placement};
pub use game::GameState;
pub use outcome::Outcome;
pub use position::Position;
pub use types::{Board, Cell, Mark};
