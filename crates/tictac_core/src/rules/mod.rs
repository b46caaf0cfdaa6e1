//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](super::Board). They know nothing about
//! turns or latching; [`GameState`](super::GameState) layers those on top.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, check_winner};
