//! Display adapters for tic-tac-toe.
//!
//! Everything here is a pure function of [`tictac_core`] state: nothing is
//! stored and nothing is mutated.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board_view;
mod cell_view;
mod classify;

pub use board_view::{BoardView, RenderOptions, status_line};
pub use cell_view::CellView;
pub use classify::{Category, classify};
