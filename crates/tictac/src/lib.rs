//! Tictac - terminal host for tic-tac-toe
//!
//! The host owns a single [`GameState`](tictac_core::GameState), turns each
//! line of user input into one game event and re-renders the board after
//! every event.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod commands;
mod config;
mod host;

pub use config::{AppConfig, ConfigError};
pub use host::{Host, HostCommand, parse_cell, parse_occupant};
