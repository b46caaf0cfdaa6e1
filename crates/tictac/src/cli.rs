//! Command-line interface for tictac.

use clap::{Parser, Subcommand};

/// Tictac - tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictac")]
#[command(about = "Two-player tic-tac-toe", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML display config
    #[arg(short, long, global = true)]
    pub config: Option<std::path::PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively: enter a cell (0-8 or a name like "center"), "new" or "quit"
    Play,

    /// Play a sequence of cells on a fresh game and print the result
    Replay {
        /// Cells to play in order (0-8 or names)
        #[arg(required = true)]
        cells: Vec<String>,

        /// Print the final game state as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the display class for a cell occupant (X, O or -)
    Classify {
        /// Occupant to classify
        cell: String,
    },
}
