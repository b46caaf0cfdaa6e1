//! Tictac - unified CLI

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use tictac::{AppConfig, Host, commands};
use tictac_view::RenderOptions;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing();

    let config = match &cli.config {
        Some(path) => AppConfig::from_file(path)?,
        None => AppConfig::default(),
    };
    let options = config.render_options();

    match cli.command {
        Command::Play => run_play(options),
        Command::Replay { cells, json } => {
            commands::replay(&cells, json, &options, std::io::stdout().lock()).map(|_| ())
        }
        Command::Classify { cell } => {
            commands::classify_occupant(&cell, &options, std::io::stdout().lock())
        }
    }
}

/// Logs go to stderr so they never mix with the board on stdout.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Run the interactive loop on stdin/stdout
fn run_play(options: RenderOptions) -> Result<()> {
    let mut host = Host::new(options);
    let stdin = std::io::stdin();
    host.run(stdin.lock(), std::io::stdout().lock())
}
