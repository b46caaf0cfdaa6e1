//! Terminal host: owns one game and feeds it user events one at a time.

use anyhow::{Context, Result};
use std::io::{BufRead, ErrorKind, Write};
use tictac_core::{Cell, GameError, GameState, Mark, Placement, Position};
use tictac_view::{BoardView, RenderOptions, status_line};
use tracing::{debug, info, instrument, warn};

/// A single user event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostCommand {
    /// Place the current player's mark at a cell index.
    Move(usize),
    /// Start over.
    NewGame,
    /// Leave the loop.
    Quit,
}

impl HostCommand {
    /// Parses one line of input.
    ///
    /// Numbers are passed through unchecked so the game reports range errors.
    #[instrument]
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim().to_lowercase().as_str() {
            "new" | "reset" => Some(HostCommand::NewGame),
            "quit" | "exit" | "q" => Some(HostCommand::Quit),
            other => parse_cell(other).map(HostCommand::Move),
        }
    }
}

/// Parses a cell given as an index or a position name.
pub fn parse_cell(s: &str) -> Option<usize> {
    let s = s.trim();
    s.parse::<usize>()
        .ok()
        .or_else(|| Position::parse(s).map(Position::to_index))
}

/// Parses a cell occupant: `X`, `O`, or `-`/`empty`.
pub fn parse_occupant(s: &str) -> Option<Cell> {
    match s.trim().to_lowercase().as_str() {
        "x" => Some(Cell::Occupied(Mark::X)),
        "o" => Some(Cell::Occupied(Mark::O)),
        "-" | "" | "empty" => Some(Cell::Empty),
        _ => None,
    }
}

/// Owns the game and re-renders it after every event.
#[derive(Debug, Clone, Default)]
pub struct Host {
    game: GameState,
    options: RenderOptions,
}

impl Host {
    /// Creates a host with a fresh game.
    pub fn new(options: RenderOptions) -> Self {
        Self {
            game: GameState::new(),
            options,
        }
    }

    /// The hosted game.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Board followed by the status line.
    pub fn render(&self) -> String {
        format!(
            "{}\n{}",
            BoardView::new(self.game.board(), &self.options),
            status_line(&self.game)
        )
    }

    /// Applies one event to the game.
    ///
    /// Returns `None` for [`HostCommand::Quit`] and `NewGame`.
    #[instrument(skip(self))]
    pub fn handle(&mut self, command: HostCommand) -> Result<Option<Placement>, GameError> {
        match command {
            HostCommand::Move(index) => self.game.make_move(index).map(Some),
            HostCommand::NewGame => {
                self.game.new_game();
                Ok(None)
            }
            HostCommand::Quit => Ok(None),
        }
    }

    /// Reads events from `input` until `quit` or end of input.
    #[instrument(skip_all)]
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<()> {
        info!("Starting interactive session");
        writeln!(output, "{}", self.render()).context("Failed to write board")?;

        for line in input.lines() {
            // The bad line is already consumed, so reading carries on after it.
            let line = match line {
                Ok(line) => line,
                Err(e) if e.kind() == ErrorKind::InvalidData => {
                    warn!(error = %e, "Skipping input that is not UTF-8");
                    writeln!(output, "Input is not valid UTF-8")?;
                    continue;
                }
                Err(e) => return Err(e).context("Failed to read input"),
            };
            if line.trim().is_empty() {
                continue;
            }

            let Some(command) = HostCommand::parse(&line) else {
                debug!(%line, "Unrecognized input");
                writeln!(output, "Unrecognized input: {}", line.trim())?;
                continue;
            };
            if command == HostCommand::Quit {
                break;
            }

            match self.handle(command) {
                Ok(Some(Placement::Occupied(position))) => {
                    writeln!(output, "{} is already taken", position)?;
                }
                Ok(_) => {}
                Err(e) => {
                    warn!(error = %e, "Move rejected");
                    writeln!(output, "{}", e)?;
                }
            }
            writeln!(output, "{}", self.render())?;
        }

        info!(outcome = %self.game.outcome(), "Session ended");
        Ok(())
    }
}
