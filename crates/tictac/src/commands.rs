//! One-shot commands: replay a list of cells, classify an occupant.

use super::host::{parse_cell, parse_occupant};
use anyhow::{Context, Result, bail};
use std::io::Write;
use tictac_core::GameState;
use tictac_view::{BoardView, RenderOptions, classify, status_line};
use tracing::{info, instrument};

/// Plays `cells` in order on a fresh game and writes the result.
///
/// With `json` the final state is written as pretty JSON, otherwise the board
/// and status line. Nothing is written if a cell is rejected.
///
/// # Errors
///
/// Fails on the first cell that does not parse or that the game rejects; the
/// [`GameError`](tictac_core::GameError) stays reachable through `downcast_ref`.
#[instrument(skip(options, output))]
pub fn replay<W: Write>(
    cells: &[String],
    json: bool,
    options: &RenderOptions,
    mut output: W,
) -> Result<GameState> {
    let mut game = GameState::new();
    for (n, cell) in cells.iter().enumerate() {
        let Some(index) = parse_cell(cell) else {
            bail!("Move {} ({}) is not a cell", n + 1, cell);
        };
        game.make_move(index)
            .with_context(|| format!("Move {} ({}) rejected", n + 1, cell))?;
    }
    info!(moves = game.history().len(), outcome = %game.outcome(), "Replay finished");

    if json {
        let text = serde_json::to_string_pretty(&game).context("Failed to serialize game")?;
        writeln!(output, "{}", text)?;
    } else {
        writeln!(output, "{}", BoardView::new(game.board(), options))?;
        writeln!(output, "{}", status_line(&game))?;
    }
    Ok(game)
}

/// Writes the configured class name for an occupant (`X`, `O` or `-`).
#[instrument(skip(options, output))]
pub fn classify_occupant<W: Write>(
    cell: &str,
    options: &RenderOptions,
    mut output: W,
) -> Result<()> {
    let Some(occupant) = parse_occupant(cell) else {
        bail!("Expected X, O or -, got {:?}", cell);
    };
    writeln!(output, "{}", options.class_for(classify(occupant)))?;
    Ok(())
}
