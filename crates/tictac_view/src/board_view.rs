//! Text rendering of the whole board and the game status.

use super::{CellView, Category, classify};
use derive_setters::Setters;
use strum::IntoEnumIterator;
use tictac_core::{Board, GameState, Outcome, Position};
use tracing::instrument;

/// How a board is rendered.
#[derive(Debug, Clone, PartialEq, Eq, Setters)]
#[setters(into)]
pub struct RenderOptions {
    /// Label for empty cells.
    pub empty_label: String,
    /// Show the 1-based cell number in empty cells instead of `empty_label`.
    pub show_indices: bool,
    /// Append a legend listing occupied cells per category.
    pub show_categories: bool,
    /// Class name for [`Category::Primary`].
    pub primary_class: String,
    /// Class name for [`Category::Accent`].
    pub accent_class: String,
}

impl RenderOptions {
    /// Class name configured for `category`.
    pub fn class_for(&self, category: Category) -> &str {
        match category {
            Category::Primary => &self.primary_class,
            Category::Accent => &self.accent_class,
        }
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            empty_label: " ".to_string(),
            show_indices: false,
            show_categories: false,
            primary_class: Category::Primary.css_class().to_string(),
            accent_class: Category::Accent.css_class().to_string(),
        }
    }
}

/// A board rendered as a 3x3 text grid.
#[derive(Debug, Clone, Copy)]
pub struct BoardView<'a> {
    board: &'a Board,
    options: &'a RenderOptions,
}

impl<'a> BoardView<'a> {
    /// Creates a view of `board`.
    pub fn new(board: &'a Board, options: &'a RenderOptions) -> Self {
        Self { board, options }
    }

    fn cell_text(&self, pos: Position) -> String {
        let cell = self.board.get(pos);
        if cell.is_empty() && self.options.show_indices {
            return (pos.to_index() + 1).to_string();
        }
        CellView::with_empty_label(cell, &self.options.empty_label).to_string()
    }

    fn legend(&self) -> String {
        Category::iter()
            .map(|category| {
                let cells: Vec<String> = Position::ALL
                    .iter()
                    .filter(|pos| {
                        let cell = self.board.get(**pos);
                        !cell.is_empty() && classify(cell) == category
                    })
                    .map(|pos| (pos.to_index() + 1).to_string())
                    .collect();
                let cells = if cells.is_empty() {
                    "-".to_string()
                } else {
                    cells.join(" ")
                };
                format!("{}: {}", self.options.class_for(category), cells)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl std::fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, cells) in Position::ALL.chunks(3).enumerate() {
            let texts: Vec<String> = cells.iter().map(|pos| self.cell_text(*pos)).collect();
            f.write_str(&texts.join("|"))?;
            if row < 2 {
                f.write_str("\n-+-+-\n")?;
            }
        }
        if self.options.show_categories {
            write!(f, "\n\n{}", self.legend())?;
        }
        Ok(())
    }
}

/// One-line description of where the game stands.
#[instrument(skip(game))]
pub fn status_line(game: &GameState) -> String {
    match game.outcome() {
        Outcome::InProgress => format!("Next player: {}", game.current_player()),
        Outcome::Wins(mark) => format!("Player {} won the game!", mark),
        Outcome::Draw => "It's a draw!".to_string(),
    }
}
