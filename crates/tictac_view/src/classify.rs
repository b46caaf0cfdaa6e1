//! Display category of a cell occupant.

use serde::{Deserialize, Serialize};
use tictac_core::{Cell, Mark};

/// Display category used to style a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Category {
    /// Cells holding X.
    Primary,
    /// Cells holding O, and empty cells.
    Accent,
}

impl Category {
    /// Default style class name.
    pub fn css_class(&self) -> &'static str {
        match self {
            Category::Primary => "primary",
            Category::Accent => "accent",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.css_class())
    }
}

/// Maps a cell occupant to its category: X is primary, anything else accent.
pub fn classify(cell: Cell) -> Category {
    match cell {
        Cell::Occupied(Mark::X) => Category::Primary,
        Cell::Occupied(Mark::O) | Cell::Empty => Category::Accent,
    }
}
