//! Single cell label.

use tictac_core::Cell;

/// Renders the label of one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellView<'a> {
    cell: Cell,
    empty_label: &'a str,
}

impl<'a> CellView<'a> {
    /// Creates a view that shows nothing for an empty cell.
    pub fn new(cell: Cell) -> Self {
        Self {
            cell,
            empty_label: "",
        }
    }

    /// Uses `label` for an empty cell.
    pub fn with_empty_label(cell: Cell, label: &'a str) -> Self {
        Self {
            cell,
            empty_label: label,
        }
    }

    /// The text to display.
    pub fn label(&self) -> &'a str {
        match self.cell.mark() {
            Some(mark) => mark.symbol(),
            None => self.empty_label,
        }
    }
}

impl From<Cell> for CellView<'_> {
    fn from(cell: Cell) -> Self {
        Self::new(cell)
    }
}

impl std::fmt::Display for CellView<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictac_core::Mark;

    #[test]
    fn test_labels() {
        assert_eq!(CellView::new(Cell::Occupied(Mark::X)).label(), "X");
        assert_eq!(CellView::from(Cell::Occupied(Mark::O)).to_string(), "O");
        assert_eq!(CellView::new(Cell::Empty).label(), "");
        assert_eq!(CellView::with_empty_label(Cell::Empty, ".").label(), ".");
    }
}
