use std::fmt;
use sweeper_core::{Cell, Snapshot};

const HIDDEN: &str = "?";
const MINE: &str = "*";
const SEPARATOR: &str = "| ";

fn glyph(cell: Cell) -> String {
    if !cell.is_visible() {
        HIDDEN.to_string()
    } else if cell.is_mine() {
        MINE.to_string()
    } else if cell.adjacent_mines() > 0 {
        cell.adjacent_mines().to_string()
    } else {
        " ".to_string()
    }
}

/// Fixed-width table of a snapshot with row and column headers.
///
/// Every field is as wide as the side length's digit count plus one, so multi-digit headers stay
/// aligned with the cells beneath them.
pub struct BoardView<'a>(pub &'a Snapshot);

impl fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let side = self.0.side();
        let width = side.to_string().len() + 1;
        let divider = "-".repeat(1 + (usize::from(side) + 1) * (width + SEPARATOR.len()));

        write!(f, " {:<width$}{SEPARATOR}", "")?;
        for col in 0..side {
            write!(f, "{col:<width$}{SEPARATOR}")?;
        }
        write!(f, "\n{divider}")?;

        for (row, cells) in self.0.rows().enumerate() {
            write!(f, "\n {row:<width$}{SEPARATOR}")?;
            for cell in cells {
                write!(f, "{:<width$}{SEPARATOR}", glyph(cell))?;
            }
            write!(f, "\n{divider}")?;
        }

        Ok(())
    }
}
