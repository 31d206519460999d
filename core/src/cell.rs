use serde::{Deserialize, Serialize};

/// One board position. Mine and count are fixed when the board is built, only visibility changes afterwards.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    is_mine: bool,
    is_visible: bool,
    adjacent_mines: u8,
}

impl Cell {
    pub(crate) const fn hidden(is_mine: bool) -> Self {
        Self {
            is_mine,
            is_visible: false,
            adjacent_mines: 0,
        }
    }

    pub const fn is_mine(self) -> bool {
        self.is_mine
    }

    pub const fn is_visible(self) -> bool {
        self.is_visible
    }

    /// Mines among the eight neighbours, not meaningful for a mine cell.
    pub const fn adjacent_mines(self) -> u8 {
        self.adjacent_mines
    }

    /// A visible safe cell with no adjacent mine, the kind that keeps a flood fill going.
    pub const fn is_open_zero(self) -> bool {
        self.is_visible && !self.is_mine && self.adjacent_mines == 0
    }

    pub(crate) fn add_adjacent_mine(&mut self) {
        self.adjacent_mines += 1;
    }

    /// Returns whether the cell was hidden before.
    pub(crate) fn reveal(&mut self) -> bool {
        !core::mem::replace(&mut self.is_visible, true)
    }
}
