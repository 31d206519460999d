use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Owned, read-only copy of a game for rendering.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub state: GameState,
    pub mine_count: CellCount,
    pub remaining_hidden: CellCount,
    pub cells: Array2<Cell>,
}

impl Snapshot {
    pub fn side(&self) -> Coord {
        self.cells.nrows() as Coord
    }

    /// `None` for coordinates off the board.
    pub fn cell_at(&self, coords: Coord2) -> Option<Cell> {
        self.cells.get(coords.to_nd_index()).copied()
    }

    /// Rows top to bottom, each one left to right.
    pub fn rows(&self) -> impl Iterator<Item = impl Iterator<Item = Cell> + '_> + '_ {
        self.cells.rows().into_iter().map(|row| row.into_iter().copied())
    }
}
