#![no_std]

extern crate alloc;

use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use snapshot::*;
pub use types::*;

mod board;
mod cell;
mod engine;
mod error;
mod generator;
mod snapshot;
mod types;

/// Validated board parameters: side length and mine count.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    side: Coord,
    mines: CellCount,
}

impl GameConfig {
    /// Rejects a zero side and any mine count that would not leave a safe cell.
    pub const fn new(side: Coord, mines: CellCount) -> Result<Self> {
        if side == 0 {
            return Err(GameError::EmptyBoard);
        }
        let cells = square(side);
        if mines >= cells {
            return Err(GameError::TooManyMines { mines, cells });
        }
        Ok(Self { side, mines })
    }

    pub const fn side(&self) -> Coord {
        self.side
    }

    pub const fn mines(&self) -> CellCount {
        self.mines
    }

    pub const fn total_cells(&self) -> CellCount {
        square(self.side)
    }
}

/// Square mine mask with at least one safe cell. Deserialized input goes through the same checks
/// as [`MineLayout::from_mine_mask`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "MineLayoutData")]
pub struct MineLayout {
    mine_mask: Array2<bool>,
    mine_count: CellCount,
}

#[derive(Deserialize)]
struct MineLayoutData {
    mine_mask: Array2<bool>,
    mine_count: CellCount,
}

impl TryFrom<MineLayoutData> for MineLayout {
    type Error = GameError;

    fn try_from(data: MineLayoutData) -> Result<Self> {
        let layout = Self::from_mine_mask(data.mine_mask)?;
        if layout.mine_count != data.mine_count {
            return Err(GameError::MineCountMismatch {
                declared: data.mine_count,
                actual: layout.mine_count,
            });
        }
        Ok(layout)
    }
}

impl MineLayout {
    pub(crate) fn new_unchecked(mine_mask: Array2<bool>, mine_count: CellCount) -> Self {
        Self {
            mine_mask,
            mine_count,
        }
    }

    /// Wraps a mask, checking it is square and leaves at least one safe cell.
    pub fn from_mine_mask(mine_mask: Array2<bool>) -> Result<Self> {
        let (rows, cols) = mine_mask.dim();
        if rows != cols {
            return Err(GameError::InvalidBoardShape);
        }
        let side = Coord::try_from(rows).map_err(|_| GameError::InvalidBoardShape)?;
        let mine_count = mine_mask
            .iter()
            .filter(|&&is_mine| is_mine)
            .count()
            .try_into()
            .map_err(|_| GameError::InvalidBoardShape)?;

        GameConfig::new(side, mine_count)?;

        Ok(Self::new_unchecked(mine_mask, mine_count))
    }

    /// Builds a layout from explicit mine positions, duplicates count once.
    pub fn from_mine_coords(side: Coord, mine_coords: &[Coord2]) -> Result<Self> {
        let mut mine_mask: Array2<bool> = Array2::default((side, side).to_nd_index());

        for &coords in mine_coords {
            if coords.0 >= side || coords.1 >= side {
                return Err(GameError::InvalidCoords);
            }
            mine_mask[coords.to_nd_index()] = true;
        }

        Self::from_mine_mask(mine_mask)
    }

    pub fn side(&self) -> Coord {
        // guarded by `from_mine_mask`
        self.mine_mask.nrows() as Coord
    }

    pub fn total_cells(&self) -> CellCount {
        square(self.side())
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn iter_mines(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.mine_mask
            .indexed_iter()
            .filter(|&(_, &is_mine)| is_mine)
            .map(|((row, col), _)| (row as Coord, col as Coord))
    }
}

impl Index<Coord2> for MineLayout {
    type Output = bool;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.mine_mask[coords.to_nd_index()]
    }
}
