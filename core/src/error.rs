use thiserror::Error;

use crate::CellCount;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Board side must be at least 1")]
    EmptyBoard,
    #[error("Too many mines: {mines} requested but the board only has {cells} cells")]
    TooManyMines { mines: CellCount, cells: CellCount },
    #[error("Board shape is not square")]
    InvalidBoardShape,
    #[error("Layout declares {declared} mines but its mask holds {actual}")]
    MineCountMismatch { declared: CellCount, actual: CellCount },
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Cell is already revealed")]
    AlreadyRevealed,
    #[error("Game already ended, no new moves are accepted")]
    AlreadyEnded,
}

pub type Result<T> = core::result::Result<T, GameError>;
