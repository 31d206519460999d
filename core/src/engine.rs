use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - Ongoing -> Won
/// - Ongoing -> Lost
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    #[default]
    Ongoing,
    Won,
    Lost,
}

impl GameState {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// A game from first move to win or loss. Owns its board; callers only ever see [`Snapshot`]s.
///
/// Restoring a game means replaying moves on a [`MineLayout`], there is no `Deserialize`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Game {
    board: Board,
    mine_count: CellCount,
    remaining_hidden: CellCount,
    state: GameState,
}

impl Game {
    pub fn new(config: GameConfig, generator: impl MineLayoutGenerator) -> Self {
        Self::from_layout(&generator.generate(config))
    }

    /// Starts a game on a fixed layout, bypassing random placement.
    pub fn with_layout(layout: MineLayout) -> Self {
        Self::from_layout(&layout)
    }

    fn from_layout(layout: &MineLayout) -> Self {
        log::debug!(
            "New {}x{} game with {} mines",
            layout.side(),
            layout.side(),
            layout.mine_count()
        );
        Self {
            board: Board::from_layout(layout),
            mine_count: layout.mine_count(),
            remaining_hidden: layout.total_cells(),
            state: GameState::default(),
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn side(&self) -> Coord {
        self.board.side()
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn remaining_hidden(&self) -> CellCount {
        self.remaining_hidden
    }

    pub fn cell_at(&self, coords: Coord2) -> Option<Cell> {
        self.board.get(coords)
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            state: self.state,
            mine_count: self.mine_count,
            remaining_hidden: self.remaining_hidden,
            cells: self.board.cells().clone(),
        }
    }

    /// Reveals the cell at `coords`, flooding through zero cells, and updates the game state.
    ///
    /// Rejected moves leave the game untouched: off-board coordinates, an already visible cell, or
    /// a game that has already ended.
    pub fn apply_move(&mut self, coords: Coord2) -> Result<Snapshot> {
        self.check_move(coords).inspect_err(|err| {
            log::debug!("Rejected move at {:?}: {}", coords, err);
        })?;

        let revealed = self.reveal_from(coords);
        log::debug!("Move at {:?} revealed {} cells", coords, revealed);

        if self.board[coords].is_mine() {
            self.state = GameState::Lost;
            log::debug!("Mine hit at {:?}", coords);
        } else if self.remaining_hidden == self.mine_count {
            self.state = GameState::Won;
            log::debug!("All safe cells revealed");
        }

        Ok(self.snapshot())
    }

    fn check_move(&self, coords: Coord2) -> Result<()> {
        if self.state.is_finished() {
            return Err(GameError::AlreadyEnded);
        }
        match self.board.get(coords) {
            None => Err(GameError::InvalidCoords),
            Some(cell) if cell.is_visible() => Err(GameError::AlreadyRevealed),
            Some(_) => Ok(()),
        }
    }

    /// Worklist flood fill; visibility doubles as the visited set.
    fn reveal_from(&mut self, start: Coord2) -> CellCount {
        let mut revealed = 0;
        let mut to_visit = Vec::from([start]);

        while let Some(coords) = to_visit.pop() {
            if !self.board.reveal(coords) {
                continue;
            }
            self.remaining_hidden -= 1;
            revealed += 1;

            if self.board[coords].is_open_zero() {
                to_visit.extend(
                    self.board
                        .iter_neighbors(coords)
                        .filter(|&pos| !self.board[pos].is_visible()),
                );
                log::trace!("Flood continues from {:?}", coords);
            }
        }

        revealed
    }
}
