use core::ops::Index;
use ndarray::Array2;
use serde::Serialize;

use crate::*;

/// Grid of cells with mine flags and adjacency counts filled in from a [`MineLayout`].
///
/// Only built through [`Board::from_layout`], so it is serializable but not deserializable.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Board {
    cells: Array2<Cell>,
}

impl Board {
    pub fn from_layout(layout: &MineLayout) -> Self {
        let side = layout.side();
        let mut cells = Array2::from_shape_fn((side, side).to_nd_index(), |(row, col)| {
            Cell::hidden(layout[(row as Coord, col as Coord)])
        });

        for mine in layout.iter_mines() {
            for pos in neighbors(mine, side) {
                cells[pos.to_nd_index()].add_adjacent_mine();
            }
        }

        Self { cells }
    }

    pub fn side(&self) -> Coord {
        self.cells.nrows() as Coord
    }

    pub fn cells(&self) -> &Array2<Cell> {
        &self.cells
    }

    pub fn get(&self, coords: Coord2) -> Option<Cell> {
        self.cells.get(coords.to_nd_index()).copied()
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> impl Iterator<Item = Coord2> + use<> {
        neighbors(coords, self.side())
    }

    /// Marks the cell visible, returns whether it was hidden before.
    pub(crate) fn reveal(&mut self, coords: Coord2) -> bool {
        self.cells[coords.to_nd_index()].reveal()
    }
}

impl Index<Coord2> for Board {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brute_force_count(layout: &MineLayout, (row, col): Coord2) -> u8 {
        let side = layout.side() as i32;
        let mut count = 0;
        for d_row in -1..=1 {
            for d_col in -1..=1 {
                if d_row == 0 && d_col == 0 {
                    continue;
                }
                let (r, c) = (row as i32 + d_row, col as i32 + d_col);
                if (0..side).contains(&r) && (0..side).contains(&c) && layout[(r as Coord, c as Coord)]
                {
                    count += 1;
                }
            }
        }
        count
    }

    #[test]
    fn adjacency_matches_brute_force() {
        let layout =
            MineLayout::from_mine_coords(5, &[(0, 0), (0, 1), (2, 2), (4, 4), (3, 0)]).unwrap();
        let board = Board::from_layout(&layout);

        for row in 0..5 {
            for col in 0..5 {
                let cell = board[(row, col)];
                assert_eq!(cell.is_mine(), layout[(row, col)]);
                assert!(!cell.is_visible());
                if !cell.is_mine() {
                    assert_eq!(
                        cell.adjacent_mines(),
                        brute_force_count(&layout, (row, col)),
                        "count at {:?}",
                        (row, col)
                    );
                }
            }
        }
    }

    #[test]
    fn mine_cells_keep_their_flag() {
        let layout = MineLayout::from_mine_coords(2, &[(0, 0), (1, 1)]).unwrap();
        let board = Board::from_layout(&layout);

        assert!(board[(0, 0)].is_mine());
        assert_eq!(board[(0, 0)].adjacent_mines(), 1);
        assert_eq!(board[(0, 1)].adjacent_mines(), 2);
        assert_eq!(board.cells().iter().filter(|cell| cell.is_mine()).count(), 2);
    }

    #[test]
    fn get_returns_none_off_board() {
        let layout = MineLayout::from_mine_coords(2, &[]).unwrap();
        let board = Board::from_layout(&layout);

        assert!(board.get((1, 1)).is_some());
        assert!(board.get((2, 0)).is_none());
    }
}
