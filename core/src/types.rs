/// Single coordinate axis used for the board side and for positions.
pub type Coord = u16;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u32;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

/// Number of cells on a square board; `Coord::MAX` squared still fits a [`CellCount`].
pub const fn square(side: Coord) -> CellCount {
    let side = side as CellCount;
    side * side
}

/// Row/column steps to the eight surrounding cells, orthogonal ones first.
const NEIGHBOR_OFFSETS: [(i16, i16); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (1, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
];

/// In-bounds neighbours of `center` on a square board of `side` cells, at most eight.
pub fn neighbors(center: Coord2, side: Coord) -> impl Iterator<Item = Coord2> {
    let (row, col) = center;
    NEIGHBOR_OFFSETS.into_iter().filter_map(move |(d_row, d_col)| {
        let row = row.checked_add_signed(d_row).filter(|&row| row < side)?;
        let col = col.checked_add_signed(d_col).filter(|&col| col < side)?;
        Some((row, col))
    })
}
