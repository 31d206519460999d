use super::*;
use alloc::vec::Vec;
use ndarray::Array2;

/// Uniform placement: every cell is equally likely to hold a mine, reproducible from `seed`.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomLayoutGenerator {
    seed: u64,
}

impl RandomLayoutGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl MineLayoutGenerator for RandomLayoutGenerator {
    fn generate(self, config: GameConfig) -> MineLayout {
        use rand::prelude::*;

        let side = config.side();
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut coords: Vec<Coord2> = (0..side)
            .flat_map(|row| (0..side).map(move |col| (row, col)))
            .collect();
        let (picked, _) = coords.partial_shuffle(&mut rng, config.mines() as usize);

        let mut mine_mask: Array2<bool> = Array2::default((side, side).to_nd_index());
        for &pos in picked.iter() {
            mine_mask[pos.to_nd_index()] = true;
        }
        log::debug!(
            "Placed {} mines on a {}x{} board, seed {}",
            picked.len(),
            side,
            side,
            self.seed
        );

        MineLayout::new_unchecked(mine_mask, config.mines())
    }
}
