use rand::prelude::*;

use super::*;

/// Uniform placement by rejection sampling: coordinates are drawn until
/// enough distinct cells carry a mine. Fast at the densities this engine
/// allows, since at least one cell always stays free.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomMineGenerator {
    seed: u64,
}

impl RandomMineGenerator {
    pub const fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Generator with a fresh seed from the thread rng.
    pub fn from_entropy() -> Self {
        Self::new(rand::rng().random())
    }
}

impl MineGenerator for RandomMineGenerator {
    fn generate(self, config: BoardConfig) -> MineLayout {
        let size = config.size();
        let total = config.total_cells();

        // an unchecked config may request more mines than cells; keep one
        // cell free for the mandatory first reveal
        let mut target = config.mines();
        if target >= total {
            let clamped = total.saturating_sub(1);
            log::warn!("{target} mines do not fit a {size}x{size} board, clamping to {clamped}");
            target = clamped;
        }

        let mut mines = Array2::from_elem((size as usize, size as usize), false);
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut placed: CellCount = 0;
        let mut samples: u32 = 0;

        while placed < target {
            let coords: Coord2 = (rng.random_range(0..size), rng.random_range(0..size));
            samples += 1;
            let index = coords.to_grid_index();
            if !mines[index] {
                mines[index] = true;
                placed += 1;
            }
        }
        log::debug!("placed {placed} mines on a {size}x{size} board in {samples} samples");

        MineLayout::from_mine_mask(size, mines)
    }
}
