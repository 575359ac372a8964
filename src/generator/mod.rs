use crate::*;

pub use random::*;

mod random;

/// Strategy for laying out mines on an empty board.
pub trait MineGenerator {
    fn generate(self, config: BoardConfig) -> MineLayout;
}
