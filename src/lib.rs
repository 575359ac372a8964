//! Minesweeper board engine.
//!
//! Generates square boards with uniformly placed mines and precomputed
//! adjacency numbers, then tracks reveals (flood-filling zero regions),
//! flags, and the win/loss phase. Rendering and input handling belong to
//! the embedding host; this crate only answers what each cell looks like
//! and what every action did.

use ndarray::Array2;
use serde::{Deserialize, Serialize};
use std::ops::Index;

pub use board::*;
pub use cell::*;
pub use error::*;
pub use generator::*;
pub use types::*;

mod board;
mod cell;
mod error;
mod generator;
mod types;

/// Size and mine count of a board, validated at construction.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardConfig {
    size: Coord,
    mines: CellCount,
}

impl BoardConfig {
    /// Builds a config without validation. Callers must uphold `size >= 1`
    /// and `mines < size * size` themselves.
    pub const fn new_unchecked(size: Coord, mines: CellCount) -> Self {
        Self { size, mines }
    }

    /// Rejects empty boards and mine counts that leave no safe cell.
    pub fn new(size: Coord, mines: CellCount) -> Result<Self> {
        if size < 1 || mines >= square(size) {
            return Err(GameError::InvalidConfiguration);
        }
        Ok(Self::new_unchecked(size, mines))
    }

    /// The classic density of one mine per ten cells: `mines = size^2 / 10`.
    pub fn with_default_mines(size: Coord) -> Result<Self> {
        Self::new(size, square(size) / 10)
    }

    pub const fn size(&self) -> Coord {
        self.size
    }

    pub const fn mines(&self) -> CellCount {
        self.mines
    }

    pub const fn total_cells(&self) -> CellCount {
        square(self.size)
    }

    pub const fn safe_cells(&self) -> CellCount {
        self.total_cells() - self.mines
    }

    pub const fn contains(&self, coords: Coord2) -> bool {
        coords.0 < self.size && coords.1 < self.size
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if self.contains(coords) {
            Ok(coords)
        } else {
            Err(GameError::OutOfBounds)
        }
    }
}

/// Mine placement for one game: a square boolean mask plus its mine count.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MineLayout {
    size: Coord,
    mines: Array2<bool>,
    count: CellCount,
}

impl MineLayout {
    /// Mask invariant: `mines` is a `size x size` array.
    pub(crate) fn from_mine_mask(size: Coord, mines: Array2<bool>) -> Self {
        debug_assert_eq!(mines.dim(), (size as usize, size as usize));
        let count = mines.iter().filter(|&&is_mine| is_mine).count() as CellCount;
        Self { size, mines, count }
    }

    /// Builds a layout from explicit mine coordinates; duplicates collapse
    /// into a single mine.
    pub fn from_mine_coords(size: Coord, mine_coords: &[Coord2]) -> Result<Self> {
        if size < 1 {
            return Err(GameError::InvalidConfiguration);
        }
        let mut mines = Array2::from_elem((size as usize, size as usize), false);
        for &coords in mine_coords {
            if coords.0 >= size || coords.1 >= size {
                return Err(GameError::OutOfBounds);
            }
            mines[coords.to_grid_index()] = true;
        }
        Ok(Self::from_mine_mask(size, mines))
    }

    pub fn config(&self) -> BoardConfig {
        BoardConfig::new_unchecked(self.size, self.count)
    }

    pub const fn size(&self) -> Coord {
        self.size
    }

    pub const fn mine_count(&self) -> CellCount {
        self.count
    }

    pub const fn total_cells(&self) -> CellCount {
        square(self.size)
    }

    pub const fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.count
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self[coords]
    }

    /// Mines among the 8 in-bounds neighbors of `coords`.
    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        Neighbors::of(coords, self.size)
            .filter(|&pos| self[pos])
            .count() as u8
    }
}

impl Index<Coord2> for MineLayout {
    type Output = bool;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.mines[coords.to_grid_index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_rejects_zero_size() {
        assert_eq!(BoardConfig::new(0, 0), Err(GameError::InvalidConfiguration));
    }

    #[test]
    fn config_rejects_mine_counts_that_fill_the_board() {
        assert_eq!(BoardConfig::new(3, 9), Err(GameError::InvalidConfiguration));
        assert_eq!(BoardConfig::new(3, 10), Err(GameError::InvalidConfiguration));
        assert!(BoardConfig::new(3, 8).is_ok());
    }

    #[test]
    fn config_allows_zero_mines() {
        let config = BoardConfig::new(5, 0).unwrap();
        assert_eq!(config.safe_cells(), 25);
    }

    #[test]
    fn default_density_is_a_tenth_of_the_area() {
        assert_eq!(BoardConfig::with_default_mines(30).unwrap().mines(), 90);
        // small boards round down to mine-free
        assert_eq!(BoardConfig::with_default_mines(3).unwrap().mines(), 0);
    }

    #[test]
    fn validate_coords_checks_both_axes() {
        let config = BoardConfig::new(4, 2).unwrap();
        assert_eq!(config.validate_coords((3, 3)), Ok((3, 3)));
        assert_eq!(config.validate_coords((4, 0)), Err(GameError::OutOfBounds));
        assert_eq!(config.validate_coords((0, 4)), Err(GameError::OutOfBounds));
    }

    #[test]
    fn layout_counts_mines_and_collapses_duplicates() {
        let layout = MineLayout::from_mine_coords(4, &[(0, 0), (3, 1), (0, 0)]).unwrap();
        assert_eq!(layout.mine_count(), 2);
        assert!(layout.contains_mine((0, 0)));
        assert!(layout.contains_mine((3, 1)));
        assert!(!layout.contains_mine((1, 1)));
    }

    #[test]
    fn layout_rejects_out_of_bounds_mines() {
        assert_eq!(
            MineLayout::from_mine_coords(3, &[(3, 0)]),
            Err(GameError::OutOfBounds)
        );
    }

    #[test]
    fn adjacency_counts_clip_at_the_edges() {
        let layout = MineLayout::from_mine_coords(3, &[(0, 0)]).unwrap();
        assert_eq!(layout.adjacent_mine_count((1, 0)), 1);
        assert_eq!(layout.adjacent_mine_count((0, 1)), 1);
        assert_eq!(layout.adjacent_mine_count((1, 1)), 1);
        assert_eq!(layout.adjacent_mine_count((2, 2)), 0);
    }

    #[test]
    fn eight_mines_around_the_center() {
        let ring: Vec<Coord2> = Neighbors::of((1, 1), 3).collect();
        let layout = MineLayout::from_mine_coords(3, &ring).unwrap();
        assert_eq!(layout.adjacent_mine_count((1, 1)), 8);
    }
}
