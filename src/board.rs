use std::collections::{BTreeSet, VecDeque};

use ndarray::Array2;
use rand::prelude::*;
use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - InProgress -> Won
/// - InProgress -> Lost
///
/// Won and Lost are terminal; only [`Board::reset`] yields a playable board
/// again.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Phase {
    InProgress,
    Won,
    Lost,
}

impl Phase {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for Phase {
    fn default() -> Self {
        Self::InProgress
    }
}

/// Outcome of a reveal action.
#[derive(Clone, Debug, PartialEq)]
pub enum RevealOutcome {
    /// Coordinates newly exposed by this action, flood fill included.
    Opened(BTreeSet<Coord2>),
    /// A mine was exposed; the whole board is disclosed and the game lost.
    HitMine,
    AlreadyRevealed,
    /// The cell is flagged; the flag must be removed before revealing.
    Flagged,
}

impl RevealOutcome {
    /// Whether the action changed the board.
    pub fn has_update(&self) -> bool {
        match self {
            Self::Opened(_) => true,
            Self::HitMine => true,
            Self::AlreadyRevealed => false,
            Self::Flagged => false,
        }
    }
}

/// Outcome of a flag toggle.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum FlagOutcome {
    Flagged,
    Unflagged,
    Rejected(FlagRejection),
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum FlagRejection {
    AlreadyRevealed,
}

impl FlagOutcome {
    /// Whether the action changed the board.
    pub const fn has_update(self) -> bool {
        match self {
            Self::Flagged => true,
            Self::Unflagged => true,
            Self::Rejected(_) => false,
        }
    }
}

/// A single game of Minesweeper, from construction to win or loss.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    config: BoardConfig,
    cells: Array2<CellContent>,
    revealed: Array2<bool>,
    flagged: Array2<bool>,
    revealed_count: CellCount,
    flagged_count: CellCount,
    phase: Phase,
}

impl Board {
    /// Fresh board from a validated config: mines are placed uniformly at
    /// random, adjacency numbers computed, and one random safe cell revealed
    /// so the opening view already shows an open region.
    pub fn new(config: BoardConfig) -> Self {
        Self::new_seeded(config, rand::rng().random())
    }

    /// Deterministic construction; `seed` drives both the mine placement
    /// and the mandatory first reveal.
    pub fn new_seeded(config: BoardConfig, seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let layout = RandomMineGenerator::new(rng.random()).generate(config);
        let mut board = Self::build(layout);
        board.reveal_initial_safe_cell(&mut rng);
        board
    }

    /// Board over a predetermined layout, with no mandatory first reveal.
    /// Layouts without at least one safe cell are rejected.
    pub fn from_layout(layout: MineLayout) -> Result<Self> {
        if layout.safe_cell_count() == 0 {
            return Err(GameError::InvalidConfiguration);
        }
        Ok(Self::build(layout))
    }

    fn build(layout: MineLayout) -> Self {
        let side = layout.size() as usize;
        let cells = Array2::from_shape_fn((side, side), |(x, y)| {
            let coords = (x as Coord, y as Coord);
            if layout.contains_mine(coords) {
                CellContent::Mine
            } else {
                CellContent::Number(layout.adjacent_mine_count(coords))
            }
        });
        Self {
            config: layout.config(),
            cells,
            revealed: Array2::from_elem((side, side), false),
            flagged: Array2::from_elem((side, side), false),
            revealed_count: 0,
            flagged_count: 0,
            phase: Phase::default(),
        }
    }

    /// The mandatory first reveal: a uniformly drawn coordinate that is
    /// neither a mine nor already revealed, run through the normal reveal
    /// path, win check included.
    fn reveal_initial_safe_cell(&mut self, rng: &mut SmallRng) {
        let size = self.config.size();
        loop {
            let coords = (rng.random_range(0..size), rng.random_range(0..size));
            let index = coords.to_grid_index();
            if self.revealed[index] || self.cells[index].is_mine() {
                continue;
            }
            let opened = self.flood_reveal(coords);
            log::debug!("initial reveal at {coords:?} opened {} cells", opened.len());
            self.mark_won_if_cleared();
            return;
        }
    }

    /// Reveals the cell at `coords`. A zero-number cell expands through the
    /// classic flood fill; a mine ends the game and discloses the whole
    /// board. Errs on out-of-bounds coordinates and on finished games, in
    /// that order; the board is unchanged on error.
    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        use RevealOutcome::*;

        let coords = self.config.validate_coords(coords)?;
        self.check_in_progress()?;

        let index = coords.to_grid_index();
        if self.revealed[index] {
            return Ok(AlreadyRevealed);
        }
        if self.flagged[index] {
            return Ok(Flagged);
        }

        match self.cells[index] {
            CellContent::Mine => {
                log::debug!("mine hit at {coords:?}, disclosing the board");
                self.disclose_all();
                self.phase = Phase::Lost;
                Ok(HitMine)
            }
            CellContent::Number(_) => {
                let opened = self.flood_reveal(coords);
                self.mark_won_if_cleared();
                Ok(Opened(opened))
            }
        }
    }

    /// Work-list flood fill from `start`, assumed in bounds, unrevealed and
    /// not a mine. Zero-number cells enqueue their neighbors; nonzero
    /// numbers are revealed without propagating. Flags do not stop the
    /// fill: a flagged cell swallowed by the region is revealed in place.
    fn flood_reveal(&mut self, start: Coord2) -> BTreeSet<Coord2> {
        let mut opened = BTreeSet::new();
        let mut to_visit = VecDeque::from([start]);

        while let Some(coords) = to_visit.pop_front() {
            let index = coords.to_grid_index();
            if self.revealed[index] {
                continue;
            }
            self.revealed[index] = true;
            self.revealed_count += 1;
            opened.insert(coords);
            log::trace!("opened {coords:?}: {:?}", self.cells[index]);

            if self.cells[index] == CellContent::Number(0) {
                to_visit.extend(
                    self.neighbors(coords)
                        .filter(|&pos| !self.revealed[pos.to_grid_index()]),
                );
            }
        }

        opened
    }

    /// Toggles the flag at `coords`. Revealed cells are rejected; flags
    /// never advance the phase.
    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<FlagOutcome> {
        use FlagOutcome::*;

        let coords = self.config.validate_coords(coords)?;
        self.check_in_progress()?;

        let index = coords.to_grid_index();
        if self.revealed[index] {
            return Ok(Rejected(FlagRejection::AlreadyRevealed));
        }

        Ok(if self.flagged[index] {
            self.flagged[index] = false;
            self.flagged_count -= 1;
            Unflagged
        } else {
            self.flagged[index] = true;
            self.flagged_count += 1;
            Flagged
        })
    }

    /// Display override that exposes every cell without touching the phase.
    /// Allowed in any phase and idempotent; this is the solve/debug
    /// affordance, not a gameplay outcome.
    pub fn reveal_all(&mut self) {
        log::debug!("revealing the full board on request");
        self.disclose_all();
    }

    /// Fresh board with the same size and mine count and an independent
    /// random layout.
    pub fn reset(&self) -> Self {
        log::debug!("resetting {0}x{0} board", self.config.size());
        Self::new(self.config)
    }

    fn disclose_all(&mut self) {
        self.revealed.fill(true);
        self.revealed_count = self.config.total_cells();
    }

    fn mark_won_if_cleared(&mut self) {
        if self.revealed_count == self.config.safe_cells() {
            self.phase = Phase::Won;
            log::debug!("all safe cells revealed, board won");
        }
    }

    fn check_in_progress(&self) -> Result<()> {
        if self.phase.is_finished() {
            Err(GameError::GameOver)
        } else {
            Ok(())
        }
    }

    fn neighbors(&self, coords: Coord2) -> Neighbors {
        Neighbors::of(coords, self.config.size())
    }

    /// Player-visible state of one cell. Panics if `coords` is out of
    /// bounds; player input goes through [`Board::reveal`] and
    /// [`Board::toggle_flag`], which validate instead.
    pub fn cell_at(&self, coords: Coord2) -> CellView {
        let index = coords.to_grid_index();
        if self.revealed[index] {
            CellView::Revealed(self.cells[index])
        } else if self.flagged[index] {
            CellView::Flagged
        } else {
            CellView::Hidden
        }
    }

    pub fn config(&self) -> BoardConfig {
        self.config
    }

    pub fn size(&self) -> Coord {
        self.config.size()
    }

    pub fn mine_count(&self) -> CellCount {
        self.config.mines()
    }

    pub fn total_cells(&self) -> CellCount {
        self.config.total_cells()
    }

    pub fn revealed_count(&self) -> CellCount {
        self.revealed_count
    }

    pub fn flagged_count(&self) -> CellCount {
        self.flagged_count
    }

    /// Mines not yet accounted for by flags; negative when over-flagged.
    pub fn remaining_flags(&self) -> isize {
        self.config.mines() as isize - self.flagged_count as isize
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_finished(&self) -> bool {
        self.phase.is_finished()
    }
}
