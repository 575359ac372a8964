use serde::{Deserialize, Serialize};

/// Ground-truth content of a cell, fixed when the mine layout is built.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum CellContent {
    Mine,
    /// Count of mines among the 8-adjacent neighbors, `0..=8`.
    Number(u8),
}

impl CellContent {
    pub const fn is_mine(self) -> bool {
        matches!(self, Self::Mine)
    }
}

/// Player-visible projection of one cell. A revealed cell shows its content
/// even while its flag bit is still set; revealing takes display precedence.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum CellView {
    Hidden,
    Flagged,
    Revealed(CellContent),
}

impl CellView {
    pub const fn is_revealed(self) -> bool {
        matches!(self, Self::Revealed(_))
    }
}
