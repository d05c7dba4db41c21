use serde::{Deserialize, Serialize};

/// Player-visible lifecycle of a single cell.
///
/// The variants encode the board invariants directly: a cell is never both
/// flagged and revealed, and an exploded cell is always a revealed one.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellState {
    Hidden,
    Flagged,
    /// Revealed safe cell, carrying its adjacent-mine count.
    Revealed(u8),
    /// Detonated mine. Terminal.
    Exploded,
}

impl Default for CellState {
    fn default() -> Self {
        Self::Hidden
    }
}

/// One grid position: an immutable mine bit plus the mutable visible state.
///
/// Cells are only ever mutated through `Board` operations; the mine bit is
/// fixed when the board is built and never changes afterwards.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub(crate) mine: bool,
    pub(crate) state: CellState,
}

impl Cell {
    pub const fn is_mine(self) -> bool {
        self.mine
    }

    pub const fn is_flagged(self) -> bool {
        matches!(self.state, CellState::Flagged)
    }

    /// Whether the cell has been opened; exploded cells count as revealed.
    pub const fn is_revealed(self) -> bool {
        matches!(self.state, CellState::Revealed(_) | CellState::Exploded)
    }

    pub const fn is_exploded(self) -> bool {
        matches!(self.state, CellState::Exploded)
    }

    pub const fn state(self) -> CellState {
        self.state
    }

    /// Adjacent-mine count, present once a safe cell has been revealed.
    pub const fn adjacent_mines(self) -> Option<u8> {
        match self.state {
            CellState::Revealed(count) => Some(count),
            _ => None,
        }
    }
}
