use ndarray::Array2;
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use crate::*;

/// One cell opened by a reveal, with the adjacency count a renderer draws.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealedCell {
    pub pos: Pos,
    pub adjacent_mines: u8,
}

/// Everything a single `reveal` call changed. The triggering cell comes
/// first, flood-filled cells follow in discovery order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealReport {
    pub cells: Vec<RevealedCell>,
    pub complete: bool,
}

impl RevealReport {
    pub fn has_update(&self) -> bool {
        !self.cells.is_empty()
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlagOutcome {
    Flagged,
    Unflagged,
    NoChange,
}

impl FlagOutcome {
    pub const fn changed(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

/// Square minefield with per-cell visible state and O(1) completion
/// tracking. All gameplay operations are total: positions off the board or
/// cells in the wrong state leave the board untouched and say so through
/// the returned outcome.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    pub(crate) grid: Array2<Cell>,
    pub(crate) mine_count: usize,
    pub(crate) revealed_count: usize,
    pub(crate) flagged_count: usize,
}

impl Board {
    /// Rolls every cell independently against `config.mine_odds`. There is
    /// no mine-count guarantee and no safe starting cell.
    pub fn generate<R: Rng + ?Sized>(config: BoardConfig, rng: &mut R) -> Self {
        let mut grid: Array2<Cell> = Array2::default((config.size, config.size));
        let mut mine_count = 0;

        for cell in grid.iter_mut() {
            if rng.random::<f64>() < config.mine_odds {
                cell.mine = true;
                mine_count += 1;
            }
        }

        if mine_count == grid.len() {
            log::warn!("Generated a board with no safe cells, complete on arrival");
        }
        log::debug!(
            "Generated {}x{} board with {} mines",
            config.size,
            config.size,
            mine_count
        );

        Self {
            grid,
            mine_count,
            revealed_count: 0,
            flagged_count: 0,
        }
    }

    /// Deterministic generation for replays and tests.
    pub fn from_seed(config: BoardConfig, seed: u64) -> Self {
        Self::generate(config, &mut SmallRng::seed_from_u64(seed))
    }

    /// Board with mines exactly at `mines`; duplicates collapse into one.
    pub fn with_mines(size: usize, mines: &[Pos]) -> Result<Self> {
        if size == 0 {
            return Err(BoardError::InvalidSize);
        }

        let mut grid: Array2<Cell> = Array2::default((size, size));
        let mut mine_count = 0;

        for &pos in mines {
            if pos.0 >= size || pos.1 >= size {
                return Err(BoardError::MineOutOfBounds(pos));
            }
            let cell = &mut grid[pos];
            if !cell.mine {
                cell.mine = true;
                mine_count += 1;
            }
        }

        Ok(Self {
            grid,
            mine_count,
            revealed_count: 0,
            flagged_count: 0,
        })
    }

    pub fn size(&self) -> usize {
        self.grid.nrows()
    }

    pub fn total_cells(&self) -> usize {
        self.grid.len()
    }

    pub fn mine_count(&self) -> usize {
        self.mine_count
    }

    pub fn safe_count(&self) -> usize {
        self.total_cells() - self.mine_count
    }

    /// Safe cells revealed so far. Exploded mines are not counted here.
    pub fn revealed_count(&self) -> usize {
        self.revealed_count
    }

    pub fn flagged_count(&self) -> usize {
        self.flagged_count
    }

    /// Counter for a mines-remaining display, negative when overflagged.
    pub fn mines_left(&self) -> isize {
        self.mine_count as isize - self.flagged_count as isize
    }

    /// Cell snapshot for rendering loops. Panics outside the grid; the
    /// gameplay operations are the ones that tolerate arbitrary positions.
    pub fn cell_at(&self, pos: Pos) -> Cell {
        self.grid[pos]
    }

    /// Input-routing query: a press on a mine goes to `explode`, on a safe
    /// cell to `reveal`.
    pub fn has_mine(&self, pos: Pos) -> bool {
        self.in_bounds(pos) && self.grid[pos].is_mine()
    }

    /// Whether `reveal(pos)` would open anything.
    pub fn can_reveal(&self, pos: Pos) -> bool {
        if !self.in_bounds(pos) {
            return false;
        }
        let cell = self.grid[pos];
        !cell.is_revealed() && !cell.is_flagged() && !cell.is_mine()
    }

    /// Won iff every safe cell is revealed. Mines may stay hidden, flagged
    /// or exploded; they never count toward completion.
    pub fn is_complete(&self) -> bool {
        self.revealed_count == self.safe_count()
    }

    pub(crate) fn in_bounds(&self, pos: Pos) -> bool {
        pos.0 < self.size() && pos.1 < self.size()
    }

    pub(crate) fn adjacent_mine_count(&self, pos: Pos) -> u8 {
        neighbors(pos, self.size())
            .filter(|&p| self.grid[p].is_mine())
            .count() as u8
    }

    /// Opens `pos` and, when its adjacency count is zero, flood-fills the
    /// connected zero region plus its numbered frontier. Out-of-bounds,
    /// revealed, flagged and mine cells are no-ops with an empty report.
    ///
    /// The fill runs on an explicit FIFO worklist; the revealed state is
    /// the visited marker, so each cell is opened at most once.
    pub fn reveal(&mut self, pos: Pos) -> RevealReport {
        let mut report = RevealReport::default();

        if !self.can_reveal(pos) {
            log::debug!("Reveal ignored at {:?}", pos);
            return report;
        }

        let mut worklist = VecDeque::from([pos]);
        while let Some(next) = worklist.pop_front() {
            let cell = self.grid[next];
            if cell.is_revealed() || cell.is_flagged() || cell.is_mine() {
                log::trace!("Flood skips {:?} in state {:?}", next, cell.state());
                continue;
            }

            let adjacent_mines = self.adjacent_mine_count(next);
            self.grid[next].state = CellState::Revealed(adjacent_mines);
            self.revealed_count += 1;
            report.cells.push(RevealedCell {
                pos: next,
                adjacent_mines,
            });

            if adjacent_mines == 0 {
                worklist.extend(neighbors(next, self.size()));
            }
        }

        report.complete = self.is_complete();
        if report.complete {
            log::debug!("Board complete after reveal at {:?}", pos);
        }
        report
    }

    /// Flips the flag on a hidden cell and reports the new state. Revealed
    /// and exploded cells, and positions off the board, stay as they are.
    pub fn toggle_flag(&mut self, pos: Pos) -> FlagOutcome {
        use CellState::*;

        if !self.in_bounds(pos) {
            log::debug!("Flag toggle ignored, out of bounds: {:?}", pos);
            return FlagOutcome::NoChange;
        }

        match self.grid[pos].state {
            Hidden => {
                self.grid[pos].state = Flagged;
                self.flagged_count += 1;
                FlagOutcome::Flagged
            }
            Flagged => {
                self.grid[pos].state = Hidden;
                self.flagged_count -= 1;
                FlagOutcome::Unflagged
            }
            Revealed(_) | Exploded => {
                log::debug!("Flag toggle ignored, cell revealed: {:?}", pos);
                FlagOutcome::NoChange
            }
        }
    }
}
