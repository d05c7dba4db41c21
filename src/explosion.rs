use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::*;

/// Gap between successive blast-distance rings of a chain.
pub const DELAY_UNIT: Duration = Duration::from_millis(50);

/// One scheduled secondary explosion. The caller owns the clock: it fires
/// `detonate(pos)` once `delay` has elapsed since the triggering explosion.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Detonation {
    pub pos: Pos,
    pub delay: Duration,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExplodeOutcome {
    /// The mine fired; every other live mine is scheduled, nearest first.
    Triggered(Vec<Detonation>),
    NoChange,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DetonateOutcome {
    Exploded,
    NoChange,
}

/// Truncated Euclidean distance between two cells, no floats involved.
pub(crate) fn blast_distance(a: Pos, b: Pos) -> usize {
    let dr = a.0.abs_diff(b.0);
    let dc = a.1.abs_diff(b.1);
    (dr * dr + dc * dc).isqrt()
}

pub(crate) fn delay_for(origin: Pos, target: Pos) -> Duration {
    DELAY_UNIT * blast_distance(origin, target) as u32
}

impl Board {
    /// Fires the mine at `pos` and returns the chain schedule for every
    /// other not-yet-exploded mine, ordered by increasing delay. Valid only
    /// on a live mine; anything else is a no-op.
    pub fn explode(&mut self, pos: Pos) -> ExplodeOutcome {
        if self.detonate(pos) == DetonateOutcome::NoChange {
            return ExplodeOutcome::NoChange;
        }
        ExplodeOutcome::Triggered(self.chain_from(pos))
    }

    /// A single scheduled firing out of a previously returned chain. Never
    /// chains further, so scheduler-driven calls cannot cascade; a mine
    /// that already went off stays as it is.
    pub fn detonate(&mut self, pos: Pos) -> DetonateOutcome {
        if !self.in_bounds(pos) {
            log::debug!("Detonation ignored, out of bounds: {:?}", pos);
            return DetonateOutcome::NoChange;
        }

        let cell = self.grid[pos];
        if !cell.is_mine() {
            log::warn!("Detonation requested on a safe cell: {:?}", pos);
            return DetonateOutcome::NoChange;
        }
        if cell.is_exploded() {
            log::trace!("Mine at {:?} already exploded", pos);
            return DetonateOutcome::NoChange;
        }

        // the blast consumes any flag
        if cell.is_flagged() {
            self.flagged_count -= 1;
        }
        self.grid[pos].state = CellState::Exploded;
        log::debug!("Mine exploded at {:?}", pos);
        DetonateOutcome::Exploded
    }

    fn chain_from(&self, origin: Pos) -> Vec<Detonation> {
        let mut chain: Vec<Detonation> = self
            .grid
            .indexed_iter()
            .filter(|(_, cell)| cell.is_mine() && !cell.is_exploded())
            .map(|(pos, _)| Detonation {
                pos,
                delay: delay_for(origin, pos),
            })
            .collect();
        chain.sort_by_key(|detonation| detonation.delay);
        chain
    }
}
