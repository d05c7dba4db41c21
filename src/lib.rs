use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
pub use error::*;
pub use explosion::*;
pub use types::*;

mod board;
mod cell;
mod error;
mod explosion;
mod types;

/// Fixed parameters for a new board: one square size and one per-cell mine
/// probability. This is the whole difficulty surface.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub size: usize,
    pub mine_odds: f64,
}

impl BoardConfig {
    pub fn new(size: usize, mine_odds: f64) -> Result<Self> {
        if size == 0 {
            return Err(BoardError::InvalidSize);
        }
        if !mine_odds.is_finite() || !(0.0..=1.0).contains(&mine_odds) {
            return Err(BoardError::InvalidOdds);
        }
        Ok(Self { size, mine_odds })
    }

    pub const fn total_cells(&self) -> usize {
        self.size.saturating_mul(self.size)
    }
}

impl Default for BoardConfig {
    /// An 8x8 field at 0.15 mine odds.
    fn default() -> Self {
        Self {
            size: 8,
            mine_odds: 0.15,
        }
    }
}
