use thiserror::Error;

use crate::types::Pos;

/// Construction-time failures. Gameplay operations never error: invalid
/// moves are silent no-ops reported through their outcome values.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("board size must be at least 1")]
    InvalidSize,
    #[error("mine odds must be a probability within 0.0..=1.0")]
    InvalidOdds,
    #[error("mine position {0:?} is outside the board")]
    MineOutOfBounds(Pos),
}

pub type Result<T> = std::result::Result<T, BoardError>;
