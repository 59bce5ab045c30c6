//! Draw detection logic.

use super::super::{Board, Player};
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
#[instrument]
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

/// A draw is a full board without a winner.
#[instrument]
pub fn is_draw(board: &Board, winner: Option<Player>) -> bool {
    winner.is_none() && is_full(board)
}
