//! Win detection: orthogonally connected regions of four or more.

use super::super::{Board, CELL_COUNT, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Size a connected region needs to win.
pub const WIN_THRESHOLD: usize = 4;

/// A maximal set of same-owner cells joined by up/down/left/right steps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    /// Player owning every cell of the region.
    pub owner: Player,
    /// Cells in the order the flood-fill reached them.
    pub cells: Vec<Position>,
}

impl Region {
    /// Number of cells in the region.
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    /// Whether the region is large enough to win.
    pub fn is_winning(&self) -> bool {
        self.size() >= WIN_THRESHOLD
    }

    /// Whether the region contains the position.
    pub fn contains(&self, pos: Position) -> bool {
        self.cells.contains(&pos)
    }
}

/// Lists every connected region on the board.
///
/// Origins are scanned row-major and each cell belongs to exactly one
/// region, so the result is deterministic for any board.
#[instrument]
pub fn connected_regions(board: &Board) -> Vec<Region> {
    let mut visited = [false; CELL_COUNT];
    let mut regions = Vec::new();

    for origin in Position::ALL {
        let Square::Occupied(owner) = board.get(origin) else {
            continue;
        };
        if visited[origin.to_index()] {
            continue;
        }
        regions.push(flood_fill(board, origin, owner, &mut visited));
    }

    regions
}

fn flood_fill(
    board: &Board,
    origin: Position,
    owner: Player,
    visited: &mut [bool; CELL_COUNT],
) -> Region {
    let mut stack = vec![origin];
    let mut cells = Vec::new();

    while let Some(pos) = stack.pop() {
        if visited[pos.to_index()] || !board.get(pos).is_owned_by(owner) {
            continue;
        }
        visited[pos.to_index()] = true;
        cells.push(pos);
        stack.extend(pos.neighbors());
    }

    Region { owner, cells }
}

/// Returns the first winning region in row-major scan order.
#[instrument]
pub fn winning_region(board: &Board) -> Option<Region> {
    connected_regions(board)
        .into_iter()
        .find(Region::is_winning)
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player owns an orthogonally connected
/// region of at least [`WIN_THRESHOLD`] cells, `None` otherwise.
#[instrument]
pub fn check_winner(board: &Board) -> Option<Player> {
    winning_region(board).map(|region| region.owner)
}
