//! Named cells of the 3x3 board.

use super::types::BOARD_SIZE;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A position on the board (index 0-8, row-major).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::EnumIter,
)]
pub enum Position {
    /// Top-left (index 0)
    TopLeft,
    /// Top-center (index 1)
    TopCenter,
    /// Top-right (index 2)
    TopRight,
    /// Middle-left (index 3)
    MiddleLeft,
    /// Center (index 4)
    Center,
    /// Middle-right (index 5)
    MiddleRight,
    /// Bottom-left (index 6)
    BottomLeft,
    /// Bottom-center (index 7)
    BottomCenter,
    /// Bottom-right (index 8)
    BottomRight,
}

impl Position {
    /// All 9 positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Label for display.
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Converts position to board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates position from board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Creates position from a signed index, as produced by attack offsets.
    pub fn from_signed(index: isize) -> Option<Self> {
        usize::try_from(index).ok().and_then(Self::from_index)
    }

    /// Creates position from row and column.
    pub fn from_row_col(row: usize, col: usize) -> Option<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Self::from_index(row * BOARD_SIZE + col)
        } else {
            None
        }
    }

    /// Row of this position (0 = top).
    pub fn row(self) -> usize {
        self.to_index() / BOARD_SIZE
    }

    /// Column of this position (0 = left).
    pub fn col(self) -> usize {
        self.to_index() % BOARD_SIZE
    }

    /// Orthogonal neighbors (up, down, left, right) that lie on the board.
    pub fn neighbors(self) -> impl Iterator<Item = Position> {
        let (row, col) = (self.row() as isize, self.col() as isize);
        [(-1, 0), (1, 0), (0, -1), (0, 1)]
            .into_iter()
            .filter_map(move |(dr, dc)| {
                let (r, c) = (row + dr, col + dc);
                if r < 0 || c < 0 {
                    return None;
                }
                Self::from_row_col(r as usize, c as usize)
            })
    }

    /// Parses a cell from a 1-based number (1-9) or a label.
    ///
    /// Labels match case-insensitively, ignoring `-`, `_` and spaces, so
    /// "top left", "TopLeft" and "top-left" are all accepted.
    #[instrument]
    pub fn from_label_or_number(s: &str) -> Option<Position> {
        let trimmed = s.trim();
        if let Ok(num) = trimmed.parse::<usize>() {
            return num.checked_sub(1).and_then(Self::from_index);
        }

        let wanted = normalize(trimmed);
        if wanted.is_empty() {
            return None;
        }
        <Position as strum::IntoEnumIterator>::iter().find(|pos| normalize(pos.label()) == wanted)
    }
}

fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
