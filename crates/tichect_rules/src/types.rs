//! Core domain types for Tic-Hect-4.

use super::position::Position;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Number of cells along one side of the board.
pub const BOARD_SIZE: usize = 3;

/// Total number of cells on the board.
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display,
)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Symbol drawn on the board for this player.
    pub fn symbol(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }

    /// Returns true if the square holds the given player's token.
    pub fn is_owned_by(self, player: Player) -> bool {
        self == Square::Occupied(player)
    }
}

/// 3x3 board, squares stored row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    squares: [Square; CELL_COUNT],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; CELL_COUNT],
        }
    }

    /// Creates a board from squares in row-major order.
    pub fn from_squares(squares: [Square; CELL_COUNT]) -> Self {
        Self { squares }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Sets the square at the given position.
    pub fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Checks if every square is occupied.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| *s != Square::Empty)
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Square; CELL_COUNT] {
        &self.squares
    }

    /// Counts the tokens a player has on the board.
    pub fn count(&self, player: Player) -> usize {
        self.squares.iter().filter(|s| s.is_owned_by(player)).count()
    }

    /// Positions currently occupied by the given player, in row-major order.
    pub fn positions_of(&self, player: Player) -> impl Iterator<Item = Position> + '_ {
        Position::ALL
            .into_iter()
            .filter(move |pos| self.get(*pos).is_owned_by(player))
    }

    /// Returns the board with every X relabeled as O and vice versa.
    pub fn swap_players(&self) -> Self {
        let mut squares = self.squares;
        for square in squares.iter_mut() {
            if let Square::Occupied(player) = *square {
                *square = Square::Occupied(player.opponent());
            }
        }
        Self { squares }
    }

    /// Formats the board as a compact human-readable grid.
    ///
    /// Empty squares show their 1-based cell number.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let index = row * BOARD_SIZE + col;
                let symbol = match self.squares[index] {
                    Square::Empty => char::from(b'1' + index as u8),
                    Square::Occupied(player) => player.symbol(),
                };
                result.push(symbol);
                if col < BOARD_SIZE - 1 {
                    result.push('|');
                }
            }
            if row < BOARD_SIZE - 1 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }

    /// Encodes the board as nine characters (`X`, `O`, `.`), row-major.
    pub fn to_compact(&self) -> String {
        self.squares
            .iter()
            .map(|s| s.player().map_or('.', Player::symbol))
            .collect()
    }
}

/// Error parsing a board string.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum BoardParseError {
    /// The string did not hold exactly nine cells.
    #[display("Board needs {} cells, got {}", CELL_COUNT, _0)]
    WrongLength(#[error(not(source))] usize),
    /// A character that is neither a player nor an empty marker.
    #[display("Unexpected character {:?} in board", _0)]
    InvalidChar(#[error(not(source))] char),
}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parses nine cells row-major. `X`/`O` (any case) are tokens; `.`, `_`,
    /// `-` and spaces are empty. Row separators `/` and `|` are ignored.
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells = s
            .chars()
            .filter(|c| !matches!(c, '/' | '|' | '\n' | '\r'))
            .map(|c| match c.to_ascii_uppercase() {
                'X' => Ok(Square::Occupied(Player::X)),
                'O' => Ok(Square::Occupied(Player::O)),
                '.' | '_' | '-' | ' ' => Ok(Square::Empty),
                other => Err(BoardParseError::InvalidChar(other)),
            })
            .collect::<Result<Vec<_>, _>>()?;

        let squares: [Square; CELL_COUNT] = cells
            .as_slice()
            .try_into()
            .map_err(|_| BoardParseError::WrongLength(cells.len()))?;
        Ok(Self { squares })
    }
}
