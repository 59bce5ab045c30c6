//! Pure game rules for Tic-Hect-4.
//!
//! Tic-Hect-4 is tic-tac-toe on a 3x3 board where a player wins by owning
//! an orthogonally connected region of four or more cells. Each turn a
//! player places one token, may attack once in the direction chosen by
//! the board's rotation, may take over the squares that attack destroyed,
//! and then ends the turn.
//!
//! # Example
//!
//! ```
//! use tichect_rules::{GameState, Player, Position};
//!
//! let game = GameState::new()
//!     .place(Position::TopLeft)
//!     .end_turn()
//!     .place(Position::MiddleLeft)
//!     .end_turn()
//!     .attack();
//!
//! assert!(game.takeover_options().contains(&Position::MiddleLeft));
//! let game = game.takeover(Position::MiddleLeft);
//! assert_eq!(game.board().count(Player::X), 2);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod game;
mod position;
mod rotation;
mod types;

pub mod contracts;
pub mod invariants;
pub mod rules;

pub use action::{Action, ActionError};
pub use game::{GameState, GameStatus};
pub use position::Position;
pub use rotation::{Direction, Rotation};
pub use rules::{EdgePolicy, Region, WIN_THRESHOLD, check_winner, is_draw};
pub use types::{BOARD_SIZE, Board, BoardParseError, CELL_COUNT, Player, Square};
