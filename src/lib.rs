//! Tic-Hect-4 table: configuration, view model and terminal front-end.
//!
//! The rules live in [`tichect_rules`]; this crate decides what a player
//! may click, how the board is drawn and how a game is driven from a
//! terminal.
//!
//! # Architecture
//!
//! - **Config**: house rules and presentation options from TOML
//! - **View**: serializable snapshot with enabled controls and checklist
//! - **Terminal**: command parsing, text rendering and the session loop
//!
//! # Example
//!
//! ```
//! use std::io::Cursor;
//! use tichect::{GameConfig, Session};
//! use tichect_rules::{Player, Position};
//!
//! let mut out = Vec::new();
//! let game = Session::new(GameConfig::default(), Cursor::new("center\nend\n"), &mut out)
//!     .run()
//!     .unwrap();
//! assert_eq!(game.board().get(Position::Center).player(), Some(Player::X));
//! assert_eq!(game.current_player(), Player::O);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod view;

pub mod terminal;

pub use config::{ConfigError, GameConfig};
pub use terminal::{Command, CommandError, PlayError, Session};
pub use view::{CellView, ChecklistItem, Controls, GameView};
