//! Line-oriented terminal front-end.

mod command;
mod render;
mod session;

pub use command::{Command, CommandError, HELP};
pub use render::{render, render_board, storage_index};
pub use session::{PlayError, Session};
