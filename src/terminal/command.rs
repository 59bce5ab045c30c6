//! Parsing typed lines into table commands.

use derive_more::{Display, Error};
use std::str::FromStr;
use tichect_rules::{Action, Position};
use tracing::instrument;

/// Command verbs understood at the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumString, strum::Display)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
enum Verb {
    Place,
    #[strum(serialize = "take", serialize = "takeover")]
    Take,
    #[strum(serialize = "rotate", serialize = "r")]
    Rotate,
    #[strum(serialize = "attack", serialize = "a")]
    Attack,
    #[strum(serialize = "end", serialize = "endturn", serialize = "e")]
    End,
    Reset,
    #[strum(serialize = "help", serialize = "?")]
    Help,
    #[strum(serialize = "show", serialize = "board")]
    Show,
    #[strum(serialize = "quit", serialize = "exit", serialize = "q")]
    Quit,
}

/// A line typed at the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// A game action.
    Play(Action),
    /// Print the command reference.
    Help,
    /// Redraw the table.
    Show,
    /// Leave the session.
    Quit,
}

/// Error parsing a prompt line.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum CommandError {
    /// Nothing was typed.
    #[display("Type a command, or 'help'")]
    Empty,
    /// Neither a verb nor a cell.
    #[display("Unknown command {:?}", _0)]
    Unknown(#[error(not(source))] String),
    /// The verb needs a cell argument.
    #[display("'{}' needs a cell (1-9 or a name like 'center')", _0)]
    MissingCell(#[error(not(source))] String),
    /// The cell argument did not name a square.
    #[display("No such cell {:?}", _0)]
    UnknownCell(#[error(not(source))] String),
}

/// Text shown by `help`.
pub const HELP: &str = "\
Commands:
  <cell>          click a cell (1-9 or a name): place, or take over after attacking
  place <cell>    place your token
  take <cell>     take over a square destroyed by your attack
  rotate | r      rotate the board 90 degrees
  attack | a      attack in the direction the rotation points
  end | e         end your turn
  reset           start a new game
  show            redraw the board
  help | ?        show this help
  quit | q        leave";

impl FromStr for Command {
    type Err = CommandError;

    #[instrument]
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        if line.is_empty() {
            return Err(CommandError::Empty);
        }

        let (head, rest) = match line.split_once(char::is_whitespace) {
            Some((head, rest)) => (head, rest.trim()),
            None => (line, ""),
        };

        let Ok(verb) = head.parse::<Verb>() else {
            // A bare cell is a click.
            return Position::from_label_or_number(line)
                .map(|pos| Command::Play(Action::Select(pos)))
                .ok_or_else(|| CommandError::Unknown(line.to_string()));
        };

        let cell = || {
            if rest.is_empty() {
                return Err(CommandError::MissingCell(verb.to_string()));
            }
            Position::from_label_or_number(rest)
                .ok_or_else(|| CommandError::UnknownCell(rest.to_string()))
        };

        Ok(match verb {
            Verb::Place => Command::Play(Action::Place(cell()?)),
            Verb::Take => Command::Play(Action::Takeover(cell()?)),
            Verb::Rotate => Command::Play(Action::Rotate),
            Verb::Attack => Command::Play(Action::Attack),
            Verb::End => Command::Play(Action::EndTurn),
            Verb::Reset => Command::Play(Action::Reset),
            Verb::Help => Command::Help,
            Verb::Show => Command::Show,
            Verb::Quit => Command::Quit,
        })
    }
}
