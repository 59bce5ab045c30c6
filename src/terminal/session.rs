//! Interactive game loop over any line reader and writer.

use super::command::{Command, HELP};
use super::render::render;
use crate::config::GameConfig;
use crate::view::{Controls, GameView};
use anyhow::Result;
use derive_more::{Display, Error, From};
use std::io::{BufRead, Write};
use tichect_rules::{Action, ActionError, GameState};
use tracing::{debug, info, instrument};

/// Why a typed action did nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From)]
pub enum PlayError {
    /// The table has the control greyed out.
    #[display("{}", _0)]
    #[from(ignore)]
    Unavailable(#[error(not(source))] &'static str),
    /// The engine refused the action.
    #[display("{}", _0)]
    Refused(ActionError),
}

/// A game table bound to an input and an output stream.
pub struct Session<R, W> {
    game: GameState,
    config: GameConfig,
    input: R,
    output: W,
    json: bool,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Opens a table with a fresh game using the configured edge policy.
    #[instrument(skip_all)]
    pub fn new(config: GameConfig, input: R, output: W) -> Self {
        Self {
            game: GameState::with_edge_policy(*config.edge_policy()),
            config,
            input,
            output,
            json: false,
        }
    }

    /// Writes one JSON view per line instead of the text table.
    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    /// Plays until `quit` or end of input, returning the final game.
    ///
    /// # Errors
    ///
    /// Fails only on I/O errors; bad commands and refused actions are
    /// reported to the output and play continues.
    #[instrument(skip(self), fields(json = self.json))]
    pub fn run(mut self) -> Result<GameState> {
        info!("Session started");
        self.draw()?;

        let mut line = String::new();
        loop {
            if !self.json {
                write!(self.output, "> ")?;
                self.output.flush()?;
            }

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                debug!("End of input");
                break;
            }

            match line.parse::<Command>() {
                Ok(Command::Quit) => break,
                Ok(Command::Help) => writeln!(self.output, "{}", HELP)?,
                Ok(Command::Show) => self.draw()?,
                Ok(Command::Play(action)) => match self.play(action) {
                    Ok(()) => self.draw()?,
                    Err(error) => self.say(&error.to_string())?,
                },
                Err(error) => self.say(&error.to_string())?,
            }
        }

        info!(status = %self.game.status(), "Session finished");
        Ok(self.game)
    }

    /// Applies an action if the table offers it.
    ///
    /// # Errors
    ///
    /// Attack and end-turn follow the table's controls; everything else is
    /// up to the engine.
    #[instrument(skip(self))]
    pub fn play(&mut self, action: Action) -> Result<(), PlayError> {
        let controls = Controls::for_game(&self.game, &self.config);
        let result = match action {
            Action::Attack if !controls.attack => Err(PlayError::Unavailable(self.attack_hint())),
            Action::EndTurn if !controls.end_turn => {
                Err(PlayError::Unavailable(self.end_turn_hint()))
            }
            _ => self.game.try_apply(action).map_err(PlayError::from),
        };
        if let Err(error) = &result {
            debug!(%action, %error, "Action not played");
        }
        result
    }

    fn attack_hint(&self) -> &'static str {
        if self.game.winner().is_some() {
            "The game is over"
        } else if self.game.has_attacked() {
            "You already attacked this turn"
        } else {
            "Place a token before attacking"
        }
    }

    fn end_turn_hint(&self) -> &'static str {
        if self.game.winner().is_some() {
            "The game is over"
        } else {
            "Place a token before ending your turn"
        }
    }

    fn draw(&mut self) -> Result<()> {
        let view = GameView::new(&self.game, &self.config);
        if self.json {
            writeln!(self.output, "{}", serde_json::to_string(&view)?)?;
        } else {
            writeln!(self.output, "{}", render(&view, *self.config.render_rotated()))?;
        }
        Ok(())
    }

    fn say(&mut self, message: &str) -> Result<()> {
        if self.json {
            let message = serde_json::json!({ "error": message });
            writeln!(self.output, "{}", message)?;
        } else {
            writeln!(self.output, "{}", message)?;
        }
        Ok(())
    }
}
