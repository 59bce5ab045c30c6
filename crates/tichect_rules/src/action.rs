//! First-class action types for Tic-Hect-4.
//!
//! Actions are domain events, not side effects. They represent a player's
//! intent and can be validated, serialized for replay and logged
//! independently of execution.

use super::{Player, Position};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// Something a player (or the table) does to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(tag = "action", content = "position", rename_all = "snake_case")]
pub enum Action {
    /// Place the current player's token on an empty square.
    #[display("place {}", _0)]
    Place(Position),
    /// Reclaim a square destroyed by this turn's attack.
    #[display("take over {}", _0)]
    Takeover(Position),
    /// Click a square: place before attacking, take over after.
    #[display("select {}", _0)]
    Select(Position),
    /// Rotate the board a further 90 degrees.
    #[display("rotate")]
    Rotate,
    /// Attack in the direction chosen by the rotation.
    #[display("attack")]
    Attack,
    /// Hand the turn to the opponent.
    #[display("end turn")]
    EndTurn,
    /// Start a fresh game.
    #[display("reset")]
    Reset,
}

/// Why an action was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ActionError {
    /// A player has already won.
    #[display("Game is already over: {} won", _0)]
    GameOver(#[error(not(source))] Player),

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(#[error(not(source))] Position),

    /// The current player already placed a token this turn.
    #[display("{} has already placed a token this turn", _0)]
    AlreadyPlaced(#[error(not(source))] Player),

    /// The current player already attacked this turn.
    #[display("{} has already attacked this turn", _0)]
    AlreadyAttacked(#[error(not(source))] Player),

    /// The position was not destroyed by this turn's attack.
    #[display("Square {} is not available for takeover", _0)]
    NotTakeoverTarget(#[error(not(source))] Position),
}
