//! Renderer-facing snapshot of a game.
//!
//! The engine only knows which actions are legal; the table also greys out
//! controls. Both live here so any front-end can draw from one serializable
//! value.

use crate::config::GameConfig;
use serde::{Deserialize, Serialize};
use tichect_rules::{GameState, Player, Position, Square};
use tracing::instrument;

/// Which controls the table offers right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Controls {
    /// Rotate button.
    pub rotate: bool,
    /// Attack button.
    pub attack: bool,
    /// End-turn button.
    pub end_turn: bool,
    /// Reset button.
    pub reset: bool,
}

impl Controls {
    /// Derives control availability from the game and table config.
    ///
    /// Attack is off once someone won, after this turn's attack, and (when
    /// configured) until a token was placed. End-turn needs a placement and
    /// no winner. Rotate and reset are always on.
    #[instrument(skip_all)]
    pub fn for_game(game: &GameState, config: &GameConfig) -> Self {
        let decided = game.winner().is_some();
        let placement_ok = game.has_placed() || !*config.attack_requires_placement();
        Self {
            rotate: true,
            attack: !decided && !game.has_attacked() && placement_ok,
            end_turn: !decided && game.has_placed(),
            reset: true,
        }
    }
}

/// One line of the turn checklist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    /// Instruction text.
    pub text: String,
    /// Whether the step is done this turn.
    pub done: bool,
}

/// A single cell as a renderer sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellView {
    /// Cell position.
    pub position: Position,
    /// Occupant, if any.
    pub occupant: Option<Player>,
    /// Destroyed this turn and available for takeover.
    pub takeover: bool,
    /// Part of the winning region.
    pub winning: bool,
}

/// Everything a front-end needs to draw the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    /// Cells in row-major storage order.
    pub cells: Vec<CellView>,
    /// Player whose turn it is.
    pub current_player: Player,
    /// Board rotation in degrees.
    pub rotation: u16,
    /// Winner, if any.
    pub winner: Option<Player>,
    /// Full board without a winner.
    pub draw: bool,
    /// Available controls.
    pub controls: Controls,
    /// Turn instructions with progress.
    pub checklist: Vec<ChecklistItem>,
}

impl GameView {
    /// Builds the view for a game.
    #[instrument(skip_all)]
    pub fn new(game: &GameState, config: &GameConfig) -> Self {
        let winning = game.winning_region();
        let cells = Position::ALL
            .into_iter()
            .map(|position| CellView {
                position,
                occupant: match game.board().get(position) {
                    Square::Empty => None,
                    Square::Occupied(player) => Some(player),
                },
                takeover: game.takeover_options().contains(&position),
                winning: winning.as_ref().is_some_and(|r| r.contains(position)),
            })
            .collect();

        Self {
            cells,
            current_player: game.current_player(),
            rotation: game.rotation().degrees(),
            winner: winning.map(|r| r.owner),
            draw: game.is_draw(),
            controls: Controls::for_game(game, config),
            checklist: checklist(game),
        }
    }

    /// Banner announcing the result, if the game is over.
    pub fn banner(&self) -> Option<String> {
        match (self.winner, self.draw) {
            (Some(winner), _) => Some(format!("Winner: {}", winner)),
            (None, true) => Some("It's a draw!".to_string()),
            (None, false) => None,
        }
    }
}

fn checklist(game: &GameState) -> Vec<ChecklistItem> {
    vec![
        ChecklistItem {
            text: "Place your token on the board".to_string(),
            done: game.has_placed(),
        },
        ChecklistItem {
            text: "Rotate the board at any time".to_string(),
            done: false,
        },
        ChecklistItem {
            text: "(Optional) Attack enemy token(s) in the rotation's direction".to_string(),
            done: game.has_attacked(),
        },
        ChecklistItem {
            text: "(Optional) Take over destroyed squares".to_string(),
            done: false,
        },
        ChecklistItem {
            text: "End your turn to let the other player play".to_string(),
            done: false,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use tichect_rules::Action;

    #[test]
    fn test_controls_on_new_game() {
        let game = GameState::new();
        let controls = Controls::for_game(&game, &GameConfig::default());
        assert!(controls.rotate);
        assert!(!controls.attack);
        assert!(!controls.end_turn);
        assert!(controls.reset);
    }

    #[test]
    fn test_attack_enabled_before_placement_when_configured() {
        let config: GameConfig = toml::from_str("attack_requires_placement = false").unwrap();
        let controls = Controls::for_game(&GameState::new(), &config);
        assert!(controls.attack);
        assert!(!controls.end_turn);
    }

    #[test]
    fn test_controls_after_place_and_attack() {
        let game = GameState::new().place(Position::Center);
        let controls = Controls::for_game(&game, &GameConfig::default());
        assert!(controls.attack);
        assert!(controls.end_turn);

        let controls = Controls::for_game(&game.attack(), &GameConfig::default());
        assert!(!controls.attack);
        assert!(controls.end_turn);
    }

    #[test]
    fn test_view_marks_takeover_cells() {
        let game = GameState::replay(&[
            Action::Place(Position::TopLeft),
            Action::EndTurn,
            Action::Place(Position::MiddleLeft),
            Action::EndTurn,
            Action::Attack,
        ]);
        let view = GameView::new(&game, &GameConfig::default());
        assert!(view.cells[Position::MiddleLeft.to_index()].takeover);
        assert_eq!(view.banner(), None);
        assert!(view.checklist[2].done);
        assert!(!view.checklist[3].done);
    }

    #[test]
    fn test_empty_attack_leaves_takeover_step_open() {
        let game = GameState::new().place(Position::Center).attack();
        assert!(game.takeover_options().is_empty());

        let view = GameView::new(&game, &GameConfig::default());
        assert!(view.checklist[0].done);
        assert!(view.checklist[2].done);
        assert!(!view.checklist[3].done);
    }

    #[test]
    fn test_banner_for_draw() {
        // Filling cells in index order alternates X and O into a checkerboard.
        let actions: Vec<Action> = Position::ALL
            .into_iter()
            .flat_map(|pos| [Action::Place(pos), Action::EndTurn])
            .collect();
        let game = GameState::replay(&actions);
        assert_eq!(game.board().to_compact(), "XOXOXOXOX");

        let view = GameView::new(&game, &GameConfig::default());
        assert!(view.draw);
        assert_eq!(view.banner().as_deref(), Some("It's a draw!"));
    }
}
