//! The Tic-Hect-4 turn state machine.
//!
//! A turn is: place once, optionally attack once, optionally take over any
//! of the squares that attack destroyed, then end the turn. Rotation may
//! change at any moment and only affects the next attack.
//!
//! Every transition comes in two forms. `try_*` methods take `&mut self`,
//! check all preconditions before touching anything, and report why an
//! action was refused. The consuming methods (`place`, `attack`, ...) are
//! the table-side API: a refused action is a silent no-op that hands back
//! the unchanged state.

use super::action::{Action, ActionError};
use super::contracts::{
    AttackContract, Contract, NoWinner, PlacementContract, SquareIsEmpty,
    TakeoverContract,
};
use super::rules::{self, EdgePolicy, Region};
use super::{Board, Player, Position, Rotation, Square};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::{debug, info, instrument};

/// Current status of the game, derived from the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// A player owns a winning region.
    Won(Player),
    /// Board is full and nobody won.
    Draw,
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "In progress"),
            GameStatus::Won(player) => write!(f, "Winner: {}", player),
            GameStatus::Draw => write!(f, "It's a draw!"),
        }
    }
}

/// Complete game state.
///
/// The winner is never stored; it is recomputed from the board on every
/// query so placements and takeovers can never leave it stale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) current_player: Player,
    pub(crate) rotation: Rotation,
    pub(crate) has_placed: bool,
    pub(crate) has_attacked: bool,
    pub(crate) takeover_options: BTreeSet<Position>,
    #[serde(default)]
    pub(crate) edge_policy: EdgePolicy,
}

impl GameState {
    /// Creates a new game with the default edge policy.
    #[instrument]
    pub fn new() -> Self {
        Self::with_edge_policy(EdgePolicy::default())
    }

    /// Creates a new game whose attacks follow the given edge policy.
    #[instrument]
    pub fn with_edge_policy(edge_policy: EdgePolicy) -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            rotation: Rotation::default(),
            has_placed: false,
            has_attacked: false,
            takeover_options: BTreeSet::new(),
            edge_policy,
        }
    }

    /// Replays actions from a fresh game, ignoring refused ones.
    #[instrument(skip(actions), fields(count = actions.len()))]
    pub fn replay(actions: &[Action]) -> Self {
        Self::replay_with(EdgePolicy::default(), actions)
    }

    /// Replays actions from a fresh game with the given edge policy.
    #[instrument(skip(actions), fields(count = actions.len()))]
    pub fn replay_with(edge_policy: EdgePolicy, actions: &[Action]) -> Self {
        actions
            .iter()
            .fold(Self::with_edge_policy(edge_policy), |game, action| {
                game.apply(*action)
            })
    }

    // ─────────────────────────────────────────────────────────
    //  Accessors
    // ─────────────────────────────────────────────────────────

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose turn it is.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the current rotation.
    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Whether the current player has placed a token this turn.
    pub fn has_placed(&self) -> bool {
        self.has_placed
    }

    /// Whether the current player has attacked this turn.
    pub fn has_attacked(&self) -> bool {
        self.has_attacked
    }

    /// Squares destroyed by this turn's attack and not yet reclaimed.
    pub fn takeover_options(&self) -> &BTreeSet<Position> {
        &self.takeover_options
    }

    /// Edge policy applied to horizontal attacks.
    pub fn edge_policy(&self) -> EdgePolicy {
        self.edge_policy
    }

    // ─────────────────────────────────────────────────────────
    //  Derived queries
    // ─────────────────────────────────────────────────────────

    /// Returns the winner, recomputed from the board.
    pub fn winner(&self) -> Option<Player> {
        rules::check_winner(&self.board)
    }

    /// Returns the region that won the game, if any.
    pub fn winning_region(&self) -> Option<Region> {
        rules::winning_region(&self.board)
    }

    /// Whether the board is full with no winner.
    pub fn is_draw(&self) -> bool {
        rules::is_draw(&self.board, self.winner())
    }

    /// Folds winner and draw detection into one status.
    pub fn status(&self) -> GameStatus {
        match self.winner() {
            Some(winner) => GameStatus::Won(winner),
            None if self.board.is_full() => GameStatus::Draw,
            None => GameStatus::InProgress,
        }
    }

    /// Squares the current player's attack would destroy right now.
    pub fn attack_preview(&self) -> Vec<Position> {
        rules::attack_targets(
            &self.board,
            self.current_player,
            self.rotation,
            self.edge_policy,
        )
    }

    // ─────────────────────────────────────────────────────────
    //  Checked transitions
    // ─────────────────────────────────────────────────────────

    /// Places the current player's token.
    ///
    /// # Errors
    ///
    /// Refused when the game is won, the square is occupied, or the player
    /// already attacked or placed this turn.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn try_place(&mut self, pos: Position) -> Result<(), ActionError> {
        PlacementContract::pre(self, &pos)?;
        #[cfg(debug_assertions)]
        let before = self.clone();

        self.board.set(pos, Square::Occupied(self.current_player));
        self.has_placed = true;
        debug!(%pos, "Token placed");
        self.announce_winner();

        #[cfg(debug_assertions)]
        super::contracts::debug_verify::<PlacementContract, Position>(&before, self);
        Ok(())
    }

    /// Reclaims a square destroyed by this turn's attack.
    ///
    /// # Errors
    ///
    /// Refused when the square is not a takeover option.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn try_takeover(&mut self, pos: Position) -> Result<(), ActionError> {
        TakeoverContract::pre(self, &pos)?;
        #[cfg(debug_assertions)]
        let before = self.clone();

        self.board.set(pos, Square::Occupied(self.current_player));
        self.takeover_options.remove(&pos);
        debug!(%pos, remaining = self.takeover_options.len(), "Square taken over");
        self.announce_winner();

        #[cfg(debug_assertions)]
        super::contracts::debug_verify::<TakeoverContract, Position>(&before, self);
        Ok(())
    }

    /// Handles a click on a square the way a single click handler would:
    /// place before attacking, take over after.
    ///
    /// # Errors
    ///
    /// Refused when the game is won or the square is occupied, otherwise
    /// whatever placement or takeover refuses.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn try_select(&mut self, pos: Position) -> Result<(), ActionError> {
        NoWinner::check(self)?;
        SquareIsEmpty::check(pos, self)?;
        if self.has_attacked {
            self.try_takeover(pos)
        } else {
            self.try_place(pos)
        }
    }

    /// Attacks in the direction selected by the current rotation.
    ///
    /// All targets are resolved against the board as it was before the
    /// attack and destroyed together; they become the takeover options.
    ///
    /// # Errors
    ///
    /// Refused when the game is won or the player already attacked.
    #[instrument(skip(self), fields(player = %self.current_player, rotation = %self.rotation))]
    pub fn try_attack(&mut self) -> Result<(), ActionError> {
        AttackContract::pre(self, &())?;
        #[cfg(debug_assertions)]
        let before = self.clone();

        let destroyed = self.attack_preview();
        for pos in &destroyed {
            self.board.set(*pos, Square::Empty);
        }
        self.takeover_options = destroyed.into_iter().collect();
        self.has_attacked = true;
        debug!(destroyed = ?self.takeover_options, "Attack resolved");

        #[cfg(debug_assertions)]
        super::contracts::debug_verify::<AttackContract, ()>(&before, self);
        Ok(())
    }

    /// Applies any action, reporting why it was refused.
    ///
    /// # Errors
    ///
    /// Propagates the refusal of the underlying transition. Rotating,
    /// ending the turn and resetting never fail.
    #[instrument(skip(self))]
    pub fn try_apply(&mut self, action: Action) -> Result<(), ActionError> {
        match action {
            Action::Place(pos) => self.try_place(pos),
            Action::Takeover(pos) => self.try_takeover(pos),
            Action::Select(pos) => self.try_select(pos),
            Action::Attack => self.try_attack(),
            Action::Rotate => {
                self.rotation = self.rotation.next();
                debug!(rotation = %self.rotation, "Board rotated");
                Ok(())
            }
            Action::EndTurn => {
                self.has_attacked = false;
                self.has_placed = false;
                self.takeover_options.clear();
                self.current_player = self.current_player.opponent();
                debug!(next = %self.current_player, "Turn ended");
                Ok(())
            }
            Action::Reset => {
                *self = Self::with_edge_policy(self.edge_policy);
                info!("Game reset");
                Ok(())
            }
        }
    }

    fn announce_winner(&self) {
        if let Some(winner) = self.winner() {
            info!(%winner, "Game won");
        }
    }

    // ─────────────────────────────────────────────────────────
    //  Soft transitions (refusals are no-ops)
    // ─────────────────────────────────────────────────────────

    /// Applies an action; a refused action leaves the state unchanged.
    pub fn apply(mut self, action: Action) -> Self {
        if let Err(error) = self.try_apply(action) {
            debug!(%action, %error, "Ignoring refused action");
        }
        self
    }

    /// Places the current player's token, if allowed.
    pub fn place(self, pos: Position) -> Self {
        self.apply(Action::Place(pos))
    }

    /// Reclaims a destroyed square, if it is a takeover option.
    pub fn takeover(self, pos: Position) -> Self {
        self.apply(Action::Takeover(pos))
    }

    /// Clicks a square: place before attacking, take over after.
    pub fn select(self, pos: Position) -> Self {
        self.apply(Action::Select(pos))
    }

    /// Rotates the board 90 degrees. Always allowed.
    pub fn rotate(self) -> Self {
        self.apply(Action::Rotate)
    }

    /// Attacks, if the player has not attacked yet and nobody has won.
    pub fn attack(self) -> Self {
        self.apply(Action::Attack)
    }

    /// Ends the turn and hands play to the opponent. Always allowed.
    pub fn end_turn(self) -> Self {
        self.apply(Action::EndTurn)
    }

    /// Returns the canonical initial state, keeping the edge policy.
    pub fn reset(self) -> Self {
        self.apply(Action::Reset)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game_on(board: &str, player: Player) -> GameState {
        let mut game = GameState::new();
        game.board = board.parse().expect("valid board");
        game.current_player = player;
        game
    }

    #[test]
    fn test_new_game_is_initial_state() {
        let game = GameState::new();
        assert_eq!(game.board(), &Board::new());
        assert_eq!(game.current_player(), Player::X);
        assert_eq!(game.rotation(), Rotation::Deg0);
        assert!(!game.has_placed());
        assert!(!game.has_attacked());
        assert!(game.takeover_options().is_empty());
        assert_eq!(game.status(), GameStatus::InProgress);
    }

    #[test]
    fn test_place_sets_token_and_flag() {
        let game = GameState::new().place(Position::Center);
        assert_eq!(game.board().get(Position::Center), Square::Occupied(Player::X));
        assert!(game.has_placed());
    }

    #[test]
    fn test_second_place_is_noop() {
        let once = GameState::new().place(Position::Center);
        let twice = once.clone().place(Position::TopLeft);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_try_place_reports_reason() {
        let mut game = GameState::new().place(Position::Center);
        assert_eq!(
            game.try_place(Position::TopLeft),
            Err(ActionError::AlreadyPlaced(Player::X))
        );
    }

    #[test]
    fn test_place_after_attack_is_refused() {
        let mut game = GameState::new().attack();
        assert_eq!(
            game.try_place(Position::Center),
            Err(ActionError::AlreadyAttacked(Player::X))
        );
        assert!(game.board().is_empty(Position::Center));
    }

    #[test]
    fn test_attack_without_target_still_spends_attack() {
        let game = game_on("XO./.../...", Player::X).attack();
        assert!(game.has_attacked());
        assert!(game.takeover_options().is_empty());
        assert_eq!(game.board().to_compact(), "XO.......");
    }

    #[test]
    fn test_attack_destroys_and_offers_takeover() {
        let game = game_on("X../O../...", Player::X).attack();
        assert!(game.board().is_empty(Position::MiddleLeft));
        assert_eq!(
            game.takeover_options().iter().copied().collect::<Vec<_>>(),
            vec![Position::MiddleLeft]
        );

        let game = game.takeover(Position::MiddleLeft);
        assert_eq!(game.board().get(Position::MiddleLeft), Square::Occupied(Player::X));
        assert!(game.takeover_options().is_empty());
    }

    #[test]
    fn test_takeover_of_other_square_is_noop() {
        let game = game_on("X../O../...", Player::X).attack();
        let after = game.clone().takeover(Position::Center);
        assert_eq!(game, after);
    }

    #[test]
    fn test_select_dispatches_on_attack_flag() {
        let game = game_on("X../O../...", Player::X).select(Position::Center);
        assert_eq!(game.board().get(Position::Center), Square::Occupied(Player::X));

        let game = game.attack();
        assert_eq!(game.takeover_options().len(), 1);
        let game = game.select(Position::MiddleLeft);
        assert_eq!(game.board().get(Position::MiddleLeft), Square::Occupied(Player::X));

        // Empty square that was never destroyed: no placement after an attack.
        let before = game.clone();
        let after = game.select(Position::BottomRight);
        assert_eq!(before, after);
    }

    #[test]
    fn test_attack_refused_after_win() {
        let mut game = game_on("XXX/X../O..", Player::X);
        assert_eq!(game.try_attack(), Err(ActionError::GameOver(Player::X)));
        assert_eq!(game.status(), GameStatus::Won(Player::X));
    }

    #[test]
    fn test_takeover_can_complete_a_win() {
        let game = game_on("XXX/O../...", Player::X).attack();
        assert!(game.winner().is_none());
        let game = game.takeover(Position::MiddleLeft);
        assert_eq!(game.winner(), Some(Player::X));
    }

    #[test]
    fn test_end_turn_clears_turn_state() {
        let game = game_on("X../O../...", Player::X)
            .place(Position::Center)
            .attack()
            .end_turn();
        assert_eq!(game.current_player(), Player::O);
        assert!(!game.has_placed());
        assert!(!game.has_attacked());
        assert!(game.takeover_options().is_empty());
    }

    #[test]
    fn test_rotation_mid_turn_changes_next_attack() {
        let game = game_on("XO./.../...", Player::X)
            .place(Position::BottomRight)
            .rotate()
            .attack();
        assert_eq!(game.rotation(), Rotation::Deg90);
        assert!(game.board().is_empty(Position::TopCenter));
    }

    #[test]
    fn test_reset_keeps_edge_policy() {
        let game = GameState::with_edge_policy(EdgePolicy::Legacy)
            .place(Position::Center)
            .rotate()
            .reset();
        assert_eq!(game, GameState::with_edge_policy(EdgePolicy::Legacy));
    }

    #[test]
    fn test_state_serializes() {
        let game = GameState::new().place(Position::Center);
        let json = serde_json::to_string(&game).unwrap();
        let back: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(game, back);
    }
}
