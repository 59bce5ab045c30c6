//! Contract-based validation for Tic-Hect-4 transitions.
//!
//! Contracts formalize Hoare-style reasoning: {P} action {Q}. Preconditions
//! are always checked and decide whether a transition happens at all;
//! postconditions are verified in debug builds.

use super::action::ActionError;
use super::invariants::{GameInvariants, InvariantSet, InvariantViolation};
use super::{GameState, Position, Square};
use tracing::instrument;

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for a transition.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), ActionError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), Vec<InvariantViolation>>;
}

// ─────────────────────────────────────────────────────────────
//  Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: nobody has won yet.
pub struct NoWinner;

impl NoWinner {
    /// Fails with the winner if the game is already decided.
    #[instrument(skip(game))]
    pub fn check(game: &GameState) -> Result<(), ActionError> {
        match game.winner() {
            Some(winner) => Err(ActionError::GameOver(winner)),
            None => Ok(()),
        }
    }
}

/// Precondition: the square at the position is empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Fails if the square already holds a token.
    #[instrument(skip(game))]
    pub fn check(pos: Position, game: &GameState) -> Result<(), ActionError> {
        if game.board().is_empty(pos) {
            Ok(())
        } else {
            Err(ActionError::SquareOccupied(pos))
        }
    }
}

/// Precondition: the current player has not placed this turn.
pub struct NotYetPlaced;

impl NotYetPlaced {
    /// Fails once the turn's placement is done.
    #[instrument(skip(game))]
    pub fn check(game: &GameState) -> Result<(), ActionError> {
        if game.has_placed() {
            Err(ActionError::AlreadyPlaced(game.current_player()))
        } else {
            Ok(())
        }
    }
}

/// Precondition: the current player has not attacked this turn.
pub struct NotYetAttacked;

impl NotYetAttacked {
    /// Fails once the turn's attack is spent.
    #[instrument(skip(game))]
    pub fn check(game: &GameState) -> Result<(), ActionError> {
        if game.has_attacked() {
            Err(ActionError::AlreadyAttacked(game.current_player()))
        } else {
            Ok(())
        }
    }
}

/// Precondition: the position was emptied by this turn's attack.
pub struct IsTakeoverTarget;

impl IsTakeoverTarget {
    /// Fails unless the position is still offered for takeover.
    #[instrument(skip(game))]
    pub fn check(pos: Position, game: &GameState) -> Result<(), ActionError> {
        if game.takeover_options().contains(&pos) {
            Ok(())
        } else {
            Err(ActionError::NotTakeoverTarget(pos))
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Transition Contracts
// ─────────────────────────────────────────────────────────────

fn invariants_hold(after: &GameState) -> Result<(), Vec<InvariantViolation>> {
    GameInvariants::check_all(after)
}

/// Squares whose content differs between two states.
fn changed_squares(before: &GameState, after: &GameState) -> Vec<Position> {
    Position::ALL
        .into_iter()
        .filter(|pos| before.board().get(*pos) != after.board().get(*pos))
        .collect()
}

/// Contract for placing a token.
///
/// Preconditions: no winner, empty square, no attack yet, no placement yet.
///
/// Postconditions: exactly one square changed, to the current player;
/// game invariants hold.
pub struct PlacementContract;

impl Contract<GameState, Position> for PlacementContract {
    fn pre(game: &GameState, pos: &Position) -> Result<(), ActionError> {
        NoWinner::check(game)?;
        SquareIsEmpty::check(*pos, game)?;
        NotYetAttacked::check(game)?;
        NotYetPlaced::check(game)?;
        Ok(())
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), Vec<InvariantViolation>> {
        let changed = changed_squares(before, after);
        let placed = Square::Occupied(before.current_player());
        if changed.len() != 1 || after.board().get(changed[0]) != placed {
            return Err(vec![InvariantViolation::new(
                "Placement changes exactly one square to the current player",
            )]);
        }
        invariants_hold(after)
    }
}

/// Contract for reclaiming a destroyed square.
///
/// Precondition: the position is a takeover option.
///
/// Postconditions: the option is consumed; game invariants hold.
pub struct TakeoverContract;

impl Contract<GameState, Position> for TakeoverContract {
    fn pre(game: &GameState, pos: &Position) -> Result<(), ActionError> {
        IsTakeoverTarget::check(*pos, game)
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), Vec<InvariantViolation>> {
        if after.takeover_options().len() + 1 != before.takeover_options().len() {
            return Err(vec![InvariantViolation::new(
                "Takeover consumes exactly one option",
            )]);
        }
        invariants_hold(after)
    }
}

/// Contract for attacking.
///
/// Preconditions: no winner, no attack yet this turn.
///
/// Postconditions: the attacker's tokens are untouched, every changed
/// square became a takeover option; game invariants hold.
pub struct AttackContract;

impl Contract<GameState, ()> for AttackContract {
    fn pre(game: &GameState, _action: &()) -> Result<(), ActionError> {
        NoWinner::check(game)?;
        NotYetAttacked::check(game)?;
        Ok(())
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), Vec<InvariantViolation>> {
        let changed = changed_squares(before, after);
        let attacker = before.current_player();
        let only_destroyed_options = changed.iter().all(|pos| {
            !before.board().get(*pos).is_owned_by(attacker)
                && after.takeover_options().contains(pos)
        });
        if !only_destroyed_options || changed.len() != after.takeover_options().len() {
            return Err(vec![InvariantViolation::new(
                "Attack only empties opponent squares, each offered for takeover",
            )]);
        }
        invariants_hold(after)
    }
}

/// Verifies a contract's postcondition, panicking in debug builds.
#[cfg(debug_assertions)]
#[instrument(skip_all)]
pub(crate) fn debug_verify<C, A>(before: &GameState, after: &GameState)
where
    C: Contract<GameState, A>,
{
    let result = C::post(before, after);
    if let Err(violations) = &result {
        let descriptions = violations
            .iter()
            .map(|v| v.description.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        tracing::warn!(%descriptions, "Postcondition failed");
    }
    debug_assert!(result.is_ok(), "Postcondition failed: {:?}", result);
}
