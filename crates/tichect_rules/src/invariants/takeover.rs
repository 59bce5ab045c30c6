//! Takeover invariants: options are empty cells left by this turn's attack.

use super::super::GameState;
use super::Invariant;

/// Invariant: every takeover option is an empty square.
///
/// Attacks only offer the cells they empty, and a takeover removes the
/// cell from the options as it fills it.
pub struct TakeoverTargetsEmptyInvariant;

impl Invariant<GameState> for TakeoverTargetsEmptyInvariant {
    fn holds(game: &GameState) -> bool {
        game.takeover_options()
            .iter()
            .all(|pos| game.board().is_empty(*pos))
    }

    fn description() -> &'static str {
        "Takeover options are empty squares"
    }
}

/// Invariant: takeover options only exist after this turn's attack.
pub struct TakeoverRequiresAttackInvariant;

impl Invariant<GameState> for TakeoverRequiresAttackInvariant {
    fn holds(game: &GameState) -> bool {
        game.takeover_options().is_empty() || game.has_attacked()
    }

    fn description() -> &'static str {
        "Takeover options require an attack this turn"
    }
}
