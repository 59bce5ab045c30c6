//! Single winner invariant: play stops once a winning region exists.

use super::super::rules::connected_regions;
use super::super::GameState;
use super::Invariant;

/// Invariant: at most one player owns a winning region.
///
/// Placing and attacking are refused once someone has won, and takeovers
/// only ever add tokens for the player whose turn it is, so the opponent
/// can never complete a region afterwards.
pub struct SingleWinnerInvariant;

impl Invariant<GameState> for SingleWinnerInvariant {
    fn holds(game: &GameState) -> bool {
        let mut winners = connected_regions(game.board())
            .into_iter()
            .filter(|region| region.is_winning())
            .map(|region| region.owner);

        match winners.next() {
            Some(first) => winners.all(|other| other == first),
            None => true,
        }
    }

    fn description() -> &'static str {
        "At most one player owns a winning region"
    }
}
