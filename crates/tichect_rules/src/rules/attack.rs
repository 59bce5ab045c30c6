//! Attack resolution: which opponent tokens a directional attack destroys.

use super::super::{Board, Direction, Player, Position, Rotation, Square};
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

/// How horizontal attacks treat the edges of a row.
///
/// Attacks step through flattened index space, so a rightward step from
/// the last column lands on the first column of the next row.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum EdgePolicy {
    /// Horizontal attacks stop at the row edge.
    #[default]
    Bounded,
    /// Horizontal attacks wrap into the neighbouring row, as long as the
    /// target index stays on the board.
    Legacy,
}

impl EdgePolicy {
    /// Cell reached by one attack step from `origin`, if the policy allows it.
    pub fn step(self, origin: Position, direction: Direction) -> Option<Position> {
        let target = Position::from_signed(origin.to_index() as isize + direction.offset())?;
        if self == EdgePolicy::Bounded && direction.is_horizontal() && target.row() != origin.row() {
            return None;
        }
        Some(target)
    }
}

/// Opponent cells destroyed if `attacker` attacks with the given rotation.
///
/// Every target is judged against `board` as it stands before the attack;
/// nothing cascades from cells emptied by the same attack. Targets are
/// returned in row-major order of their attacking cell.
#[instrument]
pub fn attack_targets(
    board: &Board,
    attacker: Player,
    rotation: Rotation,
    policy: EdgePolicy,
) -> Vec<Position> {
    let direction = rotation.attack_direction();
    let defender = Square::Occupied(attacker.opponent());

    board
        .positions_of(attacker)
        .filter_map(|origin| {
            let target = policy.step(origin, direction)?;
            trace!(%origin, %target, "Attack step");
            (board.get(target) == defender).then_some(target)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().expect("valid board")
    }

    #[test]
    fn test_down_attack_hits_opponent_below() {
        let targets = attack_targets(
            &board("X../O../..."),
            Player::X,
            Rotation::Deg0,
            EdgePolicy::Bounded,
        );
        assert_eq!(targets, vec![Position::MiddleLeft]);
    }

    #[test]
    fn test_attack_ignores_empty_and_own_cells() {
        let targets = attack_targets(
            &board("XO./X../..."),
            Player::X,
            Rotation::Deg0,
            EdgePolicy::Bounded,
        );
        assert!(targets.is_empty());
    }

    #[test]
    fn test_up_attack_never_leaves_board() {
        let targets = attack_targets(
            &board("XXX/OOO/..."),
            Player::X,
            Rotation::Deg180,
            EdgePolicy::Legacy,
        );
        assert!(targets.is_empty());
    }

    #[test]
    fn test_right_attack_wraps_only_under_legacy() {
        // X on the right edge of row 0, O at the start of row 1.
        let b = board("..X/O../...");
        assert!(attack_targets(&b, Player::X, Rotation::Deg90, EdgePolicy::Bounded).is_empty());
        assert_eq!(
            attack_targets(&b, Player::X, Rotation::Deg90, EdgePolicy::Legacy),
            vec![Position::MiddleLeft]
        );
    }

    #[test]
    fn test_left_attack_wraps_only_under_legacy() {
        // O at the end of row 0, X at the start of row 1.
        let b = board("..O/X../...");
        assert!(attack_targets(&b, Player::X, Rotation::Deg270, EdgePolicy::Bounded).is_empty());
        assert_eq!(
            attack_targets(&b, Player::X, Rotation::Deg270, EdgePolicy::Legacy),
            vec![Position::TopRight]
        );
    }

    #[test]
    fn test_attack_is_simultaneous() {
        // Column of X, O, O: only the O directly below an X is hit.
        let b = board("X../O../O..");
        assert_eq!(
            attack_targets(&b, Player::X, Rotation::Deg0, EdgePolicy::Bounded),
            vec![Position::MiddleLeft]
        );
    }

    #[test]
    fn test_edge_policy_parses_lowercase() {
        assert_eq!("legacy".parse::<EdgePolicy>().unwrap(), EdgePolicy::Legacy);
        assert_eq!(EdgePolicy::Bounded.to_string(), "bounded");
    }
}
