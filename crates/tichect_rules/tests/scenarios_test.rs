//! Rule scenarios played through the public API.

use tichect_rules::{
    Action, Board, EdgePolicy, GameState, GameStatus, Player, Position, Rotation, check_winner,
    is_draw,
};

fn board(s: &str) -> Board {
    s.parse().unwrap()
}

#[test]
fn test_three_in_a_row_is_not_enough() {
    assert_eq!(check_winner(&board("XXX......")), None);
}

#[test]
fn test_top_row_plus_one_below_wins() {
    assert_eq!(check_winner(&board("XXX/X../...")), Some(Player::X));
}

#[test]
fn test_attack_into_empty_square_destroys_nothing() {
    let game = GameState::replay(&[
        Action::Place(Position::TopLeft),
        Action::EndTurn,
        Action::Place(Position::TopCenter),
        Action::EndTurn,
        Action::Attack,
    ]);
    assert_eq!(game.board().to_compact(), "XO.......");
    assert!(game.takeover_options().is_empty());
    assert!(game.has_attacked());
}

#[test]
fn test_attack_destroys_opponent_below() {
    let game = GameState::replay(&[
        Action::Place(Position::TopLeft),
        Action::EndTurn,
        Action::Place(Position::MiddleLeft),
        Action::EndTurn,
        Action::Attack,
    ]);
    assert_eq!(game.board().to_compact(), "X........");
    assert_eq!(
        game.takeover_options().iter().copied().collect::<Vec<_>>(),
        vec![Position::MiddleLeft]
    );
}

#[test]
fn test_full_board_without_region_is_draw() {
    let full = board("XOX/OXO/XOX");
    assert_eq!(check_winner(&full), None);
    assert!(is_draw(&full, None));
}

#[test]
fn test_takeover_can_win_mid_turn() {
    // X holds the top row; O sits under the top-left corner.
    let game = GameState::replay(&[
        Action::Place(Position::TopLeft),
        Action::EndTurn,
        Action::Place(Position::MiddleLeft),
        Action::EndTurn,
        Action::Place(Position::TopCenter),
        Action::EndTurn,
        Action::Place(Position::BottomRight),
        Action::EndTurn,
        Action::Place(Position::TopRight),
        Action::Attack,
        Action::Takeover(Position::MiddleLeft),
    ]);
    assert_eq!(game.status(), GameStatus::Won(Player::X));
    assert_eq!(game.winning_region().map(|r| r.size()), Some(4));

    // Nothing moves once the game is decided.
    let after = game.clone().rotate().attack().end_turn().place(Position::Center);
    assert_eq!(after.board(), game.board());
}

#[test]
fn test_rotation_picks_attack_direction() {
    // O at top-center is to the right of X at top-left.
    let setup = [
        Action::Place(Position::TopLeft),
        Action::EndTurn,
        Action::Place(Position::TopCenter),
        Action::EndTurn,
    ];
    let game = GameState::replay(&setup).rotate();
    assert_eq!(game.rotation(), Rotation::Deg90);

    let game = game.attack();
    assert!(game.takeover_options().contains(&Position::TopCenter));
    assert!(game.board().is_empty(Position::TopCenter));
}

#[test]
fn test_edge_policy_decides_row_wrap() {
    // X at top-right, O at middle-left: index 2 + 1 = 3.
    let actions = [
        Action::Place(Position::TopRight),
        Action::EndTurn,
        Action::Place(Position::MiddleLeft),
        Action::EndTurn,
        Action::Rotate,
        Action::Attack,
    ];

    let bounded = GameState::replay_with(EdgePolicy::Bounded, &actions);
    assert!(bounded.takeover_options().is_empty());
    assert_eq!(bounded.board().count(Player::O), 1);

    let legacy = GameState::replay_with(EdgePolicy::Legacy, &actions);
    assert!(legacy.takeover_options().contains(&Position::MiddleLeft));
    assert_eq!(legacy.board().count(Player::O), 0);
}

#[test]
fn test_end_turn_forfeits_unused_takeovers() {
    let game = GameState::replay(&[
        Action::Place(Position::TopLeft),
        Action::EndTurn,
        Action::Place(Position::MiddleLeft),
        Action::EndTurn,
        Action::Attack,
        Action::EndTurn,
    ]);
    assert_eq!(game.current_player(), Player::O);
    assert!(game.takeover_options().is_empty());
    assert!(game.board().is_empty(Position::MiddleLeft));

    // The square is an ordinary empty cell for O now.
    let game = game.place(Position::MiddleLeft);
    assert_eq!(game.board().get(Position::MiddleLeft).player(), Some(Player::O));
}

#[test]
fn test_try_variants_explain_refusals() {
    let mut game = GameState::new().place(Position::Center);
    assert_eq!(
        game.try_place(Position::TopLeft).unwrap_err().to_string(),
        "X has already placed a token this turn"
    );
    game.try_attack().unwrap();
    assert!(game.try_attack().is_err());
    assert!(game.try_takeover(Position::TopLeft).is_err());
}

#[test]
fn test_attack_destroys_row_and_each_square_is_taken_once() {
    let game = GameState::replay(&[
        Action::Place(Position::TopLeft),
        Action::EndTurn,
        Action::Place(Position::MiddleLeft),
        Action::EndTurn,
        Action::Place(Position::TopCenter),
        Action::EndTurn,
        Action::Place(Position::Center),
        Action::EndTurn,
        Action::Place(Position::BottomRight),
        Action::EndTurn,
        Action::Place(Position::MiddleRight),
        Action::EndTurn,
        Action::Place(Position::TopRight),
        Action::Attack,
    ]);
    assert_eq!(game.board().to_compact(), "XXX.....X");
    assert_eq!(
        game.takeover_options().iter().copied().collect::<Vec<_>>(),
        vec![Position::MiddleLeft, Position::Center, Position::MiddleRight]
    );
    assert_eq!(game.winner(), None);

    let once = game.takeover(Position::Center);
    let twice = once.clone().takeover(Position::Center);
    assert_eq!(twice, once);

    let game = twice.takeover(Position::MiddleRight);
    assert_eq!(game.board().to_compact(), "XXX.XX..X");
    assert_eq!(game.board().count(Player::O), 0);
    assert_eq!(
        game.takeover_options().iter().copied().collect::<Vec<_>>(),
        vec![Position::MiddleLeft]
    );
    assert_eq!(game.winner(), Some(Player::X));
}
