//! Scenario tests for the game state machine.

use noughts_core::{GameState, Line, Outcome, Player, Position, Session, Square, Theme, UiEvent};

fn play(moves: &[usize]) -> GameState {
    let mut game = GameState::new();
    for index in moves {
        game.apply_move(*index);
    }
    game
}

#[test]
fn test_top_row_win() {
    let game = play(&[0, 4, 1, 5, 2]);

    assert_eq!(
        game.outcome(),
        &Outcome::Won {
            player: Player::X,
            line: Line([Position::TopLeft, Position::TopCenter, Position::TopRight]),
        }
    );
    assert_eq!(game.outcome().line().map(|l| l.indices()), Some([0, 1, 2]));
}

#[test]
fn test_full_board_draw() {
    // X O X / X O O / O X X
    let game = play(&[0, 1, 2, 4, 7, 6, 3, 5, 8]);

    let marks: Vec<Option<Player>> = game.board().squares().iter().map(|s| s.player()).collect();
    let (x, o) = (Some(Player::X), Some(Player::O));
    assert_eq!(marks, vec![x, o, x, x, o, o, o, x, x]);
    assert_eq!(game.outcome(), &Outcome::Draw);
}

#[test]
fn test_move_after_win_is_ignored() {
    let mut game = play(&[0, 3, 1, 6, 2]);
    assert!(game.is_over());
    let before = game.clone();

    game.apply_move(4);

    assert_eq!(game.board(), before.board());
    assert_eq!(game.to_move(), before.to_move());
    assert_eq!(game.board().get(Position::Center), Square::Empty);
}

#[test]
fn test_move_on_occupied_square_is_ignored() {
    let mut game = play(&[4]);
    let before = game.clone();

    game.apply_move(4);

    assert_eq!(game, before);
    assert_eq!(game.to_move(), Player::O);
}

#[test]
fn test_out_of_range_index_is_ignored() {
    let mut game = play(&[0]);
    let before = game.clone();

    game.apply_move(9);
    game.apply_move(42);

    assert_eq!(game, before);
}

#[test]
fn test_turns_alternate() {
    let mut game = GameState::new();
    let mut expected = Player::X;
    for index in [4, 0, 8, 2, 1] {
        assert_eq!(game.to_move(), expected);
        let action = game.try_move(index).expect("legal move");
        assert_eq!(action.player, expected);
        expected = expected.opponent();
    }
}

#[test]
fn test_reset_from_every_phase() {
    for moves in [vec![], vec![4], vec![0, 4, 1, 5, 2], vec![0, 1, 2, 4, 7, 6, 3, 5, 8]] {
        let mut game = play(&moves);
        game.reset();
        assert_eq!(game, GameState::new());
    }
}

#[test]
fn test_reset_leaves_terminal_state() {
    let mut game = play(&[0, 4, 1, 5, 2]);
    game.reset();
    game.apply_move(4);
    assert_eq!(game.board().get(Position::Center), Square::Occupied(Player::X));
}

#[test]
fn test_session_forwards_events() {
    let mut session = Session::new(Theme::Light);
    for event in [UiEvent::Move(0), UiEvent::Move(4), UiEvent::ToggleTheme, UiEvent::Move(0)] {
        session.handle(event);
    }

    assert_eq!(session.theme(), Theme::Dark);
    assert_eq!(session.game().board().count(Player::X), 1);
    assert_eq!(session.game().board().count(Player::O), 1);
    assert_eq!(session.game().to_move(), Player::X);
}

#[test]
fn test_game_state_serializes() {
    let game = play(&[0, 4, 1, 5, 2]);
    let json = serde_json::to_value(&game).expect("serializable");
    assert_eq!(json["to_move"], "O");
    assert_eq!(json["board"]["squares"][4]["Occupied"], "O");
    assert_eq!(json["outcome"]["Won"]["player"], "X");
}
