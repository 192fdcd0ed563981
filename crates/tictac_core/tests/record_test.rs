//! Tests for game records, replay and persistence.

use tictac_core::{
    Coord, GameError, GameRecord, GameState, GameStatus, Mark, Move, Player, Square,
};

fn finished_game() -> GameState {
    let mut state = GameState::new(
        Player::human("Ada", Mark::O).expect("player"),
        Player::automated("AI", Mark::X).expect("player"),
    )
    .expect("game");
    for k in [5, 1, 3, 7, 4, 6, 2, 8, 9] {
        state.apply(Coord::from_key(k).expect("key")).expect("legal");
    }
    state
}

#[test]
fn test_record_matches_played_moves() {
    let state = finished_game();
    let record = state.record();
    assert_eq!(record.moves().len(), 9);
    assert_eq!(record.moves()[0], Move::new(Coord::from_key(5).expect("key"), Mark::O, 0));
    assert_eq!(record.players()[1].name(), "AI");
}

#[test]
fn test_undone_moves_are_not_recorded() {
    let mut state = finished_game();
    state.undo().expect("undo");
    state.undo().expect("undo");
    assert_eq!(state.record().moves().len(), 7);
}

#[test]
fn test_replay_frames() {
    let state = finished_game();
    let frames = state.record().replay().expect("replay");

    assert_eq!(frames.len(), 10);
    assert_eq!(frames[0].occupied(), 0);
    assert_eq!(frames[1].get(Coord::from_key(5).expect("key")), Square::Occupied(Mark::O));
    assert_eq!(&frames[9], state.board());
    for (i, frame) in frames.iter().enumerate() {
        assert_eq!(frame.occupied(), i);
    }
}

#[test]
fn test_final_state_matches() {
    let state = finished_game();
    let replayed = state.record().final_state().expect("replay");
    assert_eq!(replayed.status(), state.status());
    assert_eq!(replayed.board(), state.board());
}

#[test]
fn test_illegal_record_fails_replay() {
    let players = [
        Player::human("Ada", Mark::X).expect("player"),
        Player::human("Bob", Mark::O).expect("player"),
    ];
    let center = Coord::from_key(5).expect("key");
    let record = GameRecord::new(
        players,
        vec![Move::new(center, Mark::X, 0), Move::new(center, Mark::O, 1)],
    );
    assert!(record.replay().is_err());
}

#[test]
fn test_record_with_swapped_marks_is_rejected() {
    let players = [
        Player::human("Ada", Mark::X).expect("player"),
        Player::human("Bob", Mark::O).expect("player"),
    ];
    let key = |k| Coord::from_key(k).expect("key");
    let record = GameRecord::new(
        players,
        vec![Move::new(key(5), Mark::X, 0), Move::new(key(1), Mark::X, 1)],
    );

    let expected = GameError::RecordMismatch {
        index: 1,
        expected: Move::new(key(1), Mark::O, 1),
        found: Move::new(key(1), Mark::X, 1),
    };
    assert_eq!(record.replay().unwrap_err(), expected);
    assert_eq!(record.final_state().unwrap_err(), expected);
}

#[test]
fn test_record_with_wrong_player_index_is_rejected() {
    let players = [
        Player::human("Ada", Mark::X).expect("player"),
        Player::human("Bob", Mark::O).expect("player"),
    ];
    let record = GameRecord::new(
        players,
        vec![Move::new(Coord::from_key(5).expect("key"), Mark::X, 1)],
    );
    assert!(matches!(
        record.replay(),
        Err(GameError::RecordMismatch { index: 0, .. })
    ));
}

#[test]
fn test_save_and_load() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("last_game.json");

    assert!(GameRecord::load(&path).expect("load").is_none());

    let record = finished_game().record();
    record.save(&path).expect("save");
    let loaded = GameRecord::load(&path).expect("load").expect("record present");
    assert_eq!(loaded, record);
    assert!(matches!(
        loaded.final_state().expect("replay").status(),
        GameStatus::Tied | GameStatus::Won { .. }
    ));
}
