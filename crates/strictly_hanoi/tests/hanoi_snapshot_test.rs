//! Tests for serializable snapshots and elapsed time.

use std::sync::Arc;
use std::time::Duration;
use strictly_hanoi::{
    Game, GameSnapshot, GameStatus, ManualClock, format_elapsed, optimal_moves,
};

#[test]
fn test_snapshot_reflects_board() {
    let mut game = Game::new(3).unwrap();
    game.start().unwrap();
    game.move_block(0, 2).unwrap();

    let snapshot = game.snapshot();
    assert_eq!(*snapshot.status(), GameStatus::Running);
    assert_eq!(*snapshot.move_count(), 1);
    assert_eq!(snapshot.pegs()[0].sizes(), &vec![2, 3]);
    assert!(snapshot.pegs()[1].sizes().is_empty());
    assert_eq!(snapshot.pegs()[2].sizes(), &vec![1]);
    assert_eq!(snapshot.pegs()[2].label(), "C");
}

#[test]
fn test_snapshot_json_roundtrip() {
    let game = Game::replay(4, &optimal_moves(4)).unwrap();
    let snapshot = game.snapshot();

    let json = serde_json::to_string(&snapshot).expect("serialize");
    assert!(json.contains("\"status\":\"Finished\""));

    let parsed: GameSnapshot = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(parsed, snapshot);
}

#[test]
fn test_elapsed_time_in_snapshot() {
    let clock = ManualClock::new();
    let mut game = Game::with_clock(3, Arc::new(clock.clone())).unwrap();
    game.start().unwrap();
    clock.advance(Duration::from_millis(61_042));

    assert_eq!(*game.snapshot().elapsed_ms(), 61_042);
    assert_eq!(format_elapsed(game.elapsed()), "01:01.042");

    game.reset();
    assert_eq!(game.elapsed(), Duration::ZERO);
}
