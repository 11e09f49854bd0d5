//! Runtime sessions driven over a temporary data directory.
use std::path::Path;

use game_core::{InputState, LevelPhase, PickupKind};
use runtime::{GameEvent, Runtime, RuntimeError, Topic};

fn write_data(dir: &Path) {
    std::fs::create_dir(dir.join("levels")).unwrap();
    std::fs::write(
        dir.join("levels.ron"),
        r#"[
            (name: "Hall", file: "hall.ron", unlock: 1),
            (name: "Lair", file: "lair.ron", unlock: 2),
            (name: "Deep", file: "deep.ron", unlock: 2),
        ]"#,
    )
    .unwrap();
    std::fs::write(
        dir.join("levels/hall.ron"),
        "(rows: [\"#######\", \"#P.g.G#\", \"#######\"])",
    )
    .unwrap();
    std::fs::write(
        dir.join("levels/lair.ron"),
        "(rows: [\"#######\", \"#P..E.G#\", \"#######\"])",
    )
    .unwrap();
    std::fs::write(
        dir.join("levels/deep.ron"),
        "(rows: [\"####\", \"#PG#\", \"####\"])",
    )
    .unwrap();
    std::fs::write(dir.join("config.toml"), "frame_duration = 20\n").unwrap();
}

#[tokio::test]
async fn winning_a_level_publishes_events_and_unlocks_the_next() {
    let dir = tempfile::tempdir().unwrap();
    write_data(dir.path());
    let mut runtime = Runtime::builder().data_dir(dir.path()).build().unwrap();
    assert_eq!(runtime.config().frame_duration, 20);

    let mut world = runtime.subscribe(Topic::World);
    let mut lifecycle = runtime.subscribe(Topic::Session);

    let mut session = runtime.start_level(0).unwrap();
    for _ in 0..200 {
        if session.step(InputState::RIGHT).unwrap().phase == LevelPhase::Won {
            break;
        }
    }
    assert_eq!(session.phase(), LevelPhase::Won);
    assert_eq!(session.now().0 % 20, 0);

    match world.recv().await.unwrap() {
        GameEvent::ItemCollected { kind, coins, .. } => {
            assert_eq!(kind, PickupKind::GoldCoin);
            assert_eq!(coins, 500);
        }
        other => panic!("unexpected event {other:?}"),
    }
    match world.recv().await.unwrap() {
        GameEvent::ItemCollected { kind, .. } => assert_eq!(kind, PickupKind::Goal),
        other => panic!("unexpected event {other:?}"),
    }
    assert_eq!(
        lifecycle.recv().await.unwrap(),
        GameEvent::LevelWon { coins: 500 }
    );

    assert!(matches!(
        session.step(InputState::empty()),
        Err(RuntimeError::SessionFinished { phase: "won" })
    ));

    assert_eq!(runtime.finish_session(&session), Some(1));
    assert_eq!(runtime.progression().max_level(), 1);
    assert_eq!(runtime.finish_session(&session), None);
}

#[test]
fn locked_and_unknown_levels_are_refused() {
    let dir = tempfile::tempdir().unwrap();
    write_data(dir.path());
    let runtime = Runtime::builder().data_dir(dir.path()).build().unwrap();

    assert!(matches!(
        runtime.start_level(2),
        Err(RuntimeError::LevelLocked { index: 2, max_level: 0 })
    ));
    assert!(matches!(
        runtime.start_level(7),
        Err(RuntimeError::UnknownLevel { index: 7, count: 3 })
    ));
}

#[test]
fn malformed_layouts_surface_as_content_errors() {
    let dir = tempfile::tempdir().unwrap();
    write_data(dir.path());
    let mut runtime = Runtime::builder().data_dir(dir.path()).build().unwrap();

    let mut session = runtime.start_level(0).unwrap();
    while !session.is_finished() {
        session.step(InputState::RIGHT).unwrap();
    }
    runtime.finish_session(&session);

    // lair.ron has a ragged row.
    assert!(matches!(
        runtime.start_level(1),
        Err(RuntimeError::Content { .. })
    ));
}

#[tokio::test]
async fn pausing_publishes_lifecycle_events() {
    let dir = tempfile::tempdir().unwrap();
    write_data(dir.path());
    let runtime = Runtime::builder()
        .data_dir(dir.path())
        .frame_duration(16)
        .build()
        .unwrap();
    let mut lifecycle = runtime.subscribe(Topic::Session);

    let mut session = runtime.start_level(0).unwrap();
    session.step(InputState::PAUSE).unwrap();
    let frozen_at = session.level().player().position();
    session.step(InputState::RIGHT).unwrap();
    assert_eq!(session.level().player().position(), frozen_at);
    session.step(InputState::PAUSE).unwrap();

    assert_eq!(lifecycle.recv().await.unwrap(), GameEvent::LevelPaused);
    assert_eq!(lifecycle.recv().await.unwrap(), GameEvent::LevelResumed);
}

#[test]
fn missing_catalog_fails_to_build() {
    let dir = tempfile::tempdir().unwrap();
    let err = Runtime::builder().data_dir(dir.path()).build().unwrap_err();
    assert!(matches!(err, RuntimeError::Content { .. }));
}
