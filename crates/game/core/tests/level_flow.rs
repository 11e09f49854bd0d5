//! Whole-level scenarios driven through `Level::step`.
use std::sync::{Arc, Mutex};

use game_core::{
    Cell, Dispatch, EnemyHooks, GameConfig, InputState, LayerKind, Level, LevelLayout, LevelPhase,
    Mode, Tick, Vec2,
};

/// Walled corridor one tile high with the player at column 1 and the goal at the far end.
fn corridor(width: usize, enemy_col: Option<usize>) -> LevelLayout {
    let mut layout = LevelLayout::empty(width, 3);
    for col in 0..width {
        layout.set(LayerKind::Walls, Cell::new(col, 0), 0);
        layout.set(LayerKind::Walls, Cell::new(col, 2), 0);
    }
    layout.set(LayerKind::Walls, Cell::new(0, 1), 0);
    layout.set(LayerKind::Walls, Cell::new(width - 1, 1), 0);
    layout.set(LayerKind::Player, Cell::new(1, 1), 0);
    layout.set(LayerKind::Player, Cell::new(width - 2, 1), 1);
    if let Some(col) = enemy_col {
        layout.set(LayerKind::Enemies, Cell::new(col, 1), 0);
    }
    layout
}

#[derive(Default)]
struct Journal {
    attacks: u32,
    remembered: Vec<Vec2>,
}

struct JournalHooks(Arc<Mutex<Journal>>);

impl EnemyHooks for JournalHooks {
    fn on_attack(&mut self, _position: Vec2, _damage: u32) {
        self.0.lock().unwrap().attacks += 1;
    }

    fn on_remember(&mut self, _position: Vec2, target: Vec2) {
        self.0.lock().unwrap().remembered.push(target);
    }
}

#[test]
fn idle_player_is_hunted_down() {
    let mut level = Level::build(&corridor(12, Some(3)), &GameConfig::default()).unwrap();
    let journal = Arc::new(Mutex::new(Journal::default()));
    let shared = Arc::clone(&journal);
    level.install_enemy_hooks(move |_| Box::new(JournalHooks(Arc::clone(&shared))));

    let mut now = Tick::ZERO;
    let mut hits = Vec::new();
    for _ in 0..1_000 {
        now += 16;
        let report = level.step(InputState::empty(), now);
        hits.extend(report.hits);
        if report.phase == LevelPhase::GameOver {
            break;
        }
    }

    assert_eq!(level.phase(), LevelPhase::GameOver);
    assert_eq!(hits.len(), 3);
    assert!(hits.iter().all(|hit| hit.amount == 34));
    assert_eq!(hits[2].health_after, -2);
    assert!(level.player().is_dead());
    assert!(journal.lock().unwrap().attacks >= 3);
}

#[test]
fn hits_are_rate_limited_by_invulnerability() {
    let mut level = Level::build(&corridor(12, Some(3)), &GameConfig::default()).unwrap();

    let mut now = Tick::ZERO;
    let mut hit_times = Vec::new();
    let mut absorbed = 0;
    while hit_times.len() < 2 {
        now += 16;
        let report = level.step(InputState::empty(), now);
        absorbed += report.absorbed_attacks;
        if !report.hits.is_empty() {
            hit_times.push(now);
        }
        assert!(now.0 < 60_000, "enemy never reached the player");
    }

    assert!(hit_times[1].since(hit_times[0]) >= 400);
    assert!(absorbed > 0);
}

#[test]
fn switching_light_off_sends_chaser_to_last_known_position() {
    let mut level = Level::build(&corridor(12, Some(4)), &GameConfig::default()).unwrap();
    let journal = Arc::new(Mutex::new(Journal::default()));
    let shared = Arc::clone(&journal);
    level.install_enemy_hooks(move |_| Box::new(JournalHooks(Arc::clone(&shared))));

    let report = level.step(InputState::empty(), Tick(16));
    assert_eq!(report.enemies[0].dispatch, Dispatch::Pursued);
    let player_at = level.player().position();

    let report = level.step(InputState::LIGHT, Tick(32));
    assert!(report.light_toggled);
    assert!(!level.player().light_on());
    assert_eq!(
        report.enemies[0].dispatch,
        Dispatch::Remembered { target: player_at }
    );
    assert_eq!(journal.lock().unwrap().remembered, vec![player_at]);

    let report = level.step(InputState::empty(), Tick(48));
    assert_eq!(report.enemies[0].status.mode, Mode::Moving);
    assert_eq!(report.enemies[0].dispatch, Dispatch::Drifting);
}

#[test]
fn collected_flower_widens_detection() {
    let mut layout = corridor(12, None);
    layout.set(LayerKind::Flowers, Cell::new(2, 1), 0);
    let mut level = Level::build(&layout, &GameConfig::default()).unwrap();
    let radius = level.player().visible_radius();

    let mut now = Tick::ZERO;
    for _ in 0..30 {
        now += 16;
        level.step(InputState::RIGHT, now);
    }

    assert!(level.player().visible_radius() > radius);
    assert!(level.pickups().iter().all(|p| p.kind != game_core::PickupKind::Flower));
}
