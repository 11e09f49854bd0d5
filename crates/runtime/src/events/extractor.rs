//! Event extraction from frame reports.

use game_core::{Dispatch, FrameReport, LevelPhase, Player};

use super::game_event::{GameEvent, HealthThreshold};

/// Extract high-level game events from one frame report.
///
/// `player` is the player after the frame has run.
///
/// # Event Ordering
///
/// 1. LevelResumed (when the frame left the pause)
/// 2. Player actions (light, pickups)
/// 3. Enemy status changes and memory, in spawn order
/// 4. Damage that landed on the player
/// 5. Lifecycle changes (pause, win, game over)
pub fn extract_events(report: &FrameReport, player: &Player) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if report.previous_phase == LevelPhase::Paused && report.phase == LevelPhase::Running {
        events.push(GameEvent::LevelResumed);
    }

    if report.light_toggled {
        events.push(GameEvent::LightToggled {
            on: player.light_on(),
        });
    }

    for item in &report.collected {
        events.push(GameEvent::ItemCollected {
            kind: item.kind,
            position: item.position,
            coins: player.coins(),
        });
    }

    for (enemy, update) in report.enemies.iter().enumerate() {
        if update.status_changed() {
            events.push(GameEvent::EnemyStatusChanged {
                enemy,
                from: update.previous,
                to: update.status,
            });
        }
        if let Dispatch::Remembered { target } = update.dispatch {
            events.push(GameEvent::EnemyRemembered { enemy, target });
        }
    }

    for hit in &report.hits {
        events.push(GameEvent::PlayerDamaged {
            amount: hit.amount,
            health_before: hit.health_before,
            health_after: hit.health_after,
            threshold: HealthThreshold::from_hp(hit.health_after, player.max_health()),
            position: hit.position,
        });
    }

    if report.phase_changed() {
        match report.phase {
            LevelPhase::Paused => events.push(GameEvent::LevelPaused),
            LevelPhase::Won => events.push(GameEvent::LevelWon {
                coins: player.coins(),
            }),
            LevelPhase::GameOver => events.push(GameEvent::GameOver {
                coins: player.coins(),
            }),
            LevelPhase::Running => {}
        }
    }

    if events.is_empty() {
        tracing::trace!(target: "runtime::events", now = %report.now, "quiet frame");
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{GameConfig, Tick, Vec2};

    fn quiet_report(now: u64) -> FrameReport {
        FrameReport {
            now: Tick(now),
            previous_phase: LevelPhase::Running,
            phase: LevelPhase::Running,
            light_toggled: false,
            collected: Default::default(),
            hits: Vec::new(),
            absorbed_attacks: 0,
            enemies: Vec::new(),
        }
    }

    fn player() -> Player {
        Player::spawn(Vec2::ZERO, &GameConfig::default())
    }

    #[test]
    fn quiet_frame_has_no_events() {
        assert!(extract_events(&quiet_report(16), &player()).is_empty());
    }

    #[test]
    fn resume_comes_first_and_game_over_last() {
        let mut report = quiet_report(32);
        report.previous_phase = LevelPhase::Paused;
        report.light_toggled = true;
        let events = extract_events(&report, &player());
        assert_eq!(
            events,
            vec![GameEvent::LevelResumed, GameEvent::LightToggled { on: true }]
        );

        let mut report = quiet_report(48);
        report.phase = LevelPhase::GameOver;
        report.hits.push(game_core::Hit {
            amount: 34,
            health_before: 32,
            health_after: -2,
            position: Vec2::ZERO,
        });
        let events = extract_events(&report, &player());
        assert!(matches!(
            events[0],
            GameEvent::PlayerDamaged {
                threshold: HealthThreshold::Dead,
                ..
            }
        ));
        assert_eq!(events[1], GameEvent::GameOver { coins: 0 });
    }
}
