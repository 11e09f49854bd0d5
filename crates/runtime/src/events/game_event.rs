//! Game events extracted from frame reports.
//!
//! Events represent high-level occurrences in a level (player hurt, item
//! picked up, enemy lost sight of the player) derived from the per-frame
//! [`game_core::FrameReport`]. Frontends and loggers react to them without
//! inspecting level internals.

use game_core::{EnemyStatus, PickupKind, Vec2};

use super::bus::Topic;

#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// An enemy hit landed on the player.
    PlayerDamaged {
        amount: u32,
        health_before: i32,
        health_after: i32,
        threshold: HealthThreshold,
        position: Vec2,
    },

    /// The player picked up an item.
    ItemCollected {
        kind: PickupKind,
        position: Vec2,
        /// Coin total after the pickup.
        coins: u32,
    },

    /// The player switched the light.
    LightToggled { on: bool },

    /// An enemy changed facing or mode. `enemy` is the spawn index.
    EnemyStatusChanged {
        enemy: usize,
        from: EnemyStatus,
        to: EnemyStatus,
    },

    /// An enemy latched the player's position when the light went off.
    EnemyRemembered { enemy: usize, target: Vec2 },

    LevelPaused,
    LevelResumed,
    LevelWon { coins: u32 },
    GameOver { coins: u32 },
}

impl GameEvent {
    pub fn topic(&self) -> Topic {
        match self {
            Self::PlayerDamaged { .. }
            | Self::EnemyStatusChanged { .. }
            | Self::EnemyRemembered { .. } => Topic::Combat,
            Self::ItemCollected { .. } | Self::LightToggled { .. } => Topic::World,
            Self::LevelPaused | Self::LevelResumed | Self::LevelWon { .. } | Self::GameOver { .. } => {
                Topic::Session
            }
        }
    }
}

/// Health threshold levels for triggering effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthThreshold {
    /// 100% HP
    Full,
    /// 75-99% HP
    Healthy,
    /// 25-74% HP
    Wounded,
    /// 1-24% HP
    Critical,
    /// 0% HP or below (dead)
    Dead,
}

impl HealthThreshold {
    /// Calculate health threshold from current and max HP.
    pub fn from_hp(current: i32, max: i32) -> Self {
        if current <= 0 {
            Self::Dead
        } else if max <= 0 {
            Self::Full
        } else {
            let percent = (i64::from(current) * 100) / i64::from(max);
            match percent {
                100.. => Self::Full,
                75..=99 => Self::Healthy,
                25..=74 => Self::Wounded,
                _ => Self::Critical,
            }
        }
    }
}
