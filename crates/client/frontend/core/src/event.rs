//! Utilities for reacting to runtime events inside UI layers.
use game_core::PickupKind;
use runtime::{GameEvent, HealthThreshold};

use crate::config::MessageConfig;
use crate::message::{MessageEntry, MessageLevel, MessageLog};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EventImpact {
    pub requires_redraw: bool,
}

impl EventImpact {
    pub const fn none() -> Self {
        Self {
            requires_redraw: false,
        }
    }

    pub const fn redraw() -> Self {
        Self {
            requires_redraw: true,
        }
    }

    pub fn combine(self, other: Self) -> Self {
        Self {
            requires_redraw: self.requires_redraw || other.requires_redraw,
        }
    }
}

pub trait EventConsumer {
    fn on_event(&mut self, event: &GameEvent, now: u64) -> EventImpact;
    fn message_log(&self) -> &MessageLog;
    fn message_log_mut(&mut self) -> &mut MessageLog;
    fn take_message_log(self) -> MessageLog
    where
        Self: Sized;
}

/// Consumer that narrates events into a [`MessageLog`].
#[derive(Clone, Debug)]
pub struct MessageConsumer {
    log: MessageLog,
    show_enemy_status: bool,
}

impl MessageConsumer {
    pub fn new(config: &MessageConfig) -> Self {
        Self {
            log: MessageLog::new(config.capacity),
            show_enemy_status: config.show_enemy_status,
        }
    }

    fn describe(&self, event: &GameEvent) -> Option<(String, MessageLevel)> {
        let described = match event {
            GameEvent::PlayerDamaged {
                amount,
                health_after,
                threshold,
                ..
            } => {
                let level = match threshold {
                    HealthThreshold::Critical | HealthThreshold::Dead => MessageLevel::Error,
                    _ => MessageLevel::Warning,
                };
                (
                    format!("A souleater strikes for {amount} ({} HP left)", (*health_after).max(0)),
                    level,
                )
            }
            GameEvent::ItemCollected { kind, coins, .. } => {
                let text = match kind {
                    PickupKind::SilverCoin | PickupKind::GoldCoin => {
                        format!("Picked up a coin ({coins} total)")
                    }
                    PickupKind::Flower => "The flower brightens your light".to_string(),
                    PickupKind::Goal => "You found the way out".to_string(),
                };
                (text, MessageLevel::Info)
            }
            GameEvent::LightToggled { on: true } => ("Light on".to_string(), MessageLevel::Info),
            GameEvent::LightToggled { on: false } => {
                ("Light off".to_string(), MessageLevel::Info)
            }
            GameEvent::EnemyRemembered { enemy, .. } => (
                format!("Souleater #{enemy} heads to where it last saw you"),
                MessageLevel::Warning,
            ),
            GameEvent::EnemyStatusChanged { enemy, to, .. } if self.show_enemy_status => {
                (format!("Souleater #{enemy}: {to}"), MessageLevel::Info)
            }
            GameEvent::EnemyStatusChanged { .. } => return None,
            GameEvent::LevelPaused => ("Paused".to_string(), MessageLevel::Info),
            GameEvent::LevelResumed => ("Resumed".to_string(), MessageLevel::Info),
            GameEvent::LevelWon { coins } => {
                (format!("Level complete with {coins} coins"), MessageLevel::Info)
            }
            GameEvent::GameOver { coins } => {
                (format!("Game over with {coins} coins"), MessageLevel::Error)
            }
        };
        Some(described)
    }
}

impl EventConsumer for MessageConsumer {
    fn on_event(&mut self, event: &GameEvent, now: u64) -> EventImpact {
        match self.describe(event) {
            Some((text, level)) => {
                self.log.push(MessageEntry::new(text, Some(now), level));
                EventImpact::redraw()
            }
            None => EventImpact::none(),
        }
    }

    fn message_log(&self) -> &MessageLog {
        &self.log
    }

    fn message_log_mut(&mut self) -> &mut MessageLog {
        &mut self.log
    }

    fn take_message_log(self) -> MessageLog {
        self.log
    }
}
