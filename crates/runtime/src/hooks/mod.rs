//! Enemy side-effect hooks installed by the runtime.
//!
//! The core fires [`EnemyHooks`] callbacks for attacks, pursuit and memory;
//! the runtime turns them into `tracing` records tagged with the enemy index.
use game_core::{EnemyHooks, Vec2};

/// Logs enemy actions under the `runtime::enemy` target.
#[derive(Debug, Clone, Copy)]
pub struct TracingHooks {
    enemy: usize,
}

impl TracingHooks {
    pub fn new(enemy: usize) -> Self {
        Self { enemy }
    }

    pub fn enemy(&self) -> usize {
        self.enemy
    }
}

impl EnemyHooks for TracingHooks {
    fn on_attack(&mut self, position: Vec2, damage: u32) {
        tracing::debug!(
            target: "runtime::enemy",
            enemy = self.enemy,
            %position,
            damage,
            "enemy attacks"
        );
    }

    fn on_pursue(&mut self, position: Vec2) {
        tracing::trace!(target: "runtime::enemy", enemy = self.enemy, %position, "enemy pursues");
    }

    fn on_remember(&mut self, position: Vec2, target: Vec2) {
        tracing::debug!(
            target: "runtime::enemy",
            enemy = self.enemy,
            %position,
            %target,
            "light went out; heading to last known position"
        );
    }
}
