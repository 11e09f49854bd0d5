//! Enemy controller: sensing, status machine, action dispatch and cooldowns.
//!
//! An enemy is driven by two calls per frame:
//! - [`Enemy::enemy_update`] senses the player, advances the status machine
//!   and dispatches the action for the new status
//! - [`Enemy::update`] moves the body, advances the animation and checks the
//!   cooldown timers
//!
//! Attacking requires `can_attack`. The flag is cleared when an attack
//! animation completes and restored by the attack cooldown, so an enemy can
//! only attack again once both the animation has played through and the
//! cooldown has elapsed since the last attack tick.
//!
//! While the player's light is off the enemy cannot see where the player is.
//! It reacts only to the moment the light goes off: if it is chasing and its
//! memory is available, it latches the player's position at that moment and
//! heads there until the light comes back on.
mod sensing;
mod status;

use std::fmt;

pub use sensing::{Sensed, sense};
pub use status::{EnemyStatus, Facing, Mode, StatusInput, Transition};

use crate::animation::{FrameCursor, FrameSequences};
use crate::body::{Body, ObstacleQuery};
use crate::clock::Tick;
use crate::config::{EnemyStats, GameConfig};
use crate::env::{DamageSink, EnemyHooks, NoHooks, PlayerSnapshot};
use crate::geometry::{Rect, Vec2};

/// Action taken by an enemy during [`Enemy::enemy_update`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Dispatch {
    /// Damage was reported to the damage sink.
    Attacked { damage: u32 },
    /// Direction set toward the player's current position.
    Pursued,
    /// Player position latched after the light went off.
    Remembered { target: Vec2 },
    /// Moving without new information; direction unchanged.
    Drifting,
    /// Direction cleared.
    Stopped,
}

/// Summary of one [`Enemy::enemy_update`] call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EnemyUpdate {
    pub previous: EnemyStatus,
    pub status: EnemyStatus,
    pub dispatch: Dispatch,
}

impl EnemyUpdate {
    pub fn status_changed(&self) -> bool {
        self.previous != self.status
    }
}

pub struct Enemy {
    body: Body,
    stats: EnemyStats,
    status: EnemyStatus,
    frames: FrameSequences,
    cursor: FrameCursor,
    can_attack: bool,
    attack_started_at: Tick,
    can_remember: bool,
    remember_started_at: Tick,
    last_known_player_position: Option<Vec2>,
    hooks: Box<dyn EnemyHooks>,
}

impl Enemy {
    /// Spawns an enemy whose sprite box is one tile centered on `center`.
    pub fn spawn(center: Vec2, config: &GameConfig) -> Self {
        let sprite = Rect::from_center(center, config.tile_size, config.tile_size);
        Self {
            body: Body::new(sprite, config.enemy.hitbox_inflate),
            stats: config.enemy.clone(),
            status: EnemyStatus::SPAWN,
            frames: FrameSequences::from_config(&config.animations),
            cursor: FrameCursor::new(config.animation_speed),
            can_attack: true,
            attack_started_at: Tick::ZERO,
            can_remember: true,
            remember_started_at: Tick::ZERO,
            last_known_player_position: None,
            hooks: Box::new(NoHooks),
        }
    }

    #[must_use]
    pub fn with_hooks(mut self, hooks: impl EnemyHooks + 'static) -> Self {
        self.hooks = Box::new(hooks);
        self
    }

    pub fn set_hooks(&mut self, hooks: Box<dyn EnemyHooks>) {
        self.hooks = hooks;
    }

    pub fn position(&self) -> Vec2 {
        self.body.position()
    }

    pub fn hitbox(&self) -> Rect {
        self.body.hitbox()
    }

    pub fn direction(&self) -> Vec2 {
        self.body.direction()
    }

    pub fn status(&self) -> EnemyStatus {
        self.status
    }

    pub fn stats(&self) -> &EnemyStats {
        &self.stats
    }

    pub fn can_attack(&self) -> bool {
        self.can_attack
    }

    pub fn can_remember(&self) -> bool {
        self.can_remember
    }

    pub fn last_known_player_position(&self) -> Option<Vec2> {
        self.last_known_player_position
    }

    /// Frame of the current status sequence to display.
    pub fn frame(&self) -> usize {
        self.cursor.frame(self.frames.len(self.status))
    }

    /// Distance and direction from the enemy center to `target`.
    pub fn sense(&self, target: Vec2) -> Sensed {
        sense(self.position(), target)
    }

    /// Senses the player, advances the status machine and dispatches the resulting action.
    pub fn enemy_update(
        &mut self,
        player: &PlayerSnapshot,
        now: Tick,
        damage: &mut dyn DamageSink,
    ) -> EnemyUpdate {
        let sensed = self.sense(player.position);
        let transition = self.status.transition(&StatusInput {
            distance: sensed.distance,
            direction: sensed.direction,
            attack_radius: self.stats.attack_radius,
            visible_radius: player.visible_radius,
            can_attack: self.can_attack,
        });

        let previous = self.status;
        self.status = transition.status;
        if transition.reset_frame {
            self.cursor.reset();
        }

        let dispatch = self.dispatch(player, sensed, now, damage);
        EnemyUpdate {
            previous,
            status: self.status,
            dispatch,
        }
    }

    fn dispatch(
        &mut self,
        player: &PlayerSnapshot,
        sensed: Sensed,
        now: Tick,
        damage: &mut dyn DamageSink,
    ) -> Dispatch {
        match self.status.mode {
            Mode::Attacking => {
                self.attack_started_at = now;
                damage.damage_player(self.stats.attack_damage);
                self.hooks.on_attack(self.position(), self.stats.attack_damage);
                Dispatch::Attacked {
                    damage: self.stats.attack_damage,
                }
            }
            Mode::Moving if player.light_on => {
                self.body.set_direction(sensed.direction);
                self.hooks.on_pursue(self.position());
                Dispatch::Pursued
            }
            Mode::Moving if player.light_just_toggled && self.can_remember => {
                let target = player.position;
                self.last_known_player_position = Some(target);
                self.body.set_direction(self.sense(target).direction);
                self.remember_started_at = now;
                self.can_remember = false;
                self.hooks.on_remember(self.position(), target);
                Dispatch::Remembered { target }
            }
            Mode::Moving => Dispatch::Drifting,
            Mode::Idle => {
                self.body.set_direction(Vec2::ZERO);
                Dispatch::Stopped
            }
        }
    }

    /// Moves, animates and checks cooldowns, in that order.
    pub fn update<Q>(&mut self, now: Tick, obstacles: &Q)
    where
        Q: ObstacleQuery + ?Sized,
    {
        self.body.move_and_collide(self.stats.speed, obstacles);
        self.animate();
        self.check_cooldowns(now);
    }

    /// Advances the frame cursor; a completed attack sequence closes the attack window.
    pub fn animate(&mut self) {
        let wrapped = self.cursor.advance(self.frames.len(self.status));
        if wrapped && self.status.is_attacking() {
            self.can_attack = false;
        }
    }

    /// Restores attack and memory once their cooldowns have elapsed.
    pub fn check_cooldowns(&mut self, now: Tick) {
        if !self.can_attack && now.has_elapsed(self.attack_started_at, self.stats.attack_cooldown)
        {
            self.can_attack = true;
        }
        if !self.can_remember
            && now.has_elapsed(self.remember_started_at, self.stats.remember_cooldown)
        {
            self.can_remember = true;
        }
    }
}

impl fmt::Debug for Enemy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Enemy")
            .field("position", &self.position())
            .field("direction", &self.direction())
            .field("status", &self.status)
            .field("can_attack", &self.can_attack)
            .field("can_remember", &self.can_remember)
            .field("last_known_player_position", &self.last_known_player_position)
            .finish_non_exhaustive()
    }
}
