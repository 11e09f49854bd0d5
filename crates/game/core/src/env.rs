//! Interfaces through which enemies observe and affect the rest of the world.
//!
//! Enemies never hold references to the player. Each frame they receive a
//! [`PlayerSnapshot`], report hits through a [`DamageSink`], and announce
//! cosmetic side effects (sounds, log lines) through optional [`EnemyHooks`].
use crate::geometry::Vec2;

/// Player fields observable by enemies, captured once per frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlayerSnapshot {
    pub position: Vec2,
    pub visible_radius: f32,
    pub light_on: bool,
    /// True only during the light-switch cooldown window right after a toggle.
    pub light_just_toggled: bool,
}

/// Receives damage reported by enemies.
///
/// Implementations decide whether the hit lands (e.g. invulnerability
/// windows) and own every consequence of it.
pub trait DamageSink {
    fn damage_player(&mut self, amount: u32);
}

impl<F> DamageSink for F
where
    F: FnMut(u32),
{
    fn damage_player(&mut self, amount: u32) {
        self(amount)
    }
}

/// Optional side-effect hooks fired by the enemy controller.
///
/// All methods default to no-ops.
pub trait EnemyHooks: Send {
    /// An attack was dispatched this frame.
    fn on_attack(&mut self, _position: Vec2, _damage: u32) {}

    /// The enemy pursued the player this frame.
    fn on_pursue(&mut self, _position: Vec2) {}

    /// The enemy latched the player's position after the light went off.
    fn on_remember(&mut self, _position: Vec2, _target: Vec2) {}
}

/// Hook set that ignores every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoHooks;

impl EnemyHooks for NoHooks {}
