//! Player character: movement, light, item collection and vulnerability.
use arrayvec::ArrayVec;

use crate::animation::FrameCursor;
use crate::body::{Axis, Body};
use crate::clock::Tick;
use crate::config::{GameConfig, PickupRules, PlayerStats};
use crate::env::PlayerSnapshot;
use crate::geometry::{Rect, Vec2};
use crate::input::InputState;
use crate::world::{Pickup, PickupKind, WorldObstacles};

/// Upper bound of pickups reported for a single frame.
///
/// The player hitbox is smaller than a tile, so each movement pass overlaps at
/// most four tiles.
pub const MAX_PICKUPS_PER_FRAME: usize = 8;

/// Item collected during a frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Collected {
    pub kind: PickupKind,
    pub position: Vec2,
}

/// Outcome of [`Player::update`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlayerFrame {
    pub light_toggled: bool,
    pub collected: ArrayVec<Collected, MAX_PICKUPS_PER_FRAME>,
}

#[derive(Clone, Debug)]
pub struct Player {
    body: Body,
    stats: PlayerStats,
    rules: PickupRules,
    health: i32,
    coins: u32,
    speed: f32,
    visible_factor: f32,
    light_on: bool,
    light_switch: bool,
    light_switched_at: Tick,
    vulnerable: bool,
    hurt_at: Tick,
    won: bool,
    cursor: FrameCursor,
    frames: usize,
}

impl Player {
    /// Spawns the player with its sprite's top-left corner at `top_left`.
    pub fn spawn(top_left: Vec2, config: &GameConfig) -> Self {
        let sprite = Rect::new(top_left.x, top_left.y, config.tile_size, config.tile_size);
        let stats = config.player.clone();
        Self {
            body: Body::new(sprite, stats.hitbox_inflate),
            health: stats.health,
            coins: 0,
            speed: stats.speed,
            visible_factor: stats.visible_factor,
            light_on: true,
            light_switch: false,
            light_switched_at: Tick::ZERO,
            vulnerable: true,
            hurt_at: Tick::ZERO,
            won: false,
            cursor: FrameCursor::new(config.animation_speed),
            frames: config.animations.player.max(1),
            rules: config.pickups.clone(),
            stats,
        }
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

    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn max_health(&self) -> i32 {
        self.stats.health
    }

    pub fn coins(&self) -> u32 {
        self.coins
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn visible_factor(&self) -> f32 {
        self.visible_factor
    }

    /// Detection radius, scaled by the current visibility factor.
    pub fn visible_radius(&self) -> f32 {
        self.stats.visible_radius * self.visible_factor
    }

    pub fn light_on(&self) -> bool {
        self.light_on
    }

    /// True during the light-switch cooldown that follows a toggle.
    pub fn light_just_toggled(&self) -> bool {
        self.light_switch
    }

    pub fn is_vulnerable(&self) -> bool {
        self.vulnerable
    }

    pub fn has_won(&self) -> bool {
        self.won
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }

    pub fn frame(&self) -> usize {
        self.cursor.frame(self.frames)
    }

    pub fn snapshot(&self) -> PlayerSnapshot {
        PlayerSnapshot {
            position: self.position(),
            visible_radius: self.visible_radius(),
            light_on: self.light_on,
            light_just_toggled: self.light_switch,
        }
    }

    /// Applies held controls; returns true when the light was toggled.
    pub fn apply_input(&mut self, input: InputState, now: Tick) -> bool {
        self.body.set_direction(input.direction());

        if input.contains(InputState::LIGHT) && !self.light_switch {
            self.light_switch = true;
            self.light_switched_at = now;
            self.light_on = !self.light_on;
            return true;
        }
        false
    }

    /// Ends the light-switch window and the invulnerability window once elapsed.
    pub fn check_cooldowns(&mut self, now: Tick) {
        if self.light_switch && now.has_elapsed(self.light_switched_at, self.stats.light_cooldown) {
            self.light_switch = false;
        }
        if !self.vulnerable && now.has_elapsed(self.hurt_at, self.stats.invulnerability) {
            self.vulnerable = true;
        }
    }

    pub fn animate(&mut self) {
        self.cursor.advance(self.frames);
    }

    /// Applies `amount` damage if the player is vulnerable; returns whether the hit landed.
    pub fn damage(&mut self, amount: u32, now: Tick) -> bool {
        if !self.vulnerable {
            return false;
        }
        self.health = self.health.saturating_sub(amount.min(i32::MAX as u32) as i32);
        self.vulnerable = false;
        self.hurt_at = now;
        true
    }

    /// Runs the player's frame: input, cooldowns, animation, then movement with item collection.
    pub fn update(
        &mut self,
        input: InputState,
        now: Tick,
        walls: &[Rect],
        pickups: &mut Vec<Pickup>,
    ) -> PlayerFrame {
        let mut frame = PlayerFrame {
            light_toggled: self.apply_input(input, now),
            ..PlayerFrame::default()
        };
        self.check_cooldowns(now);
        self.animate();
        self.move_and_collect(walls, pickups, &mut frame.collected);
        frame
    }

    /// Moves like any body, collecting overlapped items before each axis is resolved.
    pub fn move_and_collect(
        &mut self,
        walls: &[Rect],
        pickups: &mut Vec<Pickup>,
        collected: &mut ArrayVec<Collected, MAX_PICKUPS_PER_FRAME>,
    ) {
        self.body.normalize_direction();
        let speed = self.speed;

        for axis in [Axis::Horizontal, Axis::Vertical] {
            self.body.advance(axis, speed);
            self.collect(pickups, collected);
            let obstacles = WorldObstacles {
                walls,
                pickups: pickups.as_slice(),
            };
            self.body.resolve(axis, &obstacles);
        }
    }

    fn collect(
        &mut self,
        pickups: &mut Vec<Pickup>,
        collected: &mut ArrayVec<Collected, MAX_PICKUPS_PER_FRAME>,
    ) {
        let hitbox = self.body.hitbox();
        let mut index = 0;
        while index < pickups.len() {
            let pickup = pickups[index];
            if !pickup.hitbox.intersects(&hitbox) {
                index += 1;
                continue;
            }

            if self.apply_pickup(pickup.kind) {
                let reported = collected.try_push(Collected {
                    kind: pickup.kind,
                    position: pickup.position(),
                });
                debug_assert!(
                    reported.is_ok(),
                    "more than {MAX_PICKUPS_PER_FRAME} pickups collected in one frame"
                );
            }

            if pickup.kind.is_consumable() {
                pickups.remove(index);
            } else {
                index += 1;
            }
        }
    }

    /// Applies an item's effect; returns false when nothing new happened (goal already reached).
    fn apply_pickup(&mut self, kind: PickupKind) -> bool {
        match kind {
            PickupKind::SilverCoin => self.coins += self.rules.silver_coin_value,
            PickupKind::GoldCoin => self.coins += self.rules.gold_coin_value,
            PickupKind::Flower => {
                self.visible_factor += self.rules.flower_visibility;
                self.speed += self.rules.flower_speed;
                self.health = (self.health + self.rules.flower_heal).min(self.stats.health);
            }
            PickupKind::Goal => {
                if self.won {
                    return false;
                }
                self.won = true;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player() -> Player {
        Player::spawn(Vec2::new(0.0, 0.0), &GameConfig::default())
    }

    #[test]
    fn spawn_uses_configured_stats() {
        let player = player();
        assert_eq!(player.position(), Vec2::new(32.0, 32.0));
        assert_eq!(player.hitbox().width, 49.0);
        assert_eq!(player.hitbox().height, 34.0);
        assert_eq!(player.health(), 100);
        assert_eq!(player.visible_radius(), 220.0);
        assert!(player.light_on());
    }

    #[test]
    fn light_toggle_is_gated_by_cooldown() {
        let mut player = player();
        assert!(player.apply_input(InputState::LIGHT, Tick(0)));
        assert!(!player.light_on());
        assert!(player.light_just_toggled());

        player.check_cooldowns(Tick(399));
        assert!(!player.apply_input(InputState::LIGHT, Tick(399)));
        assert!(!player.light_on());

        player.check_cooldowns(Tick(400));
        assert!(!player.light_just_toggled());
        assert!(player.apply_input(InputState::LIGHT, Tick(400)));
        assert!(player.light_on());
    }

    #[test]
    fn damage_respects_invulnerability_window() {
        let mut player = player();
        assert!(player.damage(34, Tick(100)));
        assert!(!player.damage(34, Tick(200)));
        assert_eq!(player.health(), 66);

        player.check_cooldowns(Tick(500));
        assert!(player.damage(34, Tick(500)));
        assert_eq!(player.health(), 32);
    }

    #[test]
    fn collects_coins_and_flowers_on_contact() {
        let mut player = player();
        player.health = 90;
        let mut pickups = vec![
            Pickup::new(PickupKind::GoldCoin, Rect::new(40.0, 0.0, 64.0, 64.0)),
            Pickup::new(PickupKind::Flower, Rect::new(-50.0, 0.0, 64.0, 64.0)),
            Pickup::new(PickupKind::SilverCoin, Rect::new(400.0, 0.0, 64.0, 64.0)),
        ];

        let frame = player.update(InputState::RIGHT, Tick(0), &[], &mut pickups);

        assert_eq!(frame.collected.len(), 2);
        assert_eq!(player.coins(), 500);
        assert_eq!(player.health(), 100);
        assert_eq!(player.speed(), 6.0);
        assert!((player.visible_radius() - 286.0).abs() < 1e-3);
        assert_eq!(pickups.len(), 1);
        assert_eq!(pickups[0].kind, PickupKind::SilverCoin);
    }

    #[test]
    fn reports_every_pickup_up_to_the_frame_bound() {
        let mut player = player();
        let tile = Rect::new(0.0, 0.0, 64.0, 64.0);
        let mut pickups = vec![Pickup::new(PickupKind::SilverCoin, tile); MAX_PICKUPS_PER_FRAME];
        let mut collected = ArrayVec::new();

        player.move_and_collect(&[], &mut pickups, &mut collected);

        assert_eq!(collected.len(), MAX_PICKUPS_PER_FRAME);
        assert!(pickups.is_empty());
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "pickups collected in one frame")]
    fn pickups_past_the_frame_bound_are_not_silently_dropped() {
        let mut player = player();
        let tile = Rect::new(0.0, 0.0, 64.0, 64.0);
        let mut pickups =
            vec![Pickup::new(PickupKind::SilverCoin, tile); MAX_PICKUPS_PER_FRAME + 1];
        let mut collected = ArrayVec::new();

        player.move_and_collect(&[], &mut pickups, &mut collected);
    }

    #[test]
    fn goal_wins_and_blocks_movement() {
        let mut player = player();
        let goal_tile = Rect::new(60.0, 0.0, 64.0, 64.0);
        let mut pickups = vec![Pickup::new(PickupKind::Goal, goal_tile)];

        let frame = player.update(InputState::RIGHT, Tick(0), &[], &mut pickups);

        assert!(player.has_won());
        assert_eq!(frame.collected.len(), 1);
        assert_eq!(pickups.len(), 1);
        assert_eq!(player.hitbox().right(), goal_tile.left());
    }
}
