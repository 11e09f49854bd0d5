/// Game configuration constants and tunable parameters.
///
/// Every field carries a default so partial configuration files only need to
/// mention the values they override.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Edge length of one layout cell in pixels.
    pub tile_size: f32,
    /// Time units that elapse per simulated frame.
    pub frame_duration: u64,
    /// Frame-index increment applied by every animation per frame.
    pub animation_speed: f32,
    pub enemy: EnemyStats,
    pub player: PlayerStats,
    pub pickups: PickupRules,
    pub animations: AnimationFrames,
}

impl GameConfig {
    pub const DEFAULT_TILE_SIZE: f32 = 64.0;
    pub const DEFAULT_FRAME_DURATION: u64 = 16;
    pub const DEFAULT_ANIMATION_SPEED: f32 = 0.15;

    pub fn new() -> Self {
        Self {
            tile_size: Self::DEFAULT_TILE_SIZE,
            frame_duration: Self::DEFAULT_FRAME_DURATION,
            animation_speed: Self::DEFAULT_ANIMATION_SPEED,
            enemy: EnemyStats::default(),
            player: PlayerStats::default(),
            pickups: PickupRules::default(),
            animations: AnimationFrames::default(),
        }
    }

    pub fn with_frame_duration(mut self, frame_duration: u64) -> Self {
        self.frame_duration = frame_duration.max(1);
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable stat block shared by every enemy of a level.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EnemyStats {
    pub attack_damage: u32,
    pub speed: f32,
    pub attack_radius: f32,
    /// Carried for content compatibility; no rule reads it.
    pub notice_radius: f32,
    pub attack_cooldown: u64,
    pub remember_cooldown: u64,
    /// Hitbox inflation relative to the sprite box (negative shrinks).
    pub hitbox_inflate: (f32, f32),
}

impl EnemyStats {
    pub const DEFAULT_ATTACK_DAMAGE: u32 = 34;
    pub const DEFAULT_SPEED: f32 = 5.0;
    pub const DEFAULT_ATTACK_RADIUS: f32 = 30.0;
    pub const DEFAULT_NOTICE_RADIUS: f32 = 400.0;
    pub const DEFAULT_ATTACK_COOLDOWN: u64 = 800;
    pub const DEFAULT_REMEMBER_COOLDOWN: u64 = 800;
}

impl Default for EnemyStats {
    fn default() -> Self {
        Self {
            attack_damage: Self::DEFAULT_ATTACK_DAMAGE,
            speed: Self::DEFAULT_SPEED,
            attack_radius: Self::DEFAULT_ATTACK_RADIUS,
            notice_radius: Self::DEFAULT_NOTICE_RADIUS,
            attack_cooldown: Self::DEFAULT_ATTACK_COOLDOWN,
            remember_cooldown: Self::DEFAULT_REMEMBER_COOLDOWN,
            hitbox_inflate: (0.0, -10.0),
        }
    }
}

/// Starting stats of the player character.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlayerStats {
    pub health: i32,
    pub speed: f32,
    /// Visibility radius before the visibility factor is applied.
    pub visible_radius: f32,
    pub visible_factor: f32,
    /// Window after a light toggle during which the light cannot toggle again.
    pub light_cooldown: u64,
    pub invulnerability: u64,
    pub hitbox_inflate: (f32, f32),
}

impl Default for PlayerStats {
    fn default() -> Self {
        Self {
            health: 100,
            speed: 5.0,
            visible_radius: 220.0,
            visible_factor: 1.0,
            light_cooldown: 400,
            invulnerability: 400,
            hitbox_inflate: (-15.0, -30.0),
        }
    }
}

/// Effects applied when the player collects an item.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PickupRules {
    pub silver_coin_value: u32,
    pub gold_coin_value: u32,
    pub flower_visibility: f32,
    pub flower_speed: f32,
    pub flower_heal: i32,
}

impl Default for PickupRules {
    fn default() -> Self {
        Self {
            silver_coin_value: 100,
            gold_coin_value: 500,
            flower_visibility: 0.3,
            flower_speed: 1.0,
            flower_heal: 25,
        }
    }
}

/// Number of frames in each animation sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AnimationFrames {
    pub enemy_idle: usize,
    pub enemy_moving: usize,
    pub enemy_attacking: usize,
    pub player: usize,
    pub hit_particle: usize,
}

impl Default for AnimationFrames {
    fn default() -> Self {
        Self {
            enemy_idle: 4,
            enemy_moving: 4,
            enemy_attacking: 5,
            player: 4,
            hit_particle: 4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = GameConfig::default();
        assert_eq!(config.tile_size, 64.0);
        assert_eq!(config.enemy.attack_damage, 34);
        assert_eq!(config.enemy.attack_cooldown, 800);
        assert_eq!(config.enemy.remember_cooldown, 800);
        assert_eq!(config.player.visible_radius, 220.0);
        assert_eq!(config.player.light_cooldown, 400);
    }

    #[test]
    fn frame_duration_is_never_zero() {
        let config = GameConfig::new().with_frame_duration(0);
        assert_eq!(config.frame_duration, 1);
    }
}
