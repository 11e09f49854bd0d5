//! Level orchestrator.
//!
//! A [`Level`] owns every entity of one running level and advances them in a
//! fixed order per frame:
//!
//! 1. player input, cooldowns, animation and movement (collecting items)
//! 2. non-enemy entities (hit particles)
//! 3. enemy sensing, status and action dispatch
//! 4. enemy movement, animation and cooldowns
//! 5. pause, win and death checks
//!
//! Rendering happens outside the crate after [`Level::step`] returns.
mod layout;
mod particle;

pub use layout::{Cell, EMPTY_TILE, LayerKind, LayoutError, LevelLayout, TileLayer};
pub use particle::HitParticle;

use arrayvec::ArrayVec;

use crate::clock::Tick;
use crate::config::GameConfig;
use crate::enemy::{Enemy, EnemyUpdate};
use crate::env::{DamageSink, EnemyHooks};
use crate::geometry::{Rect, Vec2};
use crate::input::InputState;
use crate::player::{Collected, MAX_PICKUPS_PER_FRAME, Player};
use crate::world::{Pickup, PickupKind, TILE_HITBOX_SHRINK, WorldObstacles};

/// Lifecycle phase of a level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum LevelPhase {
    Running,
    Paused,
    Won,
    GameOver,
}

impl LevelPhase {
    pub fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::GameOver)
    }
}

/// Damage that landed on the player.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hit {
    pub amount: u32,
    pub health_before: i32,
    pub health_after: i32,
    pub position: Vec2,
}

/// Everything observable that happened during one [`Level::step`].
#[derive(Clone, Debug, PartialEq)]
pub struct FrameReport {
    pub now: Tick,
    pub previous_phase: LevelPhase,
    pub phase: LevelPhase,
    pub light_toggled: bool,
    pub collected: ArrayVec<Collected, MAX_PICKUPS_PER_FRAME>,
    pub hits: Vec<Hit>,
    /// Attacks dispatched while the player was invulnerable.
    pub absorbed_attacks: u32,
    /// One entry per enemy, in spawn order. Empty when the level did not advance.
    pub enemies: Vec<EnemyUpdate>,
}

impl FrameReport {
    fn idle(now: Tick, phase: LevelPhase) -> Self {
        Self {
            now,
            previous_phase: phase,
            phase,
            light_toggled: false,
            collected: ArrayVec::new(),
            hits: Vec::new(),
            absorbed_attacks: 0,
            enemies: Vec::new(),
        }
    }

    pub fn phase_changed(&self) -> bool {
        self.previous_phase != self.phase
    }
}

/// Damage callback handed to enemies: applies hits to the player and spawns particles.
struct PlayerDamage<'a> {
    player: &'a mut Player,
    particles: &'a mut Vec<HitParticle>,
    hits: &'a mut Vec<Hit>,
    absorbed: &'a mut u32,
    now: Tick,
    particle_frames: usize,
    animation_speed: f32,
}

impl DamageSink for PlayerDamage<'_> {
    fn damage_player(&mut self, amount: u32) {
        let health_before = self.player.health();
        if !self.player.damage(amount, self.now) {
            *self.absorbed += 1;
            return;
        }
        let position = self.player.position();
        self.particles.push(HitParticle::new(
            position,
            self.particle_frames,
            self.animation_speed,
        ));
        self.hits.push(Hit {
            amount,
            health_before,
            health_after: self.player.health(),
            position,
        });
    }
}

pub struct Level {
    config: GameConfig,
    width: usize,
    height: usize,
    wall_tiles: Vec<Rect>,
    wall_hitboxes: Vec<Rect>,
    pickups: Vec<Pickup>,
    player: Player,
    enemies: Vec<Enemy>,
    particles: Vec<HitParticle>,
    phase: LevelPhase,
}

impl std::fmt::Debug for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Level")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("phase", &self.phase)
            .field("player", &self.player)
            .field("enemies", &self.enemies.len())
            .field("pickups", &self.pickups.len())
            .finish_non_exhaustive()
    }
}

impl Level {
    /// Builds a level from a validated layout.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError`] for unknown tile codes, a missing or duplicated
    /// player spawn, or a missing goal.
    pub fn build(layout: &LevelLayout, config: &GameConfig) -> Result<Self, LayoutError> {
        let tile = config.tile_size;
        let tile_rect =
            |cell: Cell| Rect::new(cell.col as f32 * tile, cell.row as f32 * tile, tile, tile);

        let mut wall_tiles = Vec::new();
        for (cell, code) in layout.layer(LayerKind::Walls).occupied() {
            if code < 0 {
                return Err(unknown(LayerKind::Walls, code, cell));
            }
            wall_tiles.push(tile_rect(cell));
        }

        let mut pickups = Vec::new();
        let mut player_cell: Option<Cell> = None;
        for (cell, code) in layout.layer(LayerKind::Player).occupied() {
            match code {
                0 => {
                    if let Some(first) = player_cell {
                        return Err(LayoutError::DuplicatePlayer {
                            first,
                            second: cell,
                        });
                    }
                    player_cell = Some(cell);
                }
                1 => pickups.push(Pickup::new(PickupKind::Goal, tile_rect(cell))),
                _ => return Err(unknown(LayerKind::Player, code, cell)),
            }
        }

        for (cell, code) in layout.layer(LayerKind::Flowers).occupied() {
            if code < 0 {
                return Err(unknown(LayerKind::Flowers, code, cell));
            }
            pickups.push(Pickup::new(PickupKind::Flower, tile_rect(cell)));
        }

        for (cell, code) in layout.layer(LayerKind::Coins).occupied() {
            let kind = match code {
                0 => PickupKind::GoldCoin,
                c if c > 0 => PickupKind::SilverCoin,
                _ => return Err(unknown(LayerKind::Coins, code, cell)),
            };
            pickups.push(Pickup::new(kind, tile_rect(cell)));
        }

        let mut enemies = Vec::new();
        for (cell, code) in layout.layer(LayerKind::Enemies).occupied() {
            if code != 0 {
                return Err(unknown(LayerKind::Enemies, code, cell));
            }
            enemies.push(Enemy::spawn(tile_rect(cell).center(), config));
        }

        let player_cell = player_cell.ok_or(LayoutError::MissingPlayer)?;
        if !pickups.iter().any(|p| p.kind == PickupKind::Goal) {
            return Err(LayoutError::MissingGoal);
        }
        let spawn = tile_rect(player_cell);

        Ok(Self {
            config: config.clone(),
            width: layout.width(),
            height: layout.height(),
            wall_hitboxes: wall_tiles
                .iter()
                .map(|t| t.inflate(0.0, TILE_HITBOX_SHRINK))
                .collect(),
            wall_tiles,
            pickups,
            player: Player::spawn(Vec2::new(spawn.x, spawn.y), config),
            enemies,
            particles: Vec::new(),
            phase: LevelPhase::Running,
        })
    }

    /// Installs hooks on every enemy, one hook set per enemy.
    pub fn install_enemy_hooks<F>(&mut self, mut make: F)
    where
        F: FnMut(usize) -> Box<dyn EnemyHooks>,
    {
        for (index, enemy) in self.enemies.iter_mut().enumerate() {
            enemy.set_hooks(make(index));
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Grid size in tiles (columns, rows).
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn phase(&self) -> LevelPhase {
        self.phase
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    pub fn pickups(&self) -> &[Pickup] {
        &self.pickups
    }

    pub fn wall_tiles(&self) -> &[Rect] {
        &self.wall_tiles
    }

    pub fn particles(&self) -> &[HitParticle] {
        &self.particles
    }

    pub fn obstacles(&self) -> WorldObstacles<'_> {
        WorldObstacles {
            walls: &self.wall_hitboxes,
            pickups: &self.pickups,
        }
    }

    /// Advances the level by one frame at time `now`.
    ///
    /// A paused level only reacts to the pause toggle; a finished level does not change.
    pub fn step(&mut self, input: InputState, now: Tick) -> FrameReport {
        let mut report = FrameReport::idle(now, self.phase);
        match self.phase {
            LevelPhase::Won | LevelPhase::GameOver => return report,
            LevelPhase::Paused => {
                if input.contains(InputState::PAUSE) {
                    self.phase = LevelPhase::Running;
                    report.phase = self.phase;
                }
                return report;
            }
            LevelPhase::Running => {}
        }

        let frame = self
            .player
            .update(input, now, &self.wall_hitboxes, &mut self.pickups);
        report.light_toggled = frame.light_toggled;
        report.collected = frame.collected;

        self.particles.retain_mut(|particle| !particle.advance());

        let snapshot = self.player.snapshot();
        for enemy in &mut self.enemies {
            let mut sink = PlayerDamage {
                player: &mut self.player,
                particles: &mut self.particles,
                hits: &mut report.hits,
                absorbed: &mut report.absorbed_attacks,
                now,
                particle_frames: self.config.animations.hit_particle,
                animation_speed: self.config.animation_speed,
            };
            report.enemies.push(enemy.enemy_update(&snapshot, now, &mut sink));
        }

        let obstacles = WorldObstacles {
            walls: &self.wall_hitboxes,
            pickups: &self.pickups,
        };
        for enemy in &mut self.enemies {
            enemy.update(now, &obstacles);
        }

        if input.contains(InputState::PAUSE) {
            self.phase = LevelPhase::Paused;
        }
        if self.player.has_won() {
            self.phase = LevelPhase::Won;
        }
        if self.player.is_dead() {
            self.phase = LevelPhase::GameOver;
        }
        report.phase = self.phase;
        report
    }
}

fn unknown(layer: LayerKind, code: i32, cell: Cell) -> LayoutError {
    LayoutError::UnknownTile {
        layer: layer.into(),
        code,
        cell,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 6x3 corridor: player at (1,1), goal at (4,1).
    fn corridor() -> LevelLayout {
        let mut layout = LevelLayout::empty(6, 3);
        for col in 0..6 {
            layout.set(LayerKind::Walls, Cell::new(col, 0), 0);
            layout.set(LayerKind::Walls, Cell::new(col, 2), 0);
        }
        layout.set(LayerKind::Walls, Cell::new(0, 1), 0);
        layout.set(LayerKind::Walls, Cell::new(5, 1), 0);
        layout.set(LayerKind::Player, Cell::new(1, 1), 0);
        layout.set(LayerKind::Player, Cell::new(4, 1), 1);
        layout
    }

    #[test]
    fn build_places_entities_on_tiles() {
        let mut layout = corridor();
        layout.set(LayerKind::Coins, Cell::new(2, 1), 0);
        layout.set(LayerKind::Coins, Cell::new(3, 1), 7);
        let level = Level::build(&layout, &GameConfig::default()).unwrap();

        assert_eq!(level.dimensions(), (6, 3));
        assert_eq!(level.wall_tiles().len(), 14);
        assert_eq!(level.player().position(), Vec2::new(96.0, 96.0));
        let kinds: Vec<_> = level.pickups().iter().map(|p| p.kind).collect();
        assert_eq!(
            kinds,
            vec![PickupKind::Goal, PickupKind::GoldCoin, PickupKind::SilverCoin]
        );
        assert_eq!(level.phase(), LevelPhase::Running);
    }

    #[test]
    fn build_rejects_invalid_layouts() {
        let mut no_goal = corridor();
        no_goal.set(LayerKind::Player, Cell::new(4, 1), EMPTY_TILE);
        assert_eq!(
            Level::build(&no_goal, &GameConfig::default()).unwrap_err(),
            LayoutError::MissingGoal
        );

        let mut two_players = corridor();
        two_players.set(LayerKind::Player, Cell::new(2, 1), 0);
        assert!(matches!(
            Level::build(&two_players, &GameConfig::default()),
            Err(LayoutError::DuplicatePlayer { .. })
        ));

        let mut bad_enemy = corridor();
        bad_enemy.set(LayerKind::Enemies, Cell::new(3, 1), 4);
        assert!(matches!(
            Level::build(&bad_enemy, &GameConfig::default()),
            Err(LayoutError::UnknownTile { code: 4, .. })
        ));
    }

    #[test]
    fn debug_output_summarizes_the_level() {
        let level = Level::build(&corridor(), &GameConfig::default()).unwrap();
        let debug = format!("{level:?}");
        assert!(debug.starts_with("Level {"));
        assert!(debug.contains("phase: Running"));
        assert!(debug.ends_with(".. }"));
    }

    #[test]
    fn pause_toggles_and_freezes_the_level() {
        let mut level = Level::build(&corridor(), &GameConfig::default()).unwrap();

        let report = level.step(InputState::PAUSE, Tick(16));
        assert_eq!(report.phase, LevelPhase::Paused);
        assert!(report.phase_changed());

        let before = level.player().position();
        let report = level.step(InputState::RIGHT, Tick(32));
        assert!(!report.phase_changed());
        assert_eq!(level.player().position(), before);

        let report = level.step(InputState::PAUSE, Tick(48));
        assert_eq!(report.phase, LevelPhase::Running);
    }

    #[test]
    fn walking_into_goal_wins() {
        let mut level = Level::build(&corridor(), &GameConfig::default()).unwrap();
        let mut now = Tick::ZERO;
        for _ in 0..60 {
            now += 16;
            if level.step(InputState::RIGHT, now).phase == LevelPhase::Won {
                break;
            }
        }
        assert_eq!(level.phase(), LevelPhase::Won);

        let frozen = level.step(InputState::LEFT, now + 16);
        assert!(frozen.enemies.is_empty());
        assert_eq!(frozen.phase, LevelPhase::Won);
    }
}
