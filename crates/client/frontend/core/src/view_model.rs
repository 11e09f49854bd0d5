//! View-model snapshots derived from a running [`game_core::Level`].
//!
//! Presentation layers never read the level directly; they render a
//! [`LevelView`] captured right after each frame.
mod map;

pub use map::{Glyph, MapView, Viewport};

use game_core::{Level, LevelPhase};

/// Player statistics shown next to the map.
#[derive(Clone, Debug, PartialEq)]
pub struct HudView {
    pub level_name: String,
    pub health: i32,
    pub max_health: i32,
    pub coins: u32,
    pub light_on: bool,
    pub visible_radius: f32,
    pub phase: LevelPhase,
}

impl HudView {
    pub fn from_level(level_name: &str, level: &Level) -> Self {
        let player = level.player();
        Self {
            level_name: level_name.to_string(),
            health: player.health().max(0),
            max_health: player.max_health(),
            coins: player.coins(),
            light_on: player.light_on(),
            visible_radius: player.visible_radius(),
            phase: level.phase(),
        }
    }

    /// Health as a ratio in `0.0..=1.0`.
    pub fn health_ratio(&self) -> f64 {
        if self.max_health <= 0 {
            return 0.0;
        }
        (f64::from(self.health) / f64::from(self.max_health)).clamp(0.0, 1.0)
    }
}

/// Everything a frontend needs to draw one frame of a level.
#[derive(Clone, Debug)]
pub struct LevelView {
    pub hud: HudView,
    pub map: MapView,
}

impl LevelView {
    pub fn capture(level_name: &str, level: &Level, viewport: Viewport) -> Self {
        Self {
            hud: HudView::from_level(level_name, level),
            map: MapView::build(level, viewport),
        }
    }
}
