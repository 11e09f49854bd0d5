//! Deterministic game rules for Maze Light.
//!
//! `game-core` holds the frame-stepped simulation: geometry and collision,
//! the player with its light, the light-aware enemy AI and the level
//! orchestrator that ties them together. It performs no I/O and reads no
//! clock of its own; callers pass the current [`Tick`] into every step, which
//! keeps the rules reusable by the runtime, the terminal client and tests.
//! All per-frame mutation flows through [`Level::step`].
pub mod animation;
pub mod body;
pub mod clock;
pub mod config;
pub mod enemy;
pub mod env;
pub mod error;
pub mod geometry;
pub mod input;
pub mod level;
pub mod player;
pub mod world;

pub use animation::{FrameCursor, FrameSequences};
pub use body::{Axis, Body, ObstacleQuery};
pub use clock::Tick;
pub use config::{AnimationFrames, EnemyStats, GameConfig, PickupRules, PlayerStats};
pub use enemy::{
    Dispatch, Enemy, EnemyStatus, EnemyUpdate, Facing, Mode, Sensed, StatusInput, Transition,
    sense,
};
pub use env::{DamageSink, EnemyHooks, NoHooks, PlayerSnapshot};
pub use error::{ErrorSeverity, GameError};
pub use geometry::{Rect, Vec2};
pub use input::InputState;
pub use level::{
    Cell, EMPTY_TILE, FrameReport, Hit, HitParticle, LayerKind, LayoutError, Level, LevelLayout,
    LevelPhase, TileLayer,
};
pub use player::{Collected, MAX_PICKUPS_PER_FRAME, Player, PlayerFrame};
pub use world::{Pickup, PickupKind, TILE_HITBOX_SHRINK, WorldObstacles};
