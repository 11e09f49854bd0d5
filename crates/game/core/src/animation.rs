//! Frame indexing for sprite animations.
use crate::config::AnimationFrames;
use crate::enemy::{EnemyStatus, Mode};

/// Frame counts of the enemy sequences, one per mode.
///
/// Both facings share a count; the renderer mirrors the sprites.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameSequences {
    idle: usize,
    moving: usize,
    attacking: usize,
}

impl FrameSequences {
    /// Counts below one are raised to one so every sequence has a frame to show.
    pub fn new(idle: usize, moving: usize, attacking: usize) -> Self {
        Self {
            idle: idle.max(1),
            moving: moving.max(1),
            attacking: attacking.max(1),
        }
    }

    pub fn from_config(frames: &AnimationFrames) -> Self {
        Self::new(frames.enemy_idle, frames.enemy_moving, frames.enemy_attacking)
    }

    pub fn len(&self, status: EnemyStatus) -> usize {
        match status.mode {
            Mode::Idle => self.idle,
            Mode::Moving => self.moving,
            Mode::Attacking => self.attacking,
        }
    }
}

/// Fractional frame cursor advanced by a fixed speed each frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameCursor {
    index: f32,
    speed: f32,
}

impl FrameCursor {
    pub fn new(speed: f32) -> Self {
        Self { index: 0.0, speed }
    }

    pub fn reset(&mut self) {
        self.index = 0.0;
    }

    pub fn index(&self) -> f32 {
        self.index
    }

    /// Whole frame to display, always below `len`.
    pub fn frame(&self, len: usize) -> usize {
        (self.index as usize).min(len.saturating_sub(1))
    }

    /// Advances by one step; returns true when the sequence wrapped back to 0.
    pub fn advance(&mut self, len: usize) -> bool {
        self.index += self.speed;
        if self.index >= len as f32 {
            self.index = 0.0;
            true
        } else {
            false
        }
    }
}
