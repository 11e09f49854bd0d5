use crate::animation::FrameCursor;
use crate::geometry::Vec2;

/// One-shot hit effect spawned where the player was struck.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HitParticle {
    position: Vec2,
    cursor: FrameCursor,
    frames: usize,
}

impl HitParticle {
    pub fn new(position: Vec2, frames: usize, speed: f32) -> Self {
        Self {
            position,
            cursor: FrameCursor::new(speed),
            frames: frames.max(1),
        }
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn frame(&self) -> usize {
        self.cursor.frame(self.frames)
    }

    /// Advances the animation; returns true once it has played through.
    pub fn advance(&mut self) -> bool {
        self.cursor.advance(self.frames)
    }
}
