//! Moving bodies with axis-separated collision against static boxes.
//!
//! Movement is resolved one axis at a time: the body advances horizontally,
//! snaps out of any box it now overlaps, then repeats the process vertically.
//! Resolving each axis on its own keeps bodies from tunnelling into walls and
//! from snagging on the corners between adjacent tiles.
use crate::geometry::{Rect, Vec2};

/// Read-only source of obstacle boxes for collision resolution.
pub trait ObstacleQuery {
    fn obstacles(&self) -> impl Iterator<Item = Rect> + '_;
}

impl ObstacleQuery for [Rect] {
    fn obstacles(&self) -> impl Iterator<Item = Rect> + '_ {
        self.iter().copied()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Generic moving body: a hitbox plus a movement direction.
#[derive(Clone, Debug, PartialEq)]
pub struct Body {
    hitbox: Rect,
    direction: Vec2,
}

impl Body {
    /// Creates a body whose hitbox is `sprite` inflated by `inflate` (negative values shrink).
    pub fn new(sprite: Rect, inflate: (f32, f32)) -> Self {
        Self {
            hitbox: sprite.inflate(inflate.0, inflate.1),
            direction: Vec2::ZERO,
        }
    }

    /// Center of the hitbox.
    pub fn position(&self) -> Vec2 {
        self.hitbox.center()
    }

    pub fn hitbox(&self) -> Rect {
        self.hitbox
    }

    pub fn direction(&self) -> Vec2 {
        self.direction
    }

    pub fn set_direction(&mut self, direction: Vec2) {
        self.direction = direction;
    }

    /// Rescales a non-zero direction to unit length.
    pub fn normalize_direction(&mut self) {
        self.direction = self.direction.normalize_or_zero();
    }

    /// Moves `speed` pixels along the current direction, resolving collisions per axis.
    pub fn move_and_collide<Q>(&mut self, speed: f32, obstacles: &Q)
    where
        Q: ObstacleQuery + ?Sized,
    {
        self.normalize_direction();

        self.advance(Axis::Horizontal, speed);
        self.resolve(Axis::Horizontal, obstacles);

        self.advance(Axis::Vertical, speed);
        self.resolve(Axis::Vertical, obstacles);
    }

    /// Shifts the hitbox along one axis by the matching direction component times `speed`.
    pub fn advance(&mut self, axis: Axis, speed: f32) {
        match axis {
            Axis::Horizontal => self.hitbox.x += self.direction.x * speed,
            Axis::Vertical => self.hitbox.y += self.direction.y * speed,
        }
    }

    /// Snaps the hitbox out of every intersecting obstacle on `axis`.
    ///
    /// The edge that moves is chosen by the sign of the direction component on
    /// that axis; a zero component leaves the hitbox where it is.
    pub fn resolve<Q>(&mut self, axis: Axis, obstacles: &Q)
    where
        Q: ObstacleQuery + ?Sized,
    {
        for obstacle in obstacles.obstacles() {
            if !obstacle.intersects(&self.hitbox) {
                continue;
            }
            match axis {
                Axis::Horizontal => {
                    if self.direction.x > 0.0 {
                        self.hitbox.set_right(obstacle.left());
                    }
                    if self.direction.x < 0.0 {
                        self.hitbox.set_left(obstacle.right());
                    }
                }
                Axis::Vertical => {
                    if self.direction.y > 0.0 {
                        self.hitbox.set_bottom(obstacle.top());
                    }
                    if self.direction.y < 0.0 {
                        self.hitbox.set_top(obstacle.bottom());
                    }
                }
            }
        }
    }
}
