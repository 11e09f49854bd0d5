//! Static level contents: walls, collectible items and the goal.
use crate::body::ObstacleQuery;
use crate::geometry::{Rect, Vec2};

/// Kinds of items placed on the level grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum PickupKind {
    SilverCoin,
    GoldCoin,
    Flower,
    /// Ends the level when touched; never consumed.
    Goal,
}

impl PickupKind {
    pub fn is_consumable(self) -> bool {
        !matches!(self, Self::Goal)
    }
}

/// An item occupying one tile.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pickup {
    pub kind: PickupKind,
    /// Full tile box, used for rendering.
    pub tile: Rect,
    pub hitbox: Rect,
}

impl Pickup {
    pub fn new(kind: PickupKind, tile: Rect) -> Self {
        Self {
            kind,
            tile,
            hitbox: tile.inflate(0.0, TILE_HITBOX_SHRINK),
        }
    }

    pub fn position(&self) -> Vec2 {
        self.tile.center()
    }
}

/// Vertical shrink applied to tile hitboxes.
pub const TILE_HITBOX_SHRINK: f32 = -10.0;

/// Everything bodies collide with: walls plus every item still on the map.
#[derive(Clone, Copy, Debug)]
pub struct WorldObstacles<'a> {
    pub walls: &'a [Rect],
    pub pickups: &'a [Pickup],
}

impl ObstacleQuery for WorldObstacles<'_> {
    fn obstacles(&self) -> impl Iterator<Item = Rect> + '_ {
        self.walls
            .iter()
            .copied()
            .chain(self.pickups.iter().map(|pickup| pickup.hitbox))
    }
}
