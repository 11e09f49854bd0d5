//! Enemy status: facing × mode with an explicit transition function.
use std::fmt;

use strum::{EnumIter, IntoStaticStr};

use crate::geometry::Vec2;

/// Horizontal facing of an enemy sprite.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum Facing {
    Left,
    Right,
}

/// Behavior mode of an enemy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum Mode {
    Idle,
    Moving,
    Attacking,
}

/// Combined facing and mode. Every combination is a valid state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct EnemyStatus {
    pub facing: Facing,
    pub mode: Mode,
}

/// Per-frame inputs of [`EnemyStatus::transition`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StatusInput {
    /// Distance to the player's current position.
    pub distance: f32,
    /// Unit direction toward the player's current position.
    pub direction: Vec2,
    pub attack_radius: f32,
    pub visible_radius: f32,
    pub can_attack: bool,
}

/// Result of a status transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    pub status: EnemyStatus,
    /// Animation must restart from frame 0.
    pub reset_frame: bool,
}

impl EnemyStatus {
    /// Status assigned to freshly spawned enemies.
    pub const SPAWN: Self = Self::new(Facing::Left, Mode::Idle);

    pub const fn new(facing: Facing, mode: Mode) -> Self {
        Self { facing, mode }
    }

    pub fn is_attacking(self) -> bool {
        self.mode == Mode::Attacking
    }

    pub fn is_moving(self) -> bool {
        self.mode == Mode::Moving
    }

    /// Computes the next status.
    ///
    /// Rules are evaluated in priority order:
    /// 1. within attack radius and able to attack: attack, keeping the facing
    /// 2. within the player's visible radius: move, facing the sign of the
    ///    direction's x component (unchanged when it is exactly zero)
    /// 3. otherwise: idle, keeping the facing
    ///
    /// The frame index restarts when entering an attack and when an attack
    /// falls back to idle.
    pub fn transition(self, input: &StatusInput) -> Transition {
        if input.distance <= input.attack_radius && input.can_attack {
            return Transition {
                status: Self::new(self.facing, Mode::Attacking),
                reset_frame: !self.is_attacking(),
            };
        }

        if input.distance <= input.visible_radius {
            let facing = if input.direction.x > 0.0 {
                Facing::Right
            } else if input.direction.x < 0.0 {
                Facing::Left
            } else {
                self.facing
            };
            return Transition {
                status: Self::new(facing, Mode::Moving),
                reset_frame: false,
            };
        }

        Transition {
            status: Self::new(self.facing, Mode::Idle),
            reset_frame: self.is_attacking(),
        }
    }
}

impl Default for EnemyStatus {
    fn default() -> Self {
        Self::SPAWN
    }
}

impl fmt::Display for EnemyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let facing: &'static str = self.facing.into();
        match self.mode {
            Mode::Moving => write!(f, "{facing}"),
            Mode::Idle => write!(f, "{facing}_idle"),
            Mode::Attacking => write!(f, "{facing}_attack"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    fn input(distance: f32, direction_x: f32, can_attack: bool) -> StatusInput {
        StatusInput {
            distance,
            direction: Vec2::new(direction_x, 0.0),
            attack_radius: 30.0,
            visible_radius: 220.0,
            can_attack,
        }
    }

    fn all_statuses() -> impl Iterator<Item = EnemyStatus> {
        Facing::iter().flat_map(|facing| Mode::iter().map(move |mode| EnemyStatus::new(facing, mode)))
    }

    #[test]
    fn close_range_attacks_from_any_status() {
        for status in all_statuses() {
            for distance in [0.0, 12.5, 30.0] {
                let next = status.transition(&input(distance, -1.0, true));
                assert_eq!(next.status.mode, Mode::Attacking);
                assert_eq!(next.status.facing, status.facing);
                assert_eq!(next.reset_frame, !status.is_attacking());
            }
        }
    }

    #[test]
    fn close_range_without_attack_falls_through_to_moving() {
        let next = EnemyStatus::new(Facing::Left, Mode::Attacking).transition(&input(10.0, 1.0, false));
        assert_eq!(next.status, EnemyStatus::new(Facing::Right, Mode::Moving));
        assert!(!next.reset_frame);
    }

    #[test]
    fn visible_range_faces_direction_sign() {
        for status in all_statuses() {
            let right = status.transition(&input(100.0, 0.5, true));
            assert_eq!(right.status, EnemyStatus::new(Facing::Right, Mode::Moving));

            let left = status.transition(&input(220.0, -0.5, true));
            assert_eq!(left.status, EnemyStatus::new(Facing::Left, Mode::Moving));
        }
    }

    #[test]
    fn zero_x_direction_keeps_facing() {
        for status in all_statuses() {
            let next = status.transition(&input(100.0, 0.0, true));
            assert_eq!(next.status.facing, status.facing);
            assert_eq!(next.status.mode, Mode::Moving);
        }
    }

    #[test]
    fn out_of_range_idles_and_keeps_facing() {
        let next = EnemyStatus::new(Facing::Right, Mode::Moving).transition(&input(500.0, -1.0, true));
        assert_eq!(next.status, EnemyStatus::new(Facing::Right, Mode::Idle));
        assert!(!next.reset_frame);

        let from_attack =
            EnemyStatus::new(Facing::Left, Mode::Attacking).transition(&input(500.0, 1.0, false));
        assert_eq!(from_attack.status, EnemyStatus::new(Facing::Left, Mode::Idle));
        assert!(from_attack.reset_frame);
    }

    #[test]
    fn transition_is_idempotent_under_unchanged_inputs() {
        let inputs = [
            input(10.0, 1.0, true),
            input(10.0, 1.0, false),
            input(100.0, -1.0, true),
            input(100.0, 0.0, true),
            input(500.0, 1.0, true),
        ];
        for status in all_statuses() {
            for inp in &inputs {
                let once = status.transition(inp).status;
                let twice = once.transition(inp);
                assert_eq!(twice.status, once);
                assert!(!twice.reset_frame);
            }
        }
    }

    #[test]
    fn display_uses_sprite_sheet_names() {
        assert_eq!(EnemyStatus::new(Facing::Left, Mode::Moving).to_string(), "left");
        assert_eq!(EnemyStatus::new(Facing::Right, Mode::Idle).to_string(), "right_idle");
        assert_eq!(EnemyStatus::new(Facing::Left, Mode::Attacking).to_string(), "left_attack");
    }
}
